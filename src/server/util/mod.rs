//! Request value parsing and validation shared by controllers.

pub mod parse;
