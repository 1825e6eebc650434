//! Request and response bodies of the HTTP API.

pub mod api;
pub mod apply;
pub mod auth;
pub mod favorite;
pub mod game;
pub mod level;
pub mod mission;
pub mod notification;
pub mod payment;
pub mod points;
pub mod user;
pub mod video;
