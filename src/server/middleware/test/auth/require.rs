use super::*;

mod require_login;
mod require_owner;
