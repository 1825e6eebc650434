//! HTTP request handlers.
//!
//! Each module groups the endpoints of one resource. Handlers resolve the session user
//! through `AuthGuard`, delegate to a service and convert the returned domain models into
//! DTOs. Every handler carries a `utoipa::path` annotation collected by the router's
//! OpenAPI document.

pub mod apply;
pub mod auth;
pub mod favorite;
pub mod game;
pub mod mission;
pub mod notification;
pub mod payment;
pub mod points;
pub mod user;
pub mod video;
