//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories are generic over `ConnectionTrait` so the same queries run against the
//! pool or inside a transaction opened by a service.

pub mod apply;
pub mod favorite;
pub mod game;
pub mod level;
pub mod mission;
pub mod notification;
pub mod payment;
pub mod points;
pub mod user;
pub mod video;

#[cfg(test)]
mod test;

use sea_orm::{DbErr, SqlErr};

/// Whether the error is a primary key or unique index violation.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Whether SQLite refused the statement because another connection holds the write lock.
///
/// Raised for a deferred transaction whose read snapshot went stale while it waited to
/// write; retrying the whole transaction is the only way forward.
pub fn is_lock_contention(err: &DbErr) -> bool {
    err.to_string().contains("database is locked")
}
