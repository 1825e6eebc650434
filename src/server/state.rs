//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::auth::{code::VerificationCodeService, firebase::IdTokenVerifier};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn IdTokenVerifier>` is a reference-counted pointer
/// - `VerificationCodeService` uses `Arc` for shared state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Verifies identity tokens presented to phone login.
    ///
    /// Held as a trait object so tests can install a verifier that accepts fixed tokens.
    pub id_token_verifier: Arc<dyn IdTokenVerifier>,

    /// In-memory store of pending phone verification codes.
    pub verification_code_service: VerificationCodeService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `id_token_verifier` - Verifier used by phone login
    /// - `verification_code_service` - Store for issued verification codes
    pub fn new(
        db: DatabaseConnection,
        id_token_verifier: Arc<dyn IdTokenVerifier>,
        verification_code_service: VerificationCodeService,
    ) -> Self {
        Self {
            db,
            id_token_verifier,
            verification_code_service,
        }
    }
}
