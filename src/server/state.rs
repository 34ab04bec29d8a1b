//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use jsonwebtoken::DecodingKey;
use sea_orm::DatabaseConnection;

use crate::server::i18n::Locale;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and
/// `DecodingKey` holds the secret bytes.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Key bearer tokens are verified with.
    pub jwt: DecodingKey,

    /// Locale used when a request sends no usable `Accept-Language` header.
    pub default_locale: Locale,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt_secret` - HS256 secret bearer tokens are signed with
    /// - `default_locale` - Fallback locale for messages
    pub fn new(db: DatabaseConnection, jwt_secret: &str, default_locale: Locale) -> Self {
        Self {
            db,
            jwt: DecodingKey::from_secret(jwt_secret.as_bytes()),
            default_locale,
        }
    }
}
