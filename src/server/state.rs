//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use super::service::{ai::AiClient, mail::MailClient, storage::StorageClient};

/// Application state containing shared resources and dependencies.
///
/// Initialized once during server startup and then cloned (cheaply, as every
/// field is a connection pool, an `Arc`-backed client, or a small string) for
/// each incoming request via Axum's state extraction.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Client for the transactional mail provider.
    pub mail: MailClient,

    /// Client for the object storage bucket holding profile and meal images.
    pub storage: StorageClient,

    /// Client for the LLM text/image provider.
    ///
    /// `None` when no AI API key is configured; the meal suggestion routes
    /// answer 503 in that case.
    pub ai: Option<AiClient>,

    /// Application base URL for generating links in emails.
    pub app_url: String,

    /// Secret used to sign password reset tokens.
    pub jwt_secret: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup after all dependencies have been
    /// initialized. The resulting state is then provided to the Axum router
    /// for use in request handlers.
    pub fn new(
        db: DatabaseConnection,
        mail: MailClient,
        storage: StorageClient,
        ai: Option<AiClient>,
        app_url: String,
        jwt_secret: String,
    ) -> Self {
        Self {
            db,
            mail,
            storage,
            ai,
            app_url,
            jwt_secret,
        }
    }
}
