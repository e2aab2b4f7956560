//! Mecanaut API client.
//!
//! Wraps the maintenance-management REST backend: an authenticated HTTP
//! client, an injectable session store, the sign-in/sign-out lifecycle,
//! route guards, and helpers used by the per-entity assemblers.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use mecanaut_client::{
//!     ApiClient, ApiConfig, AuthService, Credentials, MemorySession, NoopNavigator,
//! };
//!
//! let client = Arc::new(ApiClient::new(
//!     ApiConfig::from_env(),
//!     Arc::new(MemorySession::new()),
//!     Arc::new(NoopNavigator),
//! )?);
//! AuthService::new(client.clone())
//!     .login(&Credentials::new("admin", "secret"))
//!     .await?;
//! let plants = client.get("/plants").await?;
//! ```

pub mod assemble;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod guard;
pub mod navigator;
pub mod session;
pub mod upload;


pub use auth::{AuthService, Credentials, LoginPayload, Registration};
pub use client::{ApiClient, ApiResponse, RequestOptions};
pub use config::ApiConfig;
pub use error::{ApiError, AssembleError};
pub use guard::GuardOutcome;
pub use navigator::{Navigator, NoopNavigator};
pub use session::{MemorySession, SessionState, SessionStore, UserProfile};
pub use upload::ImageStorage;

/// Reject a create/update before any request when a required field is blank.
///
/// `fields` pairs a display name with "is present".
pub fn require_fields(entity: &str, fields: &[(&str, bool)]) -> Result<(), ApiError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Invalid(format!(
            "{}: {} required",
            entity,
            missing.join(", ")
        )))
    }
}
