//! Session lifecycle: sign-in, sign-up, sign-out.
//!
//! Two states only, `Anonymous` and `Authenticated`. A successful login
//! moves to `Authenticated`; `logout()` or any 401 on an authenticated
//! request moves back. There is no refresh.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::client::{ApiClient, RequestOptions};
use crate::error::ApiError;
use crate::session::{SessionState, UserProfile};

pub const SIGN_IN_ENDPOINT: &str = "/authentication/sign-in";
pub const SIGN_UP_ENDPOINT: &str = "/authentication/sign-up";
pub const HEALTH_ENDPOINT: &str = "/authentication/health";

/// Sign-in request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Tenant + first user registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// Tax id of the tenant company.
    pub ruc: String,
    pub legal_name: String,
    pub commercial_name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub tenant_phone: String,
    pub tenant_email: String,
    #[serde(default)]
    pub website: String,
    pub subscription_plan_id: i64,
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Sign-in response: `{id, username, token, ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginPayload {
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub token: String,

    /// Any additional fields the backend returns.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Owns the bearer credential and the cached profile.
pub struct AuthService {
    client: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Sign in and persist the session.
    ///
    /// Both fields must be non-empty; otherwise no request is sent. The
    /// full profile fetch after sign-in is best-effort.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginPayload, ApiError> {
        let username = credentials.username.trim();
        if username.is_empty() || credentials.password.is_empty() {
            return Err(ApiError::Invalid("username and password are required".into()));
        }

        let body = serde_json::json!({
            "username": username,
            "password": credentials.password,
        });
        let resp = self
            .client
            .post_with(SIGN_IN_ENDPOINT, &body, RequestOptions::anonymous())
            .await
            .map_err(normalize_login_error)?;
        let payload: LoginPayload = resp.json()?;

        if payload.token.is_empty() {
            warn!(username, "sign-in response carried no token");
            return Ok(payload);
        }

        // A token that cannot travel in a header leaves the session untouched.
        self.client.set_auth_token(Some(&payload.token))?;
        let session = self.client.session();
        session.set_token(&payload.token);
        session.set_user(&UserProfile {
            id: payload.id,
            username: payload.username.clone(),
            full_name: None,
            email: None,
            roles: None,
        });

        match self.fetch_profile(payload.id).await {
            Ok(profile) => session.set_user(&profile),
            Err(e) => warn!(user_id = payload.id, error = %e, "could not load full user profile"),
        }

        info!(username = %payload.username, "signed in");
        Ok(payload)
    }

    /// Register a tenant and its first user. Sent without credentials.
    pub async fn register(&self, registration: &Registration) -> Result<Value, ApiError> {
        let resp = self
            .client
            .post_with(SIGN_UP_ENDPOINT, registration, RequestOptions::anonymous())
            .await?;
        Ok(resp.data)
    }

    /// Clear the stored session and the default header.
    pub fn logout(&self) {
        self.client.session().clear();
        self.client.clear_auth_token();
        info!("signed out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.session().is_authenticated()
    }

    pub fn state(&self) -> SessionState {
        self.client.session().state()
    }

    pub fn token(&self) -> Option<String> {
        self.client.session().token()
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.client.session().user()
    }

    /// Set (or clear with `None`) the default header for requests made
    /// while the session holds no token.
    pub fn set_auth_token(&self, token: Option<&str>) -> Result<(), ApiError> {
        self.client.set_auth_token(token)
    }

    /// Whether the backend answers. A 401 still counts as up.
    pub async fn check_backend_health(&self) -> bool {
        match self
            .client
            .head_with(HEALTH_ENDPOINT, RequestOptions::anonymous())
            .await
        {
            Ok(_) => true,
            Err(ApiError::Unauthorized { .. }) => true,
            Err(e) => {
                warn!(error = %e, "backend health check failed");
                false
            }
        }
    }

    async fn fetch_profile(&self, id: i64) -> Result<UserProfile, ApiError> {
        let resp = self.client.get(&format!("/users/{}", id)).await?;
        resp.json()
    }
}

/// Sign-in specific wording for the common failures.
fn normalize_login_error(err: ApiError) -> ApiError {
    match err {
        ApiError::Unauthorized { .. } => ApiError::Unauthorized {
            message: "Invalid credentials. Check your username and password.".into(),
        },
        ApiError::NotFound { .. } => ApiError::NotFound {
            message: "Authentication service unavailable. Contact the administrator.".into(),
        },
        other => other,
    }
}
