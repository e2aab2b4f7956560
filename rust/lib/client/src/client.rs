//! Authenticated HTTP client wrapper.
//!
//! Every service in the workspace goes through [`ApiClient`]. It attaches
//! the bearer token read from the injected [`SessionStore`] at request time
//! and turns a 401 into a forced logout plus a redirect through the
//! injected [`Navigator`].

use std::sync::Arc;

use parking_lot::RwLock;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, LOCATION};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{extract_message, ApiError};
use crate::navigator::Navigator;
use crate::session::SessionStore;

// ── Request options ─────────────────────────────────────────────────

/// Per-call options.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Send without the bearer credential, through the bare client.
    pub skip_auth: bool,

    /// Query-string parameters.
    pub query: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for sign-in / sign-up style calls.
    pub fn anonymous() -> Self {
        Self {
            skip_auth: true,
            ..Default::default()
        }
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }
}

// ── Response ────────────────────────────────────────────────────────

/// A successful response.
///
/// `data` is the decoded JSON body: `null` for an empty body, a JSON
/// string when the server answered with plain text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub status: u16,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default)]
    pub data: Value,
}

impl ApiResponse {
    /// Decode the body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_value(self.data.clone())
            .map_err(|e| ApiError::Decode(format!("response body: {}", e)))
    }

    /// True when the server sent no body.
    pub fn is_empty(&self) -> bool {
        self.data.is_null()
    }

    /// Last path segment of the `Location` header, if any.
    pub fn location_id(&self) -> Option<&str> {
        self.location
            .as_deref()
            .and_then(|l| l.trim_end_matches('/').rsplit('/').next())
            .filter(|s| !s.is_empty())
    }
}

enum Payload {
    Json(Value),
    Multipart(reqwest::multipart::Form),
}

// ── ApiClient ───────────────────────────────────────────────────────

/// HTTP client bound to one backend origin.
pub struct ApiClient {
    config: ApiConfig,
    /// Shared client for authenticated calls.
    http: reqwest::Client,
    /// Bare client for skip-auth calls. Never carries default headers.
    anonymous: reqwest::Client,
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    /// Headers applied to shared-client calls (see [`Self::set_auth_token`]).
    default_headers: RwLock<HeaderMap>,
}

impl ApiClient {
    pub fn new(
        config: ApiConfig,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        let anonymous = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            config,
            http,
            anonymous,
            session,
            navigator,
            default_headers: RwLock::new(HeaderMap::new()),
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Set or clear the default `Authorization` header. Idempotent.
    ///
    /// The default only applies when the session holds no token; the
    /// session token read at call time always wins.
    pub fn set_auth_token(&self, token: Option<&str>) -> Result<(), ApiError> {
        let mut headers = self.default_headers.write();
        match token.filter(|t| !t.is_empty()) {
            Some(token) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| ApiError::Invalid(format!("token: {}", e)))?;
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            None => {
                headers.remove(AUTHORIZATION);
            }
        }
        Ok(())
    }

    /// Drop the default `Authorization` header.
    pub fn clear_auth_token(&self) {
        self.default_headers.write().remove(AUTHORIZATION);
    }

    /// Whether a default `Authorization` header is currently set.
    pub fn has_default_auth(&self) -> bool {
        self.default_headers.read().contains_key(AUTHORIZATION)
    }

    // ── Verbs ──

    pub async fn get(&self, endpoint: &str) -> Result<ApiResponse, ApiError> {
        self.get_with(endpoint, RequestOptions::default()).await
    }

    pub async fn get_with(
        &self,
        endpoint: &str,
        opts: RequestOptions,
    ) -> Result<ApiResponse, ApiError> {
        self.send(Method::GET, endpoint, None, &opts).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        self.post_with(endpoint, body, RequestOptions::default()).await
    }

    pub async fn post_with<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
        opts: RequestOptions,
    ) -> Result<ApiResponse, ApiError> {
        let body = encode(body)?;
        self.send(Method::POST, endpoint, Some(Payload::Json(body)), &opts).await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        let body = encode(body)?;
        self.send(Method::PUT, endpoint, Some(Payload::Json(body)), &RequestOptions::default())
            .await
    }

    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        let body = encode(body)?;
        self.send(Method::PATCH, endpoint, Some(Payload::Json(body)), &RequestOptions::default())
            .await
    }

    pub async fn delete(&self, endpoint: &str) -> Result<ApiResponse, ApiError> {
        self.send(Method::DELETE, endpoint, None, &RequestOptions::default()).await
    }

    pub async fn head(&self, endpoint: &str) -> Result<ApiResponse, ApiError> {
        self.head_with(endpoint, RequestOptions::default()).await
    }

    pub async fn head_with(
        &self,
        endpoint: &str,
        opts: RequestOptions,
    ) -> Result<ApiResponse, ApiError> {
        self.send(Method::HEAD, endpoint, None, &opts).await
    }

    /// POST a multipart form.
    pub async fn upload(
        &self,
        endpoint: &str,
        form: reqwest::multipart::Form,
    ) -> Result<ApiResponse, ApiError> {
        let payload = Some(Payload::Multipart(form));
        self.send(Method::POST, endpoint, payload, &RequestOptions::default())
            .await
    }

    // ── Internals ──

    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        payload: Option<Payload>,
        opts: &RequestOptions,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.config.url(endpoint);
        debug!(%method, %url, skip_auth = opts.skip_auth, "api request");

        let mut req = if opts.skip_auth {
            self.anonymous.request(method, &url)
        } else {
            self.authorize(self.http.request(method, &url))
        };
        if !opts.query.is_empty() {
            req = req.query(&opts.query);
        }
        req = match payload {
            Some(Payload::Json(body)) => req.json(&body),
            Some(Payload::Multipart(form)) => req.multipart(form),
            None => req,
        };

        let resp = req.send().await?;
        self.handle(resp, opts.skip_auth).await
    }

    /// Attach the credential: session token first, default header second.
    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match self.session.token().filter(|t| !t.is_empty()) {
            Some(token) => req.bearer_auth(token),
            None => req.headers(self.default_headers.read().clone()),
        }
    }

    async fn handle(
        &self,
        resp: reqwest::Response,
        skip_auth: bool,
    ) -> Result<ApiResponse, ApiError> {
        let status = resp.status();
        let location = resp
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        if status.is_success() {
            let text = resp.text().await?;
            return Ok(ApiResponse {
                status: status.as_u16(),
                location,
                data: parse_body(&text),
            });
        }

        debug!(status = status.as_u16(), "api error response");
        if status == StatusCode::UNAUTHORIZED && !skip_auth {
            self.on_unauthorized();
        }
        // The status decides the error; an unreadable body only loses the message.
        let text = resp.text().await.unwrap_or_else(|e| {
            debug!(error = %e, "could not read error body");
            String::new()
        });
        Err(ApiError::from_status(status.as_u16(), extract_message(&text)))
    }

    /// Forced logout: clear storage, drop the default header, and
    /// redirect unless already on the sign-in screen.
    fn on_unauthorized(&self) {
        self.session.clear();
        self.clear_auth_token();

        let sign_in = self.config.sign_in_path.as_str();
        if self.navigator.current_path() != sign_in {
            warn!(redirect = sign_in, "session rejected by server, redirecting to sign-in");
            self.navigator.navigate(sign_in);
        } else {
            warn!("session rejected by server");
        }
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Invalid(format!("request body: {}", e)))
}

fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_body_variants() {
        assert_eq!(parse_body(""), Value::Null);
        assert_eq!(parse_body("{\"id\":1}")["id"], 1);
        assert_eq!(
            parse_body("https://cdn.example.com/a.png"),
            Value::String("https://cdn.example.com/a.png".into())
        );
    }

    #[test]
    fn location_id_takes_last_segment() {
        let resp = ApiResponse {
            status: 201,
            location: Some("/api/v1/machines/42".into()),
            data: Value::Null,
        };
        assert_eq!(resp.location_id(), Some("42"));
        assert!(resp.is_empty());
    }

    #[test]
    fn options_builder() {
        let opts = RequestOptions::anonymous().query("plantId", 3);
        assert!(opts.skip_auth);
        assert_eq!(opts.query, vec![("plantId".to_string(), "3".to_string())]);
    }
}
