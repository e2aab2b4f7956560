use thiserror::Error;

// ── Error codes ─────────────────────────────────────────────────────
//
// Stable, machine-readable identifiers. Callers match on these (or on
// the variant), never on the message string.

pub mod error_code {
    pub const NETWORK: &str = "NETWORK";
    pub const UNAUTHENTICATED: &str = "UNAUTHENTICATED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const SERVER_ERROR: &str = "SERVER_ERROR";
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
    pub const DECODE_FAILED: &str = "DECODE_FAILED";
}

// ── AssembleError ───────────────────────────────────────────────────

/// Raised by single-resource assemblers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssembleError {
    #[error("resource is null or missing")]
    MissingResource,

    #[error("malformed resource: {0}")]
    Malformed(String),
}

// ── ApiError ────────────────────────────────────────────────────────

/// Client-side API error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response received (connect failure, timeout, broken body).
    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    /// HTTP 401. The session has already been cleared.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// HTTP 404.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// HTTP 5xx.
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    /// Any other 4xx (400, 403, 409, 413, 415, ...).
    #[error("HTTP {status}: {message}")]
    Validation { status: u16, message: String },

    /// Rejected locally before any request was sent.
    #[error("invalid input: {0}")]
    Invalid(String),

    /// Response body did not have the expected shape.
    #[error("decode: {0}")]
    Decode(String),

    #[error("assemble: {0}")]
    Assemble(#[from] AssembleError),
}

impl ApiError {
    /// Classify a non-2xx response.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => ApiError::Unauthorized { message },
            404 => ApiError::NotFound { message },
            500..=599 => ApiError::Server { status, message },
            _ => ApiError::Validation { status, message },
        }
    }

    /// HTTP status, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::NotFound { .. } => Some(404),
            ApiError::Server { status, .. } | ApiError::Validation { status, .. } => Some(*status),
            ApiError::Invalid(_) | ApiError::Decode(_) | ApiError::Assemble(_) => None,
        }
    }

    /// Stable, machine-readable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Network(_) => error_code::NETWORK,
            ApiError::Unauthorized { .. } => error_code::UNAUTHENTICATED,
            ApiError::NotFound { .. } => error_code::NOT_FOUND,
            ApiError::Server { .. } => error_code::SERVER_ERROR,
            ApiError::Validation { .. } => error_code::VALIDATION_FAILED,
            ApiError::Invalid(_) => error_code::INVALID_INPUT,
            ApiError::Decode(_) | ApiError::Assemble(_) => error_code::DECODE_FAILED,
        }
    }

    /// Whether the request never reached the server (or never came back).
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// Human-readable message for display. Server-supplied messages win
    /// except for 5xx and transport failures.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(e) if e.is_timeout() => {
                "The request took too long. Check your connection and try again.".into()
            }
            ApiError::Network(_) => "Cannot reach the server. Check your connection.".into(),
            ApiError::Unauthorized { message } if !message.is_empty() => message.clone(),
            ApiError::Unauthorized { .. } => {
                "Your session has expired. Please sign in again.".into()
            }
            ApiError::NotFound { message } if !message.is_empty() => message.clone(),
            ApiError::NotFound { .. } => "The requested resource was not found.".into(),
            ApiError::Server { .. } => "Server error. Try again later.".into(),
            ApiError::Validation { status: 413, .. } => "The file is too large.".into(),
            ApiError::Validation { status: 415, .. } => "Unsupported file type.".into(),
            ApiError::Validation { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Validation { status, .. } => format!("Request rejected (HTTP {status})."),
            ApiError::Invalid(msg) => msg.clone(),
            ApiError::Decode(_) | ApiError::Assemble(_) => {
                "Unexpected response from the server.".into()
            }
        }
    }
}

/// Pull a readable message out of an error body.
///
/// Accepts `{"message": ...}`, `{"error": ...}`, `{"title": ...}` or plain text.
pub fn extract_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error", "title"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
        if let Some(msg) = value.as_str() {
            return msg.to_string();
        }
    }
    body.trim().to_string()
}
