//! Image storage uploads.

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::info;

use crate::client::ApiClient;
use crate::error::ApiError;

pub const UPLOAD_ENDPOINT: &str = "/image-storage/upload";

/// Uploads files to the backend's image storage.
pub struct ImageStorage {
    client: Arc<ApiClient>,
}

impl ImageStorage {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Upload one file as the `file` multipart part and return its URL.
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, ApiError> {
        if bytes.is_empty() {
            return Err(ApiError::Invalid(format!("{} is empty", file_name)));
        }
        let size = bytes.len();
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_for(file_name))
            .map_err(|e| ApiError::Invalid(format!("mime type: {}", e)))?;
        let form = Form::new().part("file", part);

        let resp = self.client.upload(UPLOAD_ENDPOINT, form).await?;
        let url = upload_url(&resp.data)?;
        info!(file_name, size, %url, "image uploaded");
        Ok(url)
    }
}

/// The backend answers with either a bare URL string or `{"url": ...}`.
pub fn upload_url(data: &Value) -> Result<String, ApiError> {
    match data {
        Value::String(url) if !url.is_empty() => Ok(url.clone()),
        Value::Object(map) => map
            .get("url")
            .and_then(|v| v.as_str())
            .filter(|u| !u.is_empty())
            .map(str::to_string)
            .ok_or_else(|| ApiError::Decode("upload response without url".into())),
        other => Err(ApiError::Decode(format!("unexpected upload response: {}", other))),
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name.rsplit('.').next().unwrap_or_default().to_ascii_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_string_url() {
        assert_eq!(upload_url(&json!("https://cdn/x.png")).unwrap(), "https://cdn/x.png");
    }

    #[test]
    fn object_url() {
        assert_eq!(upload_url(&json!({"url": "https://cdn/y.jpg"})).unwrap(), "https://cdn/y.jpg");
    }

    #[test]
    fn anything_else_is_rejected() {
        assert!(matches!(upload_url(&json!({"path": "/y"})), Err(ApiError::Decode(_))));
        assert!(matches!(upload_url(&Value::Null), Err(ApiError::Decode(_))));
    }

    #[test]
    fn mime_from_extension() {
        assert_eq!(mime_for("photo.JPG"), "image/jpeg");
        assert_eq!(mime_for("noext"), "application/octet-stream");
    }
}
