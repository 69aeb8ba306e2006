//! HTTP Client Wrapper
//!
//! One configured client for the REST API. Every failure leaves here as an
//! [`ApiError`] whose message is ready to show.

use std::fmt;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;
use serde_json::Value;

use super::error::{ApiError, ApiResult};

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// Status and body of a completed exchange
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request. `Err` means no response arrived at all.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Result<RawResponse, String>;
}

pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Single attempt. `fallback` becomes the message when the backend gives none.
    pub async fn request(&self, method: Method, path: &str, body: Option<Value>, fallback: &str) -> ApiResult<Value> {
        log::debug!("{} {}", method, path);
        let outcome = self.transport.send(method, path, body.as_ref()).await;
        interpret(method, path, outcome, fallback)
    }

    pub async fn get(&self, path: &str, fallback: &str) -> ApiResult<Value> {
        self.request(Method::Get, path, None, fallback).await
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B, fallback: &str) -> ApiResult<Value> {
        let body = encode_body(Method::Post, path, body, fallback)?;
        self.request(Method::Post, path, Some(body), fallback).await
    }

    pub async fn patch<B: Serialize>(&self, path: &str, body: &B, fallback: &str) -> ApiResult<Value> {
        let body = encode_body(Method::Patch, path, body, fallback)?;
        self.request(Method::Patch, path, Some(body), fallback).await
    }

    pub async fn delete(&self, path: &str, fallback: &str) -> ApiResult<()> {
        self.request(Method::Delete, path, None, fallback).await.map(|_| ())
    }
}

/// Turn a transport outcome into a JSON body or a message-bearing error.
pub(crate) fn interpret(
    method: Method,
    path: &str,
    outcome: Result<RawResponse, String>,
    fallback: &str,
) -> ApiResult<Value> {
    let response = match outcome {
        Ok(response) => response,
        Err(detail) => {
            log::error!("{} {} failed: {}", method, path, detail);
            return Err(ApiError::Transport { message: fallback.to_string(), detail });
        }
    };

    if !response.is_success() {
        log::error!("{} {} -> {}: {}", method, path, response.status, response.body);
        let message = extract_message(&response.body).unwrap_or_else(|| fallback.to_string());
        return Err(ApiError::Status { status: response.status, message });
    }

    parse_body(&response.body).map_err(|e| decode_error(method, path, fallback, e))
}

/// `/{collection}/{id}` with the id escaped.
pub fn resource_path(collection: &str, id: &str) -> String {
    format!("/{}/{}", collection, encode_segment(id))
}

/// Escape one path segment.
pub fn encode_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

/// Log a decode failure and wrap it with the operation's fallback message.
pub(crate) fn decode_error(method: Method, path: &str, fallback: &str, err: impl fmt::Display) -> ApiError {
    log::error!("{} {} returned an unexpected body: {}", method, path, err);
    ApiError::Decode { message: fallback.to_string(), detail: err.to_string() }
}

fn encode_body<B: Serialize>(method: Method, path: &str, body: &B, fallback: &str) -> ApiResult<Value> {
    serde_json::to_value(body).map_err(|e| decode_error(method, path, fallback, e))
}

/// Empty bodies decode as `null`.
fn parse_body(body: &str) -> Result<Value, serde_json::Error> {
    if body.trim().is_empty() {
        Ok(Value::Null)
    } else {
        serde_json::from_str(body)
    }
}

/// `message` from an error body. Validation errors may send a list of messages.
pub fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("message")? {
        Value::String(message) if !message.trim().is_empty() => Some(message.clone()),
        Value::Array(parts) => {
            let parts: Vec<&str> = parts.iter().filter_map(Value::as_str).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeTransport;
    use serde_json::json;

    #[test]
    fn test_extract_message() {
        assert_eq!(extract_message(r#"{"message":"Not found"}"#).as_deref(), Some("Not found"));
        assert_eq!(extract_message(r#"{"message":["a","b"]}"#).as_deref(), Some("a, b"));
        assert_eq!(extract_message(r#"{"message":""}"#), None);
        assert_eq!(extract_message(r#"{"error":"x"}"#), None);
        assert_eq!(extract_message("<html>502</html>"), None);
    }

    #[test]
    fn test_resource_path_escapes_id() {
        assert_eq!(resource_path("portfolios", "abc"), "/portfolios/abc");
        assert_eq!(resource_path("portfolios", "a/b c"), "/portfolios/a%2Fb%20c");
    }

    #[tokio::test]
    async fn test_transport_failure_uses_fallback() {
        let fake = FakeTransport::new();
        fake.push_transport_error("connection refused");
        let client = ApiClient::new(fake);

        let err = client.get("/portfolios", "Failed to fetch portfolios").await.unwrap_err();
        assert_eq!(err.message(), "Failed to fetch portfolios");
        assert!(matches!(err, ApiError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_status_error_prefers_body_message() {
        let fake = FakeTransport::new();
        fake.push_json(400, json!({"message": "Image is required"}));
        fake.push_json(500, json!({}));
        let client = ApiClient::new(fake);

        let err = client.post("/portfolios", &json!({}), "Failed to create portfolio").await.unwrap_err();
        assert_eq!(err, ApiError::Status { status: 400, message: "Image is required".into() });

        let err = client.post("/portfolios", &json!({}), "Failed to create portfolio").await.unwrap_err();
        assert_eq!(err.message(), "Failed to create portfolio");
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let fake = FakeTransport::new();
        fake.push_raw(200, "not json");
        let client = ApiClient::new(fake);

        let err = client.get("/portfolios", "Failed to fetch portfolios").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
        assert_eq!(err.message(), "Failed to fetch portfolios");
    }

    #[tokio::test]
    async fn test_empty_body_is_null_and_request_is_recorded() {
        let fake = FakeTransport::new();
        fake.push_raw(204, "");
        let client = ApiClient::new(fake);

        client.delete("/portfolios/1", "Failed to delete portfolio").await.unwrap();
        let calls = client.transport().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, Method::Delete);
        assert_eq!(calls[0].path, "/portfolios/1");
        assert_eq!(calls[0].body, None);
    }
}
