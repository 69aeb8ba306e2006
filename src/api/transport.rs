//! HTTP Transport
//!
//! `reqwest` client bound to the configured API base. On wasm32 requests go
//! through the browser's fetch.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use super::client::{Method, RawResponse, Transport};
use crate::config::AppConfig;

#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: AppConfig,
}

impl HttpTransport {
    pub fn new(config: AppConfig) -> Self {
        Self { client: reqwest::Client::new(), config }
    }

    /// Send one file as multipart field `file`.
    pub async fn send_file(&self, path: &str, file_name: String, mime: &str, bytes: Vec<u8>) -> Result<RawResponse, String> {
        let mut part = Part::bytes(bytes).file_name(file_name);
        if !mime.is_empty() {
            part = part.mime_str(mime).map_err(|e| e.to_string())?;
        }
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.config.endpoint(path))
            .multipart(form)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_response(response).await
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Result<RawResponse, String> {
        let url = self.config.endpoint(path);
        let mut request = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Patch => self.client.patch(url),
            Method::Delete => self.client.delete(url),
        };
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| e.to_string())?;
        read_response(response).await
    }
}

async fn read_response(response: reqwest::Response) -> Result<RawResponse, String> {
    let status = response.status().as_u16();
    let body = response.text().await.map_err(|e| e.to_string())?;
    Ok(RawResponse { status, body })
}
