//! Image Uploads
//!
//! Stores one file through `POST /upload` and returns the asset references.

use serde_json::Value;

use super::client::{decode_error, interpret, ApiClient, Method};
use super::error::ApiResult;
use super::transport::HttpTransport;
use crate::models::{PortfolioImage, UploadValue};

const UPLOAD_PATH: &str = "/upload";
const FALLBACK: &str = "Failed to upload image";

pub async fn upload_image(
    api: &ApiClient<HttpTransport>,
    file_name: String,
    mime: &str,
    bytes: Vec<u8>,
) -> ApiResult<Vec<PortfolioImage>> {
    log::info!("uploading {} ({} bytes)", file_name, bytes.len());
    let outcome = api.transport().send_file(UPLOAD_PATH, file_name, mime, bytes).await;
    let body = interpret(Method::Post, UPLOAD_PATH, outcome, FALLBACK)?;
    decode_upload(body).map_err(|e| decode_error(Method::Post, UPLOAD_PATH, FALLBACK, e))
}

/// The upload endpoint answers with one reference or a list of them.
fn decode_upload(body: Value) -> Result<Vec<PortfolioImage>, serde_json::Error> {
    serde_json::from_value::<UploadValue>(body).map(UploadValue::into_images)
}
