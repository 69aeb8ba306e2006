//! Frontend Models
//!
//! Data structures matching backend resources, plus the decode helpers that
//! turn loosely shaped response bodies into them.

use chrono::{DateTime, Utc};
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One uploaded asset reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioImage {
    pub url: String,
    pub id: String,
}

/// Portfolio gallery (matches backend `portfolios` resource)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub is_visible: bool,
    #[serde(rename = "image", default, deserialize_with = "one_or_many")]
    pub images: Vec<PortfolioImage>,
}

/// Body sent on create and update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioPayload {
    pub is_visible: bool,
    pub image: Vec<PortfolioImage>,
}

/// Contact request submitted through the public site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl ContactSubmission {
    /// Parsed creation time; `None` when absent or not RFC 3339.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        self.created_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// About page content in three languages
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AboutContent {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub about_uz: String,
    #[serde(default)]
    pub about_ru: String,
    #[serde(default)]
    pub about_en: String,
    #[serde(default)]
    pub history_uz: String,
    #[serde(default)]
    pub history_ru: String,
    #[serde(default)]
    pub history_en: String,
    // Backend field names carry this spelling.
    #[serde(rename = "adventages_uz", default)]
    pub advantages_uz: String,
    #[serde(rename = "adventages_ru", default)]
    pub advantages_ru: String,
    #[serde(rename = "adventages_en", default)]
    pub advantages_en: String,
}

/// What the upload widget reports: one image or several
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum UploadValue {
    Many(Vec<PortfolioImage>),
    One(PortfolioImage),
}

impl UploadValue {
    /// Always a vector, even for a single result.
    pub fn into_images(self) -> Vec<PortfolioImage> {
        match self {
            UploadValue::Many(images) => images,
            UploadValue::One(image) => vec![image],
        }
    }
}

/// Accepts `null`, a single object or an array for an image list.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<PortfolioImage>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<UploadValue>::deserialize(deserializer)?;
    Ok(value.map(UploadValue::into_images).unwrap_or_default())
}

// ========================
// Decode Helpers
// ========================

/// Decode a collection body. A body that is not an array yields an empty
/// collection; a malformed element is an error.
pub fn decode_collection<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, serde_json::Error> {
    match body {
        Value::Array(_) => serde_json::from_value(body),
        _ => Ok(Vec::new()),
    }
}

/// Decode a single record. Anything but a JSON object is an error.
pub fn decode_record<T: DeserializeOwned>(body: Value) -> Result<T, serde_json::Error> {
    match body {
        Value::Object(_) => serde_json::from_value(body),
        other => Err(serde::de::Error::custom(format!(
            "expected an object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
