//! About Content
//!
//! `/about` records: company description, history and advantages.

use super::client::{decode_error, ApiClient, Method, Transport};
use super::error::ApiResult;
use crate::models::{decode_collection, decode_record, AboutContent};

pub async fn list<T: Transport>(api: &ApiClient<T>) -> ApiResult<Vec<AboutContent>> {
    const FALLBACK: &str = "Failed to fetch about";
    let body = api.get("/about", FALLBACK).await?;
    decode_collection(body).map_err(|e| decode_error(Method::Get, "/about", FALLBACK, e))
}

pub async fn create<T: Transport>(api: &ApiClient<T>, data: &AboutContent) -> ApiResult<AboutContent> {
    const FALLBACK: &str = "Failed to create about";
    log::info!("creating about content");
    let body = api.post("/about", data, FALLBACK).await?;
    decode_record(body).map_err(|e| decode_error(Method::Post, "/about", FALLBACK, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_posts_all_fields() {
        let fake = FakeTransport::new();
        fake.push_json(201, json!({"_id": "a1", "about_ru": "О нас"}));
        let api = ApiClient::new(fake);
        let data = AboutContent { about_ru: "О нас".into(), ..Default::default() };

        let created = create(&api, &data).await.unwrap();
        assert_eq!(created.id.as_deref(), Some("a1"));

        let body = api.transport().calls()[0].body.clone().unwrap();
        assert_eq!(body.as_object().unwrap().len(), 9);
        assert_eq!(body["about_ru"], "О нас");
    }

    #[tokio::test]
    async fn test_list_failure_uses_fallback() {
        let fake = FakeTransport::new();
        fake.push_transport_error("offline");
        let api = ApiClient::new(fake);
        assert_eq!(list(&api).await.unwrap_err().message(), "Failed to fetch about");
    }
}
