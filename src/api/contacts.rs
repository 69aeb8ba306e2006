//! Contact Requests
//!
//! Read-only access to submissions from the public contact form.

use super::client::{decode_error, ApiClient, Method, Transport};
use super::error::ApiResult;
use crate::models::{decode_collection, ContactSubmission};

pub async fn list<T: Transport>(api: &ApiClient<T>) -> ApiResult<Vec<ContactSubmission>> {
    const FALLBACK: &str = "Failed to fetch contacts";
    let body = api.get("/contacts", FALLBACK).await?;
    decode_collection(body).map_err(|e| decode_error(Method::Get, "/contacts", FALLBACK, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_contacts() {
        let fake = FakeTransport::new();
        fake.push_json(200, json!([
            {"_id": "c1", "name": "Ali", "phone": "+998901234567", "createdAt": "2024-03-01T10:00:00.000Z"},
            {"_id": "c2", "name": "Vali", "phone": "+998907654321"}
        ]));
        let api = ApiClient::new(fake);

        let contacts = list(&api).await.unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[1].created_at, None);
    }

    #[tokio::test]
    async fn test_non_array_is_empty() {
        let fake = FakeTransport::new();
        fake.push_json(200, json!({"message": "ok"}));
        let api = ApiClient::new(fake);
        assert!(list(&api).await.unwrap().is_empty());
    }
}
