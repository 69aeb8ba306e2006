//! Portfolio Resource
//!
//! `/portfolios` CRUD over the client wrapper.

use super::client::{decode_error, resource_path, ApiClient, Method, Transport};
use super::error::ApiResult;
use crate::models::{decode_collection, decode_record, Portfolio, PortfolioPayload};

const COLLECTION: &str = "portfolios";

/// Collection fetch. A body that is not an array yields no portfolios.
pub async fn list<T: Transport>(api: &ApiClient<T>) -> ApiResult<Vec<Portfolio>> {
    const FALLBACK: &str = "Failed to fetch portfolios";
    let path = format!("/{}", COLLECTION);
    let body = api.get(&path, FALLBACK).await?;
    let portfolios = decode_collection(body).map_err(|e| decode_error(Method::Get, &path, FALLBACK, e))?;
    log::debug!("fetched {} portfolios", portfolios.len());
    Ok(portfolios)
}

pub async fn get<T: Transport>(api: &ApiClient<T>, id: &str) -> ApiResult<Portfolio> {
    const FALLBACK: &str = "Failed to fetch portfolio";
    let path = resource_path(COLLECTION, id);
    let body = api.get(&path, FALLBACK).await?;
    decode_record(body).map_err(|e| decode_error(Method::Get, &path, FALLBACK, e))
}

/// Returns the stored record with its backend-assigned id.
pub async fn create<T: Transport>(api: &ApiClient<T>, data: &PortfolioPayload) -> ApiResult<Portfolio> {
    const FALLBACK: &str = "Failed to create portfolio";
    let path = format!("/{}", COLLECTION);
    log::info!("creating portfolio with {} images", data.image.len());
    let body = api.post(&path, data, FALLBACK).await?;
    decode_record(body).map_err(|e| decode_error(Method::Post, &path, FALLBACK, e))
}

pub async fn update<T: Transport>(api: &ApiClient<T>, id: &str, data: &PortfolioPayload) -> ApiResult<Portfolio> {
    const FALLBACK: &str = "Failed to update portfolio";
    let path = resource_path(COLLECTION, id);
    log::info!("updating portfolio {} with {} images", id, data.image.len());
    let body = api.patch(&path, data, FALLBACK).await?;
    decode_record(body).map_err(|e| decode_error(Method::Patch, &path, FALLBACK, e))
}

pub async fn delete<T: Transport>(api: &ApiClient<T>, id: &str) -> ApiResult<()> {
    log::info!("deleting portfolio {}", id);
    api.delete(&resource_path(COLLECTION, id), "Failed to delete portfolio").await
}
