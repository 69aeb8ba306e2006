//! REST API Bindings
//!
//! Client wrapper and resource modules, organized by backend resource.

mod client;
mod error;
mod transport;

pub mod about;
pub mod contacts;
pub mod portfolios;
pub mod uploads;

#[cfg(test)]
pub mod testing;

pub use client::{encode_segment, ApiClient, Transport};
#[cfg(test)]
pub use client::Method;
pub use error::{ApiError, ApiResult};
pub use transport::HttpTransport;

use crate::config::AppConfig;

/// Client bound to the live backend.
pub fn http_client(config: &AppConfig) -> ApiClient<HttpTransport> {
    ApiClient::new(HttpTransport::new(config.clone()))
}
