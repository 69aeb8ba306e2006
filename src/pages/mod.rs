//! Pages
//!
//! One module per dashboard section. Each page owns its fetched data; nothing
//! is cached across pages.

pub mod about;
pub mod dashboard;
pub mod portfolios;

pub use about::{AboutCreatePage, AboutListPage};
pub use dashboard::DashboardPage;
pub use portfolios::{PortfolioCreatePage, PortfolioEditPage, PortfolioListPage};

use wasm_bindgen::JsValue;

use crate::api::ApiError;
use crate::store::Notice;

/// Destructive notice carrying the error's message, or `fallback` when blank.
pub fn error_notice(err: &ApiError, fallback: &str) -> Notice {
    let message = err.message().trim();
    Notice::error(if message.is_empty() { fallback } else { message })
}

/// `name` attribute of the form control that fired `ev`
pub fn event_target_name(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|target| js_sys::Reflect::get(target.as_ref(), &JsValue::from_str("name")).ok())
        .and_then(|name| name.as_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_notice_prefers_error_message() {
        let err = ApiError::Status { status: 400, message: "Bad image".into() };
        let notice = error_notice(&err, "Не удалось");
        assert!(notice.is_destructive());
        assert_eq!(notice.description, "Bad image");

        let err = ApiError::Status { status: 400, message: " ".into() };
        assert_eq!(error_notice(&err, "Не удалось").description, "Не удалось");
    }
}
