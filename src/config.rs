//! Application Configuration
//!
//! Resolved once at startup from compile-time environment and the page origin.

use log::LevelFilter;

const DEFAULT_API_BASE: &str = "/api";
const DEFAULT_TOAST_DURATION_MS: u32 = 5_000;
const DEFAULT_CONTACTS_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Absolute base URL of the REST API, without trailing slash
    pub api_base_url: String,
    pub log_level: LevelFilter,
    pub toast_duration_ms: u32,
    /// How many contact requests the dashboard reveals per step
    pub contacts_page_size: usize,
}

impl AppConfig {
    /// Read `ADMIN_API_URL` and `ADMIN_LOG_LEVEL` baked in at build time.
    pub fn load() -> Self {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        Self::from_parts(option_env!("ADMIN_API_URL"), option_env!("ADMIN_LOG_LEVEL"), origin.as_deref())
    }

    pub fn from_parts(api_url: Option<&str>, log_level: Option<&str>, origin: Option<&str>) -> Self {
        let api_url = api_url.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(DEFAULT_API_BASE);
        Self {
            api_base_url: resolve_base_url(api_url, origin),
            log_level: log_level.map(parse_level).unwrap_or_else(default_level),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            contacts_page_size: DEFAULT_CONTACTS_PAGE_SIZE,
        }
    }

    /// Join a resource path onto the API base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_parts(None, None, None)
    }
}

fn resolve_base_url(api_url: &str, origin: Option<&str>) -> String {
    let api_url = api_url.trim_end_matches('/');
    if api_url.starts_with("http://") || api_url.starts_with("https://") {
        return api_url.to_string();
    }
    let origin = origin.unwrap_or("http://localhost:8080").trim_end_matches('/');
    format!("{}/{}", origin, api_url.trim_start_matches('/'))
}

fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Unknown names fall back to the build default.
pub fn parse_level(raw: &str) -> LevelFilter {
    raw.trim().parse().unwrap_or_else(|_| default_level())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_base_resolves_against_origin() {
        let config = AppConfig::from_parts(Some("/api/"), None, Some("https://admin.example.uz/"));
        assert_eq!(config.api_base_url, "https://admin.example.uz/api");
    }

    #[test]
    fn test_absolute_base_is_kept() {
        let config = AppConfig::from_parts(Some("https://api.example.uz/v1/"), None, Some("https://admin.example.uz"));
        assert_eq!(config.api_base_url, "https://api.example.uz/v1");
    }

    #[test]
    fn test_blank_base_uses_default() {
        let config = AppConfig::from_parts(Some("  "), None, Some("http://127.0.0.1:3000"));
        assert_eq!(config.api_base_url, "http://127.0.0.1:3000/api");
    }

    #[test]
    fn test_endpoint_normalizes_slashes() {
        let config = AppConfig::from_parts(Some("http://h/api"), None, None);
        assert_eq!(config.endpoint("/portfolios"), "http://h/api/portfolios");
        assert_eq!(config.endpoint("portfolios/1"), "http://h/api/portfolios/1");
    }

    #[test]
    fn test_log_level() {
        assert_eq!(parse_level("warn"), LevelFilter::Warn);
        assert_eq!(parse_level(" TRACE "), LevelFilter::Trace);
        assert_eq!(parse_level("loud"), default_level());
        let config = AppConfig::from_parts(None, Some("error"), None);
        assert_eq!(config.log_level, LevelFilter::Error);
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.toast_duration_ms, 5_000);
        assert_eq!(config.contacts_page_size, 5);
    }
}
