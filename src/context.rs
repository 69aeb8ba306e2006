//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiClient, HttpTransport};
use crate::config::AppConfig;
use crate::routes::Route;
use crate::store::{
    store_dismiss_toast, store_follow_route, store_is_current, store_navigate, store_page_token, store_push_toast, store_route, AppStore,
    Notice, PageToken,
};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig) -> Self {
        Self { store, config: StoredValue::new(config) }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Client for the configured backend
    pub fn api(&self) -> ApiClient<HttpTransport> {
        self.config.with_value(api::http_client)
    }

    /// Current route (tracked)
    pub fn route(&self) -> Route {
        store_route(&self.store)
    }

    /// Switch page and mirror the path into `location.hash`.
    pub fn navigate(&self, route: Route) {
        let path = route.path();
        log::debug!("navigate to {}", path);
        store_navigate(&self.store, route);
        if let Some(window) = web_sys::window() {
            let location = window.location();
            if location.hash().ok().as_deref() != Some(format!("#{}", path).as_str()) {
                let _ = location.set_hash(&path);
            }
        }
    }

    /// Follow a hash change made outside the app (back button, typed URL).
    pub fn sync_from_hash(&self, hash: &str) {
        store_follow_route(&self.store, Route::parse(hash));
    }

    /// Show a toast; it disappears after the configured duration.
    pub fn notify(&self, notice: Notice) {
        if notice.is_destructive() {
            log::warn!("{}: {}", notice.title, notice.description);
        }
        let id = store_push_toast(&self.store, notice);
        let store = self.store;
        let duration = self.config.with_value(|c| c.toast_duration_ms);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duration).await;
            store_dismiss_toast(&store, id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        store_dismiss_toast(&self.store, id);
    }

    /// Token identifying the page that is mounted now
    pub fn page_token(&self) -> PageToken {
        store_page_token(&self.store)
    }

    /// Whether the page that took `token` is still mounted
    pub fn is_current(&self, token: PageToken) -> bool {
        store_is_current(&self.store, token)
    }
}

/// Get the app context
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
