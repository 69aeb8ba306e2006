//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds only what
//! crosses page boundaries: the current route and the toast queue.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::routes::Route;

/// Maximum toasts on screen; older ones are dropped first.
pub const TOAST_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// A notification a page wants shown
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub variant: ToastVariant,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(description: impl Into<String>) -> Self {
        Self { variant: ToastVariant::Default, title: "Успешно".to_string(), description: description.into() }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self { variant: ToastVariant::Destructive, title: "Ошибка".to_string(), description: description.into() }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

/// A queued notice
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Toasts {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, notice });
        if self.items.len() > TOAST_LIMIT {
            let overflow = self.items.len() - TOAST_LIMIT;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

/// Identifies the page instance that started a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageToken(u64);

/// Current route plus a counter bumped on every navigation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Navigator {
    pub route: Route,
    epoch: u64,
}

impl Navigator {
    pub fn new(route: Route) -> Self {
        Self { route, epoch: 0 }
    }

    pub fn navigate(&mut self, route: Route) {
        self.route = route;
        self.epoch += 1;
    }

    pub fn token(&self) -> PageToken {
        PageToken(self.epoch)
    }

    /// False once the user has left the page that issued `token`.
    pub fn is_current(&self, token: PageToken) -> bool {
        self.epoch == token.0
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub navigator: Navigator,
    pub toasts: Toasts,
}

impl AppState {
    pub fn new(route: Route) -> Self {
        Self { navigator: Navigator::new(route), toasts: Toasts::default() }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_route(store: &AppStore) -> Route {
    store.navigator().read().route.clone()
}

pub fn store_navigate(store: &AppStore, route: Route) {
    store.navigator().write().navigate(route);
}

/// Navigate only when `route` differs from the current one.
pub fn store_follow_route(store: &AppStore, route: Route) {
    if store.navigator().read_untracked().route != route {
        store_navigate(store, route);
    }
}

pub fn store_page_token(store: &AppStore) -> PageToken {
    store.navigator().read_untracked().token()
}

pub fn store_is_current(store: &AppStore, token: PageToken) -> bool {
    store.navigator().read_untracked().is_current(token)
}

pub fn store_push_toast(store: &AppStore, notice: Notice) -> u64 {
    store.toasts().write().push(notice)
}

pub fn store_dismiss_toast(store: &AppStore, id: u64) {
    store.toasts().write().dismiss(id);
}

pub fn store_toasts(store: &AppStore) -> Vec<Toast> {
    store.toasts().read().items.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_limit_drops_oldest() {
        let mut toasts = Toasts::default();
        let first = toasts.push(Notice::error("1"));
        for n in 2..=4 {
            toasts.push(Notice::success(n.to_string()));
        }
        assert_eq!(toasts.items.len(), TOAST_LIMIT);
        assert!(toasts.items.iter().all(|t| t.id != first));
        assert_eq!(toasts.items[0].notice.description, "2");
    }

    #[test]
    fn test_toast_dismiss() {
        let mut toasts = Toasts::default();
        let a = toasts.push(Notice::success("a"));
        let b = toasts.push(Notice::error("b"));
        toasts.dismiss(a);
        assert_eq!(toasts.items.len(), 1);
        assert_eq!(toasts.items[0].id, b);
        assert!(toasts.items[0].notice.is_destructive());
    }

    #[test]
    fn test_notice_titles() {
        assert_eq!(Notice::success("x").title, "Успешно");
        assert_eq!(Notice::error("x").title, "Ошибка");
    }

    #[test]
    fn test_navigation_invalidates_tokens() {
        let mut nav = Navigator::new(Route::Portfolios);
        let token = nav.token();
        assert!(nav.is_current(token));

        nav.navigate(Route::PortfolioCreate);
        assert!(!nav.is_current(token));
        assert!(nav.is_current(nav.token()));
        assert_eq!(nav.route, Route::PortfolioCreate);
    }
}
