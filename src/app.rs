//! Admin Dashboard App
//!
//! Root component: sidebar, header, the page for the current route, toasts.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Sidebar, Toaster};
use crate::config::AppConfig;
use crate::context::{use_app, AppContext};
use crate::pages::{
    AboutCreatePage, AboutListPage, DashboardPage, PortfolioCreatePage, PortfolioEditPage, PortfolioListPage,
};
use crate::routes::Route;
use crate::store::AppState;

/// Route encoded in the address bar, if any
fn initial_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| Route::parse(&hash))
        .unwrap_or_default()
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let route = initial_route();
    log::info!("admin dashboard starting at {} (api {})", route.path(), config.api_base_url);

    let app = AppContext::new(Store::new(AppState::new(route.clone())), config);
    provide_context(app);

    // Keep the hash in sync so reloads land on the same page
    app.navigate(route);

    // Back/forward buttons and typed URLs
    let _ = window_event_listener(ev::hashchange, move |_| {
        if let Some(hash) = web_sys::window().and_then(|w| w.location().hash().ok()) {
            app.sync_from_hash(&hash);
        }
    });

    view! {
        <div class="app-layout">
            <Sidebar />
            <main class="main-content">
                <header class="top-bar">
                    <h1>{move || app.route().section().label()}</h1>
                </header>
                <Outlet />
            </main>
            <Toaster />
        </div>
    }
}

/// Page for the current route. Each navigation mounts a fresh page.
#[component]
fn Outlet() -> impl IntoView {
    let app = use_app();

    move || match app.route() {
        Route::Dashboard => view! { <DashboardPage /> }.into_any(),
        Route::AboutList => view! { <AboutListPage /> }.into_any(),
        Route::AboutCreate => view! { <AboutCreatePage /> }.into_any(),
        Route::Portfolios => view! { <PortfolioListPage /> }.into_any(),
        Route::PortfolioCreate => view! { <PortfolioCreatePage /> }.into_any(),
        Route::PortfolioEdit(id) => view! { <PortfolioEditPage id=id /> }.into_any(),
    }
}
