//! Portfolio Edit Page
//!
//! Loads the portfolio before showing the form. If it cannot be loaded the
//! user is sent back to the list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::form::{FormMode, PortfolioForm, PortfolioFormView};
use crate::api::{portfolios, ApiClient, Transport};
use crate::components::Spinner;
use crate::context::use_app;
use crate::load_state::LoadState;
use crate::pages::error_notice;
use crate::routes::Route;
use crate::store::Notice;

const LOAD_FAILED: &str = "Не удалось загрузить портфолио";

/// Fetch the portfolio and copy it into a form.
pub async fn load_form<T: Transport>(api: &ApiClient<T>, id: &str) -> Result<PortfolioForm, Notice> {
    portfolios::get(api, id)
        .await
        .map(PortfolioForm::from_portfolio)
        .map_err(|err| error_notice(&err, LOAD_FAILED))
}

#[component]
pub fn PortfolioEditPage(id: String) -> impl IntoView {
    let app = use_app();
    let token = app.page_token();
    let loaded = RwSignal::new(LoadState::<PortfolioForm>::Loading);
    let id = StoredValue::new(id);

    Effect::new(move |_| {
        spawn_local(async move {
            let result = load_form(&app.api(), &id.get_value()).await;
            if !app.is_current(token) {
                return;
            }
            match result {
                Ok(form) => loaded.set(LoadState::Ready(form)),
                Err(notice) => {
                    loaded.set(LoadState::Error(notice.description.clone()));
                    app.notify(notice);
                    app.navigate(Route::Portfolios);
                }
            }
        });
    });

    move || match loaded.get() {
        LoadState::Ready(form) => {
            view! { <PortfolioFormView mode=FormMode::Edit(id.get_value()) initial=form /> }.into_any()
        }
        _ => view! { <Spinner /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeTransport;
    use crate::models::PortfolioImage;
    use serde_json::json;

    #[tokio::test]
    async fn test_load_form_copies_resource() {
        let fake = FakeTransport::new();
        fake.push_json(200, json!({"_id": "abc", "is_visible": true, "image": {"url": "a.jpg", "id": "a"}}));
        let api = ApiClient::new(fake);

        let form = load_form(&api, "abc").await.unwrap();
        assert!(form.is_visible);
        assert_eq!(form.images, vec![PortfolioImage { url: "a.jpg".into(), id: "a".into() }]);
        assert_eq!(api.transport().calls()[0].path, "/portfolios/abc");
    }

    #[tokio::test]
    async fn test_load_failure_becomes_notice() {
        let fake = FakeTransport::new();
        fake.push_json(404, json!({"message": "Portfolio not found"}));
        let api = ApiClient::new(fake);

        let notice = load_form(&api, "missing").await.unwrap_err();
        assert_eq!(notice, Notice::error("Portfolio not found"));
    }
}
