use leptos::prelude::*;

use super::form::{FormMode, PortfolioForm, PortfolioFormView};

/// New portfolio: hidden by default, no images yet
#[component]
pub fn PortfolioCreatePage() -> impl IntoView {
    view! { <PortfolioFormView mode=FormMode::Create initial=PortfolioForm::default() /> }
}
