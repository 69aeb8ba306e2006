use leptos::prelude::*;

/// Centered loading indicator
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-row">
            <div class="spinner"></div>
        </div>
    }
}
