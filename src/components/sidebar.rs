//! Sidebar Component
//!
//! Section navigation for the dashboard.

use leptos::prelude::*;

use crate::context::use_app;
use crate::routes::Section;

#[component]
pub fn Sidebar() -> impl IntoView {
    let app = use_app();

    view! {
        <nav class="sidebar">
            <div class="sidebar-brand">"Админ-панель"</div>
            {Section::ALL
                .into_iter()
                .map(|section| {
                    let is_active = move || app.route().section() == section;
                    view! {
                        <button
                            class=move || if is_active() { "sidebar-link active" } else { "sidebar-link" }
                            on:click=move |_| app.navigate(section.route())
                        >
                            {section.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
