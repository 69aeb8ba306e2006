//! About List Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::about;
use crate::components::Spinner;
use crate::context::use_app;
use crate::format::summarize;
use crate::load_state::LoadState;
use crate::models::AboutContent;
use crate::pages::error_notice;
use crate::routes::Route;

const LOAD_FAILED: &str = "Не удалось получить информацию o нас";
const PREVIEW_CHARS: usize = 120;

/// Key for a record row; records without an id fall back to their position.
fn row_key(index: usize, record: &AboutContent) -> String {
    record.id.clone().unwrap_or_else(|| format!("#{}", index))
}

#[component]
pub fn AboutListPage() -> impl IntoView {
    let app = use_app();
    let token = app.page_token();
    let records = RwSignal::new(LoadState::<Vec<AboutContent>>::Loading);

    Effect::new(move |_| {
        spawn_local(async move {
            let result = about::list(&app.api()).await;
            if !app.is_current(token) {
                return;
            }
            match result {
                Ok(rows) => records.set(LoadState::Ready(rows)),
                Err(err) => {
                    records.set(LoadState::Error(err.message().to_string()));
                    app.notify(error_notice(&err, LOAD_FAILED));
                }
            }
        });
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"O нас"</h2>
                <button class="btn primary" on:click=move |_| app.navigate(Route::AboutCreate)>
                    "+ Добавить"
                </button>
            </div>

            {move || {
                if records.with(LoadState::is_loading) {
                    return view! { <Spinner /> }.into_any();
                }
                let rows: Vec<(String, AboutContent)> = records.with(|s| {
                    s.ready()
                        .map(|rows| rows.iter().enumerate().map(|(i, r)| (row_key(i, r), r.clone())).collect())
                        .unwrap_or_default()
                });
                if rows.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <p class="muted">"Информация o нас ещё не добавлена."</p>
                        </div>
                    }
                    .into_any();
                }
                view! {
                    <div class="about-list">
                        {rows
                            .into_iter()
                            .map(|(key, record)| {
                                view! {
                                    <div class="card about-card" data-key=key>
                                        <h3>"O нас"</h3>
                                        <p>{summarize(&record.about_ru, PREVIEW_CHARS)}</p>
                                        <h3>"История"</h3>
                                        <p>{summarize(&record.history_ru, PREVIEW_CHARS)}</p>
                                        <h3>"Преимущества"</h3>
                                        <p>{summarize(&record.advantages_ru, PREVIEW_CHARS)}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
