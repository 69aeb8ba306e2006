//! Dashboard Page
//!
//! Latest contact requests, newest first, paged in steps of
//! `contacts_page_size`. Phone numbers stay hidden until revealed.

use std::collections::HashSet;

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::contacts;
use crate::components::Spinner;
use crate::context::use_app;
use crate::format::format_optional_date;
use crate::load_state::LoadState;
use crate::models::ContactSubmission;
use crate::pages::error_notice;

const LOAD_FAILED: &str = "Не удалось получить список контактов";

/// Contact row with a stable key
#[derive(Debug, Clone, PartialEq)]
pub struct ContactRow {
    pub key: String,
    pub contact: ContactSubmission,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactFeed {
    rows: Vec<ContactRow>,
    shown: usize,
    page_size: usize,
    revealed: HashSet<String>,
}

impl ContactFeed {
    /// Sort newest first. Undated rows go last in input order.
    pub fn new(contacts: Vec<ContactSubmission>, page_size: usize) -> Self {
        let mut rows: Vec<ContactRow> = contacts
            .into_iter()
            .enumerate()
            .map(|(index, contact)| ContactRow {
                key: contact.id.clone().unwrap_or_else(|| format!("#{}", index)),
                contact,
            })
            .collect();
        rows.sort_by_cached_key(|row| std::cmp::Reverse(row.contact.created_at_utc()));
        let page_size = page_size.max(1);
        Self { rows, shown: page_size, page_size, revealed: HashSet::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn visible(&self) -> &[ContactRow] {
        &self.rows[..self.shown.min(self.rows.len())]
    }

    pub fn has_more(&self) -> bool {
        self.shown < self.rows.len()
    }

    pub fn show_more(&mut self) {
        if self.has_more() {
            self.shown += self.page_size;
        }
    }

    pub fn toggle_phone(&mut self, key: &str) {
        if !self.revealed.remove(key) {
            self.revealed.insert(key.to_string());
        }
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let app = use_app();
    let token = app.page_token();
    let page_size = app.config().contacts_page_size;
    let feed = RwSignal::new(LoadState::<ContactFeed>::Loading);

    Effect::new(move |_| {
        spawn_local(async move {
            let result = contacts::list(&app.api()).await;
            if !app.is_current(token) {
                return;
            }
            match result {
                Ok(contacts) => feed.set(LoadState::Ready(ContactFeed::new(contacts, page_size))),
                Err(err) => {
                    feed.set(LoadState::Error(err.message().to_string()));
                    app.notify(error_notice(&err, LOAD_FAILED));
                }
            }
        });
    });

    let update = move |f: &dyn Fn(&mut ContactFeed)| {
        feed.update(|state| {
            if let Some(feed) = state.ready_mut() {
                f(feed);
            }
        })
    };

    view! {
        <div class="page">
            <div class="card">
                <h2>"Последние запросы на связь"</h2>
                {move || {
                    if feed.with(LoadState::is_loading) {
                        return view! { <Spinner /> }.into_any();
                    }
                    let empty = feed.with(|s| s.ready().map_or(true, ContactFeed::is_empty));
                    if empty {
                        return view! { <p class="muted">"Запросов на связь не найдено."</p> }.into_any();
                    }
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Имя"</th>
                                    <th>"Телефон"</th>
                                    <th class="text-right">"Дата"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || feed.with(|s| s.ready().map(|f| f.visible().to_vec()).unwrap_or_default())
                                    key=|row| row.key.clone()
                                    children=move |row| {
                                        let key = StoredValue::new(row.key.clone());
                                        let phone = row.contact.phone.clone();
                                        let date = format_optional_date(row.contact.created_at_utc().map(|dt| dt.with_timezone(&Local)).as_ref());
                                        let revealed = move || {
                                            feed.with(|s| s.ready().is_some_and(|f| key.with_value(|k| f.is_revealed(k))))
                                        };
                                        view! {
                                            <tr>
                                                <td>{row.contact.name}</td>
                                                <td class="phone">
                                                    <span>{move || if revealed() { phone.clone() } else { "Скрыто".to_string() }}</span>
                                                    <button
                                                        class="icon-btn"
                                                        title=move || if revealed() { "Скрыть" } else { "Показать" }
                                                        on:click=move |_| update(&|f| key.with_value(|k| f.toggle_phone(k)))
                                                    >
                                                        {move || if revealed() { "🙈" } else { "👁" }}
                                                    </button>
                                                </td>
                                                <td class="text-right muted">{date}</td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                        <Show when=move || feed.with(|s| s.ready().is_some_and(ContactFeed::has_more))>
                            <div class="center">
                                <button class="btn ghost" on:click=move |_| update(&|f| f.show_more())>
                                    "Показать ещё"
                                </button>
                            </div>
                        </Show>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}
