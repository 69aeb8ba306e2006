//! Portfolio List Page
//!
//! Table of galleries. Deleting asks for confirmation, then reloads the whole
//! collection from the backend once the delete succeeds.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{portfolios, ApiClient, ApiResult, Transport};
use crate::components::{ConfirmDialog, ImageStrip, Spinner};
use crate::context::use_app;
use crate::load_state::LoadState;
use crate::models::Portfolio;
use crate::pages::error_notice;
use crate::routes::Route;
use crate::store::Notice;

const LOAD_FAILED: &str = "Не удалось получить список портфолио";
const DELETE_FAILED: &str = "Не удалось удалить портфолио";
const DELETED: &str = "Портфолио успешно удалено";

/// What the page body shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Empty,
    Populated,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioListState {
    pub portfolios: LoadState<Vec<Portfolio>>,
    /// Row awaiting confirmation; `Some` means the dialog is open
    pub pending_delete: Option<String>,
    pub deleting: bool,
}

impl PortfolioListState {
    pub fn view(&self) -> ListView {
        match &self.portfolios {
            LoadState::Idle | LoadState::Loading => ListView::Loading,
            LoadState::Ready(rows) if !rows.is_empty() => ListView::Populated,
            _ => ListView::Empty,
        }
    }

    pub fn rows(&self) -> &[Portfolio] {
        self.portfolios.ready().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Rows paired with a render key that is unique even without an id.
    pub fn keyed_rows(&self) -> Vec<(String, Portfolio)> {
        self.rows().iter().enumerate().map(|(index, row)| (row_key(index, row), row.clone())).collect()
    }

    /// State on mount, before the first fetch resolves.
    pub fn loading() -> Self {
        Self { portfolios: LoadState::Loading, ..Default::default() }
    }

    /// Store a fetch result. A failed reload keeps rows already shown.
    pub fn finish_load(&mut self, result: ApiResult<Vec<Portfolio>>) -> Option<Notice> {
        match result {
            Ok(rows) => {
                self.portfolios = LoadState::Ready(rows);
                None
            }
            Err(err) => {
                if self.portfolios.ready().is_none() {
                    self.portfolios = LoadState::Error(err.message().to_string());
                }
                Some(error_notice(&err, LOAD_FAILED))
            }
        }
    }

    pub fn request_delete(&mut self, id: String) {
        if !self.deleting && !id.is_empty() {
            self.pending_delete = Some(id);
        }
    }

    /// Cancel or close: forget the pending id without touching the backend.
    pub fn close_dialog(&mut self) {
        if !self.deleting {
            self.pending_delete = None;
        }
    }

    pub fn dialog_open(&self) -> bool {
        self.pending_delete.is_some()
    }

    /// Id to delete, unless a delete is already running.
    pub fn begin_delete(&mut self) -> Option<String> {
        if self.deleting {
            return None;
        }
        let id = self.pending_delete.clone()?;
        self.deleting = true;
        Some(id)
    }

    /// Apply a delete outcome and close the dialog.
    pub fn finish_delete(&mut self, outcome: DeleteOutcome) -> Vec<Notice> {
        self.deleting = false;
        self.pending_delete = None;
        let mut notices = vec![outcome.notice];
        if let Some(reloaded) = outcome.reloaded {
            notices.extend(self.finish_load(reloaded));
        }
        notices
    }
}

/// Rows the backend returned without an id fall back to their position.
fn row_key(index: usize, portfolio: &Portfolio) -> String {
    match portfolio.id.as_deref() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => format!("#{}", index),
    }
}

#[derive(Debug)]
pub struct DeleteOutcome {
    pub notice: Notice,
    /// Fresh collection, fetched only after a successful delete
    pub reloaded: Option<ApiResult<Vec<Portfolio>>>,
}

pub async fn delete_and_reload<T: Transport>(api: &ApiClient<T>, id: &str) -> DeleteOutcome {
    match portfolios::delete(api, id).await {
        Ok(()) => DeleteOutcome { notice: Notice::success(DELETED), reloaded: Some(portfolios::list(api).await) },
        Err(err) => DeleteOutcome { notice: error_notice(&err, DELETE_FAILED), reloaded: None },
    }
}

#[component]
pub fn PortfolioListPage() -> impl IntoView {
    let app = use_app();
    let token = app.page_token();
    let state = RwSignal::new(PortfolioListState::loading());

    // Load on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let result = portfolios::list(&app.api()).await;
            if !app.is_current(token) {
                return;
            }
            if let Some(notice) = state.try_update(|s| s.finish_load(result)).flatten() {
                app.notify(notice);
            }
        });
    });

    let confirm_delete = move || {
        let Some(id) = state.try_update(|s| s.begin_delete()).flatten() else {
            return;
        };
        spawn_local(async move {
            let outcome = delete_and_reload(&app.api(), &id).await;
            if app.is_current(token) {
                for notice in state.try_update(|s| s.finish_delete(outcome)).unwrap_or_default() {
                    app.notify(notice);
                }
            } else {
                app.notify(outcome.notice);
            }
        });
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Список портфолио"</h2>
                <button class="btn primary" on:click=move |_| app.navigate(Route::PortfolioCreate)>
                    "+ Добавить портфолио"
                </button>
            </div>

            {move || match state.with(|s| s.view()) {
                ListView::Loading => view! { <Spinner /> }.into_any(),
                ListView::Empty => view! {
                    <div class="empty-state">
                        <p class="muted">"Портфолио не найдено. Создайте ваше первое портфолио."</p>
                    </div>
                }.into_any(),
                ListView::Populated => view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Изображения"</th>
                                <th class="text-right">"Показать"</th>
                                <th class="text-right">"Действия"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || state.with(|s| s.keyed_rows())
                                key=|(key, _)| key.clone()
                                children=move |(key, portfolio)| {
                                    let id = portfolio.id.clone().filter(|id| !id.is_empty());
                                    let has_id = id.is_some();
                                    let edit_id = id.unwrap_or_default();
                                    let delete_id = edit_id.clone();
                                    let (badge_class, badge_text) = if portfolio.is_visible {
                                        ("badge yes", "Да")
                                    } else {
                                        ("badge no", "Нет")
                                    };
                                    view! {
                                        <tr>
                                            <td><ImageStrip images=portfolio.images alt_prefix=key /></td>
                                            <td class="text-right">
                                                <span class=badge_class>{badge_text}</span>
                                            </td>
                                            <td class="text-right actions">
                                                <button
                                                    class="icon-btn"
                                                    title="Редактировать"
                                                    disabled=!has_id
                                                    on:click=move |_| app.navigate(Route::PortfolioEdit(edit_id.clone()))
                                                >
                                                    "✎"
                                                </button>
                                                <button
                                                    class="icon-btn danger"
                                                    title="Удалить"
                                                    disabled=!has_id
                                                    on:click=move |_| state.update(|s| s.request_delete(delete_id.clone()))
                                                >
                                                    "🗑"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                }.into_any(),
            }}

            <ConfirmDialog
                open=Signal::derive(move || state.with(|s| s.dialog_open()))
                busy=Signal::derive(move || state.with(|s| s.deleting))
                title="Вы уверены?"
                description="Это действие невозможно отменить. Оно приведёт к окончательному удалению портфолио."
                confirm_label="Удалить"
                on_confirm=Callback::new(move |_: ()| confirm_delete())
                on_cancel=Callback::new(move |_: ()| state.update(|s| s.close_dialog()))
            />
        </div>
    }
}
