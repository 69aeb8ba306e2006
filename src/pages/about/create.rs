//! About Create Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::form::{submit, AboutForm, ABOUT_FIELDS};
use crate::context::use_app;
use crate::pages::event_target_name;
use crate::routes::Route;

#[component]
pub fn AboutCreatePage() -> impl IntoView {
    let app = use_app();
    let token = app.page_token();
    let form = RwSignal::new(AboutForm::default());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let snapshot = form.get_untracked();
        submitting.set(true);
        spawn_local(async move {
            let result = submit(&app.api(), &snapshot).await;
            let saved = result.is_ok();
            app.notify(result.unwrap_or_else(|notice| notice));
            if !app.is_current(token) {
                return;
            }
            submitting.set(false);
            if saved {
                app.navigate(Route::AboutList);
            }
        });
    };

    let rows = ABOUT_FIELDS
        .iter()
        .map(|row| {
            let cells = row
                .iter()
                .map(|field| {
                    let name = field.name;
                    view! {
                        <div class="field">
                            <label for=name>{field.label}</label>
                            <textarea
                                id=name
                                name=name
                                rows=field.rows
                                required=field.required
                                prop:value=move || form.with(|f| f.get(name).to_string())
                                on:input=move |ev| {
                                    let name = event_target_name(&ev);
                                    let value = event_target_value(&ev);
                                    form.update(|f| {
                                        if let Err(err) = f.set_field(&name, value) {
                                            log::warn!("{}", err);
                                        }
                                    });
                                }
                            />
                        </div>
                    }
                })
                .collect_view();
            view! { <div class="field-row">{cells}</div> }
        })
        .collect_view();

    view! {
        <div class="page">
            <button class="btn ghost back" on:click=move |_| app.navigate(Route::AboutList)>
                "← Назад к o нас"
            </button>

            <div class="card">
                <form class="form" on:submit=on_submit>
                    {rows}
                    <div class="form-actions">
                        <button type="submit" class="btn primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Создание..." } else { "Создать" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
