//! Confirm Dialog Component
//!
//! Modal confirmation for destructive actions.

use leptos::prelude::*;

/// Modal confirmation dialog
///
/// Clicking the backdrop or the cancel button runs `on_cancel`; nothing else
/// happens until the user confirms.
///
/// # Arguments
/// * `open` - Whether the dialog is shown
/// * `busy` - Disables the confirm button while the action runs
/// * `on_confirm` - Callback to execute when user confirms
/// * `on_cancel` - Callback to execute when the dialog is dismissed
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] busy: Signal<bool>,
    title: &'static str,
    description: &'static str,
    confirm_label: &'static str,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
                <div
                    class="dialog"
                    role="alertdialog"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <h3 class="dialog-title">{title}</h3>
                    <p class="dialog-description">{description}</p>
                    <div class="dialog-footer">
                        <button class="btn ghost" on:click=move |_| on_cancel.run(())>
                            "Отмена"
                        </button>
                        <button
                            class="btn danger"
                            disabled=move || busy.get()
                            on:click=move |_| on_confirm.run(())
                        >
                            {confirm_label}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
