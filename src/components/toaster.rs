//! Toaster Component
//!
//! Renders the toast queue from the app store.

use leptos::prelude::*;

use crate::context::use_app;
use crate::store::{store_toasts, ToastVariant};

#[component]
pub fn Toaster() -> impl IntoView {
    let app = use_app();

    view! {
        <div class="toaster">
            <For
                each=move || store_toasts(&app.store)
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.notice.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast destructive",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class role="status">
                            <div class="toast-body">
                                <div class="toast-title">{toast.notice.title}</div>
                                <div class="toast-description">{toast.notice.description}</div>
                            </div>
                            <button class="toast-close" on:click=move |_| app.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
