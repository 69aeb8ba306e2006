//! Portfolio Form
//!
//! Local copy of a portfolio being created or edited, its validation, and the
//! form view shared by the create and edit pages.

use leptos::prelude::*;
use leptos::task::spawn_local;
use thiserror::Error;

use crate::api::{portfolios, ApiClient, Transport};
use crate::components::FileUpload;
use crate::context::use_app;
use crate::models::{Portfolio, PortfolioImage, PortfolioPayload, UploadValue};
use crate::pages::{error_notice, event_target_name};
use crate::routes::Route;
use crate::store::Notice;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Пожалуйста, загрузите хотя бы одно изображение")]
    NoImages,
    #[error("Неизвестное поле: {0}")]
    UnknownField(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PortfolioForm {
    pub is_visible: bool,
    pub images: Vec<PortfolioImage>,
}

impl PortfolioForm {
    pub fn from_portfolio(portfolio: Portfolio) -> Self {
        Self { is_visible: portfolio.is_visible, images: portfolio.images }
    }

    /// Checkbox edits, keyed by input name.
    pub fn set_checkbox(&mut self, name: &str, checked: bool) -> Result<(), ValidationError> {
        match name {
            "is_visible" => {
                self.is_visible = checked;
                Ok(())
            }
            other => Err(ValidationError::UnknownField(other.to_string())),
        }
    }

    /// Whatever the upload widget reports is stored as a vector.
    pub fn set_images(&mut self, value: Option<UploadValue>) {
        self.images = value.map(UploadValue::into_images).unwrap_or_default();
    }

    pub fn validate(&self) -> Result<PortfolioPayload, ValidationError> {
        if self.images.is_empty() {
            return Err(ValidationError::NoImages);
        }
        Ok(PortfolioPayload { is_visible: self.is_visible, image: self.images.clone() })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    fn saved_message(&self) -> &'static str {
        match self {
            FormMode::Create => "Портфолио успешно создано",
            FormMode::Edit(_) => "Портфолио успешно обновлено",
        }
    }

    fn failed_message(&self) -> &'static str {
        match self {
            FormMode::Create => "Не удалось создать портфолио",
            FormMode::Edit(_) => "Не удалось обновить портфолио",
        }
    }

    fn submit_label(&self, submitting: bool) -> &'static str {
        match (self, submitting) {
            (FormMode::Create, false) => "Создать портфолио",
            (FormMode::Create, true) => "Создание...",
            (FormMode::Edit(_), false) => "Обновить портфолио",
            (FormMode::Edit(_), true) => "Обновление...",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Rejected(Notice),
    Saved(Notice),
    /// The backend call failed; the form keeps its values
    Failed(Notice),
}

impl SubmitOutcome {
    pub fn into_notice(self) -> Notice {
        match self {
            SubmitOutcome::Rejected(notice) | SubmitOutcome::Saved(notice) | SubmitOutcome::Failed(notice) => notice,
        }
    }
}

/// Validate, then create or update.
pub async fn submit<T: Transport>(api: &ApiClient<T>, mode: &FormMode, form: &PortfolioForm) -> SubmitOutcome {
    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(err) => return SubmitOutcome::Rejected(Notice::error(err.to_string())),
    };

    let result = match mode {
        FormMode::Create => portfolios::create(api, &payload).await,
        FormMode::Edit(id) => portfolios::update(api, id, &payload).await,
    };

    match result {
        Ok(_) => SubmitOutcome::Saved(Notice::success(mode.saved_message())),
        Err(err) => SubmitOutcome::Failed(error_notice(&err, mode.failed_message())),
    }
}

/// Form body shared by create and edit
#[component]
pub fn PortfolioFormView(mode: FormMode, initial: PortfolioForm) -> impl IntoView {
    let app = use_app();
    let token = app.page_token();
    let form = RwSignal::new(initial);
    let submitting = RwSignal::new(false);
    let mode = StoredValue::new(mode);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let snapshot = form.get_untracked();
        submitting.set(true);
        spawn_local(async move {
            let mode = mode.get_value();
            let outcome = submit(&app.api(), &mode, &snapshot).await;
            let saved = matches!(outcome, SubmitOutcome::Saved(_));
            app.notify(outcome.into_notice());
            if !app.is_current(token) {
                return;
            }
            submitting.set(false);
            if saved {
                app.navigate(Route::Portfolios);
            }
        });
    };

    view! {
        <div class="page">
            <button class="btn ghost back" on:click=move |_| app.navigate(Route::Portfolios)>
                "← Назад к портфолио"
            </button>

            <div class="card">
                <form class="form" on:submit=on_submit>
                    <div class="field">
                        <label>"Изображения портфолио"</label>
                        <FileUpload
                            multiple=true
                            value=Signal::derive(move || form.with(|f| f.images.clone()))
                            on_change=Callback::new(move |value: Option<UploadValue>| form.update(|f| f.set_images(value)))
                        />
                    </div>

                    <div class="field checkbox">
                        <label for="is_visible">"показать на главной странице"</label>
                        <input
                            type="checkbox"
                            id="is_visible"
                            name="is_visible"
                            prop:checked=move || form.with(|f| f.is_visible)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                let name = event_target_name(&ev);
                                form.update(|f| {
                                    if let Err(err) = f.set_checkbox(&name, checked) {
                                        log::warn!("{}", err);
                                    }
                                });
                            }
                        />
                    </div>

                    <div class="form-actions">
                        <button type="submit" class="btn primary" disabled=move || submitting.get()>
                            {move || mode.with_value(|m| m.submit_label(submitting.get()))}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeTransport;
    use crate::api::Method;
    use serde_json::json;

    fn image(id: &str) -> PortfolioImage {
        PortfolioImage { url: format!("{}.jpg", id), id: id.into() }
    }

    #[test]
    fn test_set_images_normalizes() {
        let mut form = PortfolioForm::default();
        form.set_images(Some(UploadValue::One(image("a"))));
        assert_eq!(form.images, vec![image("a")]);
        form.set_images(Some(UploadValue::Many(vec![image("a"), image("b")])));
        assert_eq!(form.images.len(), 2);
        form.set_images(None);
        assert!(form.images.is_empty());
    }

    #[test]
    fn test_checkbox_by_name() {
        let mut form = PortfolioForm::default();
        form.set_checkbox("is_visible", true).unwrap();
        assert!(form.is_visible);
        assert_eq!(form.set_checkbox("title", true), Err(ValidationError::UnknownField("title".into())));
    }

    #[test]
    fn test_validate_requires_images() {
        let form = PortfolioForm { is_visible: true, images: vec![] };
        assert_eq!(form.validate(), Err(ValidationError::NoImages));

        let form = PortfolioForm { is_visible: true, images: vec![image("a")] };
        assert_eq!(form.validate().unwrap().image, vec![image("a")]);
    }

    #[tokio::test]
    async fn test_zero_images_never_reaches_backend() {
        let api = ApiClient::new(FakeTransport::new());
        let form = PortfolioForm { is_visible: false, images: vec![] };

        for mode in [FormMode::Create, FormMode::Edit("abc".into())] {
            let outcome = submit(&api, &mode, &form).await;
            assert_eq!(
                outcome,
                SubmitOutcome::Rejected(Notice::error("Пожалуйста, загрузите хотя бы одно изображение"))
            );
        }
        assert!(api.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_success() {
        let fake = FakeTransport::new();
        fake.push_json(201, json!({"_id": "n1", "is_visible": true, "image": [{"url": "a.jpg", "id": "a"}]}));
        let api = ApiClient::new(fake);
        let form = PortfolioForm { is_visible: true, images: vec![image("a")] };

        let outcome = submit(&api, &FormMode::Create, &form).await;
        assert_eq!(outcome, SubmitOutcome::Saved(Notice::success("Портфолио успешно создано")));
        assert_eq!(api.transport().calls()[0].method, Method::Post);
    }

    #[tokio::test]
    async fn test_update_failure_keeps_message() {
        let fake = FakeTransport::new();
        fake.push_json(422, json!({"message": "Слишком много изображений"}));
        let api = ApiClient::new(fake);
        let form = PortfolioForm { is_visible: false, images: vec![image("a")] };

        let outcome = submit(&api, &FormMode::Edit("abc".into()), &form).await;
        assert_eq!(outcome, SubmitOutcome::Failed(Notice::error("Слишком много изображений")));
        let call = &api.transport().calls()[0];
        assert_eq!(call.method, Method::Patch);
        assert_eq!(call.path, "/portfolios/abc");
    }

    #[test]
    fn test_labels() {
        assert_eq!(FormMode::Create.submit_label(true), "Создание...");
        assert_eq!(FormMode::Edit("1".into()).submit_label(false), "Обновить портфолио");
    }
}
