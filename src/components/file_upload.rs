//! File Upload Component
//!
//! Uploads picked files to the backend and reports the resulting image set.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::api::{uploads, ApiClient, ApiError, ApiResult, HttpTransport};
use crate::context::use_app;
use crate::models::{PortfolioImage, UploadValue};
use crate::store::Notice;

/// Image upload widget
///
/// # Arguments
/// * `value` - Images currently in the form
/// * `multiple` - Accept several files and append them to `value`
/// * `on_change` - Receives the new image set (`None` when emptied)
#[component]
pub fn FileUpload(
    #[prop(into)] value: Signal<Vec<PortfolioImage>>,
    #[prop(optional)] multiple: bool,
    #[prop(into)] on_change: Callback<Option<UploadValue>>,
) -> impl IntoView {
    let app = use_app();
    let (uploading, set_uploading) = signal(false);

    let on_files = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            return;
        };
        let files = selected_files(&input);
        // Reset so picking the same file again still fires `change`.
        input.set_value("");
        if files.is_empty() {
            return;
        }

        let token = app.page_token();
        set_uploading.set(true);
        spawn_local(async move {
            let api = app.api();
            let mut uploaded = Vec::new();
            for file in files {
                match upload_file(&api, &file).await {
                    Ok(images) => uploaded.extend(images),
                    Err(err) => app.notify(Notice::error(err.message())),
                }
            }
            if !app.is_current(token) {
                return;
            }
            set_uploading.set(false);
            if !uploaded.is_empty() {
                on_change.run(Some(merge_uploads(value.get_untracked(), uploaded, multiple)));
            }
        });
    };

    view! {
        <div class="file-upload">
            <div class="upload-grid">
                <For
                    each=move || value.get()
                    key=|image| image.id.clone()
                    children=move |image| {
                        let id = image.id.clone();
                        view! {
                            <div class="upload-item">
                                <img src=image.url alt="" />
                                <button
                                    type="button"
                                    class="upload-remove"
                                    title="Удалить"
                                    on:click=move |_| on_change.run(without_image(&value.get_untracked(), &id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
            <label class=move || if uploading.get() { "upload-picker busy" } else { "upload-picker" }>
                <input
                    type="file"
                    accept="image/*"
                    multiple=multiple
                    disabled=move || uploading.get()
                    on:change=on_files
                />
                <span>{move || if uploading.get() { "Загрузка..." } else { "Выберите изображения" }}</span>
            </label>
        </div>
    }
}

fn selected_files(input: &web_sys::HtmlInputElement) -> Vec<web_sys::File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

async fn upload_file(api: &ApiClient<HttpTransport>, file: &web_sys::File) -> ApiResult<Vec<PortfolioImage>> {
    let buffer = JsFuture::from(file.array_buffer()).await.map_err(|e| ApiError::Transport {
        message: format!("Не удалось прочитать файл {}", file.name()),
        detail: format!("{:?}", e),
    })?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    uploads::upload_image(api, file.name(), &file.type_(), bytes).await
}

/// New widget value after an upload: appended in multi mode, replaced otherwise.
fn merge_uploads(existing: Vec<PortfolioImage>, mut uploaded: Vec<PortfolioImage>, multiple: bool) -> UploadValue {
    if multiple {
        let mut images = existing;
        images.append(&mut uploaded);
        UploadValue::Many(images)
    } else {
        match uploaded.pop() {
            Some(last) => UploadValue::One(last),
            None => UploadValue::Many(existing),
        }
    }
}

fn without_image(current: &[PortfolioImage], id: &str) -> Option<UploadValue> {
    let rest: Vec<PortfolioImage> = current.iter().filter(|image| image.id != id).cloned().collect();
    if rest.is_empty() {
        None
    } else {
        Some(UploadValue::Many(rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: &str) -> PortfolioImage {
        PortfolioImage { url: format!("{}.jpg", id), id: id.into() }
    }

    #[test]
    fn test_multiple_appends() {
        let merged = merge_uploads(vec![image("a")], vec![image("b"), image("c")], true);
        assert_eq!(merged.into_images(), vec![image("a"), image("b"), image("c")]);
    }

    #[test]
    fn test_single_replaces_with_last() {
        let merged = merge_uploads(vec![image("a")], vec![image("b"), image("c")], false);
        assert_eq!(merged, UploadValue::One(image("c")));
    }

    #[test]
    fn test_remove_image() {
        let current = vec![image("a"), image("b")];
        assert_eq!(without_image(&current, "a"), Some(UploadValue::Many(vec![image("b")])));
        assert_eq!(without_image(&[image("a")], "a"), None);
    }
}
