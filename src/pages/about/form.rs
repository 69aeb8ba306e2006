//! About Form State
//!
//! Nine text fields edited by name and checked before submit.

use thiserror::Error;

use crate::api::{about, ApiClient, Transport};
use crate::models::AboutContent;
use crate::pages::error_notice;
use crate::store::Notice;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AboutFormError {
    #[error("Заполните поле «{0}»")]
    Missing(&'static str),
    #[error("Неизвестное поле: {0}")]
    UnknownField(String),
}

/// One text area on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutField {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    /// Text area height
    pub rows: u32,
}

const fn field(name: &'static str, label: &'static str, required: bool, rows: u32) -> AboutField {
    AboutField { name, label, required, rows }
}

/// Form layout: one row per topic, one column per language
pub const ABOUT_FIELDS: [[AboutField; 3]; 3] = [
    [
        field("about_uz", "O нас (UZ)", true, 4),
        field("about_ru", "O нас (RU)", true, 4),
        field("about_en", "O нас (EN)", true, 4),
    ],
    [
        field("history_uz", "История (UZ)", true, 2),
        field("history_ru", "История (RU)", true, 2),
        field("history_en", "История (EN)", true, 2),
    ],
    [
        field("adventages_uz", "Преимущества (UZ)", true, 2),
        field("adventages_ru", "Преимущества (RU)", true, 2),
        field("adventages_en", "Преимущества (EN)", false, 2),
    ],
];

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AboutForm {
    pub content: AboutContent,
}

impl AboutForm {
    fn slot(&mut self, name: &str) -> Option<&mut String> {
        let c = &mut self.content;
        Some(match name {
            "about_uz" => &mut c.about_uz,
            "about_ru" => &mut c.about_ru,
            "about_en" => &mut c.about_en,
            "history_uz" => &mut c.history_uz,
            "history_ru" => &mut c.history_ru,
            "history_en" => &mut c.history_en,
            "adventages_uz" => &mut c.advantages_uz,
            "adventages_ru" => &mut c.advantages_ru,
            "adventages_en" => &mut c.advantages_en,
            _ => return None,
        })
    }

    pub fn get(&self, name: &str) -> &str {
        let c = &self.content;
        match name {
            "about_uz" => &c.about_uz,
            "about_ru" => &c.about_ru,
            "about_en" => &c.about_en,
            "history_uz" => &c.history_uz,
            "history_ru" => &c.history_ru,
            "history_en" => &c.history_en,
            "adventages_uz" => &c.advantages_uz,
            "adventages_ru" => &c.advantages_ru,
            "adventages_en" => &c.advantages_en,
            _ => "",
        }
    }

    /// Write `value` into the field called `name`.
    pub fn set_field(&mut self, name: &str, value: String) -> Result<(), AboutFormError> {
        let slot = self.slot(name).ok_or_else(|| AboutFormError::UnknownField(name.to_string()))?;
        *slot = value;
        Ok(())
    }

    /// First required field left blank, in form order.
    pub fn validate(&self) -> Result<&AboutContent, AboutFormError> {
        ABOUT_FIELDS
            .iter()
            .flatten()
            .find(|f| f.required && self.get(f.name).trim().is_empty())
            .map_or(Ok(&self.content), |f| Err(AboutFormError::Missing(f.label)))
    }
}

/// Validate and create; `Ok` carries the success notice.
pub async fn submit<T: Transport>(api: &ApiClient<T>, form: &AboutForm) -> Result<Notice, Notice> {
    let content = form.validate().map_err(|err| Notice::error(err.to_string()))?;
    about::create(api, content)
        .await
        .map(|_| Notice::success("Информация o нас успешно создана"))
        .map_err(|err| error_notice(&err, "Не удалось создать o нас"))
}
