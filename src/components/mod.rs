//! UI Components
//!
//! Reusable Leptos components.

mod confirm_dialog;
mod file_upload;
mod image_strip;
mod sidebar;
mod spinner;
mod toaster;

pub use confirm_dialog::ConfirmDialog;
pub use file_upload::FileUpload;
pub use image_strip::ImageStrip;
pub use sidebar::Sidebar;
pub use spinner::Spinner;
pub use toaster::Toaster;
