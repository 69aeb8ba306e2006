//! About Pages
//!
//! Company description, history and advantages in three languages.

mod create;
mod form;
mod list;

pub use create::AboutCreatePage;
pub use list::AboutListPage;
