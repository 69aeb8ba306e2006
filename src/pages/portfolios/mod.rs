//! Portfolio Pages
//!
//! Gallery list with delete confirmation, plus create and edit forms.

mod create;
mod edit;
mod form;
mod list;

pub use create::PortfolioCreatePage;
pub use edit::PortfolioEditPage;
pub use list::PortfolioListPage;
