//! Routes
//!
//! Dashboard pages and their URL paths.

use percent_encoding::percent_decode_str;

use crate::api::encode_segment;

/// Page selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    AboutList,
    AboutCreate,
    Portfolios,
    PortfolioCreate,
    PortfolioEdit(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/dashboard".to_string(),
            Route::AboutList => "/dashboard/about".to_string(),
            Route::AboutCreate => "/dashboard/about/create".to_string(),
            Route::Portfolios => "/dashboard/portfolios".to_string(),
            Route::PortfolioCreate => "/dashboard/portfolios/create".to_string(),
            Route::PortfolioEdit(id) => format!("/dashboard/portfolios/edit/{}", encode_segment(id)),
        }
    }

    /// Parse a path or `#/...` hash. Unknown paths land on the dashboard.
    pub fn parse(raw: &str) -> Self {
        let path = raw.trim_start_matches('#');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["dashboard", "about"] => Route::AboutList,
            ["dashboard", "about", "create"] => Route::AboutCreate,
            ["dashboard", "portfolios"] => Route::Portfolios,
            ["dashboard", "portfolios", "create"] => Route::PortfolioCreate,
            ["dashboard", "portfolios", "edit", id] => {
                Route::PortfolioEdit(percent_decode_str(id).decode_utf8_lossy().into_owned())
            }
            _ => Route::Dashboard,
        }
    }

    /// Sidebar section this page belongs to
    pub fn section(&self) -> Section {
        match self {
            Route::Dashboard => Section::Dashboard,
            Route::AboutList | Route::AboutCreate => Section::About,
            Route::Portfolios | Route::PortfolioCreate | Route::PortfolioEdit(_) => Section::Portfolios,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    About,
    Portfolios,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Dashboard, Section::About, Section::Portfolios];

    pub fn label(self) -> &'static str {
        match self {
            Section::Dashboard => "Панель",
            Section::About => "O нас",
            Section::Portfolios => "Портфолио",
        }
    }

    pub fn route(self) -> Route {
        match self {
            Section::Dashboard => Route::Dashboard,
            Section::About => Route::AboutList,
            Section::Portfolios => Route::Portfolios,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("#/dashboard/portfolios"), Route::Portfolios);
        assert_eq!(Route::parse("/dashboard/portfolios/create"), Route::PortfolioCreate);
        assert_eq!(Route::parse("#/dashboard/portfolios/edit/abc"), Route::PortfolioEdit("abc".into()));
        assert_eq!(Route::parse("/dashboard/about/"), Route::AboutList);
        assert_eq!(Route::parse("/dashboard/about/create"), Route::AboutCreate);
    }

    #[test]
    fn test_unknown_falls_back_to_dashboard() {
        assert_eq!(Route::parse(""), Route::Dashboard);
        assert_eq!(Route::parse("#/banners"), Route::Dashboard);
        assert_eq!(Route::parse("/dashboard/portfolios/edit"), Route::Dashboard);
    }

    #[test]
    fn test_path_roundtrip() {
        for route in [Route::Dashboard, Route::AboutCreate, Route::PortfolioEdit("42".into())] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_edit_id_survives_hash_encoding() {
        let route = Route::PortfolioEdit("a b/c".into());
        assert_eq!(route.path(), "/dashboard/portfolios/edit/a%20b%2Fc");
        assert_eq!(Route::parse(&format!("#{}", route.path())), route);
        // Browsers keep typed hashes percent-encoded
        assert_eq!(Route::parse("#/dashboard/portfolios/edit/a%20b"), Route::PortfolioEdit("a b".into()));
    }

    #[test]
    fn test_sections() {
        assert_eq!(Route::PortfolioEdit("1".into()).section(), Section::Portfolios);
        assert_eq!(Section::About.route(), Route::AboutList);
    }
}
