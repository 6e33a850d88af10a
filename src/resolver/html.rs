//! HTML boilerplate.

use crate::config::{resolve_string, TemplateContext};
use crate::error::Result;
use crate::selection::SelectionState;
use crate::templates;

pub const INDEX_TEMPLATE: &str = "index.html";
pub const HOME_PARTIAL_TEMPLATE: &str = "partials/home.html";

/// Render an HTML template whose only slot is the application name.
pub fn render(template: &str, selection: &SelectionState) -> Result<String> {
    let context = TemplateContext::new().with_app_name(selection.app_name());
    resolve_string(templates::get_text(template)?, &context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NgseedError;
    use crate::selection::CssFramework;

    #[test]
    fn index_has_title_and_loader() {
        let selection = SelectionState::new("dashboard", CssFramework::Compass);
        let html = render(INDEX_TEMPLATE, &selection).unwrap();
        assert!(html.contains("<title>dashboard</title>"));
        assert!(html.contains(r#"data-main="scripts/main""#));
        assert!(html.contains(r#"src="scripts/vendor/require.js""#));
    }

    #[test]
    fn home_partial_names_app() {
        let selection = SelectionState::new("dashboard", CssFramework::Compass);
        let html = render(HOME_PARTIAL_TEMPLATE, &selection).unwrap();
        assert!(html.contains("<h1>dashboard</h1>"));
    }

    #[test]
    fn unknown_template_is_missing() {
        let selection = SelectionState::new("dashboard", CssFramework::Compass);
        let err = render("nope.html", &selection).unwrap_err();
        assert!(matches!(err, NgseedError::MissingTemplate { .. }));
    }
}
