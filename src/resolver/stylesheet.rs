//! Main stylesheet resolution.

use crate::error::Result;
use crate::selection::{CssFramework, SelectionState};
use crate::templates;

use super::STYLESHEET_TEMPLATE as BASE_FRAGMENT;

const FRAMEWORK_FRAGMENT: &str = "styles/bootstrap.css";

/// Template of the companion mixins partial.
pub const MIXINS_TEMPLATE: &str = "styles/_custom_mixins.scss";

/// The resolved main stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    /// File name inside `app/styles`.
    pub file_name: String,
    /// Import lines placed before the content.
    pub header: String,
    /// Full file contents, header included.
    pub contents: String,
    /// Whether `_custom_mixins.scss` must be written alongside.
    pub needs_mixins_partial: bool,
}

/// Import lines for a CSS framework.
pub fn header(css: CssFramework) -> String {
    let mut header = String::new();

    match css {
        CssFramework::Compass => {
            header.push_str("@import 'compass';\n");
            header.push_str("@import 'compass/reset';\n");
        }
        CssFramework::SassBootstrap => {
            header.push_str("$icon-font-path: '../bower_components/sass-bootstrap/fonts/';\n");
            header.push_str("@import '../bower_components/sass-bootstrap/lib/bootstrap';\n");
        }
        CssFramework::NativeBootstrap => {}
    }

    if css.uses_sass() {
        header.push_str("@import 'custom_mixins.scss';\n");
    }

    header
}

/// Assemble the stylesheet from its fragments.
pub fn assemble(css: CssFramework, base: &str, framework_css: &str) -> Stylesheet {
    let header = header(css);

    let mut contents = header.clone();
    contents.push_str(base);
    if css != CssFramework::Compass {
        contents.push_str(framework_css);
    }

    Stylesheet {
        file_name: css.stylesheet_name(),
        header,
        contents,
        needs_mixins_partial: css.uses_sass(),
    }
}

/// Resolve the stylesheet for a selection using the embedded fragments.
pub fn resolve(selection: &SelectionState) -> Result<Stylesheet> {
    let base = templates::get_text(BASE_FRAGMENT)?;
    let framework_css = templates::get_text(FRAMEWORK_FRAGMENT)?;
    Ok(assemble(selection.css_framework(), base, framework_css))
}
