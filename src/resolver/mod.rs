//! Conditional template resolution.
//!
//! Everything here is a pure function of a [`SelectionState`]: the same
//! selection always renders byte-identical text.
//!
//! - [`modules`] - the ordered RequireJS module set
//! - [`loader_config`] - `main.js` and `test-main.js`
//! - [`stylesheet`] - the main stylesheet and its header
//! - [`manifest`] - `package.json` and `bower.json`
//! - [`gruntfile`] - `Gruntfile.js`
//! - [`html`] - `index.html` and the home partial
//! - [`plan`] - every file operation of one generation run

pub mod gruntfile;
pub mod html;
pub mod loader_config;
pub mod manifest;
pub mod modules;
pub mod plan;
pub mod stylesheet;

pub use manifest::{BowerManifest, PackageManifest};
pub use modules::{ModuleEntry, ModuleSet, Package};
pub use plan::{GenerationPlan, Operation};
pub use stylesheet::Stylesheet;

use crate::error::{NgseedError, Result};
use crate::selection::SelectionState;

pub const GRUNTFILE_TEMPLATE: &str = "Gruntfile.js";
pub const PACKAGE_JSON_TEMPLATE: &str = "package.json";
pub const BOWER_JSON_TEMPLATE: &str = "bower.json";
pub const MAIN_JS_TEMPLATE: &str = "scripts/main.js";
pub const TEST_MAIN_JS_TEMPLATE: &str = "scripts/test-main.js";
pub const STYLESHEET_TEMPLATE: &str = "styles/main.scss";

/// Templates with conditional sections, by name.
pub const RENDERED_TEMPLATES: [&str; 8] = [
    GRUNTFILE_TEMPLATE,
    PACKAGE_JSON_TEMPLATE,
    BOWER_JSON_TEMPLATE,
    html::INDEX_TEMPLATE,
    html::HOME_PARTIAL_TEMPLATE,
    MAIN_JS_TEMPLATE,
    TEST_MAIN_JS_TEMPLATE,
    STYLESHEET_TEMPLATE,
];

/// Render a conditional template for a selection.
pub fn render_template(name: &str, selection: &SelectionState) -> Result<String> {
    tracing::debug!(template = name, "Rendering template");
    match name {
        GRUNTFILE_TEMPLATE => gruntfile::render(selection),
        PACKAGE_JSON_TEMPLATE => manifest::render_package_json(selection),
        BOWER_JSON_TEMPLATE => manifest::render_bower_json(selection),
        html::INDEX_TEMPLATE | html::HOME_PARTIAL_TEMPLATE => html::render(name, selection),
        MAIN_JS_TEMPLATE => loader_config::render_main_js(selection),
        TEST_MAIN_JS_TEMPLATE => loader_config::render_test_main_js(selection),
        STYLESHEET_TEMPLATE => Ok(stylesheet::resolve(selection)?.contents),
        _ => Err(NgseedError::MissingTemplate {
            name: name.to_string(),
        }),
    }
}
