//! RequireJS configuration rendering.
//!
//! Emits the `paths` and `shim` tables as two parallel listings keyed by
//! module name, plus the load list and Angular dependency list of
//! `main.js`. Entries are separated by `,\n`; the last entry carries no
//! trailing comma.

use crate::config::{resolve_string, TemplateContext};
use crate::error::Result;
use crate::selection::SelectionState;
use crate::templates;

use super::modules::{ModuleEntry, ModuleSet};
use super::{MAIN_JS_TEMPLATE, TEST_MAIN_JS_TEMPLATE};

/// Render the `paths` table.
pub fn paths_table(modules: &ModuleSet, indent: usize) -> String {
    join_lines(
        modules
            .entries()
            .iter()
            .map(|e| format!("'{}': '{}'", e.name, e.path)),
        indent,
    )
}

/// Render the `shim` table.
pub fn shim_table(modules: &ModuleSet, indent: usize) -> String {
    join_lines(modules.shimmed().map(shim_value), indent)
}

fn shim_value(entry: &ModuleEntry) -> String {
    let deps = entry
        .deps
        .iter()
        .map(|d| format!("'{}'", d))
        .collect::<Vec<_>>()
        .join(", ");

    if entry.exports.is_none() && entry.init.is_none() {
        return format!("'{}': [{}]", entry.name, deps);
    }

    let mut fields = Vec::new();
    if let Some(exports) = entry.exports {
        fields.push(format!("exports: '{}'", exports));
    }
    if !entry.deps.is_empty() {
        fields.push(format!("deps: [{}]", deps));
    }
    if let Some(init) = entry.init {
        fields.push(format!("init: {}", init));
    }
    format!("'{}': {{ {} }}", entry.name, fields.join(", "))
}

fn join_lines(lines: impl Iterator<Item = String>, indent: usize) -> String {
    let prefix = " ".repeat(indent);
    lines
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join(",\n")
}

fn quoted_list(names: &[&str], indent: usize) -> String {
    join_lines(names.iter().map(|n| format!("'{}'", n)), indent)
}

/// Render `app/scripts/main.js`.
pub fn render_main_js(selection: &SelectionState) -> Result<String> {
    let modules = ModuleSet::resolve(selection);

    let context = TemplateContext::new()
        .with_app_name(selection.app_name())
        .with_fragment("paths", paths_table(&modules, 12))
        .with_fragment("shim", shim_table(&modules, 12))
        .with_fragment("requires", quoted_list(&modules.names(), 8))
        .with_fragment("ng_modules", quoted_list(&modules.ng_modules(), 16));

    resolve_string(templates::get_text(MAIN_JS_TEMPLATE)?, &context)
}

/// Render `test/test-main.js`, the Karma loader configuration.
pub fn render_test_main_js(selection: &SelectionState) -> Result<String> {
    let modules = ModuleSet::resolve(selection).with_test_harness();

    let context = TemplateContext::new()
        .with_fragment("paths", paths_table(&modules, 8))
        .with_fragment("shim", shim_table(&modules, 8));

    resolve_string(templates::get_text(TEST_MAIN_JS_TEMPLATE)?, &context)
}
