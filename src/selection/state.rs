//! The immutable selection record threaded through generation.

use std::collections::BTreeSet;

use crate::error::Result;

use super::{CssFramework, JsLibrary, TestFramework, JASMINE_VALUE};

/// Everything the user chose, fixed for the rest of the run.
///
/// Built once from prompt answers and then only read. The builder methods
/// consume `self`, so a shared reference can never be changed mid-run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    app_name: String,
    css_framework: CssFramework,
    libraries: BTreeSet<JsLibrary>,
    test_framework: TestFramework,
}

impl SelectionState {
    /// Create a selection with no optional libraries.
    pub fn new(app_name: &str, css_framework: CssFramework) -> Self {
        Self {
            app_name: app_name.to_string(),
            css_framework,
            libraries: BTreeSet::new(),
            test_framework: TestFramework::default(),
        }
    }

    /// Add an optional library.
    pub fn with_library(mut self, library: JsLibrary) -> Self {
        self.libraries.insert(library);
        self
    }

    /// Set the test framework.
    pub fn with_test_framework(mut self, test_framework: TestFramework) -> Self {
        self.test_framework = test_framework;
        self
    }

    /// Build a selection from raw answer values.
    ///
    /// `js_files` holds the multi-select values; ticking Jasmine overrides
    /// `test_framework`. Any unknown value is a configuration error.
    pub fn from_answers(
        app_name: &str,
        css_framework: &str,
        js_files: &[String],
        test_framework: TestFramework,
    ) -> Result<Self> {
        let css_framework: CssFramework = css_framework.parse()?;
        let mut selection = Self::new(app_name, css_framework).with_test_framework(test_framework);

        for value in js_files.iter().map(|v| v.trim()).filter(|v| !v.is_empty()) {
            if value.eq_ignore_ascii_case(JASMINE_VALUE) {
                selection = selection.with_test_framework(TestFramework::Jasmine);
            } else {
                selection = selection.with_library(value.parse()?);
            }
        }

        tracing::debug!(
            css = %selection.css_framework,
            libraries = ?selection.libraries,
            test = %selection.test_framework,
            "Selections resolved"
        );

        Ok(selection)
    }

    /// Application name used in manifests and the page title.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Chosen CSS framework.
    pub fn css_framework(&self) -> CssFramework {
        self.css_framework
    }

    /// Chosen test framework.
    pub fn test_framework(&self) -> TestFramework {
        self.test_framework
    }

    /// Whether an optional library was selected.
    pub fn includes(&self, library: JsLibrary) -> bool {
        self.libraries.contains(&library)
    }

    /// Selected libraries in declared order.
    pub fn libraries(&self) -> impl Iterator<Item = JsLibrary> + '_ {
        self.libraries.iter().copied()
    }
}

/// Derive a package-safe application name from a directory name.
///
/// Lowercases, maps whitespace and underscores to `-`, drops anything that
/// is not alphanumeric, `-` or `.`, and falls back to `webapp`.
pub fn app_name_from_dir(dir_name: &str) -> String {
    let mut name = String::with_capacity(dir_name.len());
    for c in dir_name.trim().chars() {
        if c.is_ascii_alphanumeric() || c == '.' {
            name.push(c.to_ascii_lowercase());
        } else if (c.is_whitespace() || c == '_' || c == '-') && !name.ends_with('-') {
            name.push('-');
        }
    }

    let trimmed = name.trim_matches(|c| c == '-' || c == '.');
    if trimmed.is_empty() {
        "webapp".to_string()
    } else {
        trimmed.to_string()
    }
}
