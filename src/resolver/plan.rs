//! The generation plan.
//!
//! A plan lists every directory, literal copy and rendered file of one run.
//! All rendering happens in [`GenerationPlan::build`], so a configuration
//! or template problem surfaces before the first write.

use crate::error::{NgseedError, Result};
use crate::scaffold::Scaffolder;
use crate::selection::SelectionState;
use crate::templates;
use crate::ui::UserInterface;

use super::{
    html, render_template, stylesheet, BOWER_JSON_TEMPLATE, GRUNTFILE_TEMPLATE, MAIN_JS_TEMPLATE,
    PACKAGE_JSON_TEMPLATE, TEST_MAIN_JS_TEMPLATE,
};

/// Empty directories every project starts with.
pub const DIRECTORIES: [&str; 5] = [
    "app/images",
    "app/partials",
    "app/scripts/vendor",
    "config",
    "test",
];

/// Root-level literal copies: `(template, destination)`.
const ROOT_COPIES: [(&str, &str); 3] = [
    ("bowerrc", ".bowerrc"),
    ("editorconfig", ".editorconfig"),
    ("jshintrc", ".jshintrc"),
];

/// Literal copies under `app/`.
const APP_COPIES: [(&str, &str); 4] = [
    ("favicon.ico", "app/favicon.ico"),
    ("404.html", "app/404.html"),
    ("robots.txt", "app/robots.txt"),
    ("htaccess", "app/.htaccess"),
];

/// First-party placeholder modules.
const FIRST_PARTY_SCRIPTS: [&str; 4] = ["controllers", "directives", "filters", "services"];

/// One file operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Create a directory.
    Directory(String),
    /// Copy an embedded template unchanged.
    Copy { template: String, dest: String },
    /// Write rendered text.
    Write { dest: String, contents: String },
}

impl Operation {
    /// Destination path relative to the project root.
    pub fn path(&self) -> &str {
        match self {
            Self::Directory(path) => path,
            Self::Copy { dest, .. } | Self::Write { dest, .. } => dest,
        }
    }

    fn copy(template: &str, dest: &str) -> Result<Self> {
        if !templates::has_template(template) {
            return Err(NgseedError::MissingTemplate {
                name: template.to_string(),
            });
        }
        Ok(Self::Copy {
            template: template.to_string(),
            dest: dest.to_string(),
        })
    }

    fn render(template: &str, dest: &str, selection: &SelectionState) -> Result<Self> {
        Ok(Self::Write {
            dest: dest.to_string(),
            contents: render_template(template, selection)?,
        })
    }
}

/// Every operation of a generation run, in application order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    operations: Vec<Operation>,
}

impl GenerationPlan {
    /// Build the plan for a selection.
    pub fn build(selection: &SelectionState) -> Result<Self> {
        let mut operations: Vec<Operation> = DIRECTORIES
            .iter()
            .map(|d| Operation::Directory(d.to_string()))
            .collect();

        operations.push(Operation::render(GRUNTFILE_TEMPLATE, "Gruntfile.js", selection)?);
        operations.push(Operation::render(PACKAGE_JSON_TEMPLATE, "package.json", selection)?);
        operations.push(Operation::render(BOWER_JSON_TEMPLATE, "bower.json", selection)?);
        for (template, dest) in ROOT_COPIES {
            operations.push(Operation::copy(template, dest)?);
        }

        for (template, dest) in APP_COPIES {
            operations.push(Operation::copy(template, dest)?);
        }
        operations.push(Operation::render(html::INDEX_TEMPLATE, "app/index.html", selection)?);
        operations.push(Operation::render(
            html::HOME_PARTIAL_TEMPLATE,
            "app/partials/home.html",
            selection,
        )?);

        let sheet = stylesheet::resolve(selection)?;
        operations.push(Operation::Write {
            dest: format!("app/styles/{}", sheet.file_name),
            contents: sheet.contents,
        });
        if sheet.needs_mixins_partial {
            operations.push(Operation::copy(
                stylesheet::MIXINS_TEMPLATE,
                "app/styles/_custom_mixins.scss",
            )?);
        }

        operations.push(Operation::render(MAIN_JS_TEMPLATE, "app/scripts/main.js", selection)?);
        for name in FIRST_PARTY_SCRIPTS {
            operations.push(Operation::copy(
                &format!("scripts/{}.js", name),
                &format!("app/scripts/{}/{}.js", name, name),
            )?);
        }

        operations.push(Operation::render(
            TEST_MAIN_JS_TEMPLATE,
            "test/test-main.js",
            selection,
        )?);

        tracing::debug!(operations = operations.len(), "Built generation plan");
        Ok(Self { operations })
    }

    /// Operations in application order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Destination paths of every copied or written file.
    pub fn files(&self) -> Vec<&str> {
        self.operations
            .iter()
            .filter(|op| !matches!(op, Operation::Directory(_)))
            .map(Operation::path)
            .collect()
    }

    /// Find the operation for a destination path.
    pub fn get(&self, path: &str) -> Option<&Operation> {
        self.operations.iter().find(|op| op.path() == path)
    }

    /// Apply every operation through a scaffolder.
    ///
    /// Stops at the first failing operation. Files already written stay.
    pub fn apply(&self, scaffolder: &mut dyn Scaffolder, ui: &mut dyn UserInterface) -> Result<()> {
        for op in &self.operations {
            match op {
                Operation::Directory(path) => scaffolder.make_directory(path)?,
                Operation::Copy { template, dest } => {
                    scaffolder.copy_literal(template, dest)?;
                    ui.message(&format!("   create {}", dest));
                }
                Operation::Write { dest, contents } => {
                    scaffolder.write_text(dest, contents)?;
                    ui.message(&format!("   create {}", dest));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::{Recorded, RecordingScaffolder};
    use crate::selection::{CssFramework, JsLibrary, TestFramework};
    use crate::ui::MockUI;

    const EXPECTED_FILES: [&str; 20] = [
        "Gruntfile.js",
        "package.json",
        "bower.json",
        ".bowerrc",
        ".editorconfig",
        ".jshintrc",
        "app/favicon.ico",
        "app/404.html",
        "app/robots.txt",
        "app/.htaccess",
        "app/index.html",
        "app/partials/home.html",
        "app/styles/style.scss",
        "app/styles/_custom_mixins.scss",
        "app/scripts/main.js",
        "app/scripts/controllers/controllers.js",
        "app/scripts/directives/directives.js",
        "app/scripts/filters/filters.js",
        "app/scripts/services/services.js",
        "test/test-main.js",
    ];

    #[test]
    fn sass_plan_covers_every_file() {
        let selection = SelectionState::new("app", CssFramework::SassBootstrap);
        let plan = GenerationPlan::build(&selection).unwrap();
        assert_eq!(plan.files(), EXPECTED_FILES.to_vec());
    }

    #[test]
    fn native_plan_writes_css_without_partial() {
        let selection = SelectionState::new("app", CssFramework::NativeBootstrap);
        let plan = GenerationPlan::build(&selection).unwrap();
        let files = plan.files();
        assert!(files.contains(&"app/styles/style.css"));
        assert!(!files.contains(&"app/styles/style.scss"));
        assert!(!files.contains(&"app/styles/_custom_mixins.scss"));
    }

    #[test]
    fn directories_come_first() {
        let selection = SelectionState::new("app", CssFramework::Compass);
        let plan = GenerationPlan::build(&selection).unwrap();
        let leading: Vec<&str> = plan
            .operations()
            .iter()
            .take_while(|op| matches!(op, Operation::Directory(_)))
            .map(Operation::path)
            .collect();
        assert_eq!(leading, DIRECTORIES.to_vec());
    }

    #[test]
    fn test_main_written_for_both_frameworks() {
        for framework in [TestFramework::Mocha, TestFramework::Jasmine] {
            let selection =
                SelectionState::new("app", CssFramework::Compass).with_test_framework(framework);
            let plan = GenerationPlan::build(&selection).unwrap();
            assert!(plan.get("test/test-main.js").is_some());
        }
    }

    #[test]
    fn build_is_deterministic() {
        let selection = SelectionState::new("app", CssFramework::SassBootstrap)
            .with_library(JsLibrary::AngularAnimate)
            .with_library(JsLibrary::Modernizr);
        assert_eq!(
            GenerationPlan::build(&selection).unwrap(),
            GenerationPlan::build(&selection).unwrap()
        );
    }

    #[test]
    fn apply_replays_operations_and_reports_files() {
        let selection = SelectionState::new("app", CssFramework::NativeBootstrap);
        let plan = GenerationPlan::build(&selection).unwrap();
        let mut scaffolder = RecordingScaffolder::new();
        let mut ui = MockUI::new();

        plan.apply(&mut scaffolder, &mut ui).unwrap();

        assert_eq!(scaffolder.files(), plan.files());
        assert!(scaffolder
            .operations()
            .contains(&Recorded::Directory("app/scripts/vendor".to_string())));
        assert!(ui.has_message("create app/styles/style.css"));
        assert!(!ui.has_message("create app/images"));
    }

    #[test]
    fn apply_writes_rendered_main_js() {
        let selection =
            SelectionState::new("app", CssFramework::SassBootstrap).with_library(JsLibrary::Underscore);
        let plan = GenerationPlan::build(&selection).unwrap();
        let mut scaffolder = RecordingScaffolder::new();
        let mut ui = MockUI::new();

        plan.apply(&mut scaffolder, &mut ui).unwrap();

        let main_js = scaffolder.written("app/scripts/main.js").unwrap();
        assert!(main_js.contains("'underscore': { exports: '_' }"));
        assert!(main_js.contains("'bootstrap': ['jquery']"));
    }
}
