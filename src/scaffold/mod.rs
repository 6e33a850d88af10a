//! Writing generated files.
//!
//! - [`Scaffolder`] - the file operations a generation plan needs
//! - [`FsScaffolder`] - writes into a destination directory
//! - [`RecordingScaffolder`] - records operations without touching disk

pub mod fs;
pub mod recording;

pub use fs::FsScaffolder;
pub use recording::{Recorded, RecordingScaffolder};

use crate::error::Result;
use crate::resolver;
use crate::selection::SelectionState;

/// File operations relative to a project root.
///
/// Paths use `/` separators and are relative to the root the implementation
/// writes into.
pub trait Scaffolder {
    /// Copy an embedded template verbatim.
    fn copy_literal(&mut self, template: &str, dest: &str) -> Result<()>;

    /// Write text to a file, replacing any previous contents.
    fn write_text(&mut self, dest: &str, contents: &str) -> Result<()>;

    /// Create a directory and any missing parents.
    fn make_directory(&mut self, path: &str) -> Result<()>;

    /// Resolve a conditional template for a selection and write it.
    ///
    /// For writing a single file. A [`GenerationPlan`](crate::resolver::GenerationPlan)
    /// renders every template before its first write and applies the text
    /// with [`write_text`](Scaffolder::write_text) instead.
    fn render_template(
        &mut self,
        template: &str,
        dest: &str,
        selection: &SelectionState,
    ) -> Result<()> {
        let contents = resolver::render_template(template, selection)?;
        self.write_text(dest, &contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{GenerationPlan, Operation};
    use crate::selection::{CssFramework, JsLibrary};

    #[test]
    fn render_template_writes_resolved_text() {
        let selection = SelectionState::new("dashboard", CssFramework::NativeBootstrap);
        let mut scaffolder = RecordingScaffolder::new();

        scaffolder
            .render_template("index.html", "app/index.html", &selection)
            .unwrap();

        let written = scaffolder.written("app/index.html").unwrap();
        assert!(written.contains("<title>dashboard</title>"));
    }

    #[test]
    fn render_template_matches_plan_output() {
        let selection = SelectionState::new("dashboard", CssFramework::SassBootstrap)
            .with_library(JsLibrary::Lodash);
        let plan = GenerationPlan::build(&selection).unwrap();
        let mut scaffolder = RecordingScaffolder::new();

        scaffolder
            .render_template("scripts/main.js", "app/scripts/main.js", &selection)
            .unwrap();

        let Some(Operation::Write { contents, .. }) = plan.get("app/scripts/main.js") else {
            panic!("main.js should be rendered");
        };
        assert_eq!(scaffolder.written("app/scripts/main.js"), Some(contents.as_str()));
    }

    #[test]
    fn render_template_unknown_name_writes_nothing() {
        let selection = SelectionState::new("dashboard", CssFramework::NativeBootstrap);
        let mut scaffolder = RecordingScaffolder::new();

        assert!(scaffolder
            .render_template("missing.txt", "missing.txt", &selection)
            .is_err());
        assert!(scaffolder.operations().is_empty());
    }
}
