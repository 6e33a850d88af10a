//! New command implementation.
//!
//! The `ngseed new` command asks for the selections, writes the seed
//! project, and installs its dependencies.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::NewArgs;
use crate::config::Answers;
use crate::error::{NgseedError, Result};
use crate::install::{self, InstallOptions, Installer, ShellInstaller};
use crate::resolver::{GenerationPlan, Operation};
use crate::scaffold::FsScaffolder;
use crate::selection::questions::{ask_css_framework, ask_js_files};
use crate::selection::{app_name_from_dir, SelectionState, TestFramework};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// File whose presence marks an existing project.
const PROJECT_MARKER: &str = "package.json";

/// The new command implementation.
pub struct NewCommand {
    working_dir: PathBuf,
    args: NewArgs,
}

impl NewCommand {
    /// Create a new command resolving `DIR` against `working_dir`.
    pub fn new(working_dir: &Path, args: NewArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &NewArgs {
        &self.args
    }

    /// Directory the project is written to.
    pub fn destination(&self) -> PathBuf {
        match &self.args.directory {
            Some(dir) => self.working_dir.join(dir),
            None => self.working_dir.clone(),
        }
    }

    fn app_name(&self, destination: &Path) -> String {
        let dir_name = destination
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        app_name_from_dir(dir_name)
    }

    /// Answers given up front: the answers file, then command-line flags.
    fn preset_answers(&self) -> Result<Answers> {
        let from_file = match &self.args.answers {
            Some(path) => Answers::load(&self.working_dir.join(path))?,
            None => Answers::default(),
        };

        let from_flags = Answers {
            css_framework: self.args.css_framework.clone(),
            js_files: self.args.libraries.clone(),
            test_framework: self.args.test_framework.clone(),
        };

        Ok(from_file.overridden_by(from_flags))
    }

    /// Collect every selection, prompting only for what is still open.
    pub fn collect_selection(
        &self,
        app_name: &str,
        ui: &mut dyn UserInterface,
    ) -> Result<SelectionState> {
        let answers = self.preset_answers()?;

        let css_framework = match answers.css_framework {
            Some(value) => value,
            None => ask_css_framework(ui)?,
        };
        let js_files = match answers.js_files {
            Some(values) => values,
            None => ask_js_files(ui)?,
        };
        let test_framework = match answers.test_framework {
            Some(name) => name.parse()?,
            None => TestFramework::default(),
        };

        SelectionState::from_answers(app_name, &css_framework, &js_files, test_framework)
    }

    /// Generate the project, using `installer` for the install step.
    pub fn run(
        &self,
        ui: &mut dyn UserInterface,
        installer: &mut dyn Installer,
    ) -> Result<CommandResult> {
        let destination = self.destination();

        if destination.join(PROJECT_MARKER).exists() && !self.args.force {
            return Err(NgseedError::DestinationNotEmpty { path: destination });
        }

        let app_name = self.app_name(&destination);
        ui.show_header(&format!("AngularJS + RequireJS: {}", app_name));

        let selection = self.collect_selection(&app_name, ui)?;
        let plan = GenerationPlan::build(&selection)?;

        if self.args.dry_run {
            for op in plan.operations() {
                if !matches!(op, Operation::Directory(_)) {
                    ui.message(&format!("   create {}", op.path()));
                }
            }
            ui.success(&format!(
                "Dry run: {} files would be written to {}",
                plan.files().len(),
                destination.display()
            ));
            return Ok(CommandResult::success());
        }

        fs::create_dir_all(&destination)?;
        let mut scaffolder = FsScaffolder::new(&destination);
        plan.apply(&mut scaffolder, ui)?;
        ui.success(&format!(
            "Created {} files in {}",
            plan.files().len(),
            destination.display()
        ));

        let options = InstallOptions {
            skip_install: self.args.skip_install,
            skip_message: self.args.skip_install_message,
        };
        install::run(installer, &destination, options, ui);

        if let Some(dir) = &self.args.directory {
            if !self.args.skip_install_message {
                ui.show_hint(&format!("cd {} && grunt server", dir.display()));
            }
        }

        Ok(CommandResult::success())
    }
}

impl Command for NewCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.run(ui, &mut ShellInstaller::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::install::InstallReport;
    use crate::selection::questions::{CSS_FRAMEWORK_KEY, JS_FILES_KEY};
    use crate::selection::CssFramework;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    struct CountingInstaller {
        calls: usize,
    }

    impl Installer for CountingInstaller {
        fn install_dependencies(
            &mut self,
            _root: &Path,
            _ui: &mut dyn UserInterface,
        ) -> InstallReport {
            self.calls += 1;
            InstallReport::default()
        }
    }

    fn args(dir: &str) -> NewArgs {
        NewArgs {
            directory: Some(PathBuf::from(dir)),
            skip_install: true,
            ..NewArgs::default()
        }
    }

    fn run(temp: &TempDir, args: NewArgs, ui: &mut MockUI) -> Result<CommandResult> {
        let cmd = NewCommand::new(temp.path(), args);
        cmd.run(ui, &mut CountingInstaller { calls: 0 })
    }

    #[test]
    fn sass_bootstrap_with_underscore() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        ui.set_prompt_response(CSS_FRAMEWORK_KEY, "SASSBootstrap");
        ui.set_prompt_response(JS_FILES_KEY, "includeUnderscore");

        let result = run(&temp, args("my_app"), &mut ui).unwrap();

        assert!(result.success);
        let root = temp.path().join("my_app");
        let main_js = fs::read_to_string(root.join("app/scripts/main.js")).unwrap();
        assert!(main_js.contains("'underscore': { exports: '_' }"));
        assert!(main_js.contains("'bootstrap': ['jquery']"));
        assert!(root.join("app/styles/style.scss").exists());
        assert!(root.join("app/styles/_custom_mixins.scss").exists());
        assert!(root.join("app/scripts/vendor").is_dir());

        let package_json = fs::read_to_string(root.join("package.json")).unwrap();
        assert!(package_json.contains("\"name\": \"my-app\""));
        assert!(package_json.contains("karma-mocha"));
    }

    #[test]
    fn native_bootstrap_writes_plain_css() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        ui.set_prompt_response(CSS_FRAMEWORK_KEY, "NativeBootstrap");
        ui.set_prompt_response(JS_FILES_KEY, "");

        run(&temp, args("site"), &mut ui).unwrap();

        let root = temp.path().join("site");
        assert!(root.join("app/styles/style.css").exists());
        assert!(!root.join("app/styles/_custom_mixins.scss").exists());
        let main_js = fs::read_to_string(root.join("app/scripts/main.js")).unwrap();
        assert!(!main_js.contains("underscore"));
    }

    #[test]
    fn jasmine_checkbox_selects_jasmine() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        ui.set_prompt_response(CSS_FRAMEWORK_KEY, "CompassFramework");
        ui.set_prompt_response(JS_FILES_KEY, "includeLodash,includeJasmine");

        run(&temp, args("site"), &mut ui).unwrap();

        let package_json = fs::read_to_string(temp.path().join("site/package.json")).unwrap();
        assert!(package_json.contains("karma-jasmine"));
        assert!(!package_json.contains("karma-mocha"));
    }

    #[test]
    fn unknown_css_framework_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let mut new_args = args("site");
        new_args.css_framework = Some("Foundation".to_string());
        new_args.libraries = Some(Vec::new());

        let err = run(&temp, new_args, &mut ui).unwrap_err();

        assert!(matches!(err, NgseedError::UnknownCssFramework { .. }));
        assert!(!temp.path().join("site").exists());
    }

    #[test]
    fn flags_skip_prompts() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let mut new_args = args("site");
        new_args.css_framework = Some("CompassFramework".to_string());
        new_args.libraries = Some(vec!["includeModernizr".to_string()]);

        run(&temp, new_args, &mut ui).unwrap();

        assert!(ui.prompts_shown().is_empty());
        let bower = fs::read_to_string(temp.path().join("site/bower.json")).unwrap();
        assert!(bower.contains("modernizr"));
    }

    #[test]
    fn answers_file_fills_questions() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("answers.yml"),
            "css_framework: NativeBootstrap\njs_files: [includeBindonce]\ntest_framework: jasmine\n",
        )
        .unwrap();
        let mut ui = MockUI::new();
        let mut new_args = args("site");
        new_args.answers = Some(PathBuf::from("answers.yml"));

        run(&temp, new_args, &mut ui).unwrap();

        assert!(ui.prompts_shown().is_empty());
        let root = temp.path().join("site");
        let main_js = fs::read_to_string(root.join("app/scripts/main.js")).unwrap();
        assert!(main_js.contains("pasvaz.bindonce"));
        let package_json = fs::read_to_string(root.join("package.json")).unwrap();
        assert!(package_json.contains("karma-jasmine"));
    }

    #[test]
    fn flags_override_answers_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("answers.yml"), "css_framework: NativeBootstrap\n").unwrap();
        let mut ui = MockUI::new();
        let mut new_args = args("site");
        new_args.answers = Some(PathBuf::from("answers.yml"));
        new_args.css_framework = Some("CompassFramework".to_string());

        let cmd = NewCommand::new(temp.path(), new_args);
        let selection = cmd.collect_selection("site", &mut ui).unwrap();

        assert_eq!(selection.css_framework(), CssFramework::Compass);
        assert_eq!(ui.prompts_shown(), &[JS_FILES_KEY.to_string()]);
    }

    #[test]
    fn prompts_in_order() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let cmd = NewCommand::new(temp.path(), args("site"));
        cmd.collect_selection("site", &mut ui).unwrap();

        assert_eq!(
            ui.prompts_shown(),
            &[CSS_FRAMEWORK_KEY.to_string(), JS_FILES_KEY.to_string()]
        );
    }

    #[test]
    fn existing_project_requires_force() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("site");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("package.json"), "{}").unwrap();
        let mut ui = MockUI::new();

        let err = run(&temp, args("site"), &mut ui).unwrap_err();
        assert!(matches!(err, NgseedError::DestinationNotEmpty { .. }));
        assert_eq!(fs::read_to_string(root.join("package.json")).unwrap(), "{}");

        let mut forced = args("site");
        forced.force = true;
        run(&temp, forced, &mut ui).unwrap();
        assert_ne!(fs::read_to_string(root.join("package.json")).unwrap(), "{}");
    }

    #[test]
    fn dry_run_lists_files_without_writing() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let mut new_args = args("site");
        new_args.dry_run = true;

        let result = run(&temp, new_args, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("create app/scripts/main.js"));
        assert!(ui.has_success("Dry run"));
        assert!(!temp.path().join("site").exists());
    }

    #[test]
    fn skip_install_shows_manual_hint() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let cmd = NewCommand::new(temp.path(), args("site"));
        let mut installer = CountingInstaller { calls: 0 };

        cmd.run(&mut ui, &mut installer).unwrap();

        assert_eq!(installer.calls, 0);
        assert!(ui.has_hint("npm install && bower install"));
        assert!(ui.has_hint("grunt server"));
    }

    #[test]
    fn install_runs_once_after_generation() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let mut new_args = args("site");
        new_args.skip_install = false;
        let cmd = NewCommand::new(temp.path(), new_args);
        let mut installer = CountingInstaller { calls: 0 };

        cmd.run(&mut ui, &mut installer).unwrap();

        assert_eq!(installer.calls, 1);
        assert!(temp.path().join("site/Gruntfile.js").exists());
    }

    #[test]
    fn without_directory_uses_working_dir_name() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("Shop Front");
        fs::create_dir_all(&root).unwrap();
        let mut ui = MockUI::new();
        let new_args = NewArgs {
            skip_install: true,
            ..NewArgs::default()
        };

        NewCommand::new(&root, new_args)
            .run(&mut ui, &mut CountingInstaller { calls: 0 })
            .unwrap();

        let bower = fs::read_to_string(root.join("bower.json")).unwrap();
        assert!(bower.contains("\"name\": \"shop-front\""));
    }
}
