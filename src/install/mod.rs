//! Dependency installation.
//!
//! After every file is written, `npm install` and `bower install` run once
//! each in the new project. Failures are reported as warnings; the project
//! itself is already complete by then. Once installation finishes the
//! RequireJS loader is copied into `app/scripts/vendor` (see [`vendor`]).

pub mod command;
pub mod vendor;

pub use command::ShellInstaller;
pub use vendor::{copy_vendor_require, VendorCopy};

use std::path::Path;

use crate::ui::UserInterface;

/// Commands that install the generated project's dependencies, in order.
pub const INSTALL_COMMANDS: [&str; 2] = ["npm install", "bower install"];

/// Options controlling the install step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallOptions {
    /// Do not run any installer.
    pub skip_install: bool,
    /// Do not print the install banner or the manual-install hint.
    pub skip_message: bool,
}

/// Outcome of one installer run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Commands that did not succeed.
    pub failed: Vec<String>,
}

impl InstallReport {
    pub fn succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Installs the dependencies of a generated project.
pub trait Installer {
    /// Run every install command once in `root`.
    fn install_dependencies(&mut self, root: &Path, ui: &mut dyn UserInterface) -> InstallReport;
}

/// What the install step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStatus {
    /// `--skip-install` was given.
    Skipped,
    /// Installers ran.
    Ran {
        report: InstallReport,
        vendor: VendorCopy,
    },
}

/// Run the install step for a project at `root`.
pub fn run(
    installer: &mut dyn Installer,
    root: &Path,
    options: InstallOptions,
    ui: &mut dyn UserInterface,
) -> InstallStatus {
    if options.skip_install {
        tracing::debug!("Dependency installation skipped");
        if !options.skip_message {
            ui.show_hint(&format!(
                "Run `{}` to install the required dependencies.",
                INSTALL_COMMANDS.join(" && ")
            ));
        }
        return InstallStatus::Skipped;
    }

    if !options.skip_message {
        ui.message(&format!(
            "\nRunning {} for you to install the required dependencies. \
             If this fails, try running the commands yourself.\n",
            INSTALL_COMMANDS.join(" & ")
        ));
    }

    let report = installer.install_dependencies(root, ui);
    if !report.succeeded() {
        ui.warning(&format!(
            "Dependency installation failed ({}). The project files are complete.",
            report.failed.join(", ")
        ));
    }

    let vendor = copy_vendor_require(root);
    tracing::debug!(?vendor, "Vendor copy finished");

    InstallStatus::Ran { report, vendor }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    /// Installer that records calls and optionally drops a bower tree.
    struct FakeInstaller {
        calls: usize,
        fail: bool,
        write_require: bool,
    }

    impl FakeInstaller {
        fn new(fail: bool, write_require: bool) -> Self {
            Self {
                calls: 0,
                fail,
                write_require,
            }
        }
    }

    impl Installer for FakeInstaller {
        fn install_dependencies(
            &mut self,
            root: &Path,
            _ui: &mut dyn UserInterface,
        ) -> InstallReport {
            self.calls += 1;
            if self.write_require {
                let dir = root.join("app/bower_components/requirejs");
                fs::create_dir_all(&dir).unwrap();
                fs::write(dir.join("require.js"), "/* requirejs */").unwrap();
            }
            InstallReport {
                failed: if self.fail {
                    vec!["bower install".to_string()]
                } else {
                    Vec::new()
                },
            }
        }
    }

    #[test]
    fn skip_install_runs_nothing_and_hints() {
        let temp = TempDir::new().unwrap();
        let mut installer = FakeInstaller::new(false, true);
        let mut ui = MockUI::new();
        let options = InstallOptions {
            skip_install: true,
            skip_message: false,
        };

        let status = run(&mut installer, temp.path(), options, &mut ui);

        assert_eq!(status, InstallStatus::Skipped);
        assert_eq!(installer.calls, 0);
        assert!(ui.has_hint("npm install && bower install"));
        assert!(!temp.path().join("app/scripts/vendor/require.js").exists());
    }

    #[test]
    fn skip_message_silences_hint() {
        let temp = TempDir::new().unwrap();
        let mut installer = FakeInstaller::new(false, false);
        let mut ui = MockUI::new();
        let options = InstallOptions {
            skip_install: true,
            skip_message: true,
        };

        run(&mut installer, temp.path(), options, &mut ui);

        assert!(ui.hints().is_empty());
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn successful_install_copies_vendor_script() {
        let temp = TempDir::new().unwrap();
        let mut installer = FakeInstaller::new(false, true);
        let mut ui = MockUI::new();

        let status = run(&mut installer, temp.path(), InstallOptions::default(), &mut ui);

        assert_eq!(installer.calls, 1);
        assert_eq!(
            status,
            InstallStatus::Ran {
                report: InstallReport::default(),
                vendor: VendorCopy::Copied,
            }
        );
        assert!(ui.has_message("Running npm install & bower install"));
        let copied = fs::read_to_string(temp.path().join("app/scripts/vendor/require.js")).unwrap();
        assert_eq!(copied, "/* requirejs */");
    }

    #[test]
    fn failed_install_warns_and_still_attempts_copy() {
        let temp = TempDir::new().unwrap();
        let mut installer = FakeInstaller::new(true, false);
        let mut ui = MockUI::new();

        let status = run(&mut installer, temp.path(), InstallOptions::default(), &mut ui);

        assert!(ui.has_warning("bower install"));
        match status {
            InstallStatus::Ran { report, vendor } => {
                assert!(!report.succeeded());
                assert_eq!(vendor, VendorCopy::Skipped);
            }
            InstallStatus::Skipped => panic!("install should have run"),
        }
    }
}
