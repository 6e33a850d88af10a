//! Installer backed by shell commands.

use std::path::Path;

use crate::shell::{execute, CommandOptions};
use crate::ui::UserInterface;

use super::{InstallReport, Installer, INSTALL_COMMANDS};

/// Lines of failing command output echoed back to the user.
const FAILURE_TAIL_LINES: usize = 10;

/// Runs `npm install` and `bower install` through the user's shell.
#[derive(Debug, Clone)]
pub struct ShellInstaller {
    commands: Vec<String>,
}

impl Default for ShellInstaller {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellInstaller {
    pub fn new() -> Self {
        Self::with_commands(INSTALL_COMMANDS.iter().map(|c| c.to_string()).collect())
    }

    /// Run a custom command list instead.
    pub fn with_commands(commands: Vec<String>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }
}

impl Installer for ShellInstaller {
    fn install_dependencies(&mut self, root: &Path, ui: &mut dyn UserInterface) -> InstallReport {
        let mut report = InstallReport::default();
        // Verbose output streams the installers directly, so no spinner.
        let streaming = ui.output_mode().shows_command_output();

        for command in &self.commands {
            let options = CommandOptions {
                capture_stdout: !streaming,
                capture_stderr: !streaming,
                ..CommandOptions::captured(root)
            };

            let mut spinner = if streaming {
                ui.message(&format!("Running {}", command));
                None
            } else {
                Some(ui.start_spinner(&format!("Running {}...", command)))
            };

            let mut tail = String::new();
            let outcome = match execute(command, &options) {
                Ok(result) if result.success => Ok(format!(
                    "{} ({:.1}s)",
                    command,
                    result.duration.as_secs_f64()
                )),
                Ok(result) => {
                    tail = result.output_tail(FAILURE_TAIL_LINES);
                    Err(format!("{} exited with {:?}", command, result.exit_code))
                }
                Err(e) => Err(e.to_string()),
            };

            match (outcome, spinner.as_mut()) {
                (Ok(msg), Some(spinner)) => spinner.finish_success(&msg),
                (Ok(msg), None) => ui.success(&msg),
                (Err(msg), spinner) => {
                    match spinner {
                        Some(spinner) => spinner.finish_error(&msg),
                        None => ui.warning(&msg),
                    }
                    if !tail.is_empty() {
                        ui.message(&tail);
                    }
                    report.failed.push(command.clone());
                }
            }
        }

        report
    }
}
