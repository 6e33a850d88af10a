//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::NgseedTheme;
use super::SpinnerHandle;

/// A progress spinner for long-running operations such as installs.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: NgseedTheme,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str, theme: NgseedTheme) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(spinner_style());
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar, theme }
    }

    /// Create a spinner that doesn't show (for silent mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme: NgseedTheme::plain(),
        }
    }

    fn finish_with(&mut self, line: String) {
        self.bar.set_style(finished_style());
        self.bar.finish_with_message(line);
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn finished_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.finish_with(line);
    }

    fn finish_error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        self.finish_with(line);
    }

    fn finish_skipped(&mut self, msg: &str) {
        let line = self.theme.format_skipped(msg);
        self.finish_with(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_spinner_finishes() {
        let mut spinner = ProgressSpinner::hidden();
        spinner.set_message("npm install");
        spinner.finish_success("Installed");
        assert!(spinner.bar.is_finished());
    }

    #[test]
    fn finish_error_keeps_message() {
        let mut spinner = ProgressSpinner::hidden();
        spinner.finish_error("bower install failed");
        assert_eq!(spinner.bar.message(), "✗ bower install failed");
    }

    #[test]
    fn visible_spinner_creation() {
        let mut spinner = ProgressSpinner::new("Installing...", NgseedTheme::plain());
        spinner.finish_skipped("Skipped");
    }
}
