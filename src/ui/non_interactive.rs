//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{NgseedError, Result};

use super::theme::NgseedTheme;
use super::{OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

/// Prefix of environment variables that answer prompts.
pub const PROMPT_ENV_PREFIX: &str = "NGSEED_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `NGSEED_PROMPT_<KEY>` environment variables,
/// falling back to each prompt's default.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

fn split_values(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_details() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let is_multiselect = matches!(prompt.prompt_type, PromptType::MultiSelect { .. });

        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        let answer = self
            .env_overrides
            .get(&env_key)
            .or(prompt.default.as_ref());

        match answer {
            Some(value) if is_multiselect => Ok(PromptResult::Strings(split_values(value))),
            Some(value) => Ok(PromptResult::String(value.clone())),
            None => Err(NgseedError::ConfigValidationError {
                message: format!(
                    "Cannot prompt for '{}' in non-interactive mode (no default value)",
                    prompt.key
                ),
            }),
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner {
            mode: self.mode,
            theme: NgseedTheme::plain(),
        })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            println!("  {}", hint);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that prints only its final line.
struct NoopSpinner {
    mode: OutputMode,
    theme: NgseedTheme,
}

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_spinners() {
            println!("  {}", self.theme.format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("  {}", self.theme.format_error(msg));
    }

    fn finish_skipped(&mut self, msg: &str) {
        if self.mode.shows_spinners() {
            println!("  {}", self.theme.format_skipped(msg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select_prompt(key: &str, default: Option<&str>) -> Prompt {
        Prompt {
            key: key.to_string(),
            question: "Pick one".to_string(),
            prompt_type: PromptType::Select { options: vec![] },
            default: default.map(String::from),
        }
    }

    fn multi_prompt(key: &str, default: Option<&str>) -> Prompt {
        Prompt {
            key: key.to_string(),
            question: "Pick some".to_string(),
            prompt_type: PromptType::MultiSelect { options: vec![] },
            default: default.map(String::from),
        }
    }

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        assert!(!ui.is_interactive());
    }

    #[test]
    fn prompt_uses_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let result = ui
            .prompt(&select_prompt("css_framework", Some("SASSBootstrap")))
            .unwrap();
        assert_eq!(result.as_string(), "SASSBootstrap");
    }

    #[test]
    fn prompt_fails_without_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let err = ui.prompt(&select_prompt("css_framework", None)).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn prompt_uses_env_override() {
        let overrides = HashMap::from([(
            "NGSEED_PROMPT_CSS_FRAMEWORK".to_string(),
            "CompassFramework".to_string(),
        )]);
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        let result = ui
            .prompt(&select_prompt("css_framework", Some("SASSBootstrap")))
            .unwrap();
        assert_eq!(result.as_string(), "CompassFramework");
    }

    #[test]
    fn multiselect_prompt_uses_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let result = ui
            .prompt(&multi_prompt("js_files", Some("includeUnderscore,includeJasmine")))
            .unwrap();
        assert!(matches!(result, PromptResult::Strings(ref v) if v.len() == 2));
    }

    #[test]
    fn multiselect_empty_override_selects_nothing() {
        let overrides = HashMap::from([("NGSEED_PROMPT_JS_FILES".to_string(), String::new())]);
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        let result = ui
            .prompt(&multi_prompt("js_files", Some("includeUnderscore")))
            .unwrap();
        assert!(matches!(result, PromptResult::Strings(ref v) if v.is_empty()));
    }

    #[test]
    fn output_mode_preserved() {
        let ui = NonInteractiveUI::with_overrides(OutputMode::Quiet, HashMap::new());
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
