//! The two questions asked before generation.

use crate::error::Result;
use crate::ui::{Prompt, PromptOption, PromptResult, PromptType, UserInterface};

use super::{CssFramework, JsLibrary, JASMINE_VALUE};

/// Prompt key of the CSS framework question.
pub const CSS_FRAMEWORK_KEY: &str = "css_framework";

/// Prompt key of the utility libraries question.
pub const JS_FILES_KEY: &str = "js_files";

/// Single-select question for the CSS framework.
pub fn css_framework_prompt() -> Prompt {
    let options = CssFramework::ALL
        .iter()
        .map(|f| PromptOption {
            label: f.label().to_string(),
            value: f.value().to_string(),
        })
        .collect();

    Prompt {
        key: CSS_FRAMEWORK_KEY.to_string(),
        question: "What CSS framework would you like to include?".to_string(),
        prompt_type: PromptType::Select { options },
        default: Some(CssFramework::SassBootstrap.value().to_string()),
    }
}

/// Multi-select question for the optional libraries.
pub fn js_files_prompt() -> Prompt {
    let mut options: Vec<PromptOption> = JsLibrary::ALL
        .iter()
        .map(|l| PromptOption {
            label: l.label().to_string(),
            value: l.value().to_string(),
        })
        .collect();
    options.push(PromptOption {
        label: "Jasmine Testing framework".to_string(),
        value: JASMINE_VALUE.to_string(),
    });

    let defaults = JsLibrary::ALL
        .iter()
        .filter(|l| l.checked_by_default())
        .map(|l| l.value())
        .chain(std::iter::once(JASMINE_VALUE))
        .collect::<Vec<_>>()
        .join(",");

    Prompt {
        key: JS_FILES_KEY.to_string(),
        question: "What utils would you like to include?".to_string(),
        prompt_type: PromptType::MultiSelect { options },
        default: Some(defaults),
    }
}

/// Ask for the CSS framework and return the raw answer value.
pub fn ask_css_framework(ui: &mut dyn UserInterface) -> Result<String> {
    let answer = ui.prompt(&css_framework_prompt())?;
    Ok(answer.as_string())
}

/// Ask for the optional libraries and return the raw answer values.
pub fn ask_js_files(ui: &mut dyn UserInterface) -> Result<Vec<String>> {
    match ui.prompt(&js_files_prompt())? {
        PromptResult::Strings(values) => Ok(values),
        other => Ok(other
            .as_string()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()),
    }
}
