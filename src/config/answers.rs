//! Answers files.
//!
//! An answers file pre-fills the generator's questions so a project can be
//! scaffolded without prompts:
//!
//! ```yaml
//! css_framework: SASSBootstrap
//! js_files: [includeUnderscore, includeUIBootstrap]
//! test_framework: jasmine
//! ```
//!
//! Any question left out is asked as usual.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NgseedError, Result};

/// Pre-filled answers to the generator's questions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Answers {
    /// Raw CSS framework value (e.g. `SASSBootstrap`).
    pub css_framework: Option<String>,

    /// Raw utility values (e.g. `includeUnderscore`).
    pub js_files: Option<Vec<String>>,

    /// Test framework name (`mocha` or `jasmine`).
    pub test_framework: Option<String>,
}

impl Answers {
    /// Load answers from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| NgseedError::AnswersParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&content, path)
    }

    /// Parse answers from YAML content.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let answers: Self =
            serde_yaml::from_str(content).map_err(|e| NgseedError::AnswersParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        tracing::debug!(path = %path.display(), ?answers, "Loaded answers file");
        Ok(answers)
    }

    /// Layer `overrides` on top of these answers; set fields win.
    pub fn overridden_by(self, overrides: Answers) -> Answers {
        Answers {
            css_framework: overrides.css_framework.or(self.css_framework),
            js_files: overrides.js_files.or(self.js_files),
            test_framework: overrides.test_framework.or(self.test_framework),
        }
    }
}
