//! CSS framework choice.

use std::fmt;
use std::str::FromStr;

use crate::error::NgseedError;

/// The CSS framework the generated project is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CssFramework {
    /// Bootstrap compiled from its Sass sources.
    SassBootstrap,
    /// Precompiled Bootstrap CSS.
    NativeBootstrap,
    /// The Compass Sass framework.
    Compass,
}

impl CssFramework {
    /// All frameworks, in the order they are offered.
    pub const ALL: [CssFramework; 3] = [
        CssFramework::SassBootstrap,
        CssFramework::NativeBootstrap,
        CssFramework::Compass,
    ];

    /// Answer value stored for this framework.
    pub fn value(&self) -> &'static str {
        match self {
            Self::SassBootstrap => "SASSBootstrap",
            Self::NativeBootstrap => "NativeBootstrap",
            Self::Compass => "CompassFramework",
        }
    }

    /// Label shown in the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SassBootstrap => "SASS Bootstrap",
            Self::NativeBootstrap => "Native Bootstrap",
            Self::Compass => "SASS Compass framework",
        }
    }

    /// Whether the main stylesheet is written in Sass.
    pub fn uses_sass(&self) -> bool {
        !matches!(self, Self::NativeBootstrap)
    }

    /// Extension of the main stylesheet.
    pub fn stylesheet_extension(&self) -> &'static str {
        if self.uses_sass() {
            "scss"
        } else {
            "css"
        }
    }

    /// File name of the main stylesheet.
    pub fn stylesheet_name(&self) -> String {
        format!("style.{}", self.stylesheet_extension())
    }

    fn expected_values() -> String {
        Self::ALL
            .iter()
            .map(|f| f.value())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for CssFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for CssFramework {
    type Err = NgseedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.value().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| NgseedError::UnknownCssFramework {
                value: trimmed.to_string(),
                expected: Self::expected_values(),
            })
    }
}
