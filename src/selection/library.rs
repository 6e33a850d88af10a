//! Optional JS libraries and the test framework.

use std::fmt;
use std::str::FromStr;

use crate::error::NgseedError;

/// An optional JS library the user can add to the project.
///
/// Variants are declared in the order their module-loader entries are
/// emitted; `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JsLibrary {
    Underscore,
    UiBootstrap,
    AngularAnimate,
    Lodash,
    Bindonce,
    Modernizr,
}

impl JsLibrary {
    /// All libraries in declared order.
    pub const ALL: [JsLibrary; 6] = [
        JsLibrary::Underscore,
        JsLibrary::UiBootstrap,
        JsLibrary::AngularAnimate,
        JsLibrary::Lodash,
        JsLibrary::Bindonce,
        JsLibrary::Modernizr,
    ];

    /// Answer value stored for this library.
    pub fn value(&self) -> &'static str {
        match self {
            Self::Underscore => "includeUnderscore",
            Self::UiBootstrap => "includeUIBootstrap",
            Self::AngularAnimate => "includeAngularAnimate",
            Self::Lodash => "includeLodash",
            Self::Bindonce => "includeBindonce",
            Self::Modernizr => "includeModernizr",
        }
    }

    /// Label shown in the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Underscore => "Underscore.js",
            Self::UiBootstrap => "Angular UI-Bootstrap",
            Self::AngularAnimate => "Angular Animate",
            Self::Lodash => "Lodash",
            Self::Bindonce => "Bindonce",
            Self::Modernizr => "Modernizr",
        }
    }

    /// Whether the library is ticked when the prompt opens.
    pub fn checked_by_default(&self) -> bool {
        matches!(self, Self::Underscore | Self::UiBootstrap)
    }

    pub(crate) fn expected_values() -> String {
        Self::ALL
            .iter()
            .map(|l| l.value())
            .chain(std::iter::once(JASMINE_VALUE))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for JsLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for JsLibrary {
    type Err = NgseedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|l| l.value().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| NgseedError::UnknownLibrary {
                value: trimmed.to_string(),
                expected: Self::expected_values(),
            })
    }
}

/// Answer value of the "Jasmine Testing framework" checkbox.
pub const JASMINE_VALUE: &str = "includeJasmine";

/// Unit test framework wired into Karma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestFramework {
    #[default]
    Mocha,
    Jasmine,
}

impl TestFramework {
    /// Karma framework name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mocha => "mocha",
            Self::Jasmine => "jasmine",
        }
    }

    /// Karma adapter package.
    pub fn karma_adapter(&self) -> &'static str {
        match self {
            Self::Mocha => "karma-mocha",
            Self::Jasmine => "karma-jasmine",
        }
    }
}

impl fmt::Display for TestFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TestFramework {
    type Err = NgseedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mocha" => Ok(Self::Mocha),
            "jasmine" => Ok(Self::Jasmine),
            other => Err(NgseedError::UnknownTestFramework {
                value: other.to_string(),
            }),
        }
    }
}
