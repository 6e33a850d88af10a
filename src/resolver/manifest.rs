//! npm and Bower manifests.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{NgseedError, Result};
use crate::selection::{CssFramework, SelectionState};

use super::gruntfile;
use super::modules::{ModuleSet, Package, TEST_HARNESS_MODULE};

/// Version written into both manifests.
pub const INITIAL_VERSION: &str = "0.0.0";

/// Tooling installed regardless of the selection.
const BASE_DEV_DEPENDENCIES: [(&str, &str); 5] = [
    ("grunt", "~0.4.5"),
    ("karma", "~0.12.16"),
    ("karma-phantomjs-launcher", "~0.1.4"),
    ("karma-requirejs", "~0.2.2"),
    ("requirejs", "~2.1.14"),
];

/// Karma adapter versions.
const KARMA_ADAPTER_VERSION: &str = "~0.1.5";

/// `package.json` contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub private: bool,
    pub dev_dependencies: BTreeMap<String, String>,
    pub engines: BTreeMap<String, String>,
    pub scripts: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Build the manifest for a selection.
    pub fn for_selection(selection: &SelectionState) -> Self {
        let mut dev_dependencies: BTreeMap<String, String> = BASE_DEV_DEPENDENCIES
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect();

        for plugin in gruntfile::plugins(selection) {
            dev_dependencies.insert(plugin.package.to_string(), plugin.version.to_string());
        }

        dev_dependencies.insert(
            selection.test_framework().karma_adapter().to_string(),
            KARMA_ADAPTER_VERSION.to_string(),
        );

        let engines = BTreeMap::from([("node".to_string(), ">=0.10.0".to_string())]);
        let scripts = BTreeMap::from([("test".to_string(), "grunt test".to_string())]);

        Self {
            name: selection.app_name().to_string(),
            version: INITIAL_VERSION.to_string(),
            private: true,
            dev_dependencies,
            engines,
            scripts,
        }
    }
}

/// `bower.json` contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BowerManifest {
    pub name: String,
    pub version: String,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
}

/// The Bower package behind the CSS framework.
pub fn css_framework_package(css: CssFramework) -> Option<Package> {
    match css {
        CssFramework::SassBootstrap => Some(Package {
            name: "sass-bootstrap",
            version: "~3.0.2",
        }),
        CssFramework::NativeBootstrap => Some(Package {
            name: "bootstrap",
            version: "~3.1.1",
        }),
        CssFramework::Compass => None,
    }
}

/// The module loader itself.
pub const REQUIREJS_PACKAGE: Package = Package {
    name: "requirejs",
    version: "~2.1.14",
};

impl BowerManifest {
    /// Build the manifest for a selection.
    pub fn for_selection(selection: &SelectionState) -> Self {
        let modules = ModuleSet::resolve(selection);

        let dependencies = modules
            .packages()
            .chain(std::iter::once(REQUIREJS_PACKAGE))
            .chain(css_framework_package(selection.css_framework()))
            .map(|p| (p.name.to_string(), p.version.to_string()))
            .collect();

        let dev_dependencies = TEST_HARNESS_MODULE
            .package
            .into_iter()
            .map(|p| (p.name.to_string(), p.version.to_string()))
            .collect();

        Self {
            name: selection.app_name().to_string(),
            version: INITIAL_VERSION.to_string(),
            dependencies,
            dev_dependencies,
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).map_err(|e| NgseedError::Other(e.into()))?;
    json.push('\n');
    Ok(json)
}

/// Render `package.json`.
pub fn render_package_json(selection: &SelectionState) -> Result<String> {
    to_json(&PackageManifest::for_selection(selection))
}

/// Render `bower.json`.
pub fn render_bower_json(selection: &SelectionState) -> Result<String> {
    to_json(&BowerManifest::for_selection(selection))
}
