//! Module entries for the RequireJS configuration.
//!
//! The module set is derived from a [`SelectionState`] in a fixed order:
//! base entries in declaration order, then one entry per selected library in
//! declared library order, then the CSS framework's bundled script (Sass
//! Bootstrap only). Every shim dependency names a module in the same set.

use crate::selection::{CssFramework, JsLibrary, SelectionState};

/// A Bower package providing a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Package {
    pub name: &'static str,
    pub version: &'static str,
}

/// A named module reference in the loader configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleEntry {
    /// Module name used in `paths`, `shim` and `requirejs([...])`.
    pub name: &'static str,
    /// Path relative to the scripts directory, without `.js`.
    pub path: &'static str,
    /// Global the script exports, for scripts that are not AMD modules.
    pub exports: Option<&'static str>,
    /// Modules that must load first.
    pub deps: &'static [&'static str],
    /// Shim `init` function, evaluated after the script loads.
    pub init: Option<&'static str>,
    /// Angular module the script registers.
    pub ng_module: Option<&'static str>,
    /// Package that provides the script; `None` for generated modules.
    pub package: Option<Package>,
}

impl ModuleEntry {
    /// Whether the entry needs a shim declaration.
    pub fn needs_shim(&self) -> bool {
        self.exports.is_some() || self.init.is_some() || !self.deps.is_empty()
    }

    /// Whether the module is generated into the project.
    pub fn is_first_party(&self) -> bool {
        self.package.is_none()
    }
}

/// Name of the framework core module.
pub const FRAMEWORK_CORE: &str = "angular";

/// Name of the DOM helper module.
pub const DOM_HELPER: &str = "jquery";

/// Hands `window._` back to Underscore when both libraries are loaded.
const LODASH_NO_CONFLICT: &str = "function () { return this._.noConflict(); }";

const fn vendor(name: &'static str, version: &'static str) -> Option<Package> {
    Some(Package { name, version })
}

/// Always-present entries, in emission order.
pub const BASE_MODULES: [ModuleEntry; 8] = [
    ModuleEntry {
        name: FRAMEWORK_CORE,
        path: "../bower_components/angular/angular",
        exports: Some("angular"),
        deps: &[DOM_HELPER],
        init: None,
        ng_module: None,
        package: vendor("angular", "~1.2.16"),
    },
    ModuleEntry {
        name: DOM_HELPER,
        path: "../bower_components/jquery/dist/jquery",
        exports: None,
        deps: &[],
        init: None,
        ng_module: None,
        package: vendor("jquery", "~2.1.0"),
    },
    ModuleEntry {
        name: "angular-resource",
        path: "../bower_components/angular-resource/angular-resource",
        exports: None,
        deps: &[FRAMEWORK_CORE],
        init: None,
        ng_module: Some("ngResource"),
        package: vendor("angular-resource", "~1.2.16"),
    },
    ModuleEntry {
        name: "angular-ui-router",
        path: "../bower_components/angular-ui-router/release/angular-ui-router",
        exports: None,
        deps: &[FRAMEWORK_CORE],
        init: None,
        ng_module: Some("ui.router"),
        package: vendor("angular-ui-router", "~0.2.10"),
    },
    ModuleEntry {
        name: "controllers",
        path: "controllers/controllers",
        exports: None,
        deps: &[FRAMEWORK_CORE, "services"],
        init: None,
        ng_module: Some("webControllers"),
        package: None,
    },
    ModuleEntry {
        name: "directives",
        path: "directives/directives",
        exports: None,
        deps: &[FRAMEWORK_CORE],
        init: None,
        ng_module: Some("webDirectives"),
        package: None,
    },
    ModuleEntry {
        name: "filters",
        path: "filters/filters",
        exports: None,
        deps: &[FRAMEWORK_CORE],
        init: None,
        ng_module: Some("webFilters"),
        package: None,
    },
    ModuleEntry {
        name: "services",
        path: "services/services",
        exports: None,
        deps: &[FRAMEWORK_CORE],
        init: None,
        ng_module: Some("webServices"),
        package: None,
    },
];

/// Entry contributed by an optional library.
pub fn library_module(library: JsLibrary) -> ModuleEntry {
    match library {
        JsLibrary::Underscore => ModuleEntry {
            name: "underscore",
            path: "../bower_components/underscore/underscore",
            exports: Some("_"),
            deps: &[],
            init: None,
            ng_module: None,
            package: vendor("underscore", "~1.6.0"),
        },
        JsLibrary::UiBootstrap => ModuleEntry {
            name: "ui-bootstrap",
            path: "../bower_components/angular-bootstrap/ui-bootstrap-tpls",
            exports: None,
            deps: &[FRAMEWORK_CORE],
            init: None,
            ng_module: Some("ui.bootstrap"),
            package: vendor("angular-bootstrap", "~0.11.0"),
        },
        JsLibrary::AngularAnimate => ModuleEntry {
            name: "angular-animate",
            path: "../bower_components/angular-animate/angular-animate",
            exports: None,
            deps: &[FRAMEWORK_CORE],
            init: None,
            ng_module: Some("ngAnimate"),
            package: vendor("angular-animate", "~1.2.16"),
        },
        JsLibrary::Lodash => ModuleEntry {
            name: "lodash",
            path: "../bower_components/lodash/dist/lodash",
            exports: Some("_"),
            deps: &[],
            init: Some(LODASH_NO_CONFLICT),
            ng_module: None,
            package: vendor("lodash", "~2.4.1"),
        },
        JsLibrary::Bindonce => ModuleEntry {
            name: "bindonce",
            path: "../bower_components/angular-bindonce/bindonce",
            exports: None,
            deps: &[FRAMEWORK_CORE],
            init: None,
            ng_module: Some("pasvaz.bindonce"),
            package: vendor("angular-bindonce", "~0.3.1"),
        },
        JsLibrary::Modernizr => ModuleEntry {
            name: "modernizr",
            path: "../bower_components/modernizr/modernizr",
            exports: Some("Modernizr"),
            deps: &[],
            init: None,
            ng_module: None,
            package: vendor("modernizr", "~2.8.1"),
        },
    }
}

/// Entry contributed by the CSS framework, if any.
pub fn css_framework_module(css: CssFramework) -> Option<ModuleEntry> {
    match css {
        // bootstrap.js expects the jQuery global
        CssFramework::SassBootstrap => Some(ModuleEntry {
            name: "bootstrap",
            path: "../bower_components/sass-bootstrap/dist/js/bootstrap",
            exports: None,
            deps: &[DOM_HELPER],
            init: None,
            ng_module: None,
            package: vendor("sass-bootstrap", "~3.0.2"),
        }),
        CssFramework::NativeBootstrap | CssFramework::Compass => None,
    }
}

/// Test-only entry added to the Karma loader configuration.
pub const TEST_HARNESS_MODULE: ModuleEntry = ModuleEntry {
    name: "angular-mocks",
    path: "../bower_components/angular-mocks/angular-mocks",
    exports: None,
    deps: &[FRAMEWORK_CORE],
    init: None,
    ng_module: None,
    package: vendor("angular-mocks", "~1.2.16"),
};

/// The ordered module set of one generated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSet {
    entries: Vec<ModuleEntry>,
}

impl ModuleSet {
    /// Derive the module set for a selection.
    pub fn resolve(selection: &SelectionState) -> Self {
        let mut entries: Vec<ModuleEntry> = BASE_MODULES.to_vec();
        entries.extend(selection.libraries().map(library_module));
        entries.extend(css_framework_module(selection.css_framework()));

        tracing::debug!(count = entries.len(), "Resolved module entries");
        Self { entries }
    }

    /// Append the test harness entry.
    pub fn with_test_harness(mut self) -> Self {
        self.entries.push(TEST_HARNESS_MODULE);
        self
    }

    /// All entries in emission order.
    pub fn entries(&self) -> &[ModuleEntry] {
        &self.entries
    }

    /// Module names in emission order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&ModuleEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Entries that appear in the shim table.
    pub fn shimmed(&self) -> impl Iterator<Item = &ModuleEntry> {
        self.entries.iter().filter(|e| e.needs_shim())
    }

    /// Angular modules the application module depends on.
    ///
    /// Vendor modules come first, then the generated ones, each group in
    /// emission order.
    pub fn ng_modules(&self) -> Vec<&'static str> {
        let vendor = self.entries.iter().filter(|e| !e.is_first_party());
        let first_party = self.entries.iter().filter(|e| e.is_first_party());
        vendor
            .chain(first_party)
            .filter_map(|e| e.ng_module)
            .collect()
    }

    /// Vendor packages in emission order.
    pub fn packages(&self) -> impl Iterator<Item = Package> + '_ {
        self.entries.iter().filter_map(|e| e.package)
    }

    /// `(module, dependency)` pairs whose dependency is not in the set.
    pub fn dangling_dependencies(&self) -> Vec<(&'static str, &'static str)> {
        self.entries
            .iter()
            .flat_map(|e| e.deps.iter().map(move |d| (e.name, *d)))
            .filter(|(_, dep)| self.get(dep).is_none())
            .collect()
    }
}
