//! ngseed - Interactive scaffolding for AngularJS + RequireJS applications.
//!
//! ngseed asks a couple of questions (CSS framework, optional utility
//! libraries) and writes the seed files of a single-page application:
//! Grunt build config, npm and Bower manifests, HTML boilerplate, the main
//! stylesheet and a RequireJS module-loader configuration.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Answers files and `${var}` template interpolation
//! - [`error`] - Error types and result aliases
//! - [`install`] - Dependency installation and the vendor script copy
//! - [`resolver`] - Conditional template resolution and the generation plan
//! - [`scaffold`] - Applying a generation plan to a destination
//! - [`selection`] - CSS framework and library selections
//! - [`shell`] - Shell command execution
//! - [`templates`] - Template assets embedded at compile time
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use ngseed::resolver::ModuleSet;
//! use ngseed::selection::{CssFramework, JsLibrary, SelectionState};
//!
//! let selection = SelectionState::new("webapp", CssFramework::SassBootstrap)
//!     .with_library(JsLibrary::Underscore);
//! let modules = ModuleSet::resolve(&selection);
//!
//! assert_eq!(modules.names().last(), Some(&"bootstrap"));
//! assert!(modules.dangling_dependencies().is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod install;
pub mod resolver;
pub mod scaffold;
pub mod selection;
pub mod shell;
pub mod templates;
pub mod ui;

pub use error::{NgseedError, Result};
