//! User selections.
//!
//! - [`CssFramework`] - the single-choice CSS framework
//! - [`JsLibrary`] - optional utility libraries, in declared order
//! - [`TestFramework`] - Karma test framework
//! - [`SelectionState`] - the immutable record built from the answers
//! - [`questions`] - the prompts that collect the answers

pub mod css;
pub mod library;
pub mod questions;
pub mod state;

pub use css::CssFramework;
pub use library::{JsLibrary, TestFramework, JASMINE_VALUE};
pub use state::{app_name_from_dir, SelectionState};
