//! Command-line interface for ngseed.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, NewArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
