//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. Running `ngseed` without a
//! subcommand behaves like `ngseed new`.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// ngseed - Scaffold an AngularJS + RequireJS single-page application.
#[derive(Debug, Parser)]
#[command(name = "ngseed")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output (including npm and bower output)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new project (default if no command specified)
    New(NewArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `new` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct NewArgs {
    /// Directory to generate into (defaults to the current directory)
    #[arg(value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// YAML file with pre-filled answers
    #[arg(short, long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// CSS framework: SASSBootstrap, NativeBootstrap or CompassFramework
    #[arg(long, value_name = "VALUE")]
    pub css_framework: Option<String>,

    /// Optional libraries, comma-separated (e.g. includeUnderscore,includeLodash;
    /// "" selects none)
    #[arg(long, value_name = "VALUES", value_delimiter = ',')]
    pub libraries: Option<Vec<String>>,

    /// Karma test framework: mocha or jasmine [default: mocha]
    #[arg(long, value_name = "NAME")]
    pub test_framework: Option<String>,

    /// Use answers file, flags and defaults; never prompt
    #[arg(long)]
    pub non_interactive: bool,

    /// Do not run npm install and bower install
    #[arg(long)]
    pub skip_install: bool,

    /// Do not print install messages
    #[arg(long)]
    pub skip_install_message: bool,

    /// Generate even if the directory already holds a project
    #[arg(short, long)]
    pub force: bool,

    /// List the files that would be generated without writing them
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
