//! Configuration inputs.
//!
//! - [`answers`] - YAML answers files that pre-fill the prompts
//! - [`interpolation`] - the `${var}` pass that fills template slots

pub mod answers;
pub mod interpolation;

pub use answers::Answers;
pub use interpolation::{
    extract_variables, has_interpolation, parse_interpolation, resolve_string, Segment,
    TemplateContext,
};
