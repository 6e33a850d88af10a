//! Variable interpolation for template files.
//!
//! Templates mark their slots with `${variable}`. Rendering is a single
//! pass: every slot is replaced by a value computed in code, so templates
//! carry formatting only and never control flow.
//!
//! # Syntax
//!
//! - `${variable_name}` - replaced with variable value
//! - `$${escaped}` - produces literal `${escaped}` in output
//!
//! A `$` not followed by `{` is literal, so jQuery, Angular `$scope`
//! names and Sass variables pass through untouched.

use crate::error::{NgseedError, Result};
use std::collections::{BTreeMap, HashSet};

/// A segment of an interpolated string.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text
    Literal(String),
    /// Variable reference: ${name}
    Variable(String),
}

/// Parse a string containing ${var} interpolations.
///
/// Supports:
/// - `${variable_name}` - variable interpolation
/// - `$${escaped}` - literal `${escaped}` in output
pub fn parse_interpolation(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut chars = input.chars().peekable();
    let mut current_literal = String::new();

    while let Some(c) = chars.next() {
        if c != '$' {
            current_literal.push(c);
            continue;
        }

        match chars.peek() {
            Some('$') => {
                chars.next();
                if chars.peek() == Some(&'{') {
                    // $${...} -> literal ${...}
                    chars.next();
                    current_literal.push_str("${");
                    for c in chars.by_ref() {
                        current_literal.push(c);
                        if c == '}' {
                            break;
                        }
                    }
                } else {
                    current_literal.push('$');
                }
            }
            Some('{') => {
                chars.next();

                if !current_literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut current_literal)));
                }

                let mut var_name = String::new();
                for c in chars.by_ref() {
                    if c == '}' {
                        break;
                    }
                    var_name.push(c);
                }

                segments.push(Segment::Variable(var_name.trim().to_string()));
            }
            _ => current_literal.push(c),
        }
    }

    if !current_literal.is_empty() {
        segments.push(Segment::Literal(current_literal));
    }

    segments
}

/// Extract all variable names from an interpolated string.
pub fn extract_variables(input: &str) -> HashSet<String> {
    parse_interpolation(input)
        .into_iter()
        .filter_map(|seg| match seg {
            Segment::Variable(name) => Some(name),
            _ => None,
        })
        .collect()
}

/// Check if a string contains any interpolation.
pub fn has_interpolation(input: &str) -> bool {
    parse_interpolation(input)
        .iter()
        .any(|seg| matches!(seg, Segment::Variable(_)))
}

/// Values available to a template.
///
/// Variables are resolved in priority order:
/// 1. Fragments computed by the resolver for this file
/// 2. Built-in variables (`ngseed_version`, `app_name`)
#[derive(Debug, Default, Clone)]
pub struct TemplateContext {
    /// Rendered fragments for the template being filled.
    pub fragments: BTreeMap<String, String>,

    /// Built-in variables.
    pub builtins: BTreeMap<String, String>,
}

impl TemplateContext {
    /// Create a new context with built-in variables.
    pub fn new() -> Self {
        let mut builtins = BTreeMap::new();
        builtins.insert(
            "ngseed_version".to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        );

        Self {
            builtins,
            ..Default::default()
        }
    }

    /// Add the application name to builtins.
    pub fn with_app_name(mut self, name: &str) -> Self {
        self.builtins
            .insert("app_name".to_string(), name.to_string());
        self
    }

    /// Set a fragment.
    pub fn with_fragment(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fragments.insert(name.to_string(), value.into());
        self
    }

    /// Resolve a variable name to its value.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.fragments
            .get(name)
            .or_else(|| self.builtins.get(name))
            .map(String::as_str)
    }
}

/// Resolve all variables in an interpolated string.
///
/// # Errors
///
/// Returns `ConfigValidationError` if any variable is not found in the context.
pub fn resolve_string(input: &str, context: &TemplateContext) -> Result<String> {
    let mut result = String::with_capacity(input.len());

    for segment in parse_interpolation(input) {
        match segment {
            Segment::Literal(text) => result.push_str(&text),
            Segment::Variable(name) => {
                let value =
                    context
                        .resolve(&name)
                        .ok_or_else(|| NgseedError::ConfigValidationError {
                            message: format!("Unresolved template variable: ${{{}}}", name),
                        })?;
                result.push_str(value);
            }
        }
    }

    Ok(result)
}
