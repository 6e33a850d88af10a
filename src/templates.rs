//! Template assets embedded at compile time.
//!
//! Everything under `templates/` ships inside the binary. Files are looked
//! up by their path relative to that directory (e.g. `scripts/main.js`).

use include_dir::{include_dir, Dir};

use crate::error::{NgseedError, Result};

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Raw bytes of a template.
pub fn get_bytes(name: &str) -> Result<&'static [u8]> {
    TEMPLATES_DIR
        .get_file(name)
        .map(|f| f.contents())
        .ok_or_else(|| NgseedError::MissingTemplate {
            name: name.to_string(),
        })
}

/// Contents of a text template.
pub fn get_text(name: &str) -> Result<&'static str> {
    TEMPLATES_DIR
        .get_file(name)
        .ok_or_else(|| NgseedError::MissingTemplate {
            name: name.to_string(),
        })?
        .contents_utf8()
        .ok_or_else(|| NgseedError::MissingTemplate {
            name: format!("{} (not valid UTF-8)", name),
        })
}

/// Check if a template exists.
pub fn has_template(name: &str) -> bool {
    TEMPLATES_DIR.get_file(name).is_some()
}
