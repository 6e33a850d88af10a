//! Post-install copy of the RequireJS loader.
//!
//! `index.html` loads `scripts/vendor/require.js`, which Bower installs
//! under `bower_components`. The copy is best-effort: an existing vendor
//! file is never overwritten, and any I/O error skips the copy.

use std::fs;
use std::io;
use std::path::Path;

/// Loader installed by Bower, relative to the project root.
pub const REQUIRE_SOURCE: &str = "app/bower_components/requirejs/require.js";

/// Vendored loader, relative to the project root.
pub const REQUIRE_DEST: &str = "app/scripts/vendor/require.js";

/// Result of the vendor copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorCopy {
    Copied,
    AlreadyPresent,
    /// The source was missing or an I/O error occurred.
    Skipped,
}

/// Copy `require.js` into the vendor directory unless it already exists.
pub fn copy_vendor_require(root: &Path) -> VendorCopy {
    match try_copy(root) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::debug!(error = %e, "Skipping require.js vendor copy");
            VendorCopy::Skipped
        }
    }
}

fn try_copy(root: &Path) -> io::Result<VendorCopy> {
    let dest = root.join(REQUIRE_DEST);
    if dest.try_exists()? {
        return Ok(VendorCopy::AlreadyPresent);
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(root.join(REQUIRE_SOURCE), &dest)?;
    Ok(VendorCopy::Copied)
}
