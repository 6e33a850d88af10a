//! Filesystem scaffolder.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::templates;

use super::Scaffolder;

/// Writes generated files under a root directory.
#[derive(Debug, Clone)]
pub struct FsScaffolder {
    root: PathBuf,
}

impl FsScaffolder {
    /// Create a scaffolder writing under `root`.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// The destination root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn target(&self, relative: &str) -> Result<PathBuf> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(path)
    }
}

impl Scaffolder for FsScaffolder {
    fn copy_literal(&mut self, template: &str, dest: &str) -> Result<()> {
        let bytes = templates::get_bytes(template)?;
        let path = self.target(dest)?;
        tracing::debug!(template, path = %path.display(), "Copying template");
        fs::write(path, bytes)?;
        Ok(())
    }

    fn write_text(&mut self, dest: &str, contents: &str) -> Result<()> {
        let path = self.target(dest)?;
        tracing::debug!(path = %path.display(), bytes = contents.len(), "Writing file");
        fs::write(path, contents)?;
        Ok(())
    }

    fn make_directory(&mut self, path: &str) -> Result<()> {
        let path = self.root.join(path);
        tracing::debug!(path = %path.display(), "Creating directory");
        fs::create_dir_all(path)?;
        Ok(())
    }
}
