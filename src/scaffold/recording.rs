//! In-memory scaffolder for dry runs and tests.

use crate::error::Result;
use crate::templates;

use super::Scaffolder;

/// One recorded operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    Copy { template: String, dest: String },
    Write { dest: String, contents: String },
    Directory(String),
}

/// Records operations instead of performing them.
#[derive(Debug, Default)]
pub struct RecordingScaffolder {
    operations: Vec<Recorded>,
}

impl RecordingScaffolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Operations in the order they were requested.
    pub fn operations(&self) -> &[Recorded] {
        &self.operations
    }

    /// Destination paths of copies and writes, in order.
    pub fn files(&self) -> Vec<&str> {
        self.operations
            .iter()
            .filter_map(|op| match op {
                Recorded::Copy { dest, .. } | Recorded::Write { dest, .. } => Some(dest.as_str()),
                Recorded::Directory(_) => None,
            })
            .collect()
    }

    /// Last text written to `dest`.
    pub fn written(&self, dest: &str) -> Option<&str> {
        self.operations.iter().rev().find_map(|op| match op {
            Recorded::Write { dest: d, contents } if d == dest => Some(contents.as_str()),
            _ => None,
        })
    }
}

impl Scaffolder for RecordingScaffolder {
    fn copy_literal(&mut self, template: &str, dest: &str) -> Result<()> {
        // Same failure as the filesystem scaffolder for unknown templates.
        templates::get_bytes(template)?;
        self.operations.push(Recorded::Copy {
            template: template.to_string(),
            dest: dest.to_string(),
        });
        Ok(())
    }

    fn write_text(&mut self, dest: &str, contents: &str) -> Result<()> {
        self.operations.push(Recorded::Write {
            dest: dest.to_string(),
            contents: contents.to_string(),
        });
        Ok(())
    }

    fn make_directory(&mut self, path: &str) -> Result<()> {
        self.operations.push(Recorded::Directory(path.to_string()));
        Ok(())
    }
}
