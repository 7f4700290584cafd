//! Key-value output sinks consumed by later CI steps.

use crate::error::{ImageTagsError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Destination for `key=value` step outputs
pub trait OutputSink {
    /// Write all entries, in order
    fn write_outputs(&mut self, entries: &[(&str, &str)]) -> Result<()>;
}

/// Appends outputs to the file named by the forge (e.g. `$GITHUB_OUTPUT`)
pub struct FileOutput {
    path: PathBuf,
}

impl FileOutput {
    pub fn new(path: impl AsRef<Path>) -> Self {
        FileOutput {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl OutputSink for FileOutput {
    fn write_outputs(&mut self, entries: &[(&str, &str)]) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ImageTagsError::output("no output file configured"));
        }

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| ImageTagsError::output(format!("failed to open output file: {}", e)))?;

        for (key, value) in entries {
            writeln!(file, "{}={}", key, value)
                .map_err(|e| ImageTagsError::output(format!("failed to write output: {}", e)))?;
        }

        Ok(())
    }
}

/// In-memory sink, used for dry runs and tests
#[derive(Debug, Default)]
pub struct MemoryOutput {
    pub entries: Vec<(String, String)>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl OutputSink for MemoryOutput {
    fn write_outputs(&mut self, entries: &[(&str, &str)]) -> Result<()> {
        self.entries.extend(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        Ok(())
    }
}
