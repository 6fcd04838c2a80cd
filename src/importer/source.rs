//! Content source abstraction for reading matrix tables from disk or memory.

use std::collections::BTreeMap;

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{FloorplanError, Result};

/// Trait for abstracting where table text comes from.
pub trait TableSource {
    /// Read the table at the given logical path and return its content as a string.
    fn read_to_string(&mut self, path: &Utf8Path) -> Result<String>;
}

/// Reads tables directly from the local filesystem.
pub struct FsSource;

impl TableSource for FsSource {
    fn read_to_string(&mut self, path: &Utf8Path) -> Result<String> {
        let bytes = std::fs::read(path.as_std_path()).map_err(|source| FloorplanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        String::from_utf8(bytes).map_err(|e| FloorplanError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })
    }
}

/// Serves tables from an in-memory map, keyed by logical path.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: BTreeMap<Utf8PathBuf, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<Utf8PathBuf>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    pub fn insert(&mut self, path: impl Into<Utf8PathBuf>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }
}

impl TableSource for MemorySource {
    fn read_to_string(&mut self, path: &Utf8Path) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| FloorplanError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such table"),
            })
    }
}
