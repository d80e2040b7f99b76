//! Content source abstraction for reading XML documents.

use crate::error::{LoadError, Result};
use camino::Utf8Path;

/// Trait for abstracting file I/O (filesystem vs. in-memory sources).
pub trait ContentSource {
    /// Read a file at the given logical path and return its content as a string.
    fn read_to_string(&mut self, path: &Utf8Path) -> Result<String>;
}

/// Reads files directly from the local filesystem.
pub struct FsSource;

impl ContentSource for FsSource {
    fn read_to_string(&mut self, path: &Utf8Path) -> Result<String> {
        std::fs::read_to_string(path.as_std_path()).map_err(|source| LoadError::Read {
            path: path.to_owned(),
            source,
        })
    }
}
