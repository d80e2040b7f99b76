//! Error types for loading identifier XML files.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Any failure while reading or flattening an XML document.
///
/// All variants abort the whole load; no partial result is produced.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse XML {origin}")]
    Xml {
        origin: String,
        #[source]
        source: roxmltree::Error,
    },

    #[error("{origin}:{line}:{column}: <{element}> is missing attribute '{attribute}'")]
    MissingAttribute {
        origin: String,
        element: String,
        attribute: &'static str,
        line: u32,
        column: u32,
    },

    #[error("{origin}:{line}:{column}: item '{item}' has no parent element")]
    MissingParent {
        origin: String,
        item: String,
        line: u32,
        column: u32,
    },
}

pub type Result<T, E = LoadError> = std::result::Result<T, E>;
