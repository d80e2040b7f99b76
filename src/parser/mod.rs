//! Identifier XML parser.
//!
//! Provides [`IdParser`] to load an XML document and flatten every `<item>`
//! element into a [`Record`]. Sub-modules:
//!
//! - [`source`] – File I/O abstraction (filesystem vs. in-memory)
//! - [`item`] – Flattening of a single `<item>` element

pub mod item;
pub mod source;

pub use item::{ITEM_TAG, element_text, parse_item_node};
pub use source::*;

use crate::error::{LoadError, Result};
use crate::model::Record;
use camino::Utf8Path;
use roxmltree::Document;

/// Origin label used when text is parsed without a path.
const MEMORY_ORIGIN: &str = "<memory>";

/// Identifier parser. Generic over [`ContentSource`] so it can read from
/// the filesystem ([`FsSource`]) or from memory.
pub struct IdParser<S: ContentSource> {
    source: S,
}

impl<S: ContentSource> IdParser<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Read and flatten the XML file at `path`.
    pub fn parse_file(&mut self, path: impl AsRef<Utf8Path>) -> Result<Vec<Record>> {
        let path = path.as_ref();
        let text = self.source.read_to_string(path)?;
        parse_records_from_text(&text, Some(path.as_str()))
    }
}

/// Un-namespaced `<item>` element; `<ns:item>` does not count.
fn is_item(node: &roxmltree::Node) -> bool {
    node.is_element()
        && node.tag_name().namespace().is_none()
        && node.tag_name().name() == ITEM_TAG
}

/// Flatten every `<item>` in `text` into a [`Record`], in document order.
///
/// Any syntax error or missing `name` attribute fails the whole document.
pub fn parse_records_from_text(text: &str, origin: Option<&str>) -> Result<Vec<Record>> {
    let origin = origin.unwrap_or(MEMORY_ORIGIN);
    let doc = Document::parse(text).map_err(|source| LoadError::Xml {
        origin: origin.to_string(),
        source,
    })?;

    let mut records = Vec::new();
    for node in doc
        .descendants()
        .filter(|n| is_item(n))
    {
        let record = parse_item_node(&doc, node, origin)?;
        tracing::debug!(
            parent = record.parent().unwrap_or_default(),
            name = record.name().unwrap_or_default(),
            params = record.headers_count(),
            "parsed item"
        );
        records.push(record);
    }
    Ok(records)
}
