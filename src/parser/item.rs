//! Flattening of a single `<item>` element into a [`Record`].

use crate::error::{LoadError, Result};
use crate::model::{NAME_KEY, PARENT_KEY, Record};
use roxmltree::{Document, Node};

pub const ITEM_TAG: &str = "item";

/// Build the record for one `<item>` node.
///
/// The record starts with `parent` (the enclosing element's `name`) and
/// `name` (the item's own `name`), followed by one parameter per child
/// element, keyed by tag name, in document order.
pub fn parse_item_node(doc: &Document, node: Node, origin: &str) -> Result<Record> {
    let name = required_attribute(doc, node, NAME_KEY, origin)?;
    let parent_node = node.parent_element().ok_or_else(|| {
        let pos = doc.text_pos_at(node.range().start);
        LoadError::MissingParent {
            origin: origin.to_string(),
            item: name.to_string(),
            line: pos.row,
            column: pos.col,
        }
    })?;
    let parent_name = required_attribute(doc, parent_node, NAME_KEY, origin)?;

    let mut record = Record::new();
    record.insert(PARENT_KEY, parent_name);
    record.insert(NAME_KEY, name);

    for param in node.children().filter(|c| c.is_element()) {
        let value = element_text(param);
        tracing::trace!(
            item = name,
            param = param.tag_name().name(),
            value = value.as_str(),
            "item parameter"
        );
        record.insert(param.tag_name().name(), value);
    }
    Ok(record)
}

/// Text of `node` up to its first child element, verbatim.
///
/// Comments and processing instructions are skipped, so text split around
/// them is joined back together.
pub fn element_text(node: Node) -> String {
    node.children()
        .take_while(|c| !c.is_element())
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .collect()
}

fn required_attribute<'a>(
    doc: &Document,
    node: Node<'a, '_>,
    attribute: &'static str,
    origin: &str,
) -> Result<&'a str> {
    node.attribute(attribute).ok_or_else(|| {
        let pos = doc.text_pos_at(node.range().start);
        LoadError::MissingAttribute {
            origin: origin.to_string(),
            element: node.tag_name().name().to_string(),
            attribute,
            line: pos.row,
            column: pos.col,
        }
    })
}
