use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Record
// ────────────────────────────────────────────────────────────────────────────

/// Parameter key holding the name of the enclosing element.
pub const PARENT_KEY: &str = "parent";
/// Parameter key holding the identifier's own name.
pub const NAME_KEY: &str = "name";

/// Flattened parameters of one identifier (`<item>` element).
///
/// `parameters` preserves insertion order, which decides the order in which
/// new columns appear in a [`crate::table::TableModel`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Ordered map of parameter name to value. Keys are unique.
    parameters: IndexMap<String, String>,
    /// Name of the logical parent, if known. Not an owning link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<String>,
    /// Child records. Append-only; the XML flattener leaves this empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Record>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from ordered `(name, value)` pairs.
    ///
    /// The `parent` link is taken from the `parent` parameter when present.
    pub fn from_parameters<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut rec = Self::new();
        for (k, v) in params {
            rec.insert(k, v);
        }
        rec
    }

    /// Insert or replace a parameter. A replaced key keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if name == PARENT_KEY {
            self.parent = Some(value.clone());
        }
        self.parameters.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(|s| s.as_str())
    }

    /// The identifier's own name (`name` parameter).
    pub fn name(&self) -> Option<&str> {
        self.get(NAME_KEY)
    }

    /// Parameter names in insertion order.
    pub fn header_names(&self) -> impl Iterator<Item = &str> {
        self.parameters.keys().map(|k| k.as_str())
    }

    /// All parameters in insertion order.
    pub fn parameters(&self) -> &IndexMap<String, String> {
        &self.parameters
    }

    pub fn headers_count(&self) -> usize {
        self.parameters.len()
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Set or clear the parent name, keeping the `parent` parameter in step.
    pub fn set_parent(&mut self, parent: Option<String>) {
        match parent {
            Some(name) => self.insert(PARENT_KEY, name),
            None => {
                self.parameters.shift_remove(PARENT_KEY);
                self.parent = None;
            }
        }
    }

    pub fn children(&self) -> &[Record] {
        &self.children
    }

    pub fn add_child(&mut self, child: Record) {
        self.children.push(child);
    }
}
