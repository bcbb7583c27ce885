//! Key/value projection over a dictionary node.
//!
//! A plist `<dict>` stores its entries as alternating siblings:
//!
//! ```xml
//! <key>foreground</key>
//! <string>#65737e</string>
//! ```
//!
//! [`KeyProjection`] flattens those pairs into a lookup from key name to a
//! [`Handle`]. Handles are paths, not references: read or mutate through the
//! owning [`Document`] afterwards.

use std::collections::BTreeMap;

use crate::node::{Document, Node, NodePath};

/// Where a projected key's value lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handle {
    /// The first text node of a `<string>` value. Mutate with [`Document::set_text`].
    Text(NodePath),
    /// Any other value node (`<dict>`, `<array>`, `<integer>`, ...).
    Node(NodePath),
}

impl Handle {
    pub fn path(&self) -> &NodePath {
        match self {
            Handle::Text(path) | Handle::Node(path) => path,
        }
    }

    /// The path, only if this handle targets string text.
    pub fn as_text(&self) -> Option<&NodePath> {
        match self {
            Handle::Text(path) => Some(path),
            Handle::Node(_) => None,
        }
    }

    /// The path, only if this handle targets a structural value.
    pub fn as_node(&self) -> Option<&NodePath> {
        match self {
            Handle::Node(path) => Some(path),
            Handle::Text(_) => None,
        }
    }
}

/// A transient key → handle view over one node's children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyProjection {
    entries: BTreeMap<String, Handle>,
}

impl KeyProjection {
    /// Projects the immediate children of the node at `path`.
    ///
    /// Every `<key>` child contributes an entry pointing at its next sibling.
    /// A `<string>` sibling yields [`Handle::Text`] for its first child, and a
    /// `<string>` with no content yields no entry at all. When a key repeats,
    /// the later pair wins. Non-key children are only ever values.
    pub fn of(document: &Document, path: &NodePath) -> Self {
        let mut entries = BTreeMap::new();
        let Some(element) = document.element(path) else {
            return Self { entries };
        };

        for (index, child) in element.children.iter().enumerate() {
            let Some(key) = child.as_element().filter(|e| e.is("key")) else {
                continue;
            };
            let Some(name) = key.first_child().and_then(Node::as_text) else {
                tracing::trace!(path = %path.child(index), "skipping key without text");
                continue;
            };
            let Some(value) = element.children.get(index + 1) else {
                tracing::trace!(key = name, "skipping key without a value");
                continue;
            };

            let value_path = path.child(index + 1);
            match value.as_element() {
                Some(string) if string.is("string") => {
                    if string.first_child().is_some() {
                        entries.insert(name.to_string(), Handle::Text(value_path.child(0)));
                    } else {
                        entries.remove(name);
                    }
                }
                _ => {
                    entries.insert(name.to_string(), Handle::Node(value_path));
                }
            }
        }

        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&Handle> {
        self.entries.get(key)
    }

    /// Text handle for `key`, if it maps to a non-empty `<string>`.
    pub fn text(&self, key: &str) -> Option<&NodePath> {
        self.get(key).and_then(Handle::as_text)
    }

    /// Structural handle for `key`, if it maps to a non-string value.
    pub fn node(&self, key: &str) -> Option<&NodePath> {
        self.get(key).and_then(Handle::as_node)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
