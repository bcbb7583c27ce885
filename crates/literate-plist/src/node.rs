//! Tree types for a parsed property-list document.
//!
//! The tree is owned by [`Document`]. Nodes are addressed by [`NodePath`], a
//! list of child indices starting at the root element, so a caller can look a
//! node up once and mutate it later without holding a borrow into the tree.

use std::fmt;

use crate::error::{PlistError, Result};

/// Position of a node, as child indices walked from the root element.
///
/// The empty path addresses the root element itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// The path of the root element.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns the path of this node's `index`-th child.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Returns the path of the parent node, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(rest.to_vec()))
    }

    /// The child indices making up this path.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Number of steps below the root element.
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "/");
        }
        for index in &self.0 {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

/// An element with its attributes and ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends a child and returns `self` for chaining.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Returns `true` when this element has the given tag name.
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// The first child, whatever its kind.
    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    /// Concatenated text of the direct text children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(Node::as_text)
            .collect::<Vec<_>>()
            .concat()
    }
}

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Character data, already unescaped.
    Text(String),
    /// A `<![CDATA[...]]>` section.
    CData(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// The character payload of a text or CDATA node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) | Node::CData(text) => Some(text),
            Node::Element(_) => None,
        }
    }

    /// Tag name for elements, `None` for character data.
    pub fn tag_name(&self) -> Option<&str> {
        self.as_element().map(|element| element.name.as_str())
    }

    fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => &element.children,
            _ => &[],
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

/// The `<?xml ... ?>` declaration, kept so it can be written back out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub version: String,
    pub encoding: Option<String>,
    pub standalone: Option<String>,
}

impl Default for Declaration {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            encoding: Some("UTF-8".to_string()),
            standalone: None,
        }
    }
}

/// A parsed property-list document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub declaration: Option<Declaration>,
    /// Raw content of the `<!DOCTYPE ...>` node, if present.
    pub doctype: Option<String>,
    pub root: Element,
}

impl Document {
    /// Creates a document around `root` with a default declaration and no doctype.
    pub fn new(root: Element) -> Self {
        Self {
            declaration: Some(Declaration::default()),
            doctype: None,
            root,
        }
    }

    /// Returns the root element as a node, for uniform path handling.
    fn root_children(&self) -> &[Node] {
        &self.root.children
    }

    /// Resolves `path` to a node. The root path has no [`Node`] wrapper, so use
    /// [`Document::element`] to reach the root element.
    pub fn get(&self, path: &NodePath) -> Option<&Node> {
        let (first, rest) = path.indices().split_first()?;
        let mut node = self.root_children().get(*first)?;
        for index in rest {
            node = node.children().get(*index)?;
        }
        Some(node)
    }

    fn get_mut(&mut self, path: &NodePath) -> Option<&mut Node> {
        let (first, rest) = path.indices().split_first()?;
        let mut node = self.root.children.get_mut(*first)?;
        for index in rest {
            node = node.as_element_mut()?.children.get_mut(*index)?;
        }
        Some(node)
    }

    /// Resolves `path` to an element, including the root element.
    pub fn element(&self, path: &NodePath) -> Option<&Element> {
        if path.depth() == 0 {
            return Some(&self.root);
        }
        self.get(path)?.as_element()
    }

    /// Text payload of the node at `path`, if it is a text or CDATA node.
    pub fn text(&self, path: &NodePath) -> Option<&str> {
        self.get(path)?.as_text()
    }

    /// Replaces the payload of the text node at `path`.
    ///
    /// This is the only mutation the tree supports; structure never changes.
    pub fn set_text(&mut self, path: &NodePath, value: impl Into<String>) -> Result<()> {
        match self.get_mut(path) {
            Some(Node::Text(text)) | Some(Node::CData(text)) => {
                *text = value.into();
                Ok(())
            }
            Some(Node::Element(_)) => Err(PlistError::NotText(path.clone())),
            None => Err(PlistError::InvalidPath(path.clone())),
        }
    }
}
