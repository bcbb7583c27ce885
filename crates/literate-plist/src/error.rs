//! Error types for property-list parsing and mutation.

use thiserror::Error;

use crate::NodePath;

/// Errors that can occur while parsing, navigating or mutating a document.
#[derive(Debug, Error)]
pub enum PlistError {
    /// The underlying XML reader or writer rejected the input.
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// An attribute could not be parsed.
    #[error("malformed attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Writing the serialized document failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Tag or text content was not valid UTF-8.
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The document contains no root element.
    #[error("document has no root element")]
    NoRootElement,

    /// Text or a second element was found outside the root element.
    #[error("content outside the root element")]
    OutsideRoot,

    /// A closing tag does not match the innermost open element.
    #[error("mismatched closing tag: expected </{expected}>, found </{found}>")]
    MismatchedEnd { expected: String, found: String },

    /// A closing tag appeared with no element open.
    #[error("unexpected closing tag </{0}>")]
    UnexpectedEnd(String),

    /// The document ended while an element was still open.
    #[error("unclosed element <{0}>")]
    Unclosed(String),

    /// A path does not resolve to a node in this document.
    #[error("no node at path {0}")]
    InvalidPath(NodePath),

    /// A path resolves to an element where a text node was required.
    #[error("node at path {0} is not a text node")]
    NotText(NodePath),
}

/// Result type for plist operations.
pub type Result<T> = std::result::Result<T, PlistError>;
