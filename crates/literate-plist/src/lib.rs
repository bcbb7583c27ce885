//! Property-list XML as an owned tree with path handles.
//!
//! Theme files for TextMate-style editors (`.tmTheme`) are Apple property
//! lists: nested `<dict>` elements whose entries are alternating `<key>` and
//! value siblings. This crate parses such a file into a [`Document`], lets
//! callers find values through a [`KeyProjection`], mutate text in place via
//! [`Document::set_text`], and write the result back out indented.
//!
//! # Example
//!
//! ```rust
//! use literate_plist::{Document, KeyProjection, NodePath};
//!
//! let xml = "<plist><dict><key>name</key><string>Ocean</string></dict></plist>";
//! let mut doc = Document::parse(xml).unwrap();
//!
//! let dict = NodePath::root().child(0);
//! let name = KeyProjection::of(&doc, &dict).text("name").cloned().unwrap();
//! doc.set_text(&name, "Literate Ocean").unwrap();
//!
//! assert!(doc.to_pretty_string().unwrap().contains("<string>Literate Ocean</string>"));
//! ```

mod error;
mod node;
mod parse;
mod project;
mod write;

pub use error::{PlistError, Result};
pub use node::{Declaration, Document, Element, Node, NodePath};
pub use parse::minify;
pub use project::{Handle, KeyProjection};
