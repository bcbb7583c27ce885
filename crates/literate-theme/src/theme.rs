//! Typed views over a theme document.
//!
//! A `.tmTheme` file looks like this (whitespace trimmed):
//!
//! ```xml
//! <plist version="1.0">
//!   <dict>
//!     <key>name</key>          <string>Ocean</string>
//!     <key>semanticClass</key> <string>theme.dark.ocean</string>
//!     <key>settings</key>
//!     <array>
//!       <dict>                                  <!-- default rule: no scope -->
//!         <key>settings</key>
//!         <dict><key>foreground</key><string>#112233</string></dict>
//!       </dict>
//!       <dict>
//!         <key>scope</key>    <string>comment.line</string>
//!         <key>settings</key>
//!         <dict><key>foreground</key><string>#445566</string></dict>
//!       </dict>
//!     </array>
//!   </dict>
//! </plist>
//! ```
//!
//! [`HeaderFields`] and [`StyleRule`] resolve the interesting entries to
//! [`NodePath`]s once, so the rewriter can mutate the document afterwards
//! without re-walking it.

use literate_plist::{Document, KeyProjection, NodePath};

use crate::error::{Result, ThemeError};

/// Top-level entries of a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFields {
    /// The top-level dictionary itself.
    pub dictionary: NodePath,
    pub author: Option<NodePath>,
    pub name: Option<NodePath>,
    pub semantic_class: Option<NodePath>,
    /// The `settings` array holding the style rules.
    pub settings: NodePath,
}

impl HeaderFields {
    /// Reads the header from the first child of the root element.
    ///
    /// Fails if that child is not an element, or if it has no structural
    /// `settings` entry.
    pub fn read(document: &Document) -> Result<Self> {
        let dictionary = NodePath::root().child(0);
        if document.element(&dictionary).is_none() {
            return Err(ThemeError::MissingDictionary);
        }

        let entries = KeyProjection::of(document, &dictionary);
        let settings = entries
            .node("settings")
            .cloned()
            .ok_or(ThemeError::MissingSettings)?;

        Ok(Self {
            author: entries.text("author").cloned(),
            name: entries.text("name").cloned(),
            semantic_class: entries.text("semanticClass").cloned(),
            settings,
            dictionary,
        })
    }

    /// Reads every style rule in the `settings` array, in document order.
    ///
    /// Every child of the array yields a rule, including ones that turn out
    /// to have nothing to rewrite.
    pub fn rules(&self, document: &Document) -> Vec<StyleRule> {
        let count = document
            .element(&self.settings)
            .map(|array| array.children.len())
            .unwrap_or(0);
        (0..count)
            .map(|index| StyleRule::read(document, self.settings.child(index)))
            .collect()
    }
}

/// One entry of the theme's `settings` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    /// The rule's own `<dict>`.
    pub path: NodePath,
    pub name: Option<NodePath>,
    pub scope: Option<NodePath>,
    /// The nested style-property `<dict>`, if the rule has one.
    pub settings: Option<NodePath>,
    /// The `foreground` text inside `settings`.
    pub foreground: Option<NodePath>,
}

impl StyleRule {
    /// Resolves the fields of the rule at `path`.
    pub fn read(document: &Document, path: NodePath) -> Self {
        let entries = KeyProjection::of(document, &path);
        let settings = entries.node("settings").cloned();
        let foreground = settings
            .as_ref()
            .and_then(|settings| KeyProjection::of(document, settings).text("foreground").cloned());

        Self {
            name: entries.text("name").cloned(),
            scope: entries.text("scope").cloned(),
            settings,
            foreground,
            path,
        }
    }

    pub fn name<'d>(&self, document: &'d Document) -> Option<&'d str> {
        self.name.as_ref().and_then(|path| document.text(path))
    }

    pub fn scope<'d>(&self, document: &'d Document) -> Option<&'d str> {
        self.scope.as_ref().and_then(|path| document.text(path))
    }

    pub fn foreground<'d>(&self, document: &'d Document) -> Option<&'d str> {
        self.foreground.as_ref().and_then(|path| document.text(path))
    }

    /// Overwrites the rule's foreground color.
    ///
    /// Returns `Ok(false)` without touching the document when the rule has no
    /// foreground entry.
    pub fn set_foreground(&self, document: &mut Document, value: impl Into<String>) -> Result<bool> {
        match &self.foreground {
            Some(path) => {
                document.set_text(path, value)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THEME: &str = "<plist><dict>\
        <key>author</key><string>Someone</string>\
        <key>name</key><string>Ocean</string>\
        <key>settings</key><array>\
          <dict><key>settings</key><dict><key>foreground</key><string>#112233</string></dict></dict>\
          <dict><key>name</key><string>Comment</string><key>scope</key><string>comment.line</string>\
            <key>settings</key><dict><key>background</key><string>#000000</string></dict></dict>\
          <dict><key>scope</key><string>string</string></dict>\
        </array></dict></plist>";

    #[test]
    fn test_header_fields() {
        let doc = Document::parse(THEME).unwrap();
        let header = HeaderFields::read(&doc).unwrap();
        assert_eq!(doc.text(header.author.as_ref().unwrap()), Some("Someone"));
        assert_eq!(doc.text(header.name.as_ref().unwrap()), Some("Ocean"));
        assert!(header.semantic_class.is_none());
    }

    #[test]
    fn test_rules_in_order() {
        let doc = Document::parse(THEME).unwrap();
        let rules = HeaderFields::read(&doc).unwrap().rules(&doc);
        assert_eq!(rules.len(), 3);

        assert_eq!(rules[0].scope(&doc), None);
        assert_eq!(rules[0].foreground(&doc), Some("#112233"));

        assert_eq!(rules[1].name(&doc), Some("Comment"));
        assert_eq!(rules[1].scope(&doc), Some("comment.line"));
        assert!(rules[1].settings.is_some());
        assert_eq!(rules[1].foreground(&doc), None);

        assert!(rules[2].settings.is_none());
        assert!(rules[2].foreground.is_none());
    }

    #[test]
    fn test_set_foreground() {
        let mut doc = Document::parse(THEME).unwrap();
        let rules = HeaderFields::read(&doc).unwrap().rules(&doc);
        assert!(rules[0].set_foreground(&mut doc, "#a8b8b8").unwrap());
        assert_eq!(rules[0].foreground(&doc), Some("#a8b8b8"));
        assert!(!rules[2].set_foreground(&mut doc, "#a8b8b8").unwrap());
    }

    #[test]
    fn test_missing_dictionary() {
        let doc = Document::parse("<plist/>").unwrap();
        assert!(matches!(HeaderFields::read(&doc), Err(ThemeError::MissingDictionary)));

        let doc = Document::parse("<plist>text</plist>").unwrap();
        assert!(matches!(HeaderFields::read(&doc), Err(ThemeError::MissingDictionary)));
    }

    #[test]
    fn test_missing_settings() {
        let doc = Document::parse("<plist><dict><key>name</key><string>x</string></dict></plist>")
            .unwrap();
        assert!(matches!(HeaderFields::read(&doc), Err(ThemeError::MissingSettings)));
    }
}
