//! Reading property-list XML into a [`Document`].

use quick_xml::events::{BytesDecl, BytesStart, Event};
use quick_xml::Reader;

use crate::error::{PlistError, Result};
use crate::node::{Declaration, Document, Element, Node};

/// Strips insignificant whitespace between tags and drops comments.
///
/// Whitespace runs are removed only when they sit between a `>` and a `<` (or
/// the start/end of input), so text such as `<string> a b </string>` keeps its
/// spaces. CDATA sections are copied through untouched.
///
/// # Example
///
/// ```rust
/// use literate_plist::minify;
///
/// let xml = "<dict>\n\t<key>name</key>\n\t<!-- note -->\n\t<string> Ocean </string>\n</dict>\n";
/// assert_eq!(minify(xml), "<dict><key>name</key><string> Ocean </string></dict>");
/// ```
pub fn minify(xml: &str) -> String {
    let mut out = String::with_capacity(xml.len());
    let mut rest = xml;

    loop {
        if out.is_empty() || out.ends_with('>') {
            let trimmed = rest.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('<') {
                rest = trimmed;
            }
        }

        if let Some(after) = rest.strip_prefix("<!--") {
            rest = match after.find("-->") {
                Some(end) => &after[end + 3..],
                None => "",
            };
            continue;
        }

        if rest.starts_with("<![CDATA[") {
            let end = rest.find("]]>").map(|i| i + 3).unwrap_or(rest.len());
            out.push_str(&rest[..end]);
            rest = &rest[end..];
            continue;
        }

        let Some(ch) = rest.chars().next() else {
            break;
        };
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    out
}

impl Document {
    /// Parses property-list XML text.
    ///
    /// The input is passed through [`minify`] first so the tree carries no
    /// whitespace-only text nodes between elements.
    pub fn parse(xml: &str) -> Result<Self> {
        let minified = minify(xml);
        let mut reader = Reader::from_str(&minified);

        let mut declaration = None;
        let mut doctype = None;
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event()? {
                Event::Decl(decl) => declaration = Some(read_declaration(&decl)?),
                Event::DocType(text) => {
                    doctype = Some(String::from_utf8(text.to_vec())?.trim().to_string());
                }
                Event::Start(start) => stack.push(read_element(&start)?),
                Event::Empty(start) => {
                    let element = read_element(&start)?;
                    attach(&mut stack, &mut root, Node::Element(element))?;
                }
                Event::End(end) => {
                    let found = String::from_utf8(end.name().as_ref().to_vec())?;
                    let element = stack
                        .pop()
                        .ok_or_else(|| PlistError::UnexpectedEnd(found.clone()))?;
                    if element.name != found {
                        return Err(PlistError::MismatchedEnd {
                            expected: element.name,
                            found,
                        });
                    }
                    attach(&mut stack, &mut root, Node::Element(element))?;
                }
                Event::Text(text) => {
                    let content = text.unescape()?.into_owned();
                    if stack.is_empty() && content.trim().is_empty() {
                        continue;
                    }
                    attach(&mut stack, &mut root, Node::Text(content))?;
                }
                Event::CData(data) => {
                    let content = String::from_utf8(data.into_inner().into_owned())?;
                    attach(&mut stack, &mut root, Node::CData(content))?;
                }
                Event::Comment(_) | Event::PI(_) => {}
                Event::Eof => break,
            }
        }

        if let Some(open) = stack.pop() {
            return Err(PlistError::Unclosed(open.name));
        }
        let root = root.ok_or(PlistError::NoRootElement)?;
        tracing::trace!(root = %root.name, children = root.children.len(), "parsed document");

        Ok(Document {
            declaration,
            doctype,
            root,
        })
    }
}

fn read_declaration(decl: &BytesDecl<'_>) -> Result<Declaration> {
    let version = String::from_utf8(decl.version()?.into_owned())?;
    let encoding = decl
        .encoding()
        .transpose()?
        .map(|raw| String::from_utf8(raw.into_owned()))
        .transpose()?;
    let standalone = decl
        .standalone()
        .transpose()?
        .map(|raw| String::from_utf8(raw.into_owned()))
        .transpose()?;
    Ok(Declaration {
        version,
        encoding,
        standalone,
    })
}

fn read_element(start: &BytesStart<'_>) -> Result<Element> {
    let mut element = Element::new(String::from_utf8(start.name().as_ref().to_vec())?);
    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = String::from_utf8(attribute.key.as_ref().to_vec())?;
        let value = attribute.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

/// Adds a finished node to the innermost open element, or installs it as the root.
fn attach(stack: &mut [Element], root: &mut Option<Element>, node: Node) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
        return Ok(());
    }
    match node {
        Node::Element(element) if root.is_none() => {
            *root = Some(element);
            Ok(())
        }
        _ => Err(PlistError::OutsideRoot),
    }
}
