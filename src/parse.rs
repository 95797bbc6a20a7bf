use std::borrow::Cow;

use tracing::trace;
use xmlparser::{ElementEnd, Token, Tokenizer};

use crate::element::{Attribute, Element};
use crate::encoding::decode;
use crate::entity::parse_entities;
use crate::error::Error;
use crate::scope::Scope;
use crate::tree::{Node, Tree};

// An element whose start tag is still being read.
struct Pending<'s> {
    prefix: &'s str,
    local: &'s str,
    declarations: Vec<(&'s str, Cow<'s, str>)>,
    attributes: Vec<(&'s str, &'s str, Cow<'s, str>)>,
}

// An element whose close tag has not been seen yet.
struct Open<'s> {
    node: Node,
    prefix: &'s str,
    local: &'s str,
}

struct DocumentBuilder<'t, 's> {
    tree: &'t mut Tree,
    pending: Option<Pending<'s>>,
    stack: Vec<Open<'s>>,
    root: Option<Node>,
}

fn qname(prefix: &str, local: &str) -> String {
    if prefix.is_empty() {
        local.to_string()
    } else {
        format!("{}:{}", prefix, local)
    }
}

impl<'t, 's> DocumentBuilder<'t, 's> {
    fn new(tree: &'t mut Tree) -> Self {
        DocumentBuilder {
            tree,
            pending: None,
            stack: Vec::new(),
            root: None,
        }
    }

    fn element_start(&mut self, prefix: &'s str, local: &'s str) {
        self.pending = Some(Pending {
            prefix,
            local,
            declarations: Vec::new(),
            attributes: Vec::new(),
        });
    }

    fn attribute(&mut self, prefix: &'s str, local: &'s str, value: &'s str) -> Result<(), Error> {
        let value = parse_entities(value)?;
        if let Some(pending) = &mut self.pending {
            if prefix == "xmlns" {
                pending.declarations.push((local, value));
            } else if prefix.is_empty() && local == "xmlns" {
                pending.declarations.push(("", value));
            } else {
                pending.attributes.push((prefix, local, value));
            }
        }
        Ok(())
    }

    fn open_element(&mut self) -> Result<(), Error> {
        let pending = match self.pending.take() {
            Some(pending) => pending,
            None => return Ok(()),
        };
        let parent = self.stack.last().map(|open| open.node);
        // the scope of a child extends the scope of its parent
        let mut scope = match parent {
            Some(parent) => self.tree.element(parent).scope().clone(),
            None => Scope::new(),
        };
        for (prefix, uri) in pending.declarations {
            scope.push(prefix, uri);
        }

        let name = scope
            .resolve_default(&qname(pending.prefix, pending.local))
            .ok_or_else(|| Error::UnknownPrefix(pending.prefix.to_string()))?;
        let mut attributes = Vec::with_capacity(pending.attributes.len());
        for (prefix, local, value) in pending.attributes {
            let name = scope
                .resolve(&qname(prefix, local))
                .ok_or_else(|| Error::UnknownPrefix(prefix.to_string()))?;
            attributes.push(Attribute {
                name,
                value: value.into_owned(),
            });
        }

        let mut element = Element::new(name, scope);
        element.attributes = attributes;
        let node = self.tree.add_element(element);
        match parent {
            Some(parent) => self.tree.append(parent, node),
            None => self.root = Some(node),
        }
        self.stack.push(Open {
            node,
            prefix: pending.prefix,
            local: pending.local,
        });
        Ok(())
    }

    fn close_element(&mut self, close: Option<(&str, &str)>) -> Result<(), Error> {
        let open = self.stack.pop().ok_or(Error::UnclosedTag)?;
        if let Some((prefix, local)) = close {
            if prefix != open.prefix || local != open.local {
                return Err(Error::InvalidCloseTag(
                    qname(open.prefix, open.local),
                    qname(prefix, local),
                ));
            }
        }
        let element = self.tree.element_mut(open.node);
        // whitespace between child elements is not content
        if element.has_children() && element.content.trim().is_empty() {
            element.content.clear();
        }
        Ok(())
    }

    fn text(&mut self, text: &str) {
        if let Some(open) = self.stack.last() {
            self.tree.element_mut(open.node).content.push_str(text);
        }
    }

    fn finish(self) -> Result<Node, Error> {
        if !self.stack.is_empty() {
            return Err(Error::UnclosedTag);
        }
        self.root.ok_or(Error::NoRootElement)
    }
}

/// Parsing of XML documents into the tree.
///
/// Each element gets the scope of its parent extended with its own
/// namespace declarations, so that encoding the result only declares
/// namespaces where the source did. Text and attribute values are stored
/// decoded. Comments, processing instructions and the XML declaration are
/// dropped.
impl Tree {
    /// Parse a document and add its elements to the tree. Returns the root
    /// element.
    ///
    /// ```rust
    /// use xmltree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.parse("<parent><stringliteral>&quot;</stringliteral></parent>")?;
    /// let child = tree.children(root)[0];
    /// assert_eq!(tree.element(child).content(), "\"");
    /// # Ok::<(), xmltree::Error>(())
    /// ```
    pub fn parse(&mut self, xml: &str) -> Result<Node, Error> {
        let mut builder = DocumentBuilder::new(self);

        for token in Tokenizer::from(xml) {
            match token? {
                Token::ElementStart { prefix, local, .. } => {
                    builder.element_start(prefix.as_str(), local.as_str());
                }
                Token::Attribute {
                    prefix,
                    local,
                    value,
                    ..
                } => {
                    builder.attribute(prefix.as_str(), local.as_str(), value.as_str())?;
                }
                Token::ElementEnd { end, .. } => match end {
                    ElementEnd::Open => {
                        builder.open_element()?;
                    }
                    ElementEnd::Empty => {
                        builder.open_element()?;
                        builder.close_element(None)?;
                    }
                    ElementEnd::Close(prefix, local) => {
                        builder.close_element(Some((prefix.as_str(), local.as_str())))?;
                    }
                },
                Token::Text { text } => {
                    builder.text(&parse_entities(text.as_str())?);
                }
                Token::Cdata { text, .. } => {
                    builder.text(text.as_str());
                }
                _ => {}
            }
        }

        let root = builder.finish()?;
        trace!(?root, elements = self.len(), "document parsed");
        Ok(root)
    }

    /// Parse a document given as bytes.
    ///
    /// The encoding is detected from a byte order mark or the XML
    /// declaration and defaults to UTF-8.
    pub fn parse_bytes(&mut self, data: &[u8]) -> Result<Node, Error> {
        let xml = decode(data)?;
        self.parse(&xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::Name;

    #[test]
    fn test_scope_extends_parent() {
        let mut tree = Tree::new();
        let root = tree
            .parse(r#"<a xmlns="urn:a"><b xmlns:x="urn:x"><x:c/></b></a>"#)
            .unwrap();
        let b = tree.children(root)[0];
        let c = tree.children(b)[0];
        assert_eq!(tree.element(root).scope().len(), 1);
        assert_eq!(tree.element(b).scope().len(), 2);
        assert_eq!(tree.element(c).scope(), tree.element(b).scope());
        assert_eq!(tree.element(b).name(), &Name::ns("urn:a", "b"));
        assert_eq!(tree.element(c).name(), &Name::ns("urn:x", "c"));
    }

    #[test]
    fn test_xmlns_not_an_attribute() {
        let mut tree = Tree::new();
        let root = tree
            .parse(r#"<a xmlns="urn:a" xmlns:x="urn:x" x:y="1" z="2"/>"#)
            .unwrap();
        assert_eq!(
            tree.element(root).attributes(),
            &[
                Attribute::new(Name::ns("urn:x", "y"), "1"),
                Attribute::new("z", "2")
            ]
        );
    }

    #[test]
    fn test_whitespace_between_children_dropped() {
        let mut tree = Tree::new();
        let root = tree.parse("<a>\n  <b> </b>\n</a>").unwrap();
        assert_eq!(tree.element(root).content(), "");
        let b = tree.children(root)[0];
        assert_eq!(tree.element(b).content(), " ");
    }

    #[test]
    fn test_cdata() {
        let mut tree = Tree::new();
        let root = tree.parse("<a><![CDATA[<&>]]></a>").unwrap();
        assert_eq!(tree.element(root).content(), "<&>");
    }
}
