use std::io::Write;

use ahash::HashSet;
use tracing::debug;

use crate::element::Element;
use crate::entity::encode_entities;
use crate::error::Error;
use crate::scope::{Namespace, Scope};
use crate::tree::{Node, Tree};

/// Default maximum nesting depth written by the encoder.
///
/// Elements nested deeper than this are silently left out of the output.
pub const RECURSION_LIMIT: usize = 256;

/// Written in place of an element that is its own ancestor.
pub const CYCLE_MARKER: &str = "<!-- cycle detected -->";

/// Pretty printing parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Indentation {
    /// Written at the start of every line.
    pub prefix: String,
    /// Written after the prefix once per nesting level.
    pub indent: String,
}

/// Options controlling how a tree is encoded.
///
/// ```rust
/// use xmltree::{EncodeOptions, Tree};
///
/// let mut tree = Tree::new();
/// let root = tree.parse("<a><b>text</b></a>")?;
///
/// let mut out = Vec::new();
/// tree.encode_with(root, &mut out, &EncodeOptions::new().indent("", "\t"))?;
/// assert_eq!(out, b"<a>\n\t<b>text</b>\n</a>\n");
/// # Ok::<(), xmltree::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Pretty print when set. Defaults to `None`: compact output.
    pub indentation: Option<Indentation>,
    /// Maximum nesting depth. Defaults to [`RECURSION_LIMIT`].
    pub recursion_limit: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            indentation: None,
            recursion_limit: RECURSION_LIMIT,
        }
    }
}

impl EncodeOptions {
    /// Compact output with the default recursion limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Put every tag on its own line, starting with `prefix` followed by
    /// `indent` once per nesting level.
    #[must_use]
    pub fn indent(mut self, prefix: &str, indent: &str) -> Self {
        self.indentation = Some(Indentation {
            prefix: prefix.to_string(),
            indent: indent.to_string(),
        });
        self
    }

    /// Change the maximum nesting depth.
    #[must_use]
    pub fn recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }
}

// Depth-first encoder. `path` holds the ancestors of the element being
// written; its size is the nesting depth.
pub(crate) struct Encoder<'a, W: Write> {
    tree: &'a Tree,
    w: &'a mut W,
    options: &'a EncodeOptions,
    path: HashSet<Node>,
}

impl<'a, W: Write> Encoder<'a, W> {
    pub(crate) fn new(tree: &'a Tree, w: &'a mut W, options: &'a EncodeOptions) -> Self {
        Self {
            tree,
            w,
            options,
            path: HashSet::default(),
        }
    }

    pub(crate) fn encode(&mut self, node: Node, parent: Option<Node>) -> Result<(), Error> {
        let depth = self.path.len();
        if depth > self.options.recursion_limit {
            debug!(depth, ?node, "recursion limit reached, element skipped");
            return Ok(());
        }
        if self.path.contains(&node) {
            debug!(?node, "cycle detected");
            self.w.write_all(CYCLE_MARKER.as_bytes())?;
            return Ok(());
        }
        let tree = self.tree;
        let element = tree.element(node);
        let declarations = Scope::diff(
            parent.map(|parent| tree.element(parent).scope()),
            element.scope(),
        );
        self.open_tag(element, declarations, depth)?;

        if element.has_children() {
            self.path.insert(node);
            for child in element.children() {
                self.encode(*child, Some(node))?;
            }
            self.path.remove(&node);
        } else if element.content().is_empty() {
            return Ok(());
        } else {
            self.w
                .write_all(encode_entities(element.content()).as_bytes())?;
        }
        self.close_tag(element, depth)
    }

    fn open_tag(
        &mut self,
        element: &Element,
        declarations: &[Namespace],
        depth: usize,
    ) -> Result<(), Error> {
        self.indent(depth)?;
        let scope = element.scope();
        write!(self.w, "<{}", scope.prefix(element.name()))?;
        for attribute in element.attributes() {
            write!(
                self.w,
                " {}=\"{}\"",
                scope.attribute_prefix(&attribute.name),
                encode_entities(&attribute.value)
            )?;
        }
        for namespace in declarations {
            if namespace.prefix.is_empty() {
                write!(self.w, " xmlns=\"{}\"", encode_entities(&namespace.uri))?;
            } else {
                write!(
                    self.w,
                    " xmlns:{}=\"{}\"",
                    namespace.prefix,
                    encode_entities(&namespace.uri)
                )?;
            }
        }
        if element.is_self_closing() {
            self.w.write_all(b" />")?;
        } else {
            self.w.write_all(b">")?;
        }
        // text-only elements keep their content and close tag on this line
        if element.has_children() || element.content().is_empty() {
            self.newline()?;
        }
        Ok(())
    }

    fn close_tag(&mut self, element: &Element, depth: usize) -> Result<(), Error> {
        if element.has_children() {
            self.indent(depth)?;
        }
        write!(self.w, "</{}>", element.scope().prefix(element.name()))?;
        self.newline()
    }

    fn indent(&mut self, depth: usize) -> Result<(), Error> {
        if let Some(indentation) = &self.options.indentation {
            self.w.write_all(indentation.prefix.as_bytes())?;
            for _ in 0..depth {
                self.w.write_all(indentation.indent.as_bytes())?;
            }
        }
        Ok(())
    }

    fn newline(&mut self) -> Result<(), Error> {
        if self.options.indentation.is_some() {
            self.w.write_all(b"\n")?;
        }
        Ok(())
    }
}
