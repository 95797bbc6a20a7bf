use std::fmt;
use std::io::Write;

use crate::encoder::{EncodeOptions, Encoder};
use crate::error::Error;
use crate::tree::{Node, Tree};

/// Serialization of elements.
///
/// The element passed in is treated as a document root: it declares every
/// namespace in its scope. Its descendants only declare what their scope
/// adds to their parent's.
///
/// Cycles and nesting beyond the recursion limit never cause an error; a
/// cycle is written as `<!-- cycle detected -->` and too deeply nested
/// elements are left out. The only error is a failing writer.
impl Tree {
    /// Write the compact XML encoding of `node` to `w`.
    ///
    /// ```rust
    /// use xmltree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.parse(r#"<a x='"'>1 &amp; 2</a>"#)?;
    /// let mut out = Vec::new();
    /// tree.encode(root, &mut out)?;
    /// assert_eq!(out, br#"<a x="&quot;">1 &amp; 2</a>"#);
    /// # Ok::<(), xmltree::Error>(())
    /// ```
    pub fn encode<W: Write>(&self, node: Node, w: &mut W) -> Result<(), Error> {
        self.encode_with(node, w, &EncodeOptions::default())
    }

    /// Write `node` to `w`, with each tag on its own line. Each line starts
    /// with `prefix` followed by `indent` once per nesting level.
    pub fn encode_indent<W: Write>(
        &self,
        node: Node,
        w: &mut W,
        prefix: &str,
        indent: &str,
    ) -> Result<(), Error> {
        self.encode_with(node, w, &EncodeOptions::new().indent(prefix, indent))
    }

    /// Write `node` to `w` as configured by `options`.
    pub fn encode_with<W: Write>(
        &self,
        node: Node,
        w: &mut W,
        options: &EncodeOptions,
    ) -> Result<(), Error> {
        Encoder::new(self, w, options).encode(node, None)
    }

    /// The compact XML encoding of `node`.
    ///
    /// The output is UTF-8, whatever the encoding of the parsed source.
    pub fn marshal(&self, node: Node) -> Vec<u8> {
        self.marshal_with(node, &EncodeOptions::default())
    }

    /// Like [`Tree::marshal`], but pretty printed as described for
    /// [`Tree::encode_indent`].
    ///
    /// ```rust
    /// use xmltree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.parse(r#"<module name='&lt;'></module>"#)?;
    /// assert_eq!(tree.marshal_indent(root, "", "  "), b"<module name=\"&lt;\" />\n");
    /// # Ok::<(), xmltree::Error>(())
    /// ```
    pub fn marshal_indent(&self, node: Node, prefix: &str, indent: &str) -> Vec<u8> {
        self.marshal_with(node, &EncodeOptions::new().indent(prefix, indent))
    }

    fn marshal_with(&self, node: Node, options: &EncodeOptions) -> Vec<u8> {
        let mut buf = Vec::new();
        // writing to a Vec cannot fail
        if let Err(e) = self.encode_with(node, &mut buf, options) {
            panic!("encoding to memory failed: {}", e);
        }
        buf
    }

    /// The compact XML encoding of `node` as a string.
    pub fn to_string(&self, node: Node) -> String {
        match String::from_utf8(self.marshal(node)) {
            Ok(s) => s,
            Err(e) => panic!("encoder produced invalid UTF-8: {}", e),
        }
    }

    /// A value that formats as the compact XML encoding of `node`.
    ///
    /// ```rust
    /// use xmltree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.new_element("a");
    /// assert_eq!(format!("{}", tree.display(root)), "<a />");
    /// ```
    pub fn display(&self, node: Node) -> DisplayElement<'_> {
        DisplayElement { tree: self, node }
    }
}

/// Formats an element of a tree as XML. See [`Tree::display`].
pub struct DisplayElement<'a> {
    tree: &'a Tree,
    node: Node,
}

impl fmt::Display for DisplayElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tree.to_string(self.node))
    }
}
