//! An XML element tree with a byte-exact encoder.
//!
//! Elements live in a [`Tree`] and are addressed by [`Node`]. Each element
//! carries its name, attributes, namespace [`Scope`], text content and
//! children. Encoding a tree writes every namespace declaration at the
//! element that introduces it and nowhere else, escapes `&`, `<`, `>` and
//! `"` in text and attribute values, and optionally pretty prints.
//!
//! ```rust
//! use xmltree::Tree;
//!
//! let mut tree = Tree::new();
//! let root = tree.parse(r#"<a xmlns:x="urn:x"><x:b>&lt;&gt;</x:b><c/></a>"#)?;
//! assert_eq!(
//!     tree.to_string(root),
//!     r#"<a xmlns:x="urn:x"><x:b>&lt;&gt;</x:b><c /></a>"#
//! );
//! assert_eq!(
//!     String::from_utf8(tree.marshal_indent(root, "", "  ")).unwrap(),
//!     "<a xmlns:x=\"urn:x\">\n  <x:b>&lt;&gt;</x:b>\n  <c />\n</a>\n"
//! );
//! # Ok::<(), xmltree::Error>(())
//! ```
#![forbid(unsafe_code)]

mod element;
mod encoder;
mod encoding;
mod entity;
mod error;
mod name;
mod parse;
mod scope;
mod serialize;
mod tree;

pub use element::{Attribute, Element};
pub use encoder::{EncodeOptions, Indentation, CYCLE_MARKER, RECURSION_LIMIT};
pub use entity::{decode_entities, encode_entities};
pub use error::Error;
pub use name::{Name, XML_NAMESPACE};
pub use scope::{Namespace, Scope};
pub use serialize::DisplayElement;
pub use tree::{Node, Tree};
