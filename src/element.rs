use crate::name::Name;
use crate::scope::Scope;
use crate::tree::Node;

/// An attribute: a qualified name and its decoded value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    pub name: Name,
    pub value: String,
}

impl Attribute {
    pub fn new<N: Into<Name>, V: Into<String>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An XML element.
///
/// Values held by an element are always decoded: an attribute value of `&`
/// is stored as the single character `&`, never as `&amp;`. Escaping only
/// happens while encoding, and encoding never changes the element.
///
/// Elements live in a [`Tree`](crate::Tree) and refer to their children by
/// [`Node`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub(crate) name: Name,
    pub(crate) attributes: Vec<Attribute>,
    pub(crate) scope: Scope,
    pub(crate) content: String,
    pub(crate) children: Vec<Node>,
}

impl Element {
    pub(crate) fn new(name: Name, scope: Scope) -> Self {
        Element {
            name,
            attributes: Vec::new(),
            scope,
            content: String::new(),
            children: Vec::new(),
        }
    }

    /// The name of the element.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Rename the element.
    pub fn set_name<N: Into<Name>>(&mut self, name: N) {
        self.name = name.into();
    }

    /// The attributes in document order.
    ///
    /// Duplicates are possible; they are kept and written out as given.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Mutable access to the attribute list.
    pub fn attributes_mut(&mut self) -> &mut Vec<Attribute> {
        &mut self.attributes
    }

    /// The value of the first attribute with the given namespace and local
    /// name.
    ///
    /// ```rust
    /// use xmltree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.parse(r#"<module name="&lt;"/>"#)?;
    /// assert_eq!(tree.element(root).attr("", "name"), Some("<"));
    /// assert_eq!(tree.element(root).attr("", "other"), None);
    /// # Ok::<(), xmltree::Error>(())
    /// ```
    pub fn attr(&self, space: &str, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name.is(space, local))
            .map(|attribute| attribute.value.as_str())
    }

    /// Set an attribute, replacing the value of the first attribute with the
    /// same name, or appending a new attribute.
    pub fn set_attr<N: Into<Name>, V: Into<String>>(&mut self, name: N, value: V) {
        let name = name.into();
        let value = value.into();
        match self
            .attributes
            .iter_mut()
            .find(|attribute| attribute.name == name)
        {
            Some(attribute) => attribute.value = value,
            None => self.attributes.push(Attribute { name, value }),
        }
    }

    /// The namespace declarations in effect at this element.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn scope_mut(&mut self) -> &mut Scope {
        &mut self.scope
    }

    /// Text content. The empty string means the element has no content.
    ///
    /// Content is only written for elements without children.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content<S: Into<String>>(&mut self, content: S) {
        self.content = content.into();
    }

    /// The child elements in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    // Elements without children or content are written as `<name />`.
    pub(crate) fn is_self_closing(&self) -> bool {
        self.children.is_empty() && self.content.is_empty()
    }
}
