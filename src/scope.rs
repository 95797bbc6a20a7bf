use std::borrow::Cow;

use ahash::HashSet;

use crate::name::{Name, XML_NAMESPACE};

/// A namespace declaration: `xmlns="uri"` when `prefix` is empty,
/// `xmlns:prefix="uri"` otherwise.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Namespace {
    /// Prefix, empty for the default namespace.
    pub prefix: String,
    /// Namespace URI.
    pub uri: String,
}

impl Namespace {
    /// Create a namespace declaration.
    pub fn new<P: Into<String>, U: Into<String>>(prefix: P, uri: U) -> Self {
        Self {
            prefix: prefix.into(),
            uri: uri.into(),
        }
    }
}

/// The ordered namespace declarations in effect at an element.
///
/// A scope is built top-down: a child's scope is its parent's scope with the
/// child's own declarations appended. Later declarations shadow earlier ones
/// with the same prefix. The encoder relies on this shape to work out which
/// declarations an element has to write, see [`Scope::diff`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scope {
    ns: Vec<Namespace>,
}

impl Scope {
    /// An empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration.
    pub fn push<P: Into<String>, U: Into<String>>(&mut self, prefix: P, uri: U) {
        self.ns.push(Namespace::new(prefix, uri));
    }

    /// The declarations, outermost first.
    pub fn declarations(&self) -> &[Namespace] {
        &self.ns
    }

    /// Iterate over the declarations, outermost first.
    pub fn iter(&self) -> impl Iterator<Item = &Namespace> {
        self.ns.iter()
    }

    pub fn len(&self) -> usize {
        self.ns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ns.is_empty()
    }

    /// The declarations of `child` that are not already made by `parent`.
    ///
    /// This strips the longest common leading run of identical declarations
    /// and returns what is left of the child's list. Without a parent (the
    /// element being written is the document root) the full child scope is
    /// returned.
    ///
    /// ```rust
    /// use xmltree::Scope;
    ///
    /// let mut parent = Scope::new();
    /// parent.push("a", "http://example.com/a");
    /// let mut child = parent.clone();
    /// child.push("b", "http://example.com/b");
    ///
    /// let new = Scope::diff(Some(&parent), &child);
    /// assert_eq!(new.len(), 1);
    /// assert_eq!(new[0].prefix, "b");
    /// assert_eq!(Scope::diff(None, &child).len(), 2);
    /// ```
    pub fn diff<'a>(parent: Option<&Scope>, child: &'a Scope) -> &'a [Namespace] {
        let parent = match parent {
            Some(parent) => parent,
            None => return &child.ns,
        };
        let shared = parent
            .ns
            .iter()
            .zip(child.ns.iter())
            .take_while(|(p, c)| p == c)
            .count();
        &child.ns[shared..]
    }

    /// The URI the prefix is bound to, innermost declaration first.
    ///
    /// The `xml` prefix is always bound. An empty prefix looks up the
    /// default namespace.
    pub fn lookup_prefix(&self, prefix: &str) -> Option<&str> {
        if prefix == "xml" {
            return Some(XML_NAMESPACE);
        }
        self.ns
            .iter()
            .rev()
            .find(|ns| ns.prefix == prefix)
            .map(|ns| ns.uri.as_str())
    }

    // Declarations that are not shadowed by a later one with the same prefix,
    // innermost first.
    fn in_effect(&self) -> impl Iterator<Item = &Namespace> {
        let mut seen: HashSet<&str> = HashSet::default();
        self.ns
            .iter()
            .rev()
            .filter_map(move |ns| seen.insert(ns.prefix.as_str()).then_some(ns))
    }

    /// Render a name as it should appear in a tag in this scope.
    ///
    /// A default namespace declaration for the name's namespace wins over a
    /// prefixed one; otherwise the innermost prefix bound to the namespace is
    /// used. A name whose namespace is not declared at all is written with
    /// its local name only.
    ///
    /// ```rust
    /// use xmltree::{Name, Scope};
    ///
    /// let mut scope = Scope::new();
    /// scope.push("x", "http://example.com/x");
    /// assert_eq!(scope.prefix(&Name::ns("http://example.com/x", "a")), "x:a");
    /// assert_eq!(scope.prefix(&Name::new("a")), "a");
    /// ```
    pub fn prefix<'a>(&'a self, name: &'a Name) -> Cow<'a, str> {
        if name.space.is_empty() {
            return Cow::Borrowed(&name.local);
        }
        if name.space == XML_NAMESPACE {
            return Cow::Owned(format!("xml:{}", name.local));
        }
        let mut prefixed = None;
        for ns in self.in_effect().filter(|ns| ns.uri == name.space) {
            if ns.prefix.is_empty() {
                return Cow::Borrowed(&name.local);
            }
            if prefixed.is_none() {
                prefixed = Some(ns.prefix.as_str());
            }
        }
        match prefixed {
            Some(prefix) => Cow::Owned(format!("{}:{}", prefix, name.local)),
            None => Cow::Borrowed(&name.local),
        }
    }

    /// Render an attribute name in this scope.
    ///
    /// Unprefixed attributes are in no namespace, so unlike
    /// [`Scope::prefix`] a default namespace declaration is never used.
    pub fn attribute_prefix<'a>(&'a self, name: &'a Name) -> Cow<'a, str> {
        if name.space.is_empty() {
            return Cow::Borrowed(&name.local);
        }
        if name.space == XML_NAMESPACE {
            return Cow::Owned(format!("xml:{}", name.local));
        }
        match self
            .in_effect()
            .find(|ns| !ns.prefix.is_empty() && ns.uri == name.space)
        {
            Some(ns) => Cow::Owned(format!("{}:{}", ns.prefix, name.local)),
            None => Cow::Borrowed(&name.local),
        }
    }

    /// Resolve a qualified name such as `x:a` against this scope.
    ///
    /// An unprefixed name is in no namespace, as for attributes. Returns
    /// `None` if the prefix is not declared.
    pub fn resolve(&self, qname: &str) -> Option<Name> {
        match qname.split_once(':') {
            Some((prefix, local)) => self
                .lookup_prefix(prefix)
                .map(|uri| Name::ns(uri, local)),
            None => Some(Name::new(qname)),
        }
    }

    /// Like [`Scope::resolve`], but an unprefixed name is placed in the
    /// default namespace, as for elements.
    pub fn resolve_default(&self, qname: &str) -> Option<Name> {
        if qname.contains(':') {
            return self.resolve(qname);
        }
        Some(Name::ns(self.lookup_prefix("").unwrap_or_default(), qname))
    }
}

impl<'a> IntoIterator for &'a Scope {
    type Item = &'a Namespace;
    type IntoIter = std::slice::Iter<'a, Namespace>;

    fn into_iter(self) -> Self::IntoIter {
        self.ns.iter()
    }
}

impl FromIterator<Namespace> for Scope {
    fn from_iter<I: IntoIterator<Item = Namespace>>(iter: I) -> Self {
        Self {
            ns: iter.into_iter().collect(),
        }
    }
}
