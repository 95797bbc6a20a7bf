use std::fmt::{Display, Formatter};

/// The namespace URI bound to the `xml` prefix.
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// A qualified name: a local name and an optional namespace URI.
///
/// An empty `space` means the name is in no namespace. The prefix used to
/// write the name out is not part of the name; it is derived from the
/// [`Scope`](crate::Scope) of the element at serialization time.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Name {
    /// Namespace URI, empty for no namespace.
    pub space: String,
    /// Local name.
    pub local: String,
}

impl Name {
    /// A name in no namespace.
    pub fn new<S: Into<String>>(local: S) -> Self {
        Self {
            space: String::new(),
            local: local.into(),
        }
    }

    /// A name in the namespace `space`.
    pub fn ns<S: Into<String>, L: Into<String>>(space: S, local: L) -> Self {
        Self {
            space: space.into(),
            local: local.into(),
        }
    }

    /// Whether this name has the given namespace and local name.
    pub fn is(&self, space: &str, local: &str) -> bool {
        self.space == space && self.local == local
    }
}

// Clark notation, for diagnostics only.
impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.space.is_empty() {
            write!(f, "{}", self.local)
        } else {
            write!(f, "{{{}}}{}", self.space, self.local)
        }
    }
}

impl From<&str> for Name {
    fn from(local: &str) -> Self {
        Name::new(local)
    }
}
