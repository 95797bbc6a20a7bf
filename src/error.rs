use std::fmt;

/// Errors produced by this crate.
///
/// Encoding an element tree only ever fails with [`Error::Io`]: cycles and
/// excessive nesting are handled by the encoder and never surface here. All
/// other variants come from parsing.
#[derive(Debug)]
pub enum Error {
    /// An entity reference was not closed with `;`.
    UnclosedEntity(String),
    /// An entity reference was not one of the predefined entities or a
    /// valid character reference.
    InvalidEntity(String),
    /// A prefix was used that has no namespace declaration in scope.
    UnknownPrefix(String),
    /// A close tag does not match the open tag. Holds the open and the
    /// close tag names.
    InvalidCloseTag(String, String),
    /// The document ended while an element was still open.
    UnclosedTag,
    /// The document contains no element.
    NoRootElement,
    /// The encoding of a byte document could not be determined.
    UnsupportedEncoding,
    /// The output sink failed.
    Io(std::io::Error),
    /// The tokenizer rejected the document.
    Parser(xmlparser::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnclosedEntity(entity) => write!(f, "unclosed entity: &{}", entity),
            Error::InvalidEntity(entity) => write!(f, "invalid entity: &{};", entity),
            Error::UnknownPrefix(prefix) => write!(f, "unknown namespace prefix: {}", prefix),
            Error::InvalidCloseTag(open, close) => {
                write!(f, "close tag </{}> does not match <{}>", close, open)
            }
            Error::UnclosedTag => write!(f, "unclosed tag at end of document"),
            Error::NoRootElement => write!(f, "document has no root element"),
            Error::UnsupportedEncoding => write!(f, "unsupported document encoding"),
            Error::Io(e) => write!(f, "write error: {}", e),
            Error::Parser(e) => write!(f, "parse error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Parser(e) => Some(e),
            _ => None,
        }
    }
}

impl From<xmlparser::Error> for Error {
    #[inline]
    fn from(e: xmlparser::Error) -> Self {
        Error::Parser(e)
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
