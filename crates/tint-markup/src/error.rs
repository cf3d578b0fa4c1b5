//! Error types for markup parsing.

use std::fmt;

use quick_xml::errors::IllFormedError;
use serde::{Serialize, Serializer};

/// Fatal failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The token stream is not well-formed.
    DocumentMalformed,
    /// A tag is unclosed or closed by the wrong end tag.
    InvalidTag,
}

impl FailureKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DocumentMalformed => "document malformed",
            Self::InvalidTag => "invalid tag",
        }
    }
}

impl Serialize for FailureKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error from the markup tree provider.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// XML reader error.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute (unquoted value, duplicate name, ...).
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Encoding error while decoding names or text.
    #[error("encoding error: {0}")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    /// Content after the synthetic root was closed.
    #[error("unexpected content after closing </{0}>")]
    TrailingContent(String),

    /// Input ended with elements still open.
    #[error("unclosed tag <{0}>")]
    UnclosedTag(String),
}

impl ParseError {
    /// Classify the error.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Xml(quick_xml::Error::IllFormed(
                IllFormedError::MismatchedEndTag { .. }
                | IllFormedError::UnmatchedEndTag(_)
                | IllFormedError::MissingEndTag(_),
            ))
            | Self::TrailingContent(_)
            | Self::UnclosedTag(_) => FailureKind::InvalidTag,
            _ => FailureKind::DocumentMalformed,
        }
    }
}

/// Error from [`parse_verbose`](crate::parse_verbose).
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    #[error("document malformed")]
    DocumentMalformed {
        #[source]
        source: ParseError,
    },

    #[error("invalid tag")]
    InvalidTag {
        #[source]
        source: ParseError,
    },
}

impl MarkupError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::DocumentMalformed { .. } => FailureKind::DocumentMalformed,
            Self::InvalidTag { .. } => FailureKind::InvalidTag,
        }
    }

    /// The underlying parser error.
    #[must_use]
    pub fn cause(&self) -> &ParseError {
        match self {
            Self::DocumentMalformed { source } | Self::InvalidTag { source } => source,
        }
    }
}

impl From<ParseError> for MarkupError {
    fn from(source: ParseError) -> Self {
        match source.kind() {
            FailureKind::DocumentMalformed => Self::DocumentMalformed { source },
            FailureKind::InvalidTag => Self::InvalidTag { source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_mismatched_end_tag_is_invalid_tag() {
        let err = ParseError::Xml(quick_xml::Error::IllFormed(
            IllFormedError::MismatchedEndTag {
                expected: "b".to_owned(),
                found: "root".to_owned(),
            },
        ));
        assert_eq!(err.kind(), FailureKind::InvalidTag);
    }

    #[test]
    fn test_trailing_content_is_invalid_tag() {
        assert_eq!(
            ParseError::TrailingContent("root".to_owned()).kind(),
            FailureKind::InvalidTag
        );
    }

    #[test]
    fn test_markup_error_keeps_cause() {
        let err = MarkupError::from(ParseError::UnclosedTag("b".to_owned()));
        assert_eq!(err.kind(), FailureKind::InvalidTag);
        assert_eq!(err.to_string(), "invalid tag");
        assert_eq!(
            err.source().map(ToString::to_string),
            Some("unclosed tag <b>".to_owned())
        );
    }

    #[test]
    fn test_failure_kind_labels() {
        assert_eq!(FailureKind::DocumentMalformed.to_string(), "document malformed");
        assert_eq!(FailureKind::InvalidTag.as_str(), "invalid tag");
    }
}
