//! Error types for xsdbind runtime operations.

use thiserror::Error;

/// Core error type for reading, writing and marshalling XML.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying XML reader rejected the input.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// An escaped attribute value or text node could not be unescaped.
    #[error("XML escape error: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    /// A start tag carries a malformed or repeated attribute.
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The document does not have the expected shape.
    #[error("malformed document: {message}")]
    Malformed {
        /// Error message.
        message: String,
    },

    /// A text value could not be parsed as the expected built-in kind.
    #[error("invalid {kind} value '{text}'")]
    InvalidValue {
        /// Built-in kind name (integer, float, boolean, ...).
        kind: &'static str,
        /// Offending text.
        text: String,
    },

    /// A required child element was not present.
    #[error("element '{parent}' is missing required child element '{child}'")]
    MissingElement {
        /// Parent element name.
        parent: String,
        /// Expected child element name.
        child: String,
    },

    /// A required attribute was not present.
    #[error("element '{element}' is missing required attribute '{attribute}'")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// A repeated element occurred fewer or more times than allowed.
    #[error("element '{element}' occurs {count} times, expected {min}..{max}")]
    Occurrence {
        /// Element name.
        element: String,
        /// Number of occurrences found.
        count: usize,
        /// Minimum number of occurrences.
        min: usize,
        /// Maximum number of occurrences, rendered as `unbounded` when absent.
        max: MaxLabel,
    },

    /// The document root is not the element the caller asked for.
    #[error("unexpected root element '{actual}', expected '{expected}'")]
    UnexpectedRoot {
        /// Expected root element name.
        expected: String,
        /// Actual root element name.
        actual: String,
    },
}

/// Display helper for an optional upper occurrence bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxLabel(pub Option<usize>);

impl std::fmt::Display for MaxLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(max) => write!(f, "{max}"),
            None => f.write_str("unbounded"),
        }
    }
}

impl Error {
    /// Creates a malformed document error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(kind: &'static str, text: impl Into<String>) -> Self {
        Self::InvalidValue {
            kind,
            text: text.into(),
        }
    }
}

/// Result type alias for xsdbind runtime operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occurrence_display() {
        let err = Error::Occurrence {
            element: "item".to_string(),
            count: 4,
            min: 1,
            max: MaxLabel(Some(3)),
        };
        assert_eq!(err.to_string(), "element 'item' occurs 4 times, expected 1..3");

        let err = Error::Occurrence {
            element: "item".to_string(),
            count: 0,
            min: 1,
            max: MaxLabel(None),
        };
        assert!(err.to_string().ends_with("expected 1..unbounded"));
    }

    #[test]
    fn test_invalid_value_display() {
        let err = Error::invalid_value("integer", "abc");
        assert_eq!(err.to_string(), "invalid integer value 'abc'");
    }
}
