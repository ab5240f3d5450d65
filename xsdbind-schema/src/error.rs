//! Error types for schema walking and resolution.

use thiserror::Error;

/// Error raised while walking schema documents (pass 1).
///
/// Every variant except [`ParseError::DuplicateDefinition`], [`ParseError::Xml`]
/// and [`ParseError::Io`] describes a malformed construct.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The document could not be read into an element tree.
    #[error("XML parsing error: {0}")]
    Xml(#[from] xsdbind_core::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on element '{element}'")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Missing required nested construct.
    #[error("element '{parent}' is missing expected child element '{child}'")]
    MissingElement {
        /// Parent element name.
        parent: String,
        /// Expected child element name.
        child: String,
    },

    /// Unknown element encountered.
    #[error("unknown element '{element}' in context '{context}'")]
    UnknownElement {
        /// Element name.
        element: String,
        /// Parent context.
        context: String,
    },

    /// Invalid attribute value.
    #[error("invalid value '{value}' for attribute '{attribute}' on element '{element}'")]
    InvalidAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
        /// Invalid value.
        value: String,
    },

    /// Invalid occurrence constraints.
    #[error("invalid occurrence on '{element}': {message}")]
    InvalidOccurrence {
        /// Element (or member) name.
        element: String,
        /// Error message.
        message: String,
    },

    /// A type reference used a prefix with no namespace binding.
    #[error("unknown namespace prefix '{prefix}' in reference '{reference}'")]
    UnknownPrefix {
        /// The unbound prefix.
        prefix: String,
        /// The full lexical reference.
        reference: String,
    },

    /// Duplicate definition.
    #[error("'{name}' defined more than once")]
    DuplicateDefinition {
        /// Qualified name of the duplicate.
        name: String,
    },
}

/// Error type for a whole compilation (pass 1 and pass 2).
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A base type reference did not resolve.
    #[error("undefined base type '{base}' of '{owner}'")]
    UndefinedBase {
        /// The missing base type.
        base: String,
        /// The declaration referring to it.
        owner: String,
    },

    /// A member type reference did not resolve.
    #[error("undefined type '{type_name}' in member '{member}' of '{owner}'")]
    UndefinedType {
        /// The missing type.
        type_name: String,
        /// Member name.
        member: String,
        /// The declaration owning the member.
        owner: String,
    },

    /// A base type of a kind the declaration cannot derive from.
    #[error("'{owner}' cannot derive from '{base}': {reason}")]
    IncompatibleBase {
        /// The base type.
        base: String,
        /// The derived declaration.
        owner: String,
        /// Why the derivation is rejected.
        reason: String,
    },

    /// An attribute typed with a complex declaration.
    #[error("attribute '{attribute}' of '{owner}' has complex type '{type_name}'")]
    ComplexAttribute {
        /// Attribute name.
        attribute: String,
        /// The complex type.
        type_name: String,
        /// The declaration owning the attribute.
        owner: String,
    },

    /// Circular base type chain.
    #[error("circular type inheritance detected: {path}")]
    CircularInheritance {
        /// Path of the cycle.
        path: String,
    },
}

impl ParseError {
    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates a missing element error.
    pub fn missing_element(parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self::MissingElement {
            parent: parent.into(),
            child: child.into(),
        }
    }

    /// Creates an invalid attribute error.
    pub fn invalid_attr(
        element: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            element: element.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Creates an unknown element error.
    pub fn unknown_element(element: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownElement {
            element: element.into(),
            context: context.into(),
        }
    }

    /// Creates an invalid occurrence error.
    pub fn invalid_occurrence(element: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOccurrence {
            element: element.into(),
            message: message.into(),
        }
    }

    /// Creates a duplicate definition error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateDefinition { name: name.into() }
    }

    /// Returns true if this error reports a malformed schema construct.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::MissingAttribute { .. }
                | Self::MissingElement { .. }
                | Self::UnknownElement { .. }
                | Self::InvalidAttribute { .. }
                | Self::InvalidOccurrence { .. }
                | Self::UnknownPrefix { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_malformed() {
        assert!(ParseError::missing_attr("attribute", "type").is_malformed());
        assert!(ParseError::unknown_element("any", "complexType").is_malformed());
        assert!(!ParseError::duplicate("urn:t:Foo").is_malformed());
    }

    #[test]
    fn test_messages_name_the_offender() {
        let err = SchemaError::UndefinedType {
            type_name: "urn:t:Missing".to_string(),
            member: "item".to_string(),
            owner: "urn:t:Order".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "undefined type 'urn:t:Missing' in member 'item' of 'urn:t:Order'"
        );

        let err: SchemaError = ParseError::duplicate("urn:t:Foo").into();
        assert_eq!(err.to_string(), "parse error: 'urn:t:Foo' defined more than once");
    }
}
