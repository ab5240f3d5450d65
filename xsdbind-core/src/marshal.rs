//! Marshalling traits implemented by generated code.
//!
//! Every complex type compiled from a schema implements [`XmlComplex`]; the
//! types of top-level element declarations additionally implement
//! [`XmlDocument`].

use crate::dom::Element;
use crate::error::{Error, MaxLabel, Result};

/// Trait for generated complex types.
///
/// Implementations append their members to an element (attributes, child
/// elements or text content) and read them back.
///
/// # Example
/// ```ignore
/// // Generated type usage
/// let mut node = Element::new("widget");
/// widget.append_children(&mut node);
///
/// let mut parsed = WidgetType::default();
/// parsed.parse_children(&node)?;
/// assert_eq!(parsed, widget);
/// ```
pub trait XmlComplex: Default {
    /// Appends every member of `self` to `node`.
    fn append_children(&self, node: &mut Element);

    /// Fills the members of `self` from `node`.
    ///
    /// # Errors
    /// Returns an error if a required member is missing or a value cannot be
    /// parsed.
    fn parse_children(&mut self, node: &Element) -> Result<()>;
}

/// Trait for generated top-level document types.
pub trait XmlDocument: XmlComplex {
    /// Local name of the root element.
    const ROOT_NAME: &'static str;

    /// Namespace of the root element.
    const NAMESPACE: &'static str;

    /// Builds the root element for this value.
    #[must_use]
    fn to_element(&self) -> Element {
        let mut root = Element::new(Self::ROOT_NAME).with_namespace(Self::NAMESPACE);
        self.append_children(&mut root);
        root
    }

    /// Reads a value from a root element.
    ///
    /// # Errors
    /// Returns [`Error::UnexpectedRoot`] if the element has another name, or
    /// any error raised while parsing the members.
    fn from_element(root: &Element) -> Result<Self> {
        if root.name() != Self::ROOT_NAME {
            return Err(Error::UnexpectedRoot {
                expected: Self::ROOT_NAME.to_string(),
                actual: root.name().to_string(),
            });
        }
        let mut value = Self::default();
        value.parse_children(root)?;
        Ok(value)
    }

    /// Serializes this value as an XML document string.
    #[must_use]
    fn to_xml(&self) -> String {
        self.to_element().to_xml_string()
    }

    /// Parses a value from an XML document string.
    ///
    /// # Errors
    /// Returns an error if the text is not well-formed XML or does not match
    /// the document type.
    fn from_xml(xml: &str) -> Result<Self> {
        Self::from_element(&Element::parse(xml)?)
    }
}

/// Checks the number of occurrences collected for a repeated member.
///
/// # Errors
/// Returns [`Error::Occurrence`] if `count` is outside `min..=max`.
pub fn check_occurs(element: &str, count: usize, min: usize, max: Option<usize>) -> Result<()> {
    if count < min || max.is_some_and(|max| count > max) {
        return Err(Error::Occurrence {
            element: element.to_string(),
            count,
            min,
            max: MaxLabel(max),
        });
    }
    Ok(())
}
