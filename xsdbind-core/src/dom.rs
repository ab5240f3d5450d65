//! Generic element tree.
//!
//! [`Element`] is the minimal document model shared by the schema compiler
//! (which walks schema documents) and by generated code (which appends to and
//! parses instance documents). An element has a local name, an optional
//! namespace, ordered attributes, ordered child elements and optional text.

use crate::error::{Error, Result};

/// A single attribute as written in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name, including any prefix (`xmlns:tns`, `minOccurs`).
    pub name: String,
    /// Unescaped attribute value.
    pub value: String,
}

/// XML element node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    prefix: Option<String>,
    namespace: Option<String>,
    attributes: Vec<Attribute>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    /// Creates an element with the given local name and no namespace.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the namespace of this element.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        self.namespace = (!namespace.is_empty()).then_some(namespace);
        self
    }

    /// Sets the lexical prefix used when the element is written.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Returns the local name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the lexical prefix the element was read with, if any.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Returns the namespace URI, if the element is in a namespace.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub(crate) fn set_namespace(&mut self, namespace: Option<String>) {
        self.namespace = namespace;
    }

    /// Returns true if the element has the given namespace and local name.
    #[must_use]
    pub fn is(&self, namespace: &str, name: &str) -> bool {
        self.namespace() == Some(namespace) && self.name == name
    }

    /// Looks up an attribute value by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Returns true if the attribute is present.
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Looks up a required attribute.
    ///
    /// # Errors
    /// Returns [`Error::MissingAttribute`] if the attribute is absent.
    pub fn required_attribute(&self, name: &str) -> Result<&str> {
        self.attribute(name).ok_or_else(|| Error::MissingAttribute {
            element: self.name.clone(),
            attribute: name.to_string(),
        })
    }

    /// Sets an attribute, replacing any previous value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|attr| attr.name == name) {
            Some(attr) => attr.value = value,
            None => self.attributes.push(Attribute { name, value }),
        }
    }

    /// Returns all attributes in document order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Returns the namespace declarations made on this element.
    ///
    /// The default namespace declaration (`xmlns="..."`) is reported with a
    /// `None` prefix.
    pub fn namespace_declarations(&self) -> impl Iterator<Item = (Option<&str>, &str)> {
        self.attributes.iter().filter_map(|attr| {
            if attr.name == "xmlns" {
                Some((None, attr.value.as_str()))
            } else {
                attr.name
                    .strip_prefix("xmlns:")
                    .map(|prefix| (Some(prefix), attr.value.as_str()))
            }
        })
    }

    /// Returns the child elements in document order.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Iterates over the child elements with the given local name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Returns the first child element with the given local name.
    #[must_use]
    pub fn first_child_named(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Returns the first child element with the given local name, or fails.
    ///
    /// # Errors
    /// Returns [`Error::MissingElement`] if no such child exists.
    pub fn required_child(&self, name: &str) -> Result<&Element> {
        self.first_child_named(name)
            .ok_or_else(|| Error::MissingElement {
                parent: self.name.clone(),
                child: name.to_string(),
            })
    }

    /// Appends a child element.
    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }

    /// Returns the text content, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replaces the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub(crate) fn append_text(&mut self, text: &str) {
        match &mut self.text {
            Some(existing) => existing.push_str(text),
            None => self.text = Some(text.to_string()),
        }
    }

    /// Drops whitespace-only text between child elements.
    pub(crate) fn normalize_text(&mut self) {
        let drop = match &self.text {
            Some(text) => text.is_empty() || (!self.children.is_empty() && text.trim().is_empty()),
            None => false,
        };
        if drop {
            self.text = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_set_and_replace() {
        let mut el = Element::new("item");
        el.set_attribute("count", "1");
        el.set_attribute("count", "2");
        assert_eq!(el.attribute("count"), Some("2"));
        assert_eq!(el.attributes().len(), 1);
        assert!(!el.has_attribute("missing"));
    }

    #[test]
    fn test_required_lookups() {
        let mut el = Element::new("parent");
        el.push_child(Element::new("child"));

        assert!(el.required_child("child").is_ok());
        let err = el.required_child("other").unwrap_err();
        assert!(matches!(err, Error::MissingElement { .. }));

        let err = el.required_attribute("id").unwrap_err();
        assert_eq!(
            err.to_string(),
            "element 'parent' is missing required attribute 'id'"
        );
    }

    #[test]
    fn test_children_named_preserves_order() {
        let mut el = Element::new("list");
        for text in ["a", "b", "c"] {
            let mut child = Element::new("entry");
            child.set_text(text);
            el.push_child(child);
            el.push_child(Element::new("other"));
        }

        let texts: Vec<_> = el.children_named("entry").filter_map(Element::text).collect();
        assert_eq!(texts, ["a", "b", "c"]);
    }

    #[test]
    fn test_namespace_declarations() {
        let mut el = Element::new("schema");
        el.set_attribute("xmlns", "urn:default");
        el.set_attribute("xmlns:tns", "urn:t");
        el.set_attribute("targetNamespace", "urn:t");

        let decls: Vec<_> = el.namespace_declarations().collect();
        assert_eq!(decls, [(None, "urn:default"), (Some("tns"), "urn:t")]);
    }

    #[test]
    fn test_with_empty_namespace_is_unqualified() {
        let el = Element::new("a").with_namespace("");
        assert_eq!(el.namespace(), None);
    }
}
