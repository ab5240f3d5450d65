//! Driver tying both passes together.

use crate::error::{ParseError, SchemaError};
use crate::graph::SchemaGraph;
use crate::names::PrefixPolicy;
use crate::registry::Registry;
use crate::walker::Walker;
use std::path::Path;
use xsdbind_core::Element;

/// A set of schema documents compiled together.
///
/// Documents are walked in the order they are added and may refer to each
/// other's declarations.
///
/// # Example
/// ```
/// use xsdbind_schema::{PrefixPolicy, SchemaSet};
///
/// let xml = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" targetNamespace="urn:t">
///     <xs:element name="Count" type="xs:int"/>
/// </xs:schema>"#;
///
/// let mut set = SchemaSet::new().prefix_policy(PrefixPolicy::Reject);
/// set.add_str(xml).unwrap();
/// let graph = set.compile().unwrap();
/// assert_eq!(graph.user_declarations().count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaSet {
    registry: Registry,
    policy: PrefixPolicy,
    documents: usize,
}

impl SchemaSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how unbound prefixes are handled.
    #[must_use]
    pub fn prefix_policy(mut self, policy: PrefixPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Walks a document that was already parsed.
    ///
    /// # Errors
    /// Returns the first pass-1 error of the document.
    pub fn add_element(&mut self, root: &Element) -> Result<(), ParseError> {
        Walker::new(&mut self.registry, self.policy).walk_document(root)?;
        self.documents += 1;
        Ok(())
    }

    /// Parses and walks a document.
    ///
    /// # Errors
    /// Returns an error if the text is not well-formed XML or the document
    /// is not a valid schema.
    pub fn add_str(&mut self, xml: &str) -> Result<(), ParseError> {
        self.add_element(&Element::parse(xml)?)
    }

    /// Reads, parses and walks a document file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid schema.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> Result<(), ParseError> {
        let path = path.as_ref();
        tracing::info!("Reading schema {}", path.display());
        let xml = std::fs::read_to_string(path)?;
        self.add_str(&xml)
    }

    /// Number of documents walked so far.
    #[must_use]
    pub fn documents(&self) -> usize {
        self.documents
    }

    /// Returns the registry built so far.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Resolves the registry into a schema graph (pass 2).
    ///
    /// # Errors
    /// Returns the first resolution error.
    pub fn compile(self) -> Result<SchemaGraph, SchemaError> {
        tracing::info!("Walked {} schema documents", self.documents);
        self.registry.resolve()
    }

    /// Adds one document and compiles the set.
    ///
    /// # Errors
    /// Returns the first error of either pass.
    pub fn compile_str(mut self, xml: &str) -> Result<SchemaGraph, SchemaError> {
        self.add_str(xml)?;
        self.compile()
    }
}

/// Compiles schema documents given as strings, in order.
///
/// # Errors
/// Returns the first error of either pass.
pub fn compile_schemas(documents: &[&str]) -> Result<SchemaGraph, SchemaError> {
    let mut set = SchemaSet::new();
    for xml in documents {
        set.add_str(xml)?;
    }
    set.compile()
}
