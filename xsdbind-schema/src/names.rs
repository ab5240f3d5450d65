//! Qualified names and per-document namespace contexts.

use crate::error::ParseError;
use std::collections::HashMap;
use std::fmt;
use xsdbind_core::Element;

/// The XML Schema namespace, home of every built-in type.
pub const XS_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// Prefixes bound to [`XS_NAMESPACE`] in every document.
pub const XS_PREFIXES: [&str; 3] = ["xs", "xsd", "xsl"];

/// Canonical identity of a declaration: namespace plus local name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    /// Namespace URI (empty for no namespace).
    pub namespace: String,
    /// Local name.
    pub local: String,
}

impl QualifiedName {
    /// Creates a qualified name.
    #[must_use]
    pub fn new(namespace: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            local: local.into(),
        }
    }

    /// Creates a name in the XML Schema namespace.
    #[must_use]
    pub fn xs(local: impl Into<String>) -> Self {
        Self::new(XS_NAMESPACE, local)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.local)
    }
}

/// What to do with a type reference whose prefix is not bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrefixPolicy {
    /// Fail with [`ParseError::UnknownPrefix`].
    #[default]
    Reject,
    /// Resolve into the empty namespace. The reference then normally fails
    /// to resolve in pass 2.
    EmptyNamespace,
}

/// Prefix bindings and default namespaces for one schema document.
#[derive(Debug, Clone)]
pub struct NamespaceContext {
    prefixes: HashMap<String, String>,
    target_namespace: String,
    default_namespace: String,
    policy: PrefixPolicy,
}

impl NamespaceContext {
    /// Creates a context with only the fixed built-in prefixes bound.
    #[must_use]
    pub fn new(target_namespace: impl Into<String>, policy: PrefixPolicy) -> Self {
        let target_namespace = target_namespace.into();
        let prefixes = XS_PREFIXES
            .iter()
            .map(|prefix| (prefix.to_string(), XS_NAMESPACE.to_string()))
            .collect();

        Self {
            prefixes,
            default_namespace: target_namespace.clone(),
            target_namespace,
            policy,
        }
    }

    /// Builds the context of a schema document from its root element.
    ///
    /// The root's `xmlns:*` declarations are layered over the built-in
    /// prefixes, `tns` is bound to the target namespace unless the document
    /// binds it itself, and unqualified references resolve against the
    /// document's default namespace or, without one, its target namespace.
    ///
    /// # Errors
    /// Returns [`ParseError::MissingAttribute`] if the root has no
    /// `targetNamespace`.
    pub fn for_document(root: &Element, policy: PrefixPolicy) -> Result<Self, ParseError> {
        let target_namespace = root
            .attribute("targetNamespace")
            .ok_or_else(|| ParseError::missing_attr(root.name(), "targetNamespace"))?;

        let mut context = Self::new(target_namespace, policy);
        for (prefix, uri) in root.namespace_declarations() {
            match prefix {
                Some(prefix) => context.bind(prefix, uri),
                None => context.default_namespace = uri.to_string(),
            }
        }
        if !context.prefixes.contains_key("tns") {
            context.bind("tns", target_namespace);
        }

        Ok(context)
    }

    /// Binds a prefix, replacing any earlier binding.
    pub fn bind(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// Returns the namespace bound to a prefix.
    #[must_use]
    pub fn lookup_prefix(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    /// Returns the document's target namespace.
    #[must_use]
    pub fn target_namespace(&self) -> &str {
        &self.target_namespace
    }

    /// Returns the namespace of unqualified references.
    #[must_use]
    pub fn default_namespace(&self) -> &str {
        &self.default_namespace
    }

    /// Resolves a lexical reference against the default namespace.
    ///
    /// # Errors
    /// See [`NamespaceContext::resolve_with_default`].
    pub fn resolve(&self, reference: &str) -> Result<QualifiedName, ParseError> {
        self.resolve_with_default(reference, &self.default_namespace)
    }

    /// Resolves a lexical reference such as `xs:int`, `tns:Foo` or `Foo`.
    ///
    /// The reference is split on its last `:`. Without a prefix it belongs to
    /// `default_namespace`; otherwise the prefix is looked up in this context.
    ///
    /// # Errors
    /// Returns [`ParseError::UnknownPrefix`] for an unbound prefix under
    /// [`PrefixPolicy::Reject`].
    pub fn resolve_with_default(
        &self,
        reference: &str,
        default_namespace: &str,
    ) -> Result<QualifiedName, ParseError> {
        let Some((prefix, local)) = reference.rsplit_once(':') else {
            return Ok(QualifiedName::new(default_namespace, reference));
        };

        match (self.lookup_prefix(prefix), self.policy) {
            (Some(namespace), _) => Ok(QualifiedName::new(namespace, local)),
            (None, PrefixPolicy::EmptyNamespace) => {
                tracing::warn!("Unknown prefix '{}' in '{}', using no namespace", prefix, reference);
                Ok(QualifiedName::new("", local))
            }
            (None, PrefixPolicy::Reject) => Err(ParseError::UnknownPrefix {
                prefix: prefix.to_string(),
                reference: reference.to_string(),
            }),
        }
    }
}
