//! Declaration and member definitions.
//!
//! A declaration is generic over how it refers to other declarations. Pass 1
//! produces [`UnresolvedDeclaration`]s holding qualified names; pass 2 turns
//! them into [`ResolvedDeclaration`]s holding arena ids, so code that needs
//! resolved references cannot be handed unresolved ones.

use crate::builtins::BuiltinKind;
use crate::names::QualifiedName;
use std::fmt;

/// Index of a declaration in a registry or schema graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclId(u32);

impl DeclId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }

    /// Returns the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Upper occurrence bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaxOccurs {
    /// At most this many occurrences.
    Bounded(u32),
    /// Any number of occurrences.
    #[default]
    Unbounded,
}

impl MaxOccurs {
    /// Returns the bound, or `None` when unbounded.
    #[must_use]
    pub const fn bound(&self) -> Option<u32> {
        match self {
            Self::Bounded(max) => Some(*max),
            Self::Unbounded => None,
        }
    }
}

impl fmt::Display for MaxOccurs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(max) => write!(f, "{max}"),
            Self::Unbounded => f.write_str("unbounded"),
        }
    }
}

/// How many values a member holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly one.
    Scalar,
    /// Zero or one.
    Optional,
    /// A list.
    Array,
}

/// A member of a complex declaration: a child element or an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member<R> {
    /// Sanitized member name.
    pub name: String,
    /// Name of the element or attribute in instance documents.
    pub xml_name: String,
    /// The member's type.
    pub type_ref: R,
    /// Minimum occurrences.
    pub min_occurs: u32,
    /// Maximum occurrences.
    pub max_occurs: MaxOccurs,
    /// True for attributes, false for child elements.
    pub is_attribute: bool,
}

impl<R> Member<R> {
    /// Creates a child element member occurring exactly once.
    pub fn element(xml_name: impl Into<String>, type_ref: R) -> Self {
        let xml_name = xml_name.into();
        Self {
            name: crate::ident::sanitize_identifier(&xml_name),
            xml_name,
            type_ref,
            min_occurs: 1,
            max_occurs: MaxOccurs::Bounded(1),
            is_attribute: false,
        }
    }

    /// Creates an attribute member.
    pub fn attribute(xml_name: impl Into<String>, type_ref: R, required: bool) -> Self {
        Self {
            min_occurs: u32::from(required),
            is_attribute: true,
            ..Self::element(xml_name, type_ref)
        }
    }

    /// Sets the occurrence bounds.
    #[must_use]
    pub fn with_occurs(mut self, min_occurs: u32, max_occurs: MaxOccurs) -> Self {
        self.min_occurs = min_occurs;
        self.max_occurs = max_occurs;
        self
    }

    /// Classifies the member by its occurrence bounds.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        match self.max_occurs {
            MaxOccurs::Unbounded => Arity::Array,
            MaxOccurs::Bounded(max) if max > 1 => Arity::Array,
            _ if self.min_occurs == 0 => Arity::Optional,
            _ => Arity::Scalar,
        }
    }

    /// Returns true if the member holds a list.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self.arity(), Arity::Array)
    }

    /// Returns true if the member may be absent.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self.arity(), Arity::Optional)
    }

    /// Replaces the type reference.
    pub fn with_type<S>(self, type_ref: S) -> Member<S> {
        Member {
            name: self.name,
            xml_name: self.xml_name,
            type_ref,
            min_occurs: self.min_occurs,
            max_occurs: self.max_occurs,
            is_attribute: self.is_attribute,
        }
    }
}

/// Broad category of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    /// A scalar: built-in, or a restriction of another scalar.
    Simple,
    /// A structured type with members.
    Complex,
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => f.write_str("simple type"),
            Self::Complex => f.write_str("complex type"),
        }
    }
}

/// A named type known to the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<R> {
    /// Canonical name.
    pub name: QualifiedName,
    /// Simple or complex.
    pub kind: DeclKind,
    /// Set only for the seeded built-in declarations.
    pub builtin: Option<BuiltinKind>,
    /// True for declarations created from top-level elements.
    pub is_document: bool,
    /// Base type, if any.
    pub base: Option<R>,
    /// Members in declaration order.
    pub members: Vec<Member<R>>,
}

/// Declaration as produced by the walker.
pub type UnresolvedDeclaration = Declaration<QualifiedName>;

/// Declaration with every reference resolved.
pub type ResolvedDeclaration = Declaration<DeclId>;

impl<R> Declaration<R> {
    /// Creates a built-in declaration.
    #[must_use]
    pub fn builtin(kind: BuiltinKind) -> Self {
        Self {
            name: kind.qualified_name(),
            kind: DeclKind::Simple,
            builtin: Some(kind),
            is_document: false,
            base: None,
            members: Vec::new(),
        }
    }

    /// Creates a user simple declaration restricting `base`.
    #[must_use]
    pub fn simple(name: QualifiedName, base: R) -> Self {
        Self {
            name,
            kind: DeclKind::Simple,
            builtin: None,
            is_document: false,
            base: Some(base),
            members: Vec::new(),
        }
    }

    /// Creates an empty complex declaration.
    #[must_use]
    pub fn complex(name: QualifiedName) -> Self {
        Self {
            name,
            kind: DeclKind::Complex,
            builtin: None,
            is_document: false,
            base: None,
            members: Vec::new(),
        }
    }

    /// Creates a document declaration for a top-level element whose type is `base`.
    #[must_use]
    pub fn document(name: QualifiedName, base: R) -> Self {
        Self {
            is_document: true,
            base: Some(base),
            ..Self::complex(name)
        }
    }

    /// Returns true for seeded built-ins.
    #[must_use]
    pub const fn is_builtin(&self) -> bool {
        self.builtin.is_some()
    }

    /// Returns true for simple declarations (built-in or user).
    #[must_use]
    pub const fn is_simple(&self) -> bool {
        matches!(self.kind, DeclKind::Simple)
    }

    /// Returns true for complex declarations.
    #[must_use]
    pub const fn is_complex(&self) -> bool {
        matches!(self.kind, DeclKind::Complex)
    }

    /// Appends a member.
    pub fn add_member(&mut self, member: Member<R>) {
        self.members.push(member);
    }
}
