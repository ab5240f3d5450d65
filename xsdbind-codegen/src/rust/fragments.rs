//! The polymorphic fragment interface shared by every declaration kind.

use super::Context;
use super::complex::ComplexFragments;
use super::scalar::{BuiltinFragments, SimpleFragments};
use crate::error::CodegenError;
use xsdbind_schema::{DeclId, DeclKind};

/// Where a parsed value is stored.
///
/// The target is a place expression such as `self.count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    /// `target = value`.
    Assign(String),
    /// `target = Some(value)`.
    Optional(String),
    /// `target.push(value)`.
    Push(String),
}

impl Sink {
    /// Renders the statement storing `value`.
    ///
    /// `boxed` wraps the value in a `Box`, except for pushes since lists hold
    /// their elements directly.
    #[must_use]
    pub fn store(&self, value: &str, boxed: bool) -> String {
        let value = if boxed && !matches!(self, Self::Push(_)) {
            format!("Box::new({value})")
        } else {
            value.to_string()
        };
        match self {
            Self::Assign(target) => format!("{target} = {value};\n"),
            Self::Optional(target) => format!("{target} = Some({value});\n"),
            Self::Push(target) => format!("{target}.push({value});\n"),
        }
    }

    /// Returns true if an absent value is acceptable.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }
}

/// Code fragments a declaration contributes to generated marshalling code.
///
/// Fragments are Rust statements. Writing fragments run inside
/// `append_children(&self, node: &mut Element)` and reading fragments inside
/// `parse_children(&mut self, node: &Element)`, so `node`, `self` and `?` are
/// in scope.
pub trait Fragments {
    /// Statements appending every member of the declaration to `node`.
    ///
    /// # Errors
    /// Returns [`CodegenError::ContractViolation`] for scalar declarations.
    fn appender(&self) -> Result<String, CodegenError>;

    /// Statements appending a child element named `node_name` that holds the
    /// value of the `&T` expression `value`.
    ///
    /// # Errors
    /// Returns an error if the declaration cannot be written as an element.
    fn element_setter(&self, value: &str, node_name: &str) -> Result<String, CodegenError>;

    /// Statements setting attribute `attr_name` of `node` from the `&T`
    /// expression `value`.
    ///
    /// # Errors
    /// Returns [`CodegenError::ContractViolation`] for complex declarations.
    fn attribute_setter(&self, value: &str, attr_name: &str) -> Result<String, CodegenError>;

    /// Statements reading every member of the declaration from `node`.
    ///
    /// # Errors
    /// Returns [`CodegenError::ContractViolation`] for scalar declarations.
    fn parser(&self) -> Result<String, CodegenError>;

    /// Statements reading a value from the element expression `node` into
    /// `sink`.
    ///
    /// # Errors
    /// Returns an error if the declaration cannot be read from an element.
    fn member_setter(&self, sink: &Sink, node: &str) -> Result<String, CodegenError>;

    /// Statements reading a value from the `&str` expression `text` into
    /// `sink`.
    ///
    /// # Errors
    /// Returns [`CodegenError::ContractViolation`] for complex declarations.
    fn attribute_parser(&self, sink: &Sink, text: &str) -> Result<String, CodegenError>;
}

/// Selects the fragment implementation for a declaration by its kind.
#[must_use]
pub fn fragments_for<'a>(ctx: Context<'a>, id: DeclId) -> Box<dyn Fragments + 'a> {
    let decl = ctx.graph.get(id);
    match (decl.builtin, decl.kind) {
        (Some(kind), _) => Box::new(BuiltinFragments::new(ctx, id, kind)),
        (None, DeclKind::Simple) => Box::new(SimpleFragments::new(ctx, id)),
        (None, DeclKind::Complex) => Box::new(ComplexFragments::new(ctx, id)),
    }
}
