//! Rust code generation modules.

pub mod complex;
pub mod fragments;
pub mod impls;
pub mod scalar;
pub mod types;

pub use complex::ComplexFragments;
pub use fragments::{Fragments, Sink, fragments_for};
pub use impls::ImplGenerator;
pub use scalar::{BuiltinFragments, SimpleFragments};
pub use types::TypeGenerator;

use xsdbind_schema::ident::{field_identifier, sanitize_identifier};
use xsdbind_schema::{Arity, DeclId, Member, SchemaGraph, TextFamily};

/// Default path of the runtime crate in generated code.
pub const DEFAULT_RUNTIME: &str = "xsdbind_core";

/// Name of the field holding the text content of `simpleContent` types.
pub const CONTENT_FIELD: &str = "content";

/// What every generator needs: the graph and the runtime crate path.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// The resolved schema graph.
    pub graph: &'a SchemaGraph,
    /// Path of the runtime crate, e.g. `xsdbind_core`.
    pub runtime: &'a str,
}

impl<'a> Context<'a> {
    /// Creates a context.
    #[must_use]
    pub fn new(graph: &'a SchemaGraph, runtime: &'a str) -> Self {
        Self { graph, runtime }
    }

    /// Returns the Rust type naming a declaration.
    #[must_use]
    pub fn type_name(&self, id: DeclId) -> String {
        let decl = self.graph.get(id);
        match decl.builtin {
            Some(kind) => match kind.family() {
                TextFamily::Date | TextFamily::Time | TextFamily::DateTime => {
                    format!("{}::{}", self.runtime, kind.rust_type())
                }
                _ => kind.rust_type().to_string(),
            },
            None => sanitize_identifier(&decl.name.local),
        }
    }

    /// Returns true if values of the member's type are stored boxed.
    #[must_use]
    pub fn is_boxed(&self, member: &Member<DeclId>) -> bool {
        self.graph.get(member.type_ref).is_complex() && !member.is_array()
    }

    /// Returns the Rust type of a member field.
    #[must_use]
    pub fn member_type(&self, member: &Member<DeclId>) -> String {
        let ty = self.type_name(member.type_ref);
        match (member.arity(), self.is_boxed(member)) {
            (Arity::Array, _) => format!("Vec<{ty}>"),
            (Arity::Optional, true) => format!("Option<Box<{ty}>>"),
            (Arity::Optional, false) => format!("Option<{ty}>"),
            (Arity::Scalar, true) => format!("Box<{ty}>"),
            (Arity::Scalar, false) => ty,
        }
    }
}

/// Returns the field identifier of a member.
#[must_use]
pub fn field_name(member: &Member<DeclId>) -> String {
    field_identifier(&member.name)
}

/// Indents every non-empty line of `code` by `levels` steps of four spaces.
pub(crate) fn indent(code: &str, levels: usize) -> String {
    let pad = "    ".repeat(levels);
    code.lines()
        .map(|line| {
            if line.is_empty() {
                "\n".to_string()
            } else {
                format!("{pad}{line}\n")
            }
        })
        .collect()
}

/// Renders a string as a Rust string literal.
pub(crate) fn literal(text: &str) -> String {
    format!("{text:?}")
}
