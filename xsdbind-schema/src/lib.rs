//! # xsdbind Schema
//!
//! XML Schema compilation into a resolved type graph.
//!
//! This crate provides:
//! - Qualified names and per-document namespace contexts
//! - A declaration registry seeded with the built-in kinds
//! - The schema walker (pass 1) and reference resolver (pass 2)
//! - The immutable [`SchemaGraph`] consumed by code generation

pub mod builtins;
pub mod compiler;
pub mod error;
pub mod graph;
pub mod ident;
pub mod names;
pub mod registry;
pub mod resolver;
pub mod types;
pub mod walker;

pub use builtins::{BuiltinKind, TextFamily};
pub use compiler::{SchemaSet, compile_schemas};
pub use error::{ParseError, SchemaError};
pub use graph::SchemaGraph;
pub use names::{NamespaceContext, PrefixPolicy, QualifiedName, XS_NAMESPACE};
pub use registry::Registry;
pub use types::{
    Arity, DeclId, DeclKind, Declaration, MaxOccurs, Member, ResolvedDeclaration,
    UnresolvedDeclaration,
};
pub use walker::Walker;
