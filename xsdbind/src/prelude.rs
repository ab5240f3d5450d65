//! Prelude module for convenient imports.
//!
//! ```ignore
//! use xsdbind::prelude::*;
//! ```

// Runtime types
pub use xsdbind_core::error::{Error as CoreError, Result as CoreResult};
pub use xsdbind_core::{Element, XmlComplex, XmlDocument};

// Schema compilation
pub use xsdbind_schema::{
    BuiltinKind, DeclId, Declaration, ParseError, PrefixPolicy, QualifiedName, SchemaError,
    SchemaGraph, SchemaSet,
};

// Code generation
pub use xsdbind_codegen::{
    Artifact, ArtifactKind, CodegenError, Generator, WriteOutcome, write_artifacts,
    write_if_changed,
};
