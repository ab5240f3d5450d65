//! # xsdbind
//!
//! Compile XML Schema documents into Rust types that marshal to and from XML.
//!
//! ## Features
//!
//! - **Two-pass compilation** - Forward references, cross-document references
//!   and anonymous types are resolved into an immutable type graph
//! - **Kind-driven code generation** - Built-in, simple and complex types each
//!   contribute their own write and read fragments
//! - **Build script friendly** - Output files are only rewritten when their
//!   contents change
//!
//! ## Quick Start
//!
//! ```ignore
//! // build.rs
//! use xsdbind::prelude::*;
//!
//! let mut set = SchemaSet::new();
//! set.add_file("schemas/order.xsd")?;
//! let graph = set.compile()?;
//! let artifacts = Generator::new(&graph).runtime_crate("xsdbind::core").generate()?;
//! write_artifacts(&out_dir.join("order"), &artifacts)?;
//!
//! // lib.rs
//! mod order {
//!     include!(concat!(env!("OUT_DIR"), "/order/mod.rs"));
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Element tree, XML reading and writing, marshalling traits
//! - [`schema`] - Schema walking, resolution and the type graph
//! - [`codegen`] - Rust code generation from the type graph

pub mod prelude;

/// Runtime support used by generated code.
pub mod core {
    pub use xsdbind_core::*;
}

/// Schema walking, resolution and the resolved type graph.
pub mod schema {
    pub use xsdbind_schema::*;
}

/// Code generation from resolved schemas.
pub mod codegen {
    pub use xsdbind_codegen::*;
}

// Re-export commonly used items at the crate root
pub use xsdbind_codegen::{CodegenError, Generator, write_artifacts};
pub use xsdbind_core::{Element, XmlComplex, XmlDocument};
pub use xsdbind_schema::{PrefixPolicy, SchemaGraph, SchemaSet};
