//! Types generated at build time from `tests/schemas`.
//!
//! This crate is not published; it only exists so the marshalling tests run
//! against real generated code.

#![allow(clippy::all)]

/// Generated from `tests/schemas/widget.xsd`.
pub mod widget {
    include!(concat!(env!("OUT_DIR"), "/widget/mod.rs"));
}

/// Generated from `tests/schemas/catalog.xsd`.
pub mod catalog {
    include!(concat!(env!("OUT_DIR"), "/catalog/mod.rs"));
}
