//! # xsdbind Core
//!
//! Runtime support for code generated from XML Schema documents.
//!
//! This crate provides:
//! - A generic element tree with namespace-aware XML reading and writing
//! - Lexical formatting and parsing rules for the built-in schema kinds
//! - The `XmlComplex` and `XmlDocument` traits implemented by generated types
//! - Error types for reading and marshalling

pub mod dom;
pub mod error;
pub mod marshal;
pub mod text;
pub mod xml;

pub use chrono;
pub use dom::{Attribute, Element};
pub use error::{Error, Result};
pub use marshal::{XmlComplex, XmlDocument, check_occurs};
pub use xml::XML_NAMESPACE;
