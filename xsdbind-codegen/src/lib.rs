//! # xsdbind Codegen
//!
//! Rust code generation from XML Schema documents.
//!
//! This crate provides:
//! - Polymorphic code fragments per declaration kind
//! - Type definition and marshalling implementation generation
//! - Artifact assembly with an index module
//! - A write-if-changed output writer for build script integration

pub mod error;
pub mod generator;
pub mod rust;
pub mod writer;

pub use error::CodegenError;
pub use generator::{Artifact, ArtifactKind, Generator};
pub use writer::{WriteOutcome, write_artifacts, write_if_changed};

use std::path::{Path, PathBuf};
use xsdbind_schema::SchemaSet;

/// Generates Rust code from an XML Schema string.
///
/// # Arguments
/// * `xml` - XML Schema document
///
/// # Returns
/// Generated Rust code as a single module source.
///
/// # Errors
/// Returns `CodegenError` if compilation or generation fails.
pub fn generate_from_xml(xml: &str) -> Result<String, CodegenError> {
    let graph = SchemaSet::new().compile_str(xml)?;
    Generator::new(&graph).generate_module()
}

/// Generates Rust code from an XML Schema file.
///
/// # Errors
/// Returns `CodegenError` if reading, compilation or generation fails.
pub fn generate_from_file(path: &Path) -> Result<String, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_from_xml(&xml)
}

/// Compiles schema files together and writes their artifacts into `out_dir`.
///
/// Nothing is written unless every document compiles and every artifact is
/// generated.
///
/// # Errors
/// Returns `CodegenError` if any step fails.
pub fn generate_to_dir<P: AsRef<Path>>(
    schemas: &[P],
    out_dir: &Path,
) -> Result<Vec<(PathBuf, WriteOutcome)>, CodegenError> {
    let mut set = SchemaSet::new();
    for path in schemas {
        set.add_file(path)?;
    }
    let graph = set.compile()?;
    let artifacts = Generator::new(&graph).generate()?;
    write_artifacts(out_dir, &artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_from_xml() {
        let code = generate_from_xml(
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" targetNamespace="urn:t">
                <xs:element name="Count" type="xs:int"/>
            </xs:schema>"#,
        )
        .unwrap();
        assert!(code.contains("pub struct Count {"));
        assert!(code.contains("pub content: i32,"));
        assert!(code.contains("self.content = xsdbind_core::text::parse_integer::<i32>(text)?;"));
    }

    #[test]
    fn test_generate_from_xml_reports_schema_errors() {
        let err = generate_from_xml(
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" targetNamespace="urn:t">
                <xs:element name="Count" type="Missing"/>
            </xs:schema>"#,
        )
        .unwrap_err();
        assert!(matches!(err, CodegenError::Schema(_)));
    }

    #[test]
    fn test_generate_to_dir_writes_nothing_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.xsd");
        let bad = dir.path().join("bad.xsd");
        std::fs::write(
            &good,
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" targetNamespace="urn:t">
                <xs:complexType name="A"/>
            </xs:schema>"#,
        )
        .unwrap();
        std::fs::write(
            &bad,
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" targetNamespace="urn:t">
                <xs:complexType name="A"/>
            </xs:schema>"#,
        )
        .unwrap();

        let out = dir.path().join("out");
        assert!(generate_to_dir(&[&good, &bad], &out).is_err());
        assert!(!out.exists());

        let outcomes = generate_to_dir(&[&good], &out).unwrap();
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(|(_, o)| *o == WriteOutcome::Created));
        assert!(out.join("A.impl.rs").exists());
    }
}
