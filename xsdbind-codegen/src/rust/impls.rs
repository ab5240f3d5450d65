//! Marshalling implementation code generation (implementation artifacts).

use super::fragments::fragments_for;
use super::{Context, indent, literal};
use crate::error::CodegenError;
use xsdbind_schema::DeclId;

/// Generator for the `XmlComplex` and `XmlDocument` implementations of
/// complex declarations.
pub struct ImplGenerator<'a> {
    ctx: Context<'a>,
}

impl<'a> ImplGenerator<'a> {
    /// Creates a new implementation generator.
    #[must_use]
    pub fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }

    /// Generates the marshalling implementations of a complex declaration.
    ///
    /// # Errors
    /// Returns [`CodegenError::ContractViolation`] for simple declarations,
    /// or any error raised by the member fragments.
    pub fn generate(&self, id: DeclId) -> Result<String, CodegenError> {
        let rt = self.ctx.runtime;
        let decl = self.ctx.graph.get(id);
        let name = self.ctx.type_name(id);
        let fragments = fragments_for(self.ctx, id);

        let mut appender = fragments.appender()?;
        if appender.is_empty() {
            appender.push_str("let _ = node;\n");
        }
        let parser = fragments.parser()?;

        let mut output = String::new();
        output.push_str(&format!("impl {rt}::XmlComplex for {name} {{\n"));
        output.push_str(&format!(
            "    fn append_children(&self, node: &mut {rt}::Element) {{\n"
        ));
        output.push_str(&indent(&appender, 2));
        output.push_str("    }\n\n");
        output.push_str(&format!(
            "    fn parse_children(&mut self, node: &{rt}::Element) -> {rt}::Result<()> {{\n"
        ));
        if parser.is_empty() {
            output.push_str("        let _ = node;\n");
        }
        output.push_str(&indent(&parser, 2));
        output.push_str("        Ok(())\n");
        output.push_str("    }\n");
        output.push_str("}\n");

        if decl.is_document {
            output.push('\n');
            output.push_str(&format!("impl {rt}::XmlDocument for {name} {{\n"));
            output.push_str(&format!(
                "    const ROOT_NAME: &'static str = {};\n",
                literal(&decl.name.local)
            ));
            output.push_str(&format!(
                "    const NAMESPACE: &'static str = {};\n",
                literal(&decl.name.namespace)
            ));
            output.push_str("}\n");
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rust::DEFAULT_RUNTIME;
    use xsdbind_schema::{QualifiedName, SchemaGraph, compile_schemas};

    const SCHEMA: &str = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" targetNamespace="urn:t">
        <xs:element name="Widget"><xs:complexType><xs:sequence>
            <xs:element name="label" type="xs:string"/>
        </xs:sequence></xs:complexType></xs:element>
        <xs:complexType name="Empty"/>
        <xs:simpleType name="Code"><xs:restriction base="xs:string"/></xs:simpleType>
    </xs:schema>"#;

    fn generate(graph: &SchemaGraph, local: &str) -> Result<String, CodegenError> {
        let id = graph.lookup(&QualifiedName::new("urn:t", local)).unwrap();
        ImplGenerator::new(Context::new(graph, DEFAULT_RUNTIME)).generate(id)
    }

    #[test]
    fn test_document_impl() {
        let graph = compile_schemas(&[SCHEMA]).unwrap();
        let code = generate(&graph, "Widget").unwrap();

        assert!(code.starts_with("impl xsdbind_core::XmlComplex for Widget {\n"));
        assert!(code.contains("fn append_children(&self, node: &mut xsdbind_core::Element) {\n"));
        assert!(code.contains(
            "fn parse_children(&mut self, node: &xsdbind_core::Element) -> xsdbind_core::Result<()> {\n"
        ));
        assert!(code.contains("impl xsdbind_core::XmlDocument for Widget {"));
        assert!(code.contains(r#"const ROOT_NAME: &'static str = "Widget";"#));
        assert!(code.contains(r#"const NAMESPACE: &'static str = "urn:t";"#));
    }

    #[test]
    fn test_plain_type_is_not_a_document() {
        let graph = compile_schemas(&[SCHEMA]).unwrap();
        let code = generate(&graph, "WidgetType").unwrap();
        assert!(!code.contains("XmlDocument"));
    }

    #[test]
    fn test_empty_type_uses_node() {
        let graph = compile_schemas(&[SCHEMA]).unwrap();
        let code = generate(&graph, "Empty").unwrap();
        assert_eq!(code.matches("let _ = node;").count(), 2);
    }

    #[test]
    fn test_simple_type_has_no_impl() {
        let graph = compile_schemas(&[SCHEMA]).unwrap();
        assert!(matches!(
            generate(&graph, "Code"),
            Err(CodegenError::ContractViolation { .. })
        ));
    }
}
