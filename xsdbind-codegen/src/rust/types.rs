//! Type definition code generation (interface artifacts).

use super::{CONTENT_FIELD, Context, field_name};
use crate::error::CodegenError;
use std::collections::HashSet;
use xsdbind_schema::DeclId;

/// Generator for the type definitions of declarations.
pub struct TypeGenerator<'a> {
    ctx: Context<'a>,
}

impl<'a> TypeGenerator<'a> {
    /// Creates a new type generator.
    #[must_use]
    pub fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }

    /// Generates the type definition of a declaration: an alias for simple
    /// types and a struct for complex ones.
    ///
    /// # Errors
    /// Returns an error for built-ins, which have no generated type, and for
    /// structs whose flattened fields clash.
    pub fn generate(&self, id: DeclId) -> Result<String, CodegenError> {
        let decl = self.ctx.graph.get(id);
        if decl.is_builtin() {
            return Err(CodegenError::contract("interface", &decl.name));
        }
        if decl.is_simple() {
            self.generate_alias(id)
        } else {
            self.generate_struct(id)
        }
    }

    fn generate_alias(&self, id: DeclId) -> Result<String, CodegenError> {
        let decl = self.ctx.graph.get(id);
        let base = decl
            .base
            .ok_or_else(|| CodegenError::generation(format!("simple type '{}' has no base", decl.name)))?;

        let mut output = String::new();
        output.push_str(&format!("/// Simple type `{}`.\n", decl.name));
        output.push_str("#[allow(non_camel_case_types)]\n");
        output.push_str(&format!(
            "pub type {} = {};\n",
            self.ctx.type_name(id),
            self.ctx.type_name(base)
        ));
        Ok(output)
    }

    fn generate_struct(&self, id: DeclId) -> Result<String, CodegenError> {
        let decl = self.ctx.graph.get(id);
        let mut output = String::new();
        let mut fields = HashSet::new();

        if decl.is_document {
            output.push_str(&format!("/// Document element `{}`.\n", decl.name));
        } else {
            output.push_str(&format!("/// Complex type `{}`.\n", decl.name));
        }
        output.push_str("#[allow(non_camel_case_types)]\n");
        output.push_str("#[derive(Debug, Clone, Default, PartialEq)]\n");
        output.push_str(&format!("pub struct {} {{\n", self.ctx.type_name(id)));

        if let Some(content) = self.ctx.graph.content_decl(id) {
            fields.insert(CONTENT_FIELD.to_string());
            output.push_str("    /// Text content.\n");
            output.push_str(&format!(
                "    pub {CONTENT_FIELD}: {},\n",
                self.ctx.type_name(content)
            ));
        }

        for member in self.ctx.graph.all_members(id) {
            let field = field_name(member);
            if !fields.insert(field.clone()) {
                return Err(CodegenError::generation(format!(
                    "field '{field}' of '{}' is defined more than once",
                    decl.name
                )));
            }
            let what = if member.is_attribute { "Attribute" } else { "Element" };
            output.push_str(&format!("    /// {what} `{}`.\n", member.xml_name));
            output.push_str(&format!("    pub {field}: {},\n", self.ctx.member_type(member)));
        }

        output.push_str("}\n");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rust::DEFAULT_RUNTIME;
    use xsdbind_schema::{BuiltinKind, QualifiedName, SchemaGraph, compile_schemas};

    const SCHEMA: &str = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" targetNamespace="urn:t">
        <xs:simpleType name="Code"><xs:restriction base="xs:string"/></xs:simpleType>
        <xs:complexType name="Base"><xs:sequence>
            <xs:element name="id" type="xs:long"/>
        </xs:sequence></xs:complexType>
        <xs:complexType name="Derived"><xs:complexContent><xs:extension base="Base">
            <xs:sequence><xs:element name="code" type="Code" minOccurs="0"/></xs:sequence>
            <xs:attribute name="at" type="xs:dateTime"/>
        </xs:extension></xs:complexContent></xs:complexType>
        <xs:complexType name="Amount"><xs:simpleContent><xs:extension base="xs:decimal"/></xs:simpleContent></xs:complexType>
        <xs:complexType name="Clash"><xs:complexContent><xs:extension base="Base">
            <xs:sequence><xs:element name="id" type="xs:int"/></xs:sequence>
        </xs:extension></xs:complexContent></xs:complexType>
    </xs:schema>"#;

    fn graph() -> SchemaGraph {
        compile_schemas(&[SCHEMA]).unwrap()
    }

    fn generate(graph: &SchemaGraph, local: &str) -> Result<String, CodegenError> {
        let id = graph.lookup(&QualifiedName::new("urn:t", local)).unwrap();
        TypeGenerator::new(Context::new(graph, DEFAULT_RUNTIME)).generate(id)
    }

    #[test]
    fn test_alias() {
        let graph = graph();
        let code = generate(&graph, "Code").unwrap();
        assert!(code.contains("pub type Code = String;"));
    }

    #[test]
    fn test_struct_flattens_base_members() {
        let graph = graph();
        let code = generate(&graph, "Derived").unwrap();
        assert!(code.contains("#[derive(Debug, Clone, Default, PartialEq)]"));
        assert!(code.contains("pub struct Derived {"));

        let id = code.find("pub id: i64,").unwrap();
        let own = code.find("pub code: Option<Code>,").unwrap();
        assert!(id < own);
        assert!(code.contains("pub at: xsdbind_core::chrono::NaiveDateTime,"));
        assert!(code.contains("/// Attribute `at`."));
    }

    #[test]
    fn test_content_field() {
        let graph = graph();
        let code = generate(&graph, "Amount").unwrap();
        assert!(code.contains("pub content: f64,"));
    }

    #[test]
    fn test_field_clash() {
        let graph = graph();
        assert!(matches!(
            generate(&graph, "Clash"),
            Err(CodegenError::Generation { .. })
        ));
    }

    #[test]
    fn test_builtins_have_no_interface() {
        let graph = graph();
        let id = graph.lookup(&BuiltinKind::Int.qualified_name()).unwrap();
        let result = TypeGenerator::new(Context::new(&graph, DEFAULT_RUNTIME)).generate(id);
        assert!(matches!(result, Err(CodegenError::ContractViolation { .. })));
    }
}
