//! Artifact assembly over a resolved schema graph.

use crate::error::CodegenError;
use crate::rust::{Context, DEFAULT_RUNTIME, ImplGenerator, TypeGenerator};
use std::collections::HashMap;
use std::fmt;
use xsdbind_schema::{DeclId, SchemaGraph};

const HEADER: &str = "// @generated by xsdbind. Do not edit.\n\n";

/// Name of the index artifact.
pub const INDEX_FILE: &str = "mod.rs";

/// Role of a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Type definition of one declaration.
    Interface,
    /// Marshalling implementation of one complex declaration.
    Implementation,
    /// Module file including every other artifact.
    Index,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interface => f.write_str("interface"),
            Self::Implementation => f.write_str("implementation"),
            Self::Index => f.write_str("index"),
        }
    }
}

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name relative to the output directory.
    pub file_name: String,
    /// Role of the file.
    pub kind: ArtifactKind,
    /// File contents.
    pub contents: String,
}

/// Rust code generator.
///
/// Generation is a pure function of the graph: the same graph always yields
/// the same artifacts, in name order.
pub struct Generator<'a> {
    graph: &'a SchemaGraph,
    runtime: String,
}

impl<'a> Generator<'a> {
    /// Creates a generator emitting code against `xsdbind_core`.
    #[must_use]
    pub fn new(graph: &'a SchemaGraph) -> Self {
        Self {
            graph,
            runtime: DEFAULT_RUNTIME.to_string(),
        }
    }

    /// Sets the path generated code uses for the runtime crate, e.g.
    /// `xsdbind::core` when only the facade crate is a dependency.
    #[must_use]
    pub fn runtime_crate(mut self, path: impl Into<String>) -> Self {
        self.runtime = path.into();
        self
    }

    fn context(&self) -> Context<'_> {
        Context::new(self.graph, &self.runtime)
    }

    /// Generates the artifacts of one declaration: an interface, plus an
    /// implementation for complex declarations.
    ///
    /// # Errors
    /// Returns an error if a fragment operation fails.
    pub fn declaration_artifacts(&self, id: DeclId) -> Result<Vec<Artifact>, CodegenError> {
        let ctx = self.context();
        let decl = self.graph.get(id);
        let ident = ctx.type_name(id);

        let mut artifacts = vec![Artifact {
            file_name: format!("{ident}.rs"),
            kind: ArtifactKind::Interface,
            contents: format!("{HEADER}{}", TypeGenerator::new(ctx).generate(id)?),
        }];
        if decl.is_complex() {
            artifacts.push(Artifact {
                file_name: format!("{ident}.impl.rs"),
                kind: ArtifactKind::Implementation,
                contents: format!("{HEADER}{}", ImplGenerator::new(ctx).generate(id)?),
            });
        }
        Ok(artifacts)
    }

    /// Generates every artifact of the graph, ending with the index.
    ///
    /// # Errors
    /// Returns [`CodegenError::ArtifactCollision`] if two declarations map
    /// to the same file name, or any generation error.
    pub fn generate(&self) -> Result<Vec<Artifact>, CodegenError> {
        let mut artifacts = Vec::new();
        let mut owners: HashMap<String, DeclId> = HashMap::new();

        for (id, decl) in self.graph.user_declarations() {
            tracing::debug!("Generating {}", decl.name);
            for artifact in self.declaration_artifacts(id)? {
                if let Some(&first) = owners.get(&artifact.file_name) {
                    return Err(CodegenError::ArtifactCollision {
                        file_name: artifact.file_name,
                        first: self.graph.get(first).name.to_string(),
                        second: decl.name.to_string(),
                    });
                }
                owners.insert(artifact.file_name.clone(), id);
                artifacts.push(artifact);
            }
        }

        let index = index(&artifacts);
        artifacts.push(index);
        tracing::info!("Generated {} artifacts", artifacts.len());
        Ok(artifacts)
    }

    /// Generates all code as a single module source.
    ///
    /// # Errors
    /// See [`Generator::generate`].
    pub fn generate_module(&self) -> Result<String, CodegenError> {
        let mut output = String::from(HEADER);
        for artifact in self.generate()? {
            if artifact.kind == ArtifactKind::Index {
                continue;
            }
            output.push_str(artifact.contents.trim_start_matches(HEADER));
            output.push('\n');
        }
        Ok(output)
    }
}

fn index(artifacts: &[Artifact]) -> Artifact {
    let mut contents = String::from(HEADER);
    for artifact in artifacts {
        contents.push_str(&format!("include!({:?});\n", artifact.file_name));
    }
    Artifact {
        file_name: INDEX_FILE.to_string(),
        kind: ArtifactKind::Index,
        contents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xsdbind_schema::compile_schemas;

    const WIDGET: &str = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" targetNamespace="urn:t">
        <xs:element name="Widget"><xs:complexType><xs:sequence>
            <xs:element name="label" type="xs:string"/>
            <xs:element name="count" type="xs:int"/>
        </xs:sequence></xs:complexType></xs:element>
        <xs:simpleType name="Code"><xs:restriction base="xs:string"/></xs:simpleType>
    </xs:schema>"#;

    #[test]
    fn test_artifacts_in_name_order() {
        let graph = compile_schemas(&[WIDGET]).unwrap();
        let artifacts = Generator::new(&graph).generate().unwrap();
        let names: Vec<_> = artifacts.iter().map(|a| a.file_name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Code.rs",
                "Widget.rs",
                "Widget.impl.rs",
                "WidgetType.rs",
                "WidgetType.impl.rs",
                "mod.rs",
            ]
        );

        let index = artifacts.last().unwrap();
        assert_eq!(index.kind, ArtifactKind::Index);
        assert!(index.contents.contains("include!(\"WidgetType.impl.rs\");\n"));
        assert!(artifacts.iter().all(|a| a.contents.starts_with(HEADER)));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let graph = compile_schemas(&[WIDGET]).unwrap();
        let first = Generator::new(&graph).generate().unwrap();
        let second = Generator::new(&graph).generate().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_artifact_collision() {
        let other = WIDGET
            .replace("urn:t", "urn:u")
            .replace(r#"<xs:simpleType name="Code"><xs:restriction base="xs:string"/></xs:simpleType>"#, "");
        let graph = compile_schemas(&[WIDGET, &other]).unwrap();
        let err = Generator::new(&graph).generate().unwrap_err();
        assert!(matches!(
            err,
            CodegenError::ArtifactCollision { ref file_name, .. } if file_name == "Widget.rs"
        ));
    }

    #[test]
    fn test_names_differing_in_case_do_not_collide() {
        let graph = compile_schemas(&[r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" targetNamespace="urn:t">
            <xs:complexType name="Order"><xs:sequence>
                <xs:element name="id" type="xs:int"/>
            </xs:sequence></xs:complexType>
            <xs:element name="order" type="Order"/>
        </xs:schema>"#])
        .unwrap();

        let artifacts = Generator::new(&graph).generate().unwrap();
        let names: Vec<_> = artifacts.iter().map(|a| a.file_name.as_str()).collect();
        assert_eq!(
            names,
            ["Order.rs", "Order.impl.rs", "order.rs", "order.impl.rs", "mod.rs"]
        );
        assert!(artifacts[2].contents.contains("pub struct order {"));
    }

    #[test]
    fn test_generate_module() {
        let graph = compile_schemas(&[WIDGET]).unwrap();
        let module = Generator::new(&graph)
            .runtime_crate("xsdbind::core")
            .generate_module()
            .unwrap();
        assert_eq!(module.matches("@generated").count(), 1);
        assert!(module.contains("pub struct Widget {"));
        assert!(module.contains("impl xsdbind::core::XmlDocument for Widget {"));
        assert!(!module.contains("include!"));
    }
}
