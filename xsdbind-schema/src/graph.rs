//! The resolved, immutable schema graph consumed by code generation.

use crate::builtins::BuiltinKind;
use crate::names::QualifiedName;
use crate::types::{DeclId, Member, ResolvedDeclaration};
use std::collections::BTreeMap;

/// Every declaration of a compilation with all references bound to ids.
///
/// A graph can only be obtained from [`crate::Registry::resolve`], so holding
/// one proves that no reference dangles and that every base chain ends.
#[derive(Debug, Clone)]
pub struct SchemaGraph {
    decls: Vec<ResolvedDeclaration>,
    index: BTreeMap<QualifiedName, DeclId>,
}

impl SchemaGraph {
    pub(crate) fn new(decls: Vec<ResolvedDeclaration>, index: BTreeMap<QualifiedName, DeclId>) -> Self {
        Self { decls, index }
    }

    /// Returns a declaration by id.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this graph.
    #[must_use]
    pub fn get(&self, id: DeclId) -> &ResolvedDeclaration {
        &self.decls[id.index()]
    }

    /// Looks up a declaration id by name.
    #[must_use]
    pub fn lookup(&self, name: &QualifiedName) -> Option<DeclId> {
        self.index.get(name).copied()
    }

    /// Looks up a declaration by name.
    #[must_use]
    pub fn declaration(&self, name: &QualifiedName) -> Option<&ResolvedDeclaration> {
        self.lookup(name).map(|id| self.get(id))
    }

    /// Iterates over all declarations in name order.
    pub fn iter(&self) -> impl Iterator<Item = (DeclId, &ResolvedDeclaration)> {
        self.index.values().map(|&id| (id, self.get(id)))
    }

    /// Iterates over the declarations that need generated code.
    pub fn user_declarations(&self) -> impl Iterator<Item = (DeclId, &ResolvedDeclaration)> {
        self.iter().filter(|(_, decl)| !decl.is_builtin())
    }

    /// Number of declarations, built-ins included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    /// Returns true if the graph holds no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Returns the bases of `id`, nearest first.
    #[must_use]
    pub fn base_chain(&self, id: DeclId) -> Vec<DeclId> {
        let mut chain = Vec::new();
        let mut current = self.get(id).base;
        while let Some(base) = current {
            if base == id || chain.contains(&base) {
                break;
            }
            chain.push(base);
            current = self.get(base).base;
        }
        chain
    }

    /// Returns the built-in kind at the root of a simple chain.
    ///
    /// Complex declarations have no scalar kind.
    #[must_use]
    pub fn scalar_kind(&self, id: DeclId) -> Option<BuiltinKind> {
        let decl = self.get(id);
        if !decl.is_simple() {
            return None;
        }
        std::iter::once(id)
            .chain(self.base_chain(id))
            .find_map(|id| self.get(id).builtin)
    }

    /// Returns the simple declaration providing the text content of a
    /// complex declaration (`simpleContent`), the first simple declaration of
    /// its base chain.
    #[must_use]
    pub fn content_decl(&self, id: DeclId) -> Option<DeclId> {
        if !self.get(id).is_complex() {
            return None;
        }
        self.base_chain(id)
            .into_iter()
            .find(|&base| self.get(base).is_simple())
    }

    /// Returns all members of a complex declaration, those of its complex
    /// bases first, root-most base first.
    #[must_use]
    pub fn all_members(&self, id: DeclId) -> Vec<&Member<DeclId>> {
        let mut chain: Vec<DeclId> = self
            .base_chain(id)
            .into_iter()
            .take_while(|&base| self.get(base).is_complex())
            .collect();
        chain.reverse();
        chain.push(id);

        chain
            .into_iter()
            .flat_map(|id| self.get(id).members.iter())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::SchemaSet;
    use crate::builtins::BuiltinKind;
    use crate::names::QualifiedName;

    const SCHEMA: &str = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" targetNamespace="urn:t">
        <xs:simpleType name="Code"><xs:restriction base="xs:string"/></xs:simpleType>
        <xs:simpleType name="ShortCode"><xs:restriction base="Code"/></xs:simpleType>
        <xs:complexType name="Base"><xs:sequence>
            <xs:element name="id" type="xs:long"/>
        </xs:sequence></xs:complexType>
        <xs:complexType name="Derived"><xs:complexContent><xs:extension base="Base">
            <xs:sequence><xs:element name="code" type="ShortCode"/></xs:sequence>
        </xs:extension></xs:complexContent></xs:complexType>
        <xs:complexType name="Amount"><xs:simpleContent><xs:extension base="xs:decimal">
            <xs:attribute name="currency" type="xs:string"/>
        </xs:extension></xs:simpleContent></xs:complexType>
        <xs:element name="Doc" type="Derived"/>
    </xs:schema>"#;

    fn name(local: &str) -> QualifiedName {
        QualifiedName::new("urn:t", local)
    }

    #[test]
    fn test_scalar_kind_follows_simple_chain() {
        let graph = crate::compile_schemas(&[SCHEMA]).unwrap();
        let short_code = graph.lookup(&name("ShortCode")).unwrap();
        assert_eq!(graph.scalar_kind(short_code), Some(BuiltinKind::String));
        assert_eq!(graph.base_chain(short_code).len(), 2);

        let derived = graph.lookup(&name("Derived")).unwrap();
        assert_eq!(graph.scalar_kind(derived), None);
    }

    #[test]
    fn test_all_members_base_first() {
        let graph = crate::compile_schemas(&[SCHEMA]).unwrap();
        let derived = graph.lookup(&name("Derived")).unwrap();
        let names: Vec<_> = graph
            .all_members(derived)
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, ["id", "code"]);

        // A document's members come from its type through the base link.
        let doc = graph.lookup(&name("Doc")).unwrap();
        assert_eq!(graph.all_members(doc).len(), 2);
    }

    #[test]
    fn test_content_decl() {
        let graph = crate::compile_schemas(&[SCHEMA]).unwrap();
        let amount = graph.lookup(&name("Amount")).unwrap();
        let content = graph.content_decl(amount).unwrap();
        assert_eq!(content, graph.lookup(&BuiltinKind::Decimal.qualified_name()).unwrap());
        assert_eq!(graph.scalar_kind(content), Some(BuiltinKind::Decimal));
        assert_eq!(graph.all_members(amount).len(), 1);

        let derived = graph.lookup(&name("Derived")).unwrap();
        assert_eq!(graph.content_decl(derived), None);

        let short_code = graph.lookup(&name("ShortCode")).unwrap();
        assert_eq!(graph.content_decl(short_code), None);
    }

    #[test]
    fn test_user_declarations_skip_builtins() {
        let graph = SchemaSet::new().compile_str(SCHEMA).unwrap();
        assert_eq!(graph.user_declarations().count(), 6);
        assert_eq!(graph.len(), BuiltinKind::ALL.len() + 6);
    }
}
