//! Registry of declarations collected during pass 1.

use crate::builtins::BuiltinKind;
use crate::error::ParseError;
use crate::names::QualifiedName;
use crate::types::{DeclId, UnresolvedDeclaration};
use std::collections::BTreeMap;

/// Arena of unresolved declarations keyed by qualified name.
///
/// A new registry already holds one declaration per [`BuiltinKind`].
#[derive(Debug, Clone)]
pub struct Registry {
    pub(crate) decls: Vec<UnresolvedDeclaration>,
    pub(crate) index: BTreeMap<QualifiedName, DeclId>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates a registry seeded with the built-in declarations.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            decls: Vec::with_capacity(BuiltinKind::ALL.len()),
            index: BTreeMap::new(),
        };
        for kind in BuiltinKind::ALL {
            let decl = UnresolvedDeclaration::builtin(kind);
            let id = DeclId::from_index(registry.decls.len());
            registry.index.insert(decl.name.clone(), id);
            registry.decls.push(decl);
        }
        registry
    }

    /// Adds a declaration.
    ///
    /// # Errors
    /// Returns [`ParseError::DuplicateDefinition`] if the name is taken,
    /// built-in names included.
    pub fn insert(&mut self, decl: UnresolvedDeclaration) -> Result<DeclId, ParseError> {
        if self.index.contains_key(&decl.name) {
            return Err(ParseError::duplicate(decl.name.to_string()));
        }
        tracing::debug!("New {}: {}", decl.kind, decl.name);

        let id = DeclId::from_index(self.decls.len());
        self.index.insert(decl.name.clone(), id);
        self.decls.push(decl);
        Ok(id)
    }

    /// Looks up a declaration id by name.
    #[must_use]
    pub fn lookup(&self, name: &QualifiedName) -> Option<DeclId> {
        self.index.get(name).copied()
    }

    /// Returns true if a declaration with this name exists.
    #[must_use]
    pub fn contains(&self, name: &QualifiedName) -> bool {
        self.index.contains_key(name)
    }

    /// Returns a declaration by id.
    #[must_use]
    pub fn get(&self, id: DeclId) -> Option<&UnresolvedDeclaration> {
        self.decls.get(id.index())
    }

    /// Returns a declaration by id for modification.
    pub fn get_mut(&mut self, id: DeclId) -> Option<&mut UnresolvedDeclaration> {
        self.decls.get_mut(id.index())
    }

    /// Number of declarations, built-ins included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    /// Returns true if the registry holds no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Iterates over declarations in name order.
    pub fn iter(&self) -> impl Iterator<Item = (DeclId, &UnresolvedDeclaration)> {
        self.index
            .values()
            .filter_map(|&id| self.decls.get(id.index()).map(|decl| (id, decl)))
    }
}
