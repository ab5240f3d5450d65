//! Reference resolver (pass 2).
//!
//! Turns the registry into a [`SchemaGraph`], binding every base and member
//! type reference to a declaration id, then checks that no base chain loops.

use crate::error::SchemaError;
use crate::graph::SchemaGraph;
use crate::names::QualifiedName;
use crate::registry::Registry;
use crate::types::{DeclId, Declaration, Member, ResolvedDeclaration, UnresolvedDeclaration};
use std::collections::{BTreeMap, HashSet};

impl Registry {
    /// Resolves every reference in the registry.
    ///
    /// Declarations are visited in name order and the first failure is
    /// returned; on failure no graph is produced.
    ///
    /// # Errors
    /// Returns [`SchemaError::UndefinedBase`] or [`SchemaError::UndefinedType`]
    /// for a dangling reference, [`SchemaError::IncompatibleBase`] for a simple
    /// type derived from a complex one,
    /// [`SchemaError::CircularInheritance`] for a looping base chain and
    /// [`SchemaError::ComplexAttribute`] for an attribute of complex type.
    pub fn resolve(self) -> Result<SchemaGraph, SchemaError> {
        tracing::info!("Resolving {} declarations", self.len());
        let Registry { decls, index } = self;

        let mut pending: Vec<Option<UnresolvedDeclaration>> = decls.into_iter().map(Some).collect();
        let mut resolved: Vec<Option<ResolvedDeclaration>> = Vec::with_capacity(pending.len());
        resolved.resize_with(pending.len(), || None);

        for &id in index.values() {
            let Some(decl) = pending.get_mut(id.index()).and_then(Option::take) else {
                continue;
            };
            resolved[id.index()] = Some(bind(decl, &index)?);
        }

        let decls: Vec<ResolvedDeclaration> = resolved.into_iter().flatten().collect();
        check_bases(&decls, &index)?;
        check_attributes(&decls, &index)?;

        tracing::info!("Resolved {} declarations", decls.len());
        Ok(SchemaGraph::new(decls, index))
    }
}

fn bind(
    decl: UnresolvedDeclaration,
    index: &BTreeMap<QualifiedName, DeclId>,
) -> Result<ResolvedDeclaration, SchemaError> {
    let base = match decl.base {
        Some(base) => Some(index.get(&base).copied().ok_or_else(|| SchemaError::UndefinedBase {
            base: base.to_string(),
            owner: decl.name.to_string(),
        })?),
        None => None,
    };

    let members = decl
        .members
        .into_iter()
        .map(|member| {
            let id = index
                .get(&member.type_ref)
                .copied()
                .ok_or_else(|| SchemaError::UndefinedType {
                    type_name: member.type_ref.to_string(),
                    member: member.name.clone(),
                    owner: decl.name.to_string(),
                })?;
            Ok(member.with_type(id))
        })
        .collect::<Result<Vec<Member<DeclId>>, SchemaError>>()?;

    Ok(Declaration {
        name: decl.name,
        kind: decl.kind,
        builtin: decl.builtin,
        is_document: decl.is_document,
        base,
        members,
    })
}

fn check_bases(
    decls: &[ResolvedDeclaration],
    index: &BTreeMap<QualifiedName, DeclId>,
) -> Result<(), SchemaError> {
    for &id in index.values() {
        let decl = &decls[id.index()];

        if let Some(base) = decl.base {
            let base_decl = &decls[base.index()];
            if decl.is_simple() && base_decl.is_complex() {
                return Err(SchemaError::IncompatibleBase {
                    base: base_decl.name.to_string(),
                    owner: decl.name.to_string(),
                    reason: "a simple type can only restrict another simple type".to_string(),
                });
            }
        }

        let mut seen = HashSet::from([id]);
        let mut path = vec![decl.name.to_string()];
        let mut current = decl.base;
        while let Some(base) = current {
            path.push(decls[base.index()].name.to_string());
            if !seen.insert(base) {
                return Err(SchemaError::CircularInheritance {
                    path: path.join(" -> "),
                });
            }
            current = decls[base.index()].base;
        }
    }
    Ok(())
}

fn check_attributes(
    decls: &[ResolvedDeclaration],
    index: &BTreeMap<QualifiedName, DeclId>,
) -> Result<(), SchemaError> {
    for &id in index.values() {
        let decl = &decls[id.index()];
        for member in decl.members.iter().filter(|m| m.is_attribute) {
            let type_decl = &decls[member.type_ref.index()];
            if type_decl.is_complex() {
                return Err(SchemaError::ComplexAttribute {
                    attribute: member.xml_name.clone(),
                    type_name: type_decl.name.to_string(),
                    owner: decl.name.to_string(),
                });
            }
        }
    }
    Ok(())
}
