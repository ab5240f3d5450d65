//! Schema walker (pass 1).
//!
//! Walks the element tree of each schema document and registers every
//! declaration it finds. Type references are recorded as qualified names and
//! left unresolved, so a document may refer to types defined later or in
//! another document.

use crate::error::ParseError;
use crate::names::{NamespaceContext, PrefixPolicy, QualifiedName, XS_NAMESPACE};
use crate::registry::Registry;
use crate::types::{DeclId, MaxOccurs, Member, UnresolvedDeclaration};
use xsdbind_core::Element;

/// Walks schema documents into a registry.
#[derive(Debug)]
pub struct Walker<'r> {
    registry: &'r mut Registry,
    policy: PrefixPolicy,
}

/// How the members of a group are constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupRule {
    /// Members keep their own occurrence bounds.
    Sequence,
    /// Members are forced to 0..1.
    Choice,
}

impl<'r> Walker<'r> {
    /// Creates a walker that registers into `registry`.
    pub fn new(registry: &'r mut Registry, policy: PrefixPolicy) -> Self {
        Self { registry, policy }
    }

    /// Walks one schema document.
    ///
    /// # Errors
    /// Returns the first malformed construct or duplicate definition found.
    pub fn walk_document(&mut self, root: &Element) -> Result<(), ParseError> {
        if !root.is(XS_NAMESPACE, "schema") {
            return Err(ParseError::unknown_element(root.name(), "document"));
        }

        let ns = NamespaceContext::for_document(root, self.policy)?;
        tracing::info!("Target namespace: {}", ns.target_namespace());

        for child in root.children() {
            if child.namespace() != Some(XS_NAMESPACE) {
                tracing::debug!("Skipping foreign element '{}'", child.name());
                continue;
            }
            match child.name() {
                "complexType" => {
                    let name = QualifiedName::new(ns.target_namespace(), required(child, "name")?);
                    self.complex_type(&ns, child, name)?;
                }
                "element" => self.document_element(&ns, child)?,
                "simpleType" => self.simple_type(&ns, child)?,
                other => tracing::debug!("Skipping top-level '{}'", other),
            }
        }
        Ok(())
    }

    /// Registers a complex type under `name` and processes its content.
    fn complex_type(
        &mut self,
        ns: &NamespaceContext,
        node: &Element,
        name: QualifiedName,
    ) -> Result<DeclId, ParseError> {
        let id = self.registry.insert(UnresolvedDeclaration::complex(name))?;
        self.content(ns, node, id)?;
        Ok(id)
    }

    fn document_element(&mut self, ns: &NamespaceContext, node: &Element) -> Result<(), ParseError> {
        let local = required(node, "name")?;
        let base = match node.attribute("type") {
            Some(reference) => ns.resolve(reference)?,
            None => {
                let anonymous = node
                    .first_child_named("complexType")
                    .ok_or_else(|| ParseError::missing_element("element", "complexType"))?;
                let name = QualifiedName::new(ns.target_namespace(), format!("{local}Type"));
                self.complex_type(ns, anonymous, name.clone())?;
                name
            }
        };

        let name = QualifiedName::new(ns.target_namespace(), local);
        self.registry
            .insert(UnresolvedDeclaration::document(name, base))?;
        Ok(())
    }

    fn simple_type(&mut self, ns: &NamespaceContext, node: &Element) -> Result<(), ParseError> {
        let name = QualifiedName::new(ns.target_namespace(), required(node, "name")?);
        let restriction = node
            .first_child_named("restriction")
            .ok_or_else(|| ParseError::missing_element("simpleType", "restriction"))?;
        let base = ns.resolve(required(restriction, "base")?)?;

        self.registry.insert(UnresolvedDeclaration::simple(name, base))?;
        Ok(())
    }

    /// Processes the content children of a complex type or extension.
    fn content(&mut self, ns: &NamespaceContext, node: &Element, owner: DeclId) -> Result<(), ParseError> {
        for child in node.children() {
            match xs_name(child) {
                Some("sequence") => {
                    reject_group_occurs(child)?;
                    self.group(ns, child, owner, GroupRule::Sequence)?;
                }
                Some("choice" | "all") => {
                    reject_group_occurs(child)?;
                    self.group(ns, child, owner, GroupRule::Choice)?;
                }
                Some("complexContent" | "simpleContent") => self.extension(ns, child, owner)?,
                Some("attribute") => self.attribute(ns, child, owner)?,
                Some("annotation") => tracing::debug!("Skipping annotation"),
                _ => return Err(ParseError::unknown_element(child.name(), node.name())),
            }
        }
        Ok(())
    }

    fn group(
        &mut self,
        ns: &NamespaceContext,
        node: &Element,
        owner: DeclId,
        rule: GroupRule,
    ) -> Result<(), ParseError> {
        for child in node.children() {
            match xs_name(child) {
                Some("element") => self.member(ns, child, owner, rule)?,
                Some("sequence") => {
                    reject_group_occurs(child)?;
                    self.group(ns, child, owner, rule)?;
                }
                Some("choice" | "all") => {
                    reject_group_occurs(child)?;
                    self.group(ns, child, owner, GroupRule::Choice)?;
                }
                Some("annotation") => tracing::debug!("Skipping annotation"),
                _ => return Err(ParseError::unknown_element(child.name(), node.name())),
            }
        }
        Ok(())
    }

    fn member(
        &mut self,
        ns: &NamespaceContext,
        node: &Element,
        owner: DeclId,
        rule: GroupRule,
    ) -> Result<(), ParseError> {
        let xml_name = required(node, "name")?;
        let (mut min_occurs, mut max_occurs) = occurs(node, xml_name)?;

        if rule == GroupRule::Choice {
            if max_occurs.bound().is_none_or(|max| max > 1) {
                return Err(ParseError::invalid_occurrence(
                    xml_name,
                    format!("maxOccurs={max_occurs} is not allowed in a choice group"),
                ));
            }
            min_occurs = 0;
            max_occurs = MaxOccurs::Bounded(1);
        }

        let type_ref = match node.attribute("type") {
            Some(reference) => ns.resolve(reference)?,
            None => {
                let anonymous = node
                    .first_child_named("complexType")
                    .ok_or_else(|| ParseError::missing_element("element", "complexType"))?;
                let owner_name = self.owner_name(owner)?;
                let name = QualifiedName::new(
                    owner_name.namespace.clone(),
                    format!("{}_{}", owner_name.local, crate::ident::sanitize_identifier(xml_name)),
                );
                self.complex_type(ns, anonymous, name.clone())?;
                name
            }
        };

        let member = Member::element(xml_name, type_ref).with_occurs(min_occurs, max_occurs);
        self.push_member(owner, member)
    }

    fn extension(&mut self, ns: &NamespaceContext, node: &Element, owner: DeclId) -> Result<(), ParseError> {
        let extension = node
            .first_child_named("extension")
            .ok_or_else(|| ParseError::missing_element(node.name(), "extension"))?;
        let base = ns.resolve(required(extension, "base")?)?;

        if let Some(decl) = self.registry.get_mut(owner) {
            decl.base = Some(base);
        }
        self.content(ns, extension, owner)
    }

    fn attribute(&mut self, ns: &NamespaceContext, node: &Element, owner: DeclId) -> Result<(), ParseError> {
        let xml_name = required(node, "name")?;
        let type_ref = ns.resolve(required(node, "type")?)?;
        let required = node.attribute("use") != Some("optional");

        self.push_member(owner, Member::attribute(xml_name, type_ref, required))
    }

    fn owner_name(&self, owner: DeclId) -> Result<QualifiedName, ParseError> {
        self.registry
            .get(owner)
            .map(|decl| decl.name.clone())
            .ok_or_else(|| ParseError::unknown_element("element", "unregistered owner"))
    }

    fn push_member(&mut self, owner: DeclId, member: Member<QualifiedName>) -> Result<(), ParseError> {
        let decl = self
            .registry
            .get_mut(owner)
            .ok_or_else(|| ParseError::unknown_element(member.xml_name.clone(), "unregistered owner"))?;
        tracing::debug!("New member {} of {}", member.name, decl.name);
        decl.add_member(member);
        Ok(())
    }
}

/// Returns the local name of an element in the XML Schema namespace.
fn xs_name(node: &Element) -> Option<&str> {
    (node.namespace() == Some(XS_NAMESPACE)).then(|| node.name())
}

fn required<'a>(node: &'a Element, attribute: &str) -> Result<&'a str, ParseError> {
    node.attribute(attribute)
        .ok_or_else(|| ParseError::missing_attr(node.name(), attribute))
}

fn occurs(node: &Element, member: &str) -> Result<(u32, MaxOccurs), ParseError> {
    let min_occurs = match node.attribute("minOccurs") {
        Some(text) => text
            .trim()
            .parse::<u32>()
            .map_err(|_| ParseError::invalid_attr(member, "minOccurs", text))?,
        None => 1,
    };
    let max_occurs = match node.attribute("maxOccurs").map(str::trim) {
        Some("unbounded") => MaxOccurs::Unbounded,
        Some(text) => MaxOccurs::Bounded(
            text.parse::<u32>()
                .map_err(|_| ParseError::invalid_attr(member, "maxOccurs", text))?,
        ),
        None => MaxOccurs::Bounded(1),
    };

    if max_occurs.bound().is_some_and(|max| max < min_occurs) {
        return Err(ParseError::invalid_occurrence(
            member,
            format!("maxOccurs={max_occurs} is less than minOccurs={min_occurs}"),
        ));
    }
    Ok((min_occurs, max_occurs))
}

/// Rejects occurrence bounds on a group other than the default of exactly
/// once, since repeated or optional groups are not modelled.
fn reject_group_occurs(node: &Element) -> Result<(), ParseError> {
    for attribute in ["minOccurs", "maxOccurs"] {
        if let Some(value) = node.attribute(attribute).filter(|value| value.trim() != "1") {
            return Err(ParseError::invalid_occurrence(
                node.name(),
                format!("{attribute}={value} is not supported on a {} group", node.name()),
            ));
        }
    }
    Ok(())
}
