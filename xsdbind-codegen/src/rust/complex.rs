//! Fragments of complex declarations.

use super::fragments::{Fragments, Sink, fragments_for};
use super::scalar::format_call;
use super::{CONTENT_FIELD, Context, field_name, indent, literal};
use crate::error::CodegenError;
use xsdbind_schema::{Arity, DeclId, Member};

/// Fragments of a complex declaration.
///
/// Inheritance is composition: the appender and parser of a derived type
/// start with those of its base, and a scalar base contributes the element's
/// text content.
#[derive(Debug, Clone, Copy)]
pub struct ComplexFragments<'a> {
    ctx: Context<'a>,
    id: DeclId,
}

impl<'a> ComplexFragments<'a> {
    /// Creates the fragments of complex declaration `id`.
    #[must_use]
    pub fn new(ctx: Context<'a>, id: DeclId) -> Self {
        Self { ctx, id }
    }

    fn violation(&self, operation: &'static str) -> CodegenError {
        CodegenError::contract(operation, &self.ctx.graph.get(self.id).name)
    }

    fn content_setter(&self, base: DeclId) -> Result<String, CodegenError> {
        let kind = self.ctx.graph.scalar_kind(base).ok_or_else(|| {
            CodegenError::generation(format!(
                "no scalar kind for content of '{}'",
                self.ctx.graph.get(self.id).name
            ))
        })?;
        let value = format!("&self.{CONTENT_FIELD}");
        Ok(format!("node.set_text({});\n", format_call(self.ctx.runtime, kind, &value)))
    }

    fn member_appender(&self, member: &Member<DeclId>) -> Result<String, CodegenError> {
        let field = field_name(member);
        let target = fragments_for(self.ctx, member.type_ref);
        let boxed = self.ctx.is_boxed(member);
        let write = |value: &str| {
            if member.is_attribute {
                target.attribute_setter(value, &member.xml_name)
            } else {
                target.element_setter(value, &member.xml_name)
            }
        };

        Ok(match member.arity() {
            Arity::Scalar if boxed => write(&format!("&*self.{field}"))?,
            Arity::Scalar => write(&format!("&self.{field}"))?,
            Arity::Optional => format!(
                "if let Some(value) = &self.{field} {{\n{}}}\n",
                indent(&write(if boxed { "&**value" } else { "value" })?, 1)
            ),
            Arity::Array => format!(
                "for value in &self.{field} {{\n{}}}\n",
                indent(&write("value")?, 1)
            ),
        })
    }

    fn member_parser(&self, member: &Member<DeclId>) -> Result<String, CodegenError> {
        let field = field_name(member);
        let target = fragments_for(self.ctx, member.type_ref);
        let name = literal(&member.xml_name);
        let place = format!("self.{field}");

        if member.is_attribute {
            return Ok(match member.arity() {
                Arity::Scalar => format!(
                    "{{\n    let text = node.required_attribute({name})?;\n{}}}\n",
                    indent(&target.attribute_parser(&Sink::Assign(place), "text")?, 1)
                ),
                Arity::Optional => format!(
                    "if let Some(text) = node.attribute({name}) {{\n{}}}\n",
                    indent(&target.attribute_parser(&Sink::Optional(place), "text")?, 1)
                ),
                Arity::Array => format!(
                    "if let Some(text) = node.attribute({name}) {{\n{}}}\n",
                    indent(&target.attribute_parser(&Sink::Push(place), "text")?, 1)
                ),
            });
        }

        Ok(match member.arity() {
            Arity::Scalar => format!(
                "{{\n    let child = node.required_child({name})?;\n{}}}\n",
                indent(&target.member_setter(&Sink::Assign(place), "child")?, 1)
            ),
            Arity::Optional => format!(
                "if let Some(child) = node.first_child_named({name}) {{\n{}}}\n",
                indent(&target.member_setter(&Sink::Optional(place), "child")?, 1)
            ),
            Arity::Array => {
                let max = match member.max_occurs.bound() {
                    Some(max) => format!("Some({max})"),
                    None => "None".to_string(),
                };
                format!(
                    "for child in node.children_named({name}) {{\n{}}}\n\
                     {}::check_occurs({name}, self.{field}.len(), {}, {max})?;\n",
                    indent(&target.member_setter(&Sink::Push(place), "child")?, 1),
                    self.ctx.runtime,
                    member.min_occurs,
                )
            }
        })
    }
}

impl Fragments for ComplexFragments<'_> {
    fn appender(&self) -> Result<String, CodegenError> {
        let decl = self.ctx.graph.get(self.id);
        let mut output = String::new();

        if let Some(base) = decl.base {
            if self.ctx.graph.get(base).is_complex() {
                output.push_str(&fragments_for(self.ctx, base).appender()?);
            } else {
                output.push_str(&self.content_setter(base)?);
            }
        }
        for member in &decl.members {
            output.push_str(&self.member_appender(member)?);
        }
        Ok(output)
    }

    fn element_setter(&self, value: &str, node_name: &str) -> Result<String, CodegenError> {
        let rt = self.ctx.runtime;
        let mut output = String::new();
        output.push_str("{\n");
        output.push_str(&format!(
            "    let mut child = {rt}::Element::new({});\n",
            literal(node_name)
        ));
        output.push_str(&format!(
            "    {rt}::XmlComplex::append_children({value}, &mut child);\n"
        ));
        output.push_str("    node.push_child(child);\n");
        output.push_str("}\n");
        Ok(output)
    }

    fn attribute_setter(&self, _value: &str, _attr_name: &str) -> Result<String, CodegenError> {
        Err(self.violation("attribute_setter"))
    }

    fn parser(&self) -> Result<String, CodegenError> {
        let decl = self.ctx.graph.get(self.id);
        let mut output = String::new();

        if let Some(base) = decl.base {
            let base_fragments = fragments_for(self.ctx, base);
            if self.ctx.graph.get(base).is_complex() {
                output.push_str(&base_fragments.parser()?);
            } else {
                let sink = Sink::Assign(format!("self.{CONTENT_FIELD}"));
                output.push_str(&base_fragments.member_setter(&sink, "node")?);
            }
        }
        for member in &decl.members {
            output.push_str(&self.member_parser(member)?);
        }
        Ok(output)
    }

    fn member_setter(&self, sink: &Sink, node: &str) -> Result<String, CodegenError> {
        let rt = self.ctx.runtime;
        let mut output = String::new();
        output.push_str("{\n");
        output.push_str(&format!(
            "    let mut value = {}::default();\n",
            self.ctx.type_name(self.id)
        ));
        output.push_str(&format!(
            "    {rt}::XmlComplex::parse_children(&mut value, {node})?;\n"
        ));
        output.push_str(&indent(&sink.store("value", true), 1));
        output.push_str("}\n");
        Ok(output)
    }

    fn attribute_parser(&self, _sink: &Sink, _text: &str) -> Result<String, CodegenError> {
        Err(self.violation("attribute_parser"))
    }
}
