//! Fragments of scalar declarations: built-ins and simple type restrictions.

use super::fragments::{Fragments, Sink, fragments_for};
use super::{Context, indent, literal};
use crate::error::CodegenError;
use xsdbind_schema::{BuiltinKind, DeclId, TextFamily};

/// Returns the expression formatting the `&T` expression `value` as text.
#[must_use]
pub fn format_call(runtime: &str, kind: BuiltinKind, value: &str) -> String {
    let function = match kind.family() {
        TextFamily::Integer => "format_integer",
        TextFamily::Float => "format_float",
        TextFamily::Text => "format_text",
        TextFamily::Boolean => "format_boolean",
        TextFamily::Date => "format_date",
        TextFamily::Time => "format_time",
        TextFamily::DateTime => "format_date_time",
    };
    format!("{runtime}::text::{function}({value})")
}

/// Returns the expression parsing the `&str` expression `text` into a value.
#[must_use]
pub fn parse_call(runtime: &str, kind: BuiltinKind, text: &str) -> String {
    let ty = kind.rust_type();
    match kind.family() {
        TextFamily::Integer => format!("{runtime}::text::parse_integer::<{ty}>({text})?"),
        TextFamily::Float => format!("{runtime}::text::parse_float::<{ty}>({text})?"),
        TextFamily::Text => format!("{text}.to_owned()"),
        TextFamily::Boolean => format!("{runtime}::text::parse_boolean({text})?"),
        TextFamily::Date => format!("{runtime}::text::parse_date({text})?"),
        TextFamily::Time => format!("{runtime}::text::parse_time({text})?"),
        TextFamily::DateTime => format!("{runtime}::text::parse_date_time({text})?"),
    }
}

/// Fragments of a built-in kind.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinFragments<'a> {
    ctx: Context<'a>,
    id: DeclId,
    kind: BuiltinKind,
}

impl<'a> BuiltinFragments<'a> {
    /// Creates the fragments of built-in declaration `id`.
    #[must_use]
    pub fn new(ctx: Context<'a>, id: DeclId, kind: BuiltinKind) -> Self {
        Self { ctx, id, kind }
    }

    fn violation(&self, operation: &'static str) -> CodegenError {
        CodegenError::contract(operation, &self.ctx.graph.get(self.id).name)
    }
}

impl Fragments for BuiltinFragments<'_> {
    fn appender(&self) -> Result<String, CodegenError> {
        Err(self.violation("appender"))
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
            "    child.set_text({});\n",
            format_call(rt, self.kind, value)
        ));
        output.push_str("    node.push_child(child);\n");
        output.push_str("}\n");
        Ok(output)
    }

    fn attribute_setter(&self, value: &str, attr_name: &str) -> Result<String, CodegenError> {
        Ok(format!(
            "node.set_attribute({}, {});\n",
            literal(attr_name),
            format_call(self.ctx.runtime, self.kind, value)
        ))
    }

    fn parser(&self) -> Result<String, CodegenError> {
        Err(self.violation("parser"))
    }

    fn member_setter(&self, sink: &Sink, node: &str) -> Result<String, CodegenError> {
        let store = sink.store(&parse_call(self.ctx.runtime, self.kind, "text"), false);
        let mut output = String::new();
        if sink.is_optional() {
            output.push_str(&format!(
                "if let Some(text) = {node}.text().filter(|text| !text.is_empty()) {{\n"
            ));
        } else {
            output.push_str("{\n");
            output.push_str(&format!("    let text = {node}.text().unwrap_or_default();\n"));
        }
        output.push_str(&indent(&store, 1));
        output.push_str("}\n");
        Ok(output)
    }

    fn attribute_parser(&self, sink: &Sink, text: &str) -> Result<String, CodegenError> {
        Ok(sink.store(&parse_call(self.ctx.runtime, self.kind, text), false))
    }
}

/// Fragments of a user simple type. Values are held in the base's Rust type,
/// so every operation is the base's.
#[derive(Debug, Clone, Copy)]
pub struct SimpleFragments<'a> {
    ctx: Context<'a>,
    id: DeclId,
}

impl<'a> SimpleFragments<'a> {
    /// Creates the fragments of simple declaration `id`.
    #[must_use]
    pub fn new(ctx: Context<'a>, id: DeclId) -> Self {
        Self { ctx, id }
    }

    fn base(&self, operation: &'static str) -> Result<Box<dyn Fragments + 'a>, CodegenError> {
        let decl = self.ctx.graph.get(self.id);
        decl.base
            .map(|base| fragments_for(self.ctx, base))
            .ok_or_else(|| CodegenError::contract(operation, &decl.name))
    }
}

impl Fragments for SimpleFragments<'_> {
    fn appender(&self) -> Result<String, CodegenError> {
        Err(CodegenError::contract("appender", &self.ctx.graph.get(self.id).name))
    }

    fn element_setter(&self, value: &str, node_name: &str) -> Result<String, CodegenError> {
        self.base("element_setter")?.element_setter(value, node_name)
    }

    fn attribute_setter(&self, value: &str, attr_name: &str) -> Result<String, CodegenError> {
        self.base("attribute_setter")?.attribute_setter(value, attr_name)
    }

    fn parser(&self) -> Result<String, CodegenError> {
        Err(CodegenError::contract("parser", &self.ctx.graph.get(self.id).name))
    }

    fn member_setter(&self, sink: &Sink, node: &str) -> Result<String, CodegenError> {
        self.base("member_setter")?.member_setter(sink, node)
    }

    fn attribute_parser(&self, sink: &Sink, text: &str) -> Result<String, CodegenError> {
        self.base("attribute_parser")?.attribute_parser(sink, text)
    }
}
