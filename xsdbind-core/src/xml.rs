//! Reading and writing [`Element`] trees as XML text.

use crate::dom::Element;
use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::escape::{escape, unescape};
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;

/// Namespace bound to the reserved `xml` prefix.
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

impl Element {
    /// Parses an XML document into its root element.
    ///
    /// Namespace prefixes are resolved against the `xmlns` declarations in
    /// scope. Whitespace-only text between child elements is dropped.
    ///
    /// # Errors
    /// Returns an error if the XML is malformed, has no root element, or uses
    /// an undeclared prefix.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    stack.push(start_element(e)?);
                }
                Ok(Event::Empty(ref e)) => {
                    let element = start_element(e)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Ok(Event::End(_)) => {
                    let mut element = stack
                        .pop()
                        .ok_or_else(|| Error::malformed("unbalanced end tag"))?;
                    element.normalize_text();
                    attach(&mut stack, &mut root, element)?;
                }
                Ok(Event::Text(ref t)) => {
                    if let Some(current) = stack.last_mut() {
                        let raw = std::str::from_utf8(t.as_ref())?;
                        current.append_text(&unescape(raw)?);
                    }
                }
                Ok(Event::CData(ref t)) => {
                    if let Some(current) = stack.last_mut() {
                        current.append_text(std::str::from_utf8(t.as_ref())?);
                    }
                }
                Ok(Event::GeneralRef(ref r)) => {
                    if let Some(current) = stack.last_mut() {
                        let name = std::str::from_utf8(r.as_ref())?;
                        current.append_text(&resolve_entity(name)?.to_string());
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(Error::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        if !stack.is_empty() {
            return Err(Error::malformed("unexpected end of document"));
        }

        let mut root = root.ok_or_else(|| Error::malformed("no root element"))?;
        let mut scope = HashMap::new();
        scope.insert(Some("xml".to_string()), XML_NAMESPACE.to_string());
        resolve_namespaces(&mut root, &scope)?;
        Ok(root)
    }

    /// Serializes this element and its descendants as XML text.
    ///
    /// A default namespace declaration is emitted wherever an element's
    /// namespace differs from the one in scope.
    #[must_use]
    pub fn to_xml_string(&self) -> String {
        let mut output = String::new();
        write_element(self, None, &mut output);
        output
    }
}

fn start_element(e: &BytesStart<'_>) -> Result<Element> {
    let qname = std::str::from_utf8(e.name().as_ref())?.to_string();
    let mut element = match qname.split_once(':') {
        Some((prefix, local)) => Element::new(local).with_prefix(prefix),
        None => Element::new(qname),
    };

    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;
        element.set_attribute(key, unescape(value)?);
    }

    Ok(element)
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => {
            parent.push_child(element);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(element);
            Ok(())
        }
        None => Err(Error::malformed("more than one root element")),
    }
}

fn resolve_entity(name: &str) -> Result<char> {
    let resolved = match name {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "apos" => Some('\''),
        "quot" => Some('"'),
        _ => name.strip_prefix('#').and_then(|code| {
            let value = match code.strip_prefix('x') {
                Some(hex) => u32::from_str_radix(hex, 16).ok(),
                None => code.parse().ok(),
            };
            value.and_then(char::from_u32)
        }),
    };
    resolved.ok_or_else(|| Error::malformed(format!("unknown entity reference '&{name};'")))
}

fn resolve_namespaces(
    element: &mut Element,
    inherited: &HashMap<Option<String>, String>,
) -> Result<()> {
    let mut scope = inherited.clone();
    for (prefix, uri) in element.namespace_declarations() {
        scope.insert(prefix.map(str::to_string), uri.to_string());
    }

    let key = element.prefix().map(str::to_string);
    let namespace = match scope.get(&key) {
        Some(uri) if !uri.is_empty() => Some(uri.clone()),
        Some(_) => None,
        None if key.is_none() => None,
        None => {
            return Err(Error::malformed(format!(
                "undeclared namespace prefix '{}' on element '{}'",
                key.unwrap_or_default(),
                element.name()
            )));
        }
    };
    element.set_namespace(namespace);

    for child in element.children_mut() {
        resolve_namespaces(child, &scope)?;
    }
    Ok(())
}

fn write_element(element: &Element, default_ns: Option<&str>, output: &mut String) {
    let qname = match element.prefix() {
        Some(prefix) => format!("{}:{}", prefix, element.name()),
        None => element.name().to_string(),
    };

    output.push('<');
    output.push_str(&qname);

    let mut in_scope = default_ns;
    if element.prefix().is_none() && element.namespace() != default_ns {
        output.push_str(&format!(
            " xmlns=\"{}\"",
            escape(element.namespace().unwrap_or_default())
        ));
        in_scope = element.namespace();
    }
    for attr in element.attributes() {
        if attr.name == "xmlns" {
            continue;
        }
        output.push_str(&format!(" {}=\"{}\"", attr.name, escape(attr.value.as_str())));
    }

    if element.children().is_empty() && element.text().is_none() {
        output.push_str("/>");
        return;
    }

    output.push('>');
    if let Some(text) = element.text() {
        output.push_str(&escape(text));
    }
    for child in element.children() {
        write_element(child, in_scope, output);
    }
    output.push_str(&format!("</{qname}>"));
}
