//! XML reader.
//!
//! Parses with `roxmltree` and converts the element tree into [`Node`]s.
//! Comments and processing instructions are dropped, whitespace-only text
//! is ignored, and `xsi:type` is lifted into [`Node::type_name`] with its
//! namespace prefix stripped.

use crate::node::{Node, local_part, normalize_text};
use vimsoap_core::{DEFAULT_MAX_DEPTH, Error, Result};

/// The XML Schema instance namespace (`xsi`).
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// The SOAP 1.1 envelope namespace.
pub const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Parse an XML document and return its root element as a [`Node`].
///
/// Element nesting is bounded by [`DEFAULT_MAX_DEPTH`].
pub fn from_xml_str(text: &str) -> Result<Node> {
    from_xml_str_with_depth(text, DEFAULT_MAX_DEPTH)
}

/// Like [`from_xml_str`], with an explicit element nesting limit.
///
/// A well-formed document nested too deeply fails with
/// [`Error::InvalidValue`]; malformed text fails with [`Error::Xml`].
pub fn from_xml_str_with_depth(text: &str, max_depth: usize) -> Result<Node> {
    let doc = roxmltree::Document::parse(text).map_err(Error::xml)?;
    let root = convert(doc.root_element(), 1, max_depth)?;
    tracing::trace!(
        root = %root.qname(),
        children = root.children.len(),
        "parsed XML document"
    );
    Ok(root)
}

fn convert(element: roxmltree::Node<'_, '_>, depth: usize, max_depth: usize) -> Result<Node> {
    if depth > max_depth {
        return Err(Error::invalid(
            "document",
            element.tag_name().name(),
            format!("nesting exceeds {max_depth} levels"),
        ));
    }
    let mut node = Node::new(element.tag_name().name());
    node.namespace = element.tag_name().namespace().map(str::to_string);
    node.type_name = element
        .attribute((XSI_NS, "type"))
        .map(|t| local_part(t).to_string());

    for attr in element.attributes() {
        if attr.namespace().is_none() {
            node.attributes
                .insert(attr.name().to_string(), attr.value().to_string());
        }
    }

    let mut text = String::new();
    for child in element.children() {
        if child.is_element() {
            node.children.push(convert(child, depth + 1, max_depth)?);
        } else if child.is_text()
            && let Some(t) = child.text()
        {
            text.push_str(t);
        }
    }
    node.text = normalize_text(&text);

    Ok(node)
}
