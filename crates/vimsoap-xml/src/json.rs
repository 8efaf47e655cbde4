//! JSON reader.
//!
//! The vim25 JSON protocol marks polymorphic objects with a `_typeName`
//! discriminator:
//!
//! ```json
//! {
//!   "_typeName": "InvalidLogin",
//!   "faultstring": "Cannot complete login due to an incorrect user name or password."
//! }
//! ```
//!
//! Objects become [`Node`]s whose children are the object's keys. Arrays
//! become repeated children with the same name, so a JSON array of
//! `faultMessage` objects reads exactly like repeated XML elements.

use crate::node::Node;
use serde_json::Value;
use vimsoap_core::text::truncate;
use vimsoap_core::{DEFAULT_MAX_DEPTH, Error, Result};

/// Key holding the polymorphic type name of a JSON object.
pub const TYPE_NAME_KEY: &str = "_typeName";

/// Key holding the payload of a boxed primitive, as in
/// `{"_typeName": "string", "_value": "52e3"}`.
pub const VALUE_KEY: &str = "_value";

const ROOT_PREVIEW: usize = 64;

/// Parse a JSON document into a [`Node`] named after its `_typeName`.
///
/// The root must be an object. Nesting is bounded by [`DEFAULT_MAX_DEPTH`].
pub fn from_json_str(text: &str) -> Result<Node> {
    from_json_str_with_depth(text, DEFAULT_MAX_DEPTH)
}

/// Like [`from_json_str`], with an explicit nesting limit.
pub fn from_json_str_with_depth(text: &str, max_depth: usize) -> Result<Node> {
    let value: Value = serde_json::from_str(text)?;
    let name = value
        .get(TYPE_NAME_KEY)
        .and_then(Value::as_str)
        .unwrap_or("root")
        .to_string();
    if !value.is_object() {
        return Err(Error::invalid(
            "document",
            truncate(&value.to_string(), ROOT_PREVIEW),
            "JSON root must be an object",
        ));
    }
    from_json_value(name, &value, max_depth)
}

/// Convert a JSON value into a [`Node`] with the given element name.
///
/// Fails when objects and arrays nest deeper than `max_depth`.
pub fn from_json_value(name: impl Into<String>, value: &Value, max_depth: usize) -> Result<Node> {
    convert(name.into(), value, 1, max_depth)
}

fn convert(name: String, value: &Value, depth: usize, max_depth: usize) -> Result<Node> {
    if depth > max_depth {
        return Err(Error::invalid(
            "document",
            name,
            format!("nesting exceeds {max_depth} levels"),
        ));
    }
    let mut node = Node::new(name);
    match value {
        Value::Object(map) => {
            for (key, item) in map {
                match key.as_str() {
                    TYPE_NAME_KEY => node.type_name = item.as_str().map(str::to_string),
                    VALUE_KEY => unbox(&mut node, item, depth, max_depth)?,
                    _ => push_children(&mut node, key, item, depth, max_depth)?,
                }
            }
        }
        Value::Null => {}
        scalar => node.text = scalar_text(scalar),
    }
    Ok(node)
}

// A boxed scalar is the node's own text; a boxed array repeats the node's name.
fn unbox(node: &mut Node, item: &Value, depth: usize, max_depth: usize) -> Result<()> {
    match item {
        Value::Array(_) | Value::Object(_) => {
            let name = node.name.clone();
            push_children(node, &name, item, depth, max_depth)
        }
        scalar => {
            node.text = scalar_text(scalar);
            Ok(())
        }
    }
}

fn push_children(
    node: &mut Node,
    key: &str,
    item: &Value,
    depth: usize,
    max_depth: usize,
) -> Result<()> {
    match item {
        Value::Array(items) => {
            for element in items {
                node.children
                    .push(convert(key.to_string(), element, depth + 1, max_depth)?);
            }
        }
        Value::Null => {}
        other => node
            .children
            .push(convert(key.to_string(), other, depth + 1, max_depth)?),
    }
    Ok(())
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
