//! # vimsoap-xml
//!
//! Wire-neutral document tree for vim25 payloads.
//!
//! The vim25 API speaks SOAP/XML and, on newer endpoints, JSON. Both are
//! converted into the same [`Node`] tree so that typed decoding is written
//! once:
//!
//! - [`from_xml_str`]: XML element tree, `xsi:type` resolved to
//!   [`Node::type_name`]
//! - [`from_json_str`]: JSON object tree, `_typeName` resolved to
//!   [`Node::type_name`]
//!
//! Both readers refuse documents nested deeper than a configurable limit,
//! so hostile payloads fail with an error instead of exhausting the stack.

#![forbid(unsafe_code)]

pub mod json;
pub mod node;
pub mod xml;

pub use json::{TYPE_NAME_KEY, VALUE_KEY, from_json_str, from_json_str_with_depth, from_json_value};
pub use node::{Node, QName};
pub use xml::{SOAP_ENV_NS, XSI_NS, from_xml_str, from_xml_str_with_depth};
