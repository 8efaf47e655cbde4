//! Localized messages and the `faultCause` link.

use crate::decode::{self, Decode, DecodeContext};
use crate::faults::AnyFault;
use vimsoap_core::{Error, Result};
use vimsoap_xml::Node;

/// A key/value argument of a [`LocalizableMessage`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyAnyValue {
    /// Argument name.
    pub key: String,
    /// Argument value as text.
    pub value: String,
    /// Declared type of the value (`xsd:string`, ...), if any.
    pub value_type: Option<String>,
}

impl Decode for KeyAnyValue {
    fn decode(node: &Node, _cx: &DecodeContext<'_>) -> Result<Self> {
        let value = node.child("value");
        Ok(Self {
            key: decode::required_text(node, "key")?.to_string(),
            value: value.and_then(Node::text).unwrap_or_default().to_string(),
            value_type: value.and_then(|v| v.type_name.clone()),
        })
    }
}

/// A message with a catalog key, for clients that localize themselves.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocalizableMessage {
    /// Message catalog key.
    pub key: String,
    /// Substitution arguments.
    pub args: Vec<KeyAnyValue>,
    /// Server-rendered message, if provided.
    pub message: Option<String>,
}

impl Decode for LocalizableMessage {
    fn decode(node: &Node, cx: &DecodeContext<'_>) -> Result<Self> {
        Ok(Self {
            key: decode::required_text(node, "key")?.to_string(),
            args: decode::repeated(node, "arg", cx)?,
            message: decode::optional_text(node, "message"),
        })
    }
}

/// A fault paired with its server-localized message.
///
/// This is the element type of the `faultCause` chain and of task errors.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalizedMethodFault {
    /// The wrapped fault.
    pub fault: AnyFault,
    /// Message localized by the server; empty when absent.
    pub localized_message: String,
}

impl LocalizedMethodFault {
    /// Wrap a fault with a message.
    pub fn new(fault: impl Into<AnyFault>, localized_message: impl Into<String>) -> Self {
        Self {
            fault: fault.into(),
            localized_message: localized_message.into(),
        }
    }
}

impl Decode for LocalizedMethodFault {
    fn decode(node: &Node, cx: &DecodeContext<'_>) -> Result<Self> {
        let fault_node = node
            .child("fault")
            .ok_or_else(|| Error::missing(node.name.as_str(), "fault"))?;
        Ok(Self {
            fault: cx.decode_fault(fault_node)?,
            localized_message: decode::optional_text(node, "localizedMessage").unwrap_or_default(),
        })
    }
}
