//! Managed object references.

use crate::decode::{Decode, DecodeContext};
use serde::Serialize;
use std::fmt;
use vimsoap_core::{Error, Result};
use vimsoap_xml::Node;

/// Reference to a server-side managed object.
///
/// On the XML wire this is `<obj type="Folder">group-d1</obj>`; in JSON it
/// is `{"type": "Folder", "value": "group-d1"}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ManagedObjectReference {
    /// Managed object type (`Folder`, `VirtualMachine`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Server-assigned identifier.
    pub value: String,
}

impl ManagedObjectReference {
    /// Create a reference.
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for ManagedObjectReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.value)
    }
}

impl Decode for ManagedObjectReference {
    fn decode(node: &Node, _cx: &DecodeContext<'_>) -> Result<Self> {
        let kind = node
            .attr("type")
            .or_else(|| node.child_text("type"))
            .ok_or_else(|| Error::missing(node.name.as_str(), "type"))?;
        let value = if node.children.is_empty() {
            node.text()
        } else {
            node.child_text("value")
        }
        .ok_or_else(|| Error::missing(node.name.as_str(), "value"))?;

        Ok(Self::new(kind, value))
    }
}
