//! The SOAP `Fault` element.

use std::fmt;
use vimsoap_core::{Error, Result};
use vimsoap_types::{AnyFault, Decode, DecodeContext, decode};
use vimsoap_xml::{Node, QName};

/// Fault code reported by vCenter and ESX for every server-side fault.
pub const SERVER_FAULT_CODE: &str = "ServerFaultCode";

/// A SOAP fault with its detail resolved to a typed fault.
///
/// `code` and `string` are always kept, so a fault whose detail is absent
/// or unregistered still reports what the server said.
#[derive(Clone, Debug, PartialEq)]
pub struct SoapFault {
    /// Element name of the fault.
    pub name: QName,
    /// `faultcode`.
    pub code: String,
    /// `faultstring`.
    pub string: String,
    /// The typed fault from `detail`, if the server sent one.
    pub detail: Option<AnyFault>,
}

impl SoapFault {
    /// Build a fault from a vim25 JSON fault object.
    ///
    /// The JSON protocol has no envelope: the body is the fault itself, with
    /// `_typeName` naming its type and `faultstring` its message. The code is
    /// always [`SERVER_FAULT_CODE`] and `namespace` supplies the element
    /// namespace the XML protocol would carry.
    pub fn from_json_node(node: &Node, namespace: &str, cx: &DecodeContext<'_>) -> Result<Self> {
        let detail = cx.decode_fault(node)?;
        Ok(Self {
            name: QName::new(namespace, format!("{}Fault", detail.type_name())),
            code: SERVER_FAULT_CODE.to_string(),
            string: decode::optional_text(node, "faultstring").unwrap_or_default(),
            detail: Some(detail),
        })
    }

    /// Type name of the detail, if any.
    pub fn detail_type(&self) -> Option<&str> {
        self.detail.as_ref().map(AnyFault::type_name)
    }
}

impl Decode for SoapFault {
    fn decode(node: &Node, cx: &DecodeContext<'_>) -> Result<Self> {
        let detail = match node.child("detail").map(|d| d.children.as_slice()) {
            None | Some([]) => None,
            Some([fault, rest @ ..]) => {
                if !rest.is_empty() {
                    tracing::debug!(
                        extra = rest.len(),
                        "ignoring additional fault detail elements"
                    );
                }
                Some(cx.decode_fault(fault)?)
            }
        };

        Ok(Self {
            name: node.qname(),
            code: decode::required_text(node, "faultcode")?.to_string(),
            string: decode::optional_text(node, "faultstring").unwrap_or_default(),
            detail,
        })
    }
}

impl fmt::Display for SoapFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.string)
    }
}

impl std::error::Error for SoapFault {}

/// Require `node` to be named `expected` in namespace `space`.
pub(crate) fn expect_element(node: &Node, space: &str, expected: &str) -> Result<()> {
    if node.name == expected && node.namespace.as_deref() == Some(space) {
        Ok(())
    } else {
        Err(Error::unexpected(
            QName::new(space, expected).to_string(),
            node.qname().to_string(),
        ))
    }
}
