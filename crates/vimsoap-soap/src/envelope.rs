//! SOAP 1.1 envelope decoding.

use crate::error::Result;
use crate::fault::{SoapFault, expect_element};
use vimsoap_core::Error as CoreError;
use vimsoap_types::{Decode, DecodeContext};
use vimsoap_xml::{Node, SOAP_ENV_NS, from_xml_str_with_depth};

/// A decoded SOAP envelope.
#[derive(Clone, Debug, PartialEq)]
pub struct Envelope {
    /// The `Header` element, if present.
    pub header: Option<Node>,
    /// The `Body` content.
    pub body: Body,
}

/// Content of a SOAP `Body`.
#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    /// The method response element (`<LoginResponse>`, ...).
    Response(Node),
    /// A fault in place of the response.
    Fault(SoapFault),
}

/// Parse and decode a SOAP envelope.
///
/// The context's nesting limit bounds both element depth and the
/// `faultCause` chain.
pub fn decode_envelope(xml: &str, cx: &DecodeContext<'_>) -> Result<Envelope> {
    let root = from_xml_str_with_depth(xml, cx.max_depth())?;
    Envelope::from_node(root, cx)
}

impl Envelope {
    /// Decode an already parsed `Envelope` element.
    pub fn from_node(root: Node, cx: &DecodeContext<'_>) -> Result<Self> {
        expect_element(&root, SOAP_ENV_NS, "Envelope")?;

        let mut header = None;
        let mut body = None;
        for child in root.children {
            if child.namespace.as_deref() != Some(SOAP_ENV_NS) {
                continue;
            }
            match child.name.as_str() {
                "Header" => header = Some(child),
                "Body" => body = Some(child),
                _ => {}
            }
        }
        let body = body.ok_or_else(|| CoreError::missing("Envelope", "Body"))?;

        let body = match body.children.into_iter().next() {
            Some(node)
                if node.name == "Fault" && node.namespace.as_deref() == Some(SOAP_ENV_NS) =>
            {
                let fault = SoapFault::decode(&node, cx)?;
                tracing::debug!(
                    code = %fault.code,
                    detail = fault.detail_type().unwrap_or("-"),
                    "SOAP fault in response"
                );
                Body::Fault(fault)
            }
            Some(node) => Body::Response(node),
            None => Body::Response(Node::new("Body")),
        };

        Ok(Self { header, body })
    }

    /// Whether the body is a fault.
    pub fn is_fault(&self) -> bool {
        matches!(self.body, Body::Fault(_))
    }

    /// The fault, if the body is one.
    pub fn fault(&self) -> Option<&SoapFault> {
        match &self.body {
            Body::Fault(fault) => Some(fault),
            Body::Response(_) => None,
        }
    }

    /// Decode the response value, or return the fault as an error.
    ///
    /// vim25 responses wrap their value in `<returnval>`; when the element
    /// is absent (void methods) `T` is decoded from the response element.
    pub fn into_result<T: Decode>(self, cx: &DecodeContext<'_>) -> Result<T> {
        match self.body {
            Body::Fault(fault) => Err(fault.into()),
            Body::Response(node) => {
                let target = node.child("returnval").unwrap_or(&node);
                Ok(T::decode(target, cx)?)
            }
        }
    }
}
