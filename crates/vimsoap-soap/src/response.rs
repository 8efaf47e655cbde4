//! Decoding of complete HTTP responses.
//!
//! A vim25 endpoint answers either with a SOAP envelope (`text/xml`) or,
//! on the JSON protocol, with a bare JSON value (`application/json`). On
//! the JSON protocol a non-success status means the body is a fault
//! object rather than the method result.

use crate::envelope::Envelope;
use crate::error::{Error, Result};
use crate::fault::SoapFault;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use vimsoap_core::{DecoderConfig, Error as CoreError};
use vimsoap_types::{Decode, DecodeContext, TypeRegistry, VimTypeRegistry};
use vimsoap_xml::{Node, SOAP_ENV_NS, TYPE_NAME_KEY, from_json_value, from_xml_str_with_depth};

// ============================================================================
// Content types
// ============================================================================

/// Wire format of a response body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentType {
    /// A SOAP envelope.
    Xml,
    /// The vim25 JSON protocol.
    Json,
}

impl FromStr for ContentType {
    type Err = Error;

    /// Parse a `Content-Type` header value, ignoring parameters and case.
    fn from_str(s: &str) -> Result<Self> {
        let media = s
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match media.as_str() {
            "text/xml" | "application/xml" | "application/soap+xml" => Ok(Self::Xml),
            "application/json" => Ok(Self::Json),
            _ => Err(Error::UnsupportedContentType(s.to_string())),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xml => write!(f, "text/xml"),
            Self::Json => write!(f, "application/json"),
        }
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

// ============================================================================
// ResponseDecoder
// ============================================================================

/// Decodes response bodies into typed results or typed faults.
///
/// # Example
///
/// ```rust
/// use vimsoap_soap::ResponseDecoder;
/// use vimsoap_types::{AnyFault, UserSession};
///
/// let decoder = ResponseDecoder::new();
/// let body = r#"{"_typeName": "InvalidLogin", "faultstring": "Cannot complete login"}"#;
/// let err = decoder
///     .decode::<UserSession>(500, "application/json", body)
///     .unwrap_err();
///
/// assert_eq!(err.to_string(), "ServerFaultCode: Cannot complete login");
/// assert!(matches!(err.fault(), Some(AnyFault::InvalidLogin(_))));
/// ```
pub struct ResponseDecoder {
    registry: Box<dyn TypeRegistry>,
    config: DecoderConfig,
}

impl ResponseDecoder {
    /// Create a decoder over the built-in vim25 types.
    pub fn new() -> Self {
        Self::from_config(DecoderConfig::default())
    }

    /// Create a decoder whose registry carries the aliases in `config`.
    pub fn from_config(config: DecoderConfig) -> Self {
        Self {
            registry: Box::new(VimTypeRegistry::from_config(&config)),
            config,
        }
    }

    /// Replace the type registry.
    pub fn with_registry<R: TypeRegistry + 'static>(mut self, registry: R) -> Self {
        self.registry = Box::new(registry);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// The active type registry.
    pub fn registry(&self) -> &dyn TypeRegistry {
        self.registry.as_ref()
    }

    /// A decode context over this decoder's registry and policy.
    pub fn context(&self) -> DecodeContext<'_> {
        DecodeContext::from_config(self.registry.as_ref(), &self.config)
    }

    /// Decode a response given its status and `Content-Type` header.
    pub fn decode<T: Decode>(&self, status: u16, content_type: &str, body: &str) -> Result<T> {
        match content_type.parse::<ContentType>()? {
            ContentType::Xml => self.decode_xml(status, body),
            ContentType::Json => self.decode_json(status, body),
        }
    }

    /// Decode a SOAP envelope.
    ///
    /// A non-success status whose body is not an envelope is reported as
    /// [`Error::HttpStatus`]; an envelope that fails to decode, or nests
    /// deeper than the configured limit, is a decode error whatever the
    /// status.
    pub fn decode_xml<T: Decode>(&self, status: u16, body: &str) -> Result<T> {
        let cx = self.context();
        let root = match from_xml_str_with_depth(body, self.config.max_depth) {
            Ok(root) => root,
            Err(e @ CoreError::Xml { .. }) if !is_success(status) => {
                tracing::debug!(status, error = %e, "non-success response is not XML");
                return Err(Error::http_status(status, body));
            }
            Err(e) => return Err(e.into()),
        };
        let is_envelope =
            root.name == "Envelope" && root.namespace.as_deref() == Some(SOAP_ENV_NS);
        if !is_envelope && !is_success(status) {
            tracing::debug!(
                status,
                root = %root.qname(),
                "non-success response is not an envelope"
            );
            return Err(Error::http_status(status, body));
        }
        Envelope::from_node(root, &cx)?.into_result(&cx)
    }

    /// Decode a vim25 JSON response.
    ///
    /// On a non-success status the body must be an object carrying
    /// `_typeName`; anything else is reported as [`Error::HttpStatus`].
    pub fn decode_json<T: Decode>(&self, status: u16, body: &str) -> Result<T> {
        let cx = self.context();
        let max_depth = self.config.max_depth;

        if is_success(status) {
            if body.trim().is_empty() {
                return Ok(T::decode(&Node::default(), &cx)?);
            }
            let value: Value = serde_json::from_str(body).map_err(CoreError::from)?;
            let name = value
                .get(TYPE_NAME_KEY)
                .and_then(Value::as_str)
                .unwrap_or("returnval");
            return Ok(T::decode(&from_json_value(name, &value, max_depth)?, &cx)?);
        }

        let typed = match serde_json::from_str::<Value>(body) {
            Ok(value) => {
                let name = value
                    .get(TYPE_NAME_KEY)
                    .and_then(Value::as_str)
                    .map(str::to_string);
                name.map(|name| (name, value))
            }
            Err(e) => {
                tracing::debug!(status, error = %e, "non-success response is not JSON");
                None
            }
        };
        let Some((name, value)) = typed else {
            tracing::debug!(status, "non-success response is not a JSON fault");
            return Err(Error::http_status(status, body));
        };
        let node = from_json_value(name, &value, max_depth)?;
        let fault = SoapFault::from_json_node(&node, &self.config.namespace, &cx)?;
        tracing::debug!(
            status,
            detail = fault.detail_type().unwrap_or("-"),
            "JSON fault in response"
        );
        Err(fault.into())
    }
}

impl Default for ResponseDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ResponseDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseDecoder")
            .field("types", &self.registry.type_count())
            .field("config", &self.config)
            .finish()
    }
}
