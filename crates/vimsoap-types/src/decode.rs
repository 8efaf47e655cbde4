//! Typed decoding from [`Node`] trees.
//!
//! Types implement [`Decode`]; polymorphic fault elements are resolved by
//! [`DecodeContext::decode_fault`] through the context's [`TypeRegistry`].

use crate::faults::{AnyFault, MethodFault, UnknownFault};
use crate::registry::{TypeRegistry, VimTypeRegistry};
use std::fmt;
use std::str::FromStr;
use vimsoap_core::{DEFAULT_MAX_DEPTH, DecoderConfig, Error, Result, UnknownTypePolicy};
use vimsoap_xml::Node;

/// Decode a value from a document node.
pub trait Decode: Sized {
    /// Decode `node` into `Self`, resolving nested faults through `cx`.
    fn decode(node: &Node, cx: &DecodeContext<'_>) -> Result<Self>;
}

impl Decode for () {
    fn decode(_node: &Node, _cx: &DecodeContext<'_>) -> Result<Self> {
        Ok(())
    }
}

/// Undecoded passthrough.
impl Decode for Node {
    fn decode(node: &Node, _cx: &DecodeContext<'_>) -> Result<Self> {
        Ok(node.clone())
    }
}

/// Registry and policy in effect while decoding one payload.
///
/// The context also counts how many faults enclose the element being
/// decoded, so a `faultCause` chain longer than the limit is refused.
#[derive(Clone, Copy)]
pub struct DecodeContext<'r> {
    registry: &'r dyn TypeRegistry,
    policy: UnknownTypePolicy,
    max_depth: usize,
    depth: usize,
}

impl<'r> DecodeContext<'r> {
    /// Create a context over the given registry with the default policy.
    pub fn new(registry: &'r dyn TypeRegistry) -> Self {
        Self {
            registry,
            policy: UnknownTypePolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            depth: 0,
        }
    }

    /// Create a context over `registry` using the policy and nesting limit
    /// from `config`.
    pub fn from_config(registry: &'r dyn TypeRegistry, config: &DecoderConfig) -> Self {
        Self::new(registry)
            .with_policy(config.unknown_types)
            .with_max_depth(config.max_depth)
    }

    /// Set the unknown type policy.
    pub fn with_policy(mut self, policy: UnknownTypePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set how many faults may nest through `faultCause`.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The `faultCause` nesting limit.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The registry used to resolve fault types.
    pub fn registry(&self) -> &'r dyn TypeRegistry {
        self.registry
    }

    /// The policy applied to unregistered type names.
    pub fn policy(&self) -> UnknownTypePolicy {
        self.policy
    }

    /// Decode any [`Decode`] type.
    pub fn decode<T: Decode>(&self, node: &Node) -> Result<T> {
        T::decode(node, self)
    }

    /// Resolve a polymorphic fault element to its concrete type.
    ///
    /// Fails with [`Error::InvalidValue`] once more than
    /// [`max_depth`](Self::max_depth) faults are nested.
    pub fn decode_fault(&self, node: &Node) -> Result<AnyFault> {
        let type_name = fault_type_name(node);
        if self.depth >= self.max_depth {
            return Err(Error::invalid(
                "faultCause",
                type_name,
                format!("fault nesting exceeds {} levels", self.max_depth),
            ));
        }
        let nested = Self {
            depth: self.depth + 1,
            ..*self
        };

        if let Some(decoder) = self.registry.resolve(type_name) {
            return decoder(node, &nested);
        }

        match self.policy {
            UnknownTypePolicy::Reject => Err(Error::UnknownType {
                name: type_name.to_string(),
            }),
            UnknownTypePolicy::Generic => {
                tracing::debug!(type_name, "unregistered fault type, decoding as generic");
                Ok(AnyFault::Unknown(UnknownFault {
                    type_name: type_name.to_string(),
                    method_fault: MethodFault::decode(node, &nested)?,
                    node: node.clone(),
                }))
            }
        }
    }
}

impl Default for DecodeContext<'static> {
    fn default() -> Self {
        Self::new(VimTypeRegistry::global())
    }
}

impl fmt::Debug for DecodeContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeContext")
            .field("types", &self.registry.type_count())
            .field("policy", &self.policy)
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

/// Type name carried by a fault element.
///
/// `xsi:type` wins; otherwise a detail element named `<Type>Fault` names
/// its own type, and anything else is treated as a bare `MethodFault`.
pub fn fault_type_name(node: &Node) -> &str {
    if let Some(name) = node.type_name.as_deref() {
        return name;
    }
    match node.name.strip_suffix("Fault") {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => "MethodFault",
    }
}

// ============================================================================
// Field helpers
// ============================================================================

/// Text of a required child element.
pub fn required_text<'a>(node: &'a Node, name: &str) -> Result<&'a str> {
    node.child_text(name)
        .ok_or_else(|| Error::missing(node.name.as_str(), name))
}

/// Text of an optional child element.
pub fn optional_text(node: &Node, name: &str) -> Option<String> {
    node.child_text(name).map(str::to_string)
}

/// Decode a required child element.
pub fn required<T: Decode>(node: &Node, name: &str, cx: &DecodeContext<'_>) -> Result<T> {
    let child = node
        .child(name)
        .ok_or_else(|| Error::missing(node.name.as_str(), name))?;
    T::decode(child, cx)
}

/// Decode an optional child element.
pub fn optional<T: Decode>(node: &Node, name: &str, cx: &DecodeContext<'_>) -> Result<Option<T>> {
    node.child(name).map(|child| T::decode(child, cx)).transpose()
}

/// Decode every child element with the given name.
pub fn repeated<T: Decode>(node: &Node, name: &str, cx: &DecodeContext<'_>) -> Result<Vec<T>> {
    node.children_named(name)
        .map(|child| T::decode(child, cx))
        .collect()
}

/// Parse the text of an optional child element.
pub fn parse_optional<T>(node: &Node, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    node.child_text(name)
        .map(|text| {
            text.parse::<T>()
                .map_err(|e| Error::invalid(name, text, e.to_string()))
        })
        .transpose()
}

/// Parse the text of a required child element.
pub fn parse_required<T>(node: &Node, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    parse_optional(node, name)?.ok_or_else(|| Error::missing(node.name.as_str(), name))
}
