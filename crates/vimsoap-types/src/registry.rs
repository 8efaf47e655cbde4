//! Type registry for polymorphic fault decoding.
//!
//! This module defines the `TypeRegistry` trait that maps wire type names
//! to decoder functions. [`VimTypeRegistry`] carries every built-in vim25
//! fault; other sources (an SSO endpoint, a test double) implement the
//! trait themselves.
//!
//! The `CompositeRegistry` combines multiple registries into one, so
//! endpoint-specific names can be layered over the vim25 table.

use crate::decode::DecodeContext;
use crate::faults::{self, AnyFault};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::sync::LazyLock;
use vimsoap_core::{DecoderConfig, Result};
use vimsoap_xml::Node;

/// Decoder registered for one wire type name.
pub type FaultDecoder = fn(&Node, &DecodeContext<'_>) -> Result<AnyFault>;

/// Trait for resolving wire type names to fault decoders.
///
/// A [`DecodeContext`] asks its registry for every polymorphic fault
/// element it meets.
///
/// # Example
///
/// ```rust
/// use vimsoap_types::{AnyFault, Decode, DecodeContext, FaultDecoder, InvalidLogin, TypeRegistry};
/// use vimsoap_xml::Node;
///
/// struct SsoTypes;
///
/// fn invalid_credentials(node: &Node, cx: &DecodeContext<'_>) -> vimsoap_core::Result<AnyFault> {
///     Ok(InvalidLogin::decode(node, cx)?.into())
/// }
///
/// impl TypeRegistry for SsoTypes {
///     fn resolve(&self, name: &str) -> Option<FaultDecoder> {
///         match name {
///             "SsoFaultInvalidCredentials" => Some(invalid_credentials as FaultDecoder),
///             _ => None,
///         }
///     }
///
///     fn type_names(&self) -> Vec<String> {
///         vec!["SsoFaultInvalidCredentials".to_string()]
///     }
/// }
///
/// assert!(SsoTypes.contains("SsoFaultInvalidCredentials"));
/// ```
pub trait TypeRegistry: Send + Sync {
    /// Look up the decoder for a type name.
    ///
    /// Returns `None` if the name is not recognized by this registry.
    fn resolve(&self, name: &str) -> Option<FaultDecoder>;

    /// Returns every type name this registry resolves.
    fn type_names(&self) -> Vec<String>;

    /// Check if a type name resolves.
    fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Returns the number of registered type names.
    fn type_count(&self) -> usize {
        self.type_names().len()
    }
}

// ============================================================================
// VimTypeRegistry
// ============================================================================

static GLOBAL: LazyLock<VimTypeRegistry> = LazyLock::new(VimTypeRegistry::new);

/// The vim25 fault table, optionally extended with aliases.
///
/// Aliases are resolved once, before the table lookup, so an alias always
/// points at a name registered in the table.
#[derive(Clone)]
pub struct VimTypeRegistry {
    table: HashMap<String, FaultDecoder>,
    aliases: BTreeMap<String, String>,
}

impl VimTypeRegistry {
    /// Create a registry with every built-in fault type.
    pub fn new() -> Self {
        let table = faults::builtin_decoders()
            .into_iter()
            .map(|(kind, decoder)| (kind.name().to_string(), decoder))
            .collect();
        Self {
            table,
            aliases: BTreeMap::new(),
        }
    }

    /// Shared registry with the built-in types and no aliases.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Create a registry with the aliases from `config`.
    pub fn from_config(config: &DecoderConfig) -> Self {
        config
            .aliases
            .iter()
            .fold(Self::new(), |registry, (alias, target)| {
                registry.with_alias(alias.clone(), target.clone())
            })
    }

    /// Map `alias` onto a registered type name.
    pub fn with_alias(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), target.into());
        self
    }

    /// Register a decoder under an additional type name.
    pub fn with_type(mut self, name: impl Into<String>, decoder: FaultDecoder) -> Self {
        self.table.insert(name.into(), decoder);
        self
    }

    /// Configured aliases, alias to target.
    pub fn aliases(&self) -> &BTreeMap<String, String> {
        &self.aliases
    }
}

impl Default for VimTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VimTypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VimTypeRegistry")
            .field("types", &self.table.len())
            .field("aliases", &self.aliases)
            .finish()
    }
}

impl TypeRegistry for VimTypeRegistry {
    fn resolve(&self, name: &str) -> Option<FaultDecoder> {
        let target = match self.aliases.get(name) {
            Some(target) => {
                tracing::trace!(alias = name, target = %target, "resolved type alias");
                target.as_str()
            }
            None => name,
        };
        self.table.get(target).copied()
    }

    fn type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.table.keys().cloned().collect();
        names.sort();
        names
    }

    fn type_count(&self) -> usize {
        self.table.len()
    }
}

// ============================================================================
// CompositeRegistry
// ============================================================================

/// A registry that combines multiple sub-registries.
///
/// Sub-registries are consulted in the order they were added; the first
/// one that resolves a name wins.
///
/// # Example
///
/// ```rust
/// use vimsoap_types::{CompositeRegistry, TypeRegistry, VimTypeRegistry};
///
/// let registry = CompositeRegistry::new()
///     .add(VimTypeRegistry::new().with_alias("SsoFaultInvalidCredentials", "InvalidLogin"));
///
/// assert!(registry.contains("SsoFaultInvalidCredentials"));
/// assert_eq!(registry.type_count(), 26);
/// ```
pub struct CompositeRegistry {
    registries: Vec<Box<dyn TypeRegistry>>,
}

impl CompositeRegistry {
    /// Create a new empty composite registry.
    pub fn new() -> Self {
        Self {
            registries: Vec::new(),
        }
    }

    /// Add a sub-registry.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: TypeRegistry + 'static>(mut self, registry: R) -> Self {
        self.registries.push(Box::new(registry));
        self
    }
}

impl Default for CompositeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry for CompositeRegistry {
    fn resolve(&self, name: &str) -> Option<FaultDecoder> {
        self.registries.iter().find_map(|r| r.resolve(name))
    }

    fn type_names(&self) -> Vec<String> {
        self.registries
            .iter()
            .flat_map(|r| r.type_names())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
