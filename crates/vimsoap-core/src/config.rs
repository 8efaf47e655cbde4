//! Decoder configuration.
//!
//! Configuration is a small TOML document:
//!
//! ```toml
//! namespace = "urn:vim25"
//! unknown_types = "generic"
//! max_depth = 256
//!
//! [aliases]
//! SsoFaultInvalidCredentials = "InvalidLogin"
//! ```
//!
//! # Usage
//!
//! ```rust
//! use vimsoap_core::{DecoderConfig, UnknownTypePolicy};
//!
//! let config = DecoderConfig::from_toml_str("unknown_types = \"reject\"").unwrap();
//! assert_eq!(config.namespace, "urn:vim25");
//! assert_eq!(config.unknown_types, UnknownTypePolicy::Reject);
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Namespace of the vim25 API, used when a payload carries none.
pub const DEFAULT_NAMESPACE: &str = "urn:vim25";

/// Default bound on element nesting and `faultCause` chain length.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// What to do when a polymorphic element names an unregistered type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownTypePolicy {
    /// Keep the type name and decode only the base fault fields.
    #[default]
    Generic,
    /// Fail with [`Error::UnknownType`].
    Reject,
}

impl fmt::Display for UnknownTypePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => write!(f, "generic"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

/// Settings that shape how payloads are decoded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// XML namespace recorded for faults that arrive without one (JSON).
    pub namespace: String,
    /// Policy for unregistered type names.
    pub unknown_types: UnknownTypePolicy,
    /// Deepest element nesting, and longest cause chain, a payload may carry.
    pub max_depth: usize,
    /// Alternate type names mapped to registered ones.
    pub aliases: BTreeMap<String, String>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            unknown_types: UnknownTypePolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            aliases: BTreeMap::new(),
        }
    }
}

impl DecoderConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::config(format!("invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::config_io(e, path))?;
        let config = Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config { message } => Error::config(format!("{}: {message}", path.display())),
            other => other,
        })?;
        tracing::debug!(
            path = %path.display(),
            aliases = config.aliases.len(),
            "loaded decoder config"
        );
        Ok(config)
    }

    /// Serialize the configuration back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Register an alias, builder style.
    pub fn with_alias(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), target.into());
        self
    }

    /// Set the unknown type policy, builder style.
    pub fn with_unknown_types(mut self, policy: UnknownTypePolicy) -> Self {
        self.unknown_types = policy;
        self
    }

    /// Set the nesting limit, builder style.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.namespace.trim().is_empty() {
            return Err(Error::config("namespace must not be empty"));
        }
        if self.max_depth == 0 {
            return Err(Error::config("max_depth must be at least 1"));
        }
        for (alias, target) in &self.aliases {
            if alias.trim().is_empty() || target.trim().is_empty() {
                return Err(Error::config(format!(
                    "alias '{alias}' -> '{target}' has an empty side"
                )));
            }
            if alias == target {
                return Err(Error::config(format!("alias '{alias}' points to itself")));
            }
        }
        Ok(())
    }
}
