//! vimsoap Core: shared errors and decoder configuration.
//!
//! This crate provides the foundational types used across all vimsoap crates.
//! It has no internal vimsoap dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: Decoder configuration loaded from TOML
//! - [`text`]: Small text helpers

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod text;

// Re-export key types at crate root for convenience
pub use config::{DEFAULT_MAX_DEPTH, DEFAULT_NAMESPACE, DecoderConfig, UnknownTypePolicy};
pub use error::{Error, Result};
