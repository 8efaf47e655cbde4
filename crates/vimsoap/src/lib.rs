//! vimsoap umbrella crate.
//!
//! This crate re-exports all vimsoap components for convenience.

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub use vimsoap_core as core;
pub use vimsoap_fault as fault;
pub use vimsoap_soap as soap;
pub use vimsoap_types as types;
pub use vimsoap_xml as xml;

pub use vimsoap_core::{DecoderConfig, UnknownTypePolicy};
pub use vimsoap_soap::{
    Body, ContentType, Envelope, Error, ResponseDecoder, Result, SoapFault, decode_envelope,
};
pub use vimsoap_types::{
    AnyFault, BaseMethodFault, CompositeRegistry, Decode, DecodeContext, FaultKind, FaultType,
    LocalizedMethodFault, TypeRegistry, VimTypeRegistry,
};
pub use vimsoap_xml::{Node, QName};
