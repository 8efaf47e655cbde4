//! # vimsoap-types
//!
//! Typed vim25 faults and data objects, and the registry that maps wire
//! type names onto them.
//!
//! Fault elements in vim25 payloads are polymorphic: the element says
//! "some fault" and an `xsi:type` (or `_typeName`) attribute names the
//! concrete type. Decoding goes through a [`DecodeContext`], which asks its
//! [`TypeRegistry`] for the decoder registered under that name:
//!
//! ```rust
//! use vimsoap_types::{AnyFault, DecodeContext, FaultKind};
//! use vimsoap_xml::Node;
//!
//! let node = Node::new("InvalidLoginFault").with_type("InvalidLogin");
//! let fault = DecodeContext::default().decode_fault(&node).unwrap();
//!
//! assert!(matches!(fault, AnyFault::InvalidLogin(_)));
//! assert!(fault.is_a(FaultKind::VimFault));
//! ```

#![forbid(unsafe_code)]

pub mod decode;
pub mod faults;
pub mod kind;
pub mod message;
pub mod mor;
pub mod power;
pub mod registry;
pub mod session;

pub use decode::{Decode, DecodeContext};
pub use faults::*;
pub use kind::FaultKind;
pub use message::{KeyAnyValue, LocalizableMessage, LocalizedMethodFault};
pub use mor::ManagedObjectReference;
pub use power::VirtualMachinePowerState;
pub use registry::{CompositeRegistry, FaultDecoder, TypeRegistry, VimTypeRegistry};
pub use session::UserSession;
