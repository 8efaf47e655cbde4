//! # vimsoap-fault
//!
//! Inspection of vim25 fault cause chains.
//!
//! A vim25 fault may carry a `faultCause`, which carries a fault of its own,
//! and so on. The functions here walk that chain starting from any
//! [`FaultSource`]: a decoded fault, a `LocalizedMethodFault` from a task,
//! a `SoapFault`, or a `vimsoap_soap::Error`.
//!
//! ```rust
//! use vimsoap_types::{
//!     AnyFault, BaseMethodFault, FaultKind, InvalidLogin, LocalizedMethodFault, NotAuthenticated,
//! };
//!
//! let fault: AnyFault = NotAuthenticated::default()
//!     .with_cause(LocalizedMethodFault::new(InvalidLogin::default(), "bad password"))
//!     .into();
//!
//! assert!(vimsoap_fault::is(&fault, FaultKind::InvalidLogin));
//! assert!(vimsoap_fault::is_a(&fault, FaultKind::SecurityError));
//!
//! let (_, message) = vimsoap_fault::find::<_, InvalidLogin>(&fault).unwrap();
//! assert_eq!(message, "bad password");
//! ```

#![forbid(unsafe_code)]

pub mod chain;
pub mod source;

pub use chain::{Chain, chain, find, find_kind, is, is_a, walk};
pub use source::FaultSource;
