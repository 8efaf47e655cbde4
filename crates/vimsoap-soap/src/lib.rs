//! # vimsoap-soap
//!
//! SOAP envelope, fault, and response decoding for the vim25 API.
//!
//! When a vim25 call fails the server answers with a SOAP fault whose
//! `detail` carries the typed reason:
//!
//! ```xml
//! <soapenv:Fault>
//!   <faultcode>ServerFaultCode</faultcode>
//!   <faultstring>Cannot complete login due to an incorrect user name or password.</faultstring>
//!   <detail>
//!     <InvalidLoginFault xmlns="urn:vim25" xsi:type="InvalidLogin"></InvalidLoginFault>
//!   </detail>
//! </soapenv:Fault>
//! ```
//!
//! This crate decodes that into a [`SoapFault`] whose `detail` is an
//! `AnyFault::InvalidLogin`, resolved through the type registry of
//! `vimsoap-types`.
//!
//! - [`decode_envelope`] / [`Envelope`]: SOAP 1.1 envelopes
//! - [`ResponseDecoder`]: whole responses by status and content type, XML
//!   or JSON
//! - [`Error`]: decode failures and delivered faults

#![forbid(unsafe_code)]

pub mod envelope;
pub mod error;
pub mod fault;
pub mod response;

pub use envelope::{Body, Envelope, decode_envelope};
pub use error::{Error, Result};
pub use fault::{SERVER_FAULT_CODE, SoapFault};
pub use response::{ContentType, ResponseDecoder};
