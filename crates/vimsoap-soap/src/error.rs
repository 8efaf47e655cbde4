//! Error types for vimsoap-soap

use crate::fault::SoapFault;
use thiserror::Error;
use vimsoap_core::text::truncate;
use vimsoap_types::{AnyFault, LocalizedMethodFault};

const BODY_PREVIEW: usize = 256;

/// Result type alias for vimsoap-soap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding a vim25 response
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from vimsoap-core
    #[error("Core error: {0}")]
    Core(#[from] vimsoap_core::Error),

    /// The server answered with a SOAP fault
    #[error("{0}")]
    SoapFault(Box<SoapFault>),

    /// A fault delivered outside an envelope.
    ///
    /// The decoder never produces this variant itself: failed tasks report
    /// their fault in `TaskInfo.error`, which callers convert with
    /// `Error::from(LocalizedMethodFault)` or `Error::from(AnyFault)`.
    #[error("{0}")]
    VimFault(Box<AnyFault>),

    /// The response carried a content type that cannot be decoded
    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    /// A non-success status without a decodable fault
    #[error("HTTP status {status}: {body}")]
    HttpStatus {
        /// Response status code
        status: u16,
        /// Response body, possibly truncated
        body: String,
    },
}

impl Error {
    /// Returns whether this error carries a SOAP fault.
    pub fn is_soap_fault(&self) -> bool {
        matches!(self, Error::SoapFault(_))
    }

    /// The SOAP fault, if this error carries one.
    pub fn as_soap_fault(&self) -> Option<&SoapFault> {
        match self {
            Error::SoapFault(fault) => Some(fault),
            _ => None,
        }
    }

    /// Returns whether this error carries a bare vim fault.
    pub fn is_vim_fault(&self) -> bool {
        matches!(self, Error::VimFault(_))
    }

    /// The bare vim fault, if this error carries one.
    pub fn as_vim_fault(&self) -> Option<&AnyFault> {
        match self {
            Error::VimFault(fault) => Some(fault),
            _ => None,
        }
    }

    /// The typed fault carried by this error, from either fault variant.
    pub fn fault(&self) -> Option<&AnyFault> {
        match self {
            Error::SoapFault(fault) => fault.detail.as_ref(),
            Error::VimFault(fault) => Some(fault),
            _ => None,
        }
    }

    pub(crate) fn http_status(status: u16, body: &str) -> Self {
        Error::HttpStatus {
            status,
            body: truncate(body, BODY_PREVIEW),
        }
    }
}

impl From<SoapFault> for Error {
    fn from(fault: SoapFault) -> Self {
        Error::SoapFault(Box::new(fault))
    }
}

impl From<AnyFault> for Error {
    fn from(fault: AnyFault) -> Self {
        Error::VimFault(Box::new(fault))
    }
}

/// Wraps a task error; the localized message is logged, the fault is kept.
impl From<LocalizedMethodFault> for Error {
    fn from(error: LocalizedMethodFault) -> Self {
        tracing::debug!(
            fault = error.fault.type_name(),
            message = %error.localized_message,
            "task error"
        );
        Error::VimFault(Box::new(error.fault))
    }
}
