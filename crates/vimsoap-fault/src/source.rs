//! Values that can carry a vim25 fault.

use vimsoap_soap::{Error, SoapFault};
use vimsoap_types::{AnyFault, LocalizedMethodFault};

/// Something that may carry a fault at the head of a cause chain.
///
/// The localized message is empty unless the carrier has one of its own
/// (only [`LocalizedMethodFault`] does).
pub trait FaultSource {
    /// The outermost fault and its localized message.
    fn top_fault(&self) -> Option<(&AnyFault, &str)>;
}

impl FaultSource for AnyFault {
    fn top_fault(&self) -> Option<(&AnyFault, &str)> {
        Some((self, ""))
    }
}

impl FaultSource for LocalizedMethodFault {
    fn top_fault(&self) -> Option<(&AnyFault, &str)> {
        Some((&self.fault, &self.localized_message))
    }
}

impl FaultSource for SoapFault {
    fn top_fault(&self) -> Option<(&AnyFault, &str)> {
        self.detail.as_ref().map(|fault| (fault, ""))
    }
}

impl FaultSource for Error {
    fn top_fault(&self) -> Option<(&AnyFault, &str)> {
        self.fault().map(|fault| (fault, ""))
    }
}

impl<S: FaultSource> FaultSource for Option<S> {
    fn top_fault(&self) -> Option<(&AnyFault, &str)> {
        self.as_ref().and_then(FaultSource::top_fault)
    }
}

impl<T, E: FaultSource> FaultSource for Result<T, E> {
    fn top_fault(&self) -> Option<(&AnyFault, &str)> {
        self.as_ref().err().and_then(FaultSource::top_fault)
    }
}

impl<S: FaultSource + ?Sized> FaultSource for &S {
    fn top_fault(&self) -> Option<(&AnyFault, &str)> {
        (**self).top_fault()
    }
}

impl<S: FaultSource + ?Sized> FaultSource for Box<S> {
    fn top_fault(&self) -> Option<(&AnyFault, &str)> {
        (**self).top_fault()
    }
}
