//! Walking the `faultCause` chain.

use crate::source::FaultSource;
use std::iter::FusedIterator;
use std::ops::ControlFlow;
use vimsoap_types::{AnyFault, BaseMethodFault, FaultKind, FaultType, LocalizableMessage};

/// Iterator over a fault and its causes, outermost first.
///
/// Yields each fault with its localized message.
#[derive(Clone, Debug)]
pub struct Chain<'a> {
    next: Option<(&'a AnyFault, &'a str)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = (&'a AnyFault, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current
            .0
            .cause()
            .map(|cause| (&cause.fault, cause.localized_message.as_str()));
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

/// Iterate the fault chain of `source`.
pub fn chain<S: FaultSource + ?Sized>(source: &S) -> Chain<'_> {
    Chain {
        next: source.top_fault(),
    }
}

/// Visit every fault in the chain until `on_fault` breaks.
///
/// The callback receives the fault, its localized message, and the
/// fault's localizable messages. Returns the break value, if any.
///
/// # Example
///
/// ```rust
/// use std::ops::ControlFlow;
/// use vimsoap_types::{AnyFault, BaseMethodFault, LocalizedMethodFault, RuntimeFault, SystemError};
///
/// let err = LocalizedMethodFault::new(
///     RuntimeFault::default()
///         .with_cause(LocalizedMethodFault::new(SystemError::default(), "inner message")),
///     "outer message",
/// );
///
/// let mut seen = Vec::new();
/// vimsoap_fault::walk(&err, |fault, message, _| {
///     seen.push(format!("{fault}: {message}"));
///     ControlFlow::<()>::Continue(())
/// });
///
/// assert_eq!(seen, ["RuntimeFault: outer message", "SystemError: inner message"]);
/// ```
pub fn walk<S, B, F>(source: &S, mut on_fault: F) -> Option<B>
where
    S: FaultSource + ?Sized,
    F: FnMut(&AnyFault, &str, &[LocalizableMessage]) -> ControlFlow<B>,
{
    for (fault, message) in chain(source) {
        if let ControlFlow::Break(value) =
            on_fault(fault, message, fault.method_fault().fault_message.as_slice())
        {
            return Some(value);
        }
    }
    None
}

/// The first fault in the chain that is exactly a `T`, with its localized
/// message.
pub fn find<S, T>(source: &S) -> Option<(&T, &str)>
where
    S: FaultSource + ?Sized,
    T: FaultType,
{
    chain(source).find_map(|(fault, message)| T::from_any(fault).map(|t| (t, message)))
}

/// The first fault in the chain that is `kind` or one of its subtypes.
pub fn find_kind<S>(source: &S, kind: FaultKind) -> Option<(&AnyFault, &str)>
where
    S: FaultSource + ?Sized,
{
    chain(source).find(|(fault, _)| fault.is_a(kind))
}

/// Whether any fault in the chain is exactly `kind`.
pub fn is<S: FaultSource + ?Sized>(source: &S, kind: FaultKind) -> bool {
    chain(source).any(|(fault, _)| fault.kind() == Some(kind))
}

/// Whether any fault in the chain is `kind` or one of its subtypes.
pub fn is_a<S: FaultSource + ?Sized>(source: &S, kind: FaultKind) -> bool {
    find_kind(source, kind).is_some()
}
