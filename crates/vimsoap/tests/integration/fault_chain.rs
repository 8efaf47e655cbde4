//! Integration tests for walking `faultCause` chains.

use std::ops::ControlFlow;
use vimsoap::types::{InvalidPowerState, SystemError, VirtualMachinePowerState};
use vimsoap::{BaseMethodFault, DecoderConfig, Error, FaultKind, LocalizedMethodFault};
use vimsoap::{ResponseDecoder, core};

use crate::common::{SOAP_CONTENT_TYPE, TASK_ERROR_XML, decoder, fault_envelope};

fn task_error() -> vimsoap::Error {
    decoder()
        .decode::<()>(500, SOAP_CONTENT_TYPE, TASK_ERROR_XML)
        .unwrap_err()
}

#[test]
fn test_find_nested_cause() {
    let err = task_error();

    let (state, message) = vimsoap::fault::find::<_, InvalidPowerState>(&err).unwrap();
    assert_eq!(message, "vm must be powered off to encrypt");
    assert_eq!(state.requested_state, Some(VirtualMachinePowerState::PoweredOff));
    assert_eq!(state.existing_state, VirtualMachinePowerState::PoweredOn);

    let (top, message) = vimsoap::fault::find::<_, SystemError>(&err).unwrap();
    assert_eq!(top.reason, "encryption failed");
    assert_eq!(message, "");
}

#[test]
fn test_is_matches_exact_kind_only() {
    let err = task_error();
    assert!(vimsoap::fault::is(&err, FaultKind::RuntimeFault));
    assert!(vimsoap::fault::is(&err, FaultKind::InvalidPowerState));
    assert!(!vimsoap::fault::is(&err, FaultKind::InvalidState));
    assert!(!vimsoap::fault::is(&err, FaultKind::InvalidLogin));
}

#[test]
fn test_is_a_matches_subtypes() {
    let err = task_error();
    assert!(vimsoap::fault::is_a(&err, FaultKind::InvalidState));
    assert!(vimsoap::fault::is_a(&err, FaultKind::VimFault));
    assert!(!vimsoap::fault::is_a(&err, FaultKind::SecurityError));
}

#[test]
fn test_walk_visits_in_order_and_stops() {
    let err = task_error();

    let mut seen = Vec::new();
    let stopped = vimsoap::fault::walk(&err, |fault, message, _| {
        seen.push((fault.type_name().to_string(), message.to_string()));
        if fault.is_a(FaultKind::InvalidState) {
            ControlFlow::Break(seen.len())
        } else {
            ControlFlow::Continue(())
        }
    });

    assert_eq!(stopped, Some(3));
    assert_eq!(
        seen,
        [
            ("SystemError".to_string(), String::new()),
            ("RuntimeFault".to_string(), "encryption task failed".to_string()),
            (
                "InvalidPowerState".to_string(),
                "vm must be powered off to encrypt".to_string()
            ),
        ]
    );
}

#[test]
fn test_chain_from_localized_fault() {
    let err = task_error();
    let cause: &LocalizedMethodFault = err.fault().unwrap().cause().unwrap();

    let names: Vec<_> = vimsoap::fault::chain(cause)
        .map(|(fault, _)| fault.type_name())
        .collect();
    assert_eq!(names, ["RuntimeFault", "InvalidPowerState"]);
}

#[test]
fn test_chain_of_success_is_empty() {
    let ok: vimsoap::Result<()> = Ok(());
    assert_eq!(vimsoap::fault::chain(&ok).count(), 0);
    assert!(!vimsoap::fault::is_a(&ok, FaultKind::MethodFault));
}

/// A `RuntimeFault` detail wrapping `levels` faults through `faultCause`.
fn nested_cause_detail(levels: usize) -> String {
    let link = r#"<faultCause><fault xsi:type="RuntimeFault">"#;
    let unlink = "</fault></faultCause>";
    format!(
        r#"<RuntimeFaultFault xmlns="urn:vim25" xsi:type="RuntimeFault">{}{}</RuntimeFaultFault>"#,
        link.repeat(levels - 1),
        unlink.repeat(levels - 1)
    )
}

#[test]
fn test_deep_cause_chain_rejected() {
    let body = fault_envelope("A general system error occurred", &nested_cause_detail(1000));
    let err = decoder()
        .decode::<()>(500, SOAP_CONTENT_TYPE, &body)
        .unwrap_err();
    assert!(
        matches!(err, Error::Core(core::Error::InvalidValue { ref reason, .. })
            if reason.contains("nesting exceeds")),
        "unexpected error: {err}"
    );
}

#[test]
fn test_cause_chain_limit_from_config() {
    let body = fault_envelope("A general system error occurred", &nested_cause_detail(20));

    let err = ResponseDecoder::from_config(DecoderConfig::default().with_max_depth(10))
        .decode::<()>(500, SOAP_CONTENT_TYPE, &body)
        .unwrap_err();
    assert!(err.fault().is_none());

    let err = decoder()
        .decode::<()>(500, SOAP_CONTENT_TYPE, &body)
        .unwrap_err();
    assert_eq!(vimsoap::fault::chain(&err).count(), 20);
}
