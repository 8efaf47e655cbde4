//! Integration tests for SOAP envelope fault decoding.

use vimsoap::types::{InvalidLogin, NotAuthenticated, SystemError, UserSession};
use vimsoap::xml::SOAP_ENV_NS;
use vimsoap::{
    AnyFault, BaseMethodFault, Body, DecodeContext, Error, FaultKind, QName, UnknownTypePolicy,
    decode_envelope,
};

use crate::common::{
    INVALID_LOGIN_XML, NOT_AUTHENTICATED_XML, SOAP_CONTENT_TYPE, decoder, fault_envelope,
};

#[test]
fn test_invalid_login_detail_is_typed() {
    let envelope = decode_envelope(INVALID_LOGIN_XML, &DecodeContext::default()).unwrap();

    let Body::Fault(fault) = &envelope.body else {
        unreachable!("Expected a fault body");
    };
    assert_eq!(fault.name, QName::new(SOAP_ENV_NS, "Fault"));
    assert_eq!(fault.code, "ServerFaultCode");
    assert_eq!(
        fault.string,
        "Cannot complete login due to an incorrect user name or password."
    );

    // Resolved through the registry, not left as a generic fault.
    let detail = fault.detail.as_ref().unwrap();
    assert!(matches!(detail, AnyFault::InvalidLogin(InvalidLogin { .. })));
    assert_eq!(detail.type_name(), "InvalidLogin");
    assert!(detail.is_a(FaultKind::VimFault));
}

#[test]
fn test_invalid_login_through_response_decoder() {
    let err = decoder()
        .decode::<UserSession>(500, SOAP_CONTENT_TYPE, INVALID_LOGIN_XML)
        .unwrap_err();

    assert!(err.is_soap_fault());
    assert_eq!(
        err.to_string(),
        "ServerFaultCode: Cannot complete login due to an incorrect user name or password."
    );
    assert!(err.fault().unwrap().downcast_ref::<InvalidLogin>().is_some());
}

#[test]
fn test_prefixed_type_and_inherited_fields() {
    let err = decoder()
        .decode::<()>(500, SOAP_CONTENT_TYPE, NOT_AUTHENTICATED_XML)
        .unwrap_err();
    let fault = err.fault().unwrap();
    assert_eq!(fault.kind(), Some(FaultKind::NotAuthenticated));
    assert!(fault.is_a(FaultKind::NoPermission));
    assert!(fault.is_a(FaultKind::SecurityError));

    let inner = fault.downcast_ref::<NotAuthenticated>().unwrap();
    let object = inner.no_permission.object.as_ref().unwrap();
    assert_eq!(object.to_string(), "Folder:group-d1");
    assert_eq!(inner.no_permission.privilege_id.as_deref(), Some("System.View"));

    let messages = &fault.method_fault().fault_message;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].key, "vpxd.session.expired");
    assert_eq!(messages[0].args[0].value, "52e3");
    assert_eq!(messages[0].args[0].value_type.as_deref(), Some("string"));
    assert_eq!(messages[0].message.as_deref(), Some("Session expired"));
}

#[test]
fn test_detail_without_type_attribute_uses_element_name() {
    let body = fault_envelope(
        "A general system error occurred: disk full",
        r#"<SystemErrorFault xmlns="urn:vim25"><reason>disk full</reason></SystemErrorFault>"#,
    );
    let err = decoder().decode::<()>(500, SOAP_CONTENT_TYPE, &body).unwrap_err();
    let fault = err.fault().unwrap().downcast_ref::<SystemError>().unwrap();
    assert_eq!(fault.reason, "disk full");
}

#[test]
fn test_fault_without_detail() {
    let body = r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
<soapenv:Body>
<soapenv:Fault>
<faultcode>ServerFaultCode</faultcode>
<faultstring>internal error</faultstring>
</soapenv:Fault>
</soapenv:Body>
</soapenv:Envelope>"#;
    let err = decoder().decode::<()>(500, SOAP_CONTENT_TYPE, body).unwrap_err();
    assert_eq!(err.to_string(), "ServerFaultCode: internal error");
    assert!(err.as_soap_fault().unwrap().detail.is_none());
    assert!(err.fault().is_none());
}

#[test]
fn test_unknown_detail_generic_keeps_fields() {
    let body = fault_envelope(
        "Guest operations agent is out of date",
        r#"<GuestToolsOutOfDateFault xmlns="urn:vim25" xsi:type="GuestToolsOutOfDate">
             <faultMessage><key>guest.tools.old</key></faultMessage>
           </GuestToolsOutOfDateFault>"#,
    );
    let err = decoder().decode::<()>(500, SOAP_CONTENT_TYPE, &body).unwrap_err();
    assert_eq!(err.as_soap_fault().unwrap().string, "Guest operations agent is out of date");

    let AnyFault::Unknown(unknown) = err.fault().unwrap() else {
        unreachable!("Expected an unknown fault");
    };
    assert_eq!(unknown.type_name, "GuestToolsOutOfDate");
    assert_eq!(unknown.method_fault.fault_message[0].key, "guest.tools.old");
    assert_eq!(unknown.node.name, "GuestToolsOutOfDateFault");
}

#[test]
fn test_unknown_detail_rejected_in_strict_mode() {
    let body = fault_envelope(
        "Guest operations agent is out of date",
        r#"<GuestToolsOutOfDateFault xmlns="urn:vim25" xsi:type="GuestToolsOutOfDate"/>"#,
    );
    let cx = DecodeContext::default().with_policy(UnknownTypePolicy::Reject);
    let err = decode_envelope(&body, &cx).unwrap_err();
    assert!(matches!(
        err,
        Error::Core(vimsoap::core::Error::UnknownType { ref name }) if name == "GuestToolsOutOfDate"
    ));
}

#[test]
fn test_invalid_required_field_is_error() {
    let body = fault_envelope(
        "The attempted operation cannot be performed in the current state (Powered on).",
        r#"<InvalidPowerStateFault xmlns="urn:vim25" xsi:type="InvalidPowerState">
             <existingState>hibernating</existingState>
           </InvalidPowerStateFault>"#,
    );
    let err = decoder().decode::<()>(500, SOAP_CONTENT_TYPE, &body).unwrap_err();
    let Error::Core(core) = err else {
        unreachable!("Expected a core decode error");
    };
    assert!(core.is_malformed_input());
    assert!(core.to_string().contains("hibernating"));
}
