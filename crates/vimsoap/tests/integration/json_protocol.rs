//! Integration tests for the vim25 JSON protocol.

use vimsoap::types::{InvalidLogin, ManagedObjectReference, UserSession};
use vimsoap::{AnyFault, BaseMethodFault, Error, FaultKind, QName};

use crate::common::{
    INVALID_LOGIN_JSON, JSON_CONTENT_TYPE, NOT_AUTHENTICATED_JSON, USER_SESSION_JSON, decoder,
    sso_decoder,
};

#[test]
fn test_error_status_decodes_fault() {
    let err = decoder()
        .decode::<UserSession>(500, JSON_CONTENT_TYPE, INVALID_LOGIN_JSON)
        .unwrap_err();

    assert!(
        err.to_string().starts_with("ServerFaultCode: Cannot complete login"),
        "unexpected message: {err}"
    );

    let fault = err.as_soap_fault().unwrap();
    assert_eq!(fault.name, QName::new("urn:vim25", "InvalidLoginFault"));
    assert_eq!(fault.code, "ServerFaultCode");
    assert!(matches!(fault.detail, Some(AnyFault::InvalidLogin(InvalidLogin { .. }))));
}

#[test]
fn test_success_status_decodes_result() {
    let session: UserSession = decoder()
        .decode(200, JSON_CONTENT_TYPE, USER_SESSION_JSON)
        .unwrap();

    assert_eq!(session.user_name, "VSPHERE.LOCAL\\Administrator");
    assert_eq!(session.key, "527025b6-f0f4-144e-0d36-a7aaf2eb21da");
    assert_eq!(session.ip_address.as_deref(), Some("10.93.153.94"));
    assert!(!session.extension_session);
    assert_eq!(session.call_count, 0);
    assert_eq!(session.login_time.to_rfc3339(), "2023-02-14T22:12:48.753169+00:00");
}

#[test]
fn test_sso_alias_resolves_to_invalid_login() {
    let body = r#"{
        "_typeName": "SsoFaultInvalidCredentials",
        "faultstring": "Cannot complete login due to an incorrect user name or password."
    }"#;

    let err = sso_decoder()
        .decode::<UserSession>(500, JSON_CONTENT_TYPE, body)
        .unwrap_err();
    let fault = err.fault().unwrap();
    assert_eq!(fault.kind(), Some(FaultKind::InvalidLogin));
    assert!(fault.is_a(FaultKind::VimFault));

    // Without the alias the type stays unknown but keeps its name.
    let err = decoder()
        .decode::<UserSession>(500, JSON_CONTENT_TYPE, body)
        .unwrap_err();
    let AnyFault::Unknown(unknown) = err.fault().unwrap() else {
        unreachable!("Expected an unknown fault");
    };
    assert_eq!(unknown.type_name, "SsoFaultInvalidCredentials");
}

#[test]
fn test_fault_cause_survives_json() {
    let body = r#"{
        "_typeName": "RuntimeFault",
        "faultstring": "A general system error occurred",
        "faultCause": {
            "_typeName": "LocalizedMethodFault",
            "fault": {"_typeName": "NotFound"},
            "localizedMessage": "The object or item referred to could not be found."
        }
    }"#;
    let err = decoder().decode::<()>(500, JSON_CONTENT_TYPE, body).unwrap_err();

    let (found, message) = vimsoap::fault::find_kind(&err, FaultKind::NotFound).unwrap();
    assert_eq!(found.type_name(), "NotFound");
    assert_eq!(message, "The object or item referred to could not be found.");
}

#[test]
fn test_non_json_error_body_reports_status() {
    let err = decoder()
        .decode::<UserSession>(503, JSON_CONTENT_TYPE, "<html>Service Unavailable</html>")
        .unwrap_err();
    let Error::HttpStatus { status, body } = err else {
        unreachable!("Expected an HTTP status error");
    };
    assert_eq!(status, 503);
    assert!(body.contains("Service Unavailable"));
}

#[test]
fn test_boxed_message_argument() {
    let err = decoder()
        .decode::<UserSession>(500, JSON_CONTENT_TYPE, NOT_AUTHENTICATED_JSON)
        .unwrap_err();
    let fault = err.fault().unwrap();
    assert_eq!(fault.kind(), Some(FaultKind::NotAuthenticated));

    let AnyFault::NotAuthenticated(inner) = fault else {
        unreachable!("Expected NotAuthenticated variant");
    };
    assert_eq!(
        inner.no_permission.object,
        Some(ManagedObjectReference::new("Folder", "group-d1"))
    );

    let messages = &fault.method_fault().fault_message;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].key, "vpxd.session.expired");
    assert_eq!(messages[0].args[0].key, "session");
    assert_eq!(messages[0].args[0].value, "52e3");
    assert_eq!(messages[0].args[0].value_type.as_deref(), Some("string"));
}

#[test]
fn test_untyped_error_object_reports_status() {
    let err = decoder()
        .decode::<()>(503, JSON_CONTENT_TYPE, r#"{"error": "upstream unavailable"}"#)
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
    assert!(err.fault().is_none());
}
