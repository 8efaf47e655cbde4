//! Integration tests for file-based decoder configuration.

use proptest::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;
use vimsoap::{AnyFault, DecoderConfig, Error, FaultKind, QName, ResponseDecoder, UnknownTypePolicy};

use crate::common::{INVALID_LOGIN_JSON, JSON_CONTENT_TYPE, SOAP_CONTENT_TYPE, fault_envelope};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_loaded_config_drives_decoder() {
    let file = write_config(
        r#"
namespace = "urn:vim25/8.0"
unknown_types = "reject"

[aliases]
SsoFaultInvalidCredentials = "InvalidLogin"
"#,
    );
    let config = DecoderConfig::load(file.path()).unwrap();
    assert_eq!(config.unknown_types, UnknownTypePolicy::Reject);

    let decoder = ResponseDecoder::from_config(config);

    let err = decoder
        .decode::<()>(500, JSON_CONTENT_TYPE, INVALID_LOGIN_JSON)
        .unwrap_err();
    assert_eq!(
        err.as_soap_fault().unwrap().name,
        QName::new("urn:vim25/8.0", "InvalidLoginFault")
    );

    let body = fault_envelope(
        "Cannot complete login",
        r#"<Fault xmlns="urn:vim25" xsi:type="SsoFaultInvalidCredentials"/>"#,
    );
    let err = decoder.decode::<()>(500, SOAP_CONTENT_TYPE, &body).unwrap_err();
    assert_eq!(err.fault().unwrap().kind(), Some(FaultKind::InvalidLogin));

    let body = fault_envelope(
        "Guest operations agent is out of date",
        r#"<GuestToolsOutOfDateFault xmlns="urn:vim25" xsi:type="GuestToolsOutOfDate"/>"#,
    );
    let err = decoder.decode::<()>(500, SOAP_CONTENT_TYPE, &body).unwrap_err();
    assert!(matches!(err, Error::Core(vimsoap::core::Error::UnknownType { .. })));
}

#[test]
fn test_empty_config_file_uses_defaults() {
    let file = write_config("");
    let config = DecoderConfig::load(file.path()).unwrap();
    assert_eq!(config, DecoderConfig::default());
}

#[test]
fn test_invalid_config_file_is_error() {
    let file = write_config("unknown_types = \"sometimes\"\n");
    assert!(DecoderConfig::load(file.path()).is_err());
}

#[test]
fn test_missing_config_file_is_error() {
    assert!(DecoderConfig::load("/nonexistent/vimsoap.toml").is_err());
}

proptest! {
    #[test]
    fn test_any_type_prefix_resolves(prefix in "[a-w][a-z0-9]{0,7}") {
        prop_assume!(prefix != "soapenv");
        let detail = format!(
            concat!(
                r#"<InvalidLoginFault xmlns="urn:vim25" xmlns:{prefix}="urn:vim25""#,
                r#" xsi:type="{prefix}:InvalidLogin"/>"#,
            ),
            prefix = prefix
        );
        let body = fault_envelope("Cannot complete login", &detail);
        let err = ResponseDecoder::new()
            .decode::<()>(500, SOAP_CONTENT_TYPE, &body)
            .unwrap_err();
        prop_assert!(matches!(err.fault(), Some(AnyFault::InvalidLogin(_))));
    }
}
