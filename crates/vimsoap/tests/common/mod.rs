//! Common fixtures and helpers for vimsoap integration tests.

#![allow(dead_code)]

use vimsoap::{DecoderConfig, ResponseDecoder};

/// The vCenter response to a login with a wrong password.
pub const INVALID_LOGIN_XML: &str = include_str!("../fixtures/invalid_login.xml");

/// An expired session, with a prefixed `xsi:type` and localizable messages.
pub const NOT_AUTHENTICATED_XML: &str = include_str!("../fixtures/not_authenticated.xml");

/// A fault with a two-level `faultCause` chain.
pub const TASK_ERROR_XML: &str = include_str!("../fixtures/task_error.xml");

/// The JSON protocol equivalent of [`INVALID_LOGIN_XML`].
pub const INVALID_LOGIN_JSON: &str = include_str!("../fixtures/invalid_login.json");

/// The JSON protocol equivalent of [`NOT_AUTHENTICATED_XML`], with a boxed
/// `_value` argument.
pub const NOT_AUTHENTICATED_JSON: &str = include_str!("../fixtures/not_authenticated.json");

/// A successful JSON `Login` result.
pub const USER_SESSION_JSON: &str = include_str!("../fixtures/user_session.json");

/// Content type sent by vCenter for SOAP responses.
pub const SOAP_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Content type sent by vCenter for JSON responses.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A decoder with the default configuration.
pub fn decoder() -> ResponseDecoder {
    ResponseDecoder::new()
}

/// A decoder with the SSO credential alias configured.
pub fn sso_decoder() -> ResponseDecoder {
    ResponseDecoder::from_config(
        DecoderConfig::default().with_alias("SsoFaultInvalidCredentials", "InvalidLogin"),
    )
}

/// Wrap a `detail` payload in a complete fault envelope.
pub fn fault_envelope(faultstring: &str, detail: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/"
                  xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
<soapenv:Body>
<soapenv:Fault>
<faultcode>ServerFaultCode</faultcode>
<faultstring>{faultstring}</faultstring>
<detail>{detail}</detail>
</soapenv:Fault>
</soapenv:Body>
</soapenv:Envelope>"#
    )
}
