//! The `UserSession` data object returned by `Login`.

use crate::decode::{self, Decode, DecodeContext};
use chrono::{DateTime, Utc};
use serde::Serialize;
use vimsoap_core::{Error, Result};
use vimsoap_xml::Node;

/// An authenticated session.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    /// Session key.
    pub key: String,
    /// Login name.
    pub user_name: String,
    /// Display name of the user.
    pub full_name: String,
    /// When the session was created.
    pub login_time: DateTime<Utc>,
    /// Last time the session made a call.
    pub last_active_time: DateTime<Utc>,
    /// Locale used for server messages.
    pub locale: String,
    /// Locale used for fault messages.
    pub message_locale: String,
    /// Whether this session belongs to an extension.
    pub extension_session: bool,
    /// Client address, if reported.
    pub ip_address: Option<String>,
    /// Client user agent, if reported.
    pub user_agent: Option<String>,
    /// Number of API calls made with this session.
    pub call_count: i64,
}

fn required_time(node: &Node, name: &str) -> Result<DateTime<Utc>> {
    let text = decode::required_text(node, name)?;
    DateTime::parse_from_rfc3339(text)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| Error::invalid(name, text, e.to_string()))
}

impl Decode for UserSession {
    fn decode(node: &Node, _cx: &DecodeContext<'_>) -> Result<Self> {
        Ok(Self {
            key: decode::required_text(node, "key")?.to_string(),
            user_name: decode::required_text(node, "userName")?.to_string(),
            full_name: decode::required_text(node, "fullName")?.to_string(),
            login_time: required_time(node, "loginTime")?,
            last_active_time: required_time(node, "lastActiveTime")?,
            locale: decode::required_text(node, "locale")?.to_string(),
            message_locale: decode::required_text(node, "messageLocale")?.to_string(),
            extension_session: decode::parse_optional(node, "extensionSession")?.unwrap_or(false),
            ip_address: decode::optional_text(node, "ipAddress"),
            user_agent: decode::optional_text(node, "userAgent"),
            call_count: decode::parse_optional(node, "callCount")?.unwrap_or(0),
        })
    }
}
