//! The vim25 fault type hierarchy.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Every fault type this crate can decode into a concrete structure.
///
/// The hierarchy mirrors vim25: every fault descends from `MethodFault`,
/// server-side failures from `RuntimeFault`, and API-level failures from
/// `VimFault`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[non_exhaustive]
pub enum FaultKind {
    /// Root of the hierarchy.
    MethodFault,
    /// Failures raised by the server runtime.
    RuntimeFault,
    /// Internal server error.
    SystemError,
    /// Method not implemented by this server.
    NotImplemented,
    /// Operation not supported in this configuration.
    NotSupported,
    /// A method argument was invalid.
    InvalidArgument,
    /// The request itself was malformed.
    InvalidRequest,
    /// A referenced managed object no longer exists.
    ManagedObjectNotFound,
    /// The request was canceled by the caller.
    RequestCanceled,
    /// Base of authorization failures.
    SecurityError,
    /// The session lacks a privilege.
    NoPermission,
    /// The session is not logged in.
    NotAuthenticated,
    /// Base of API-level failures.
    VimFault,
    /// Incorrect user name or password.
    InvalidLogin,
    /// Unsupported locale.
    InvalidLocale,
    /// Operation invalid in the current state.
    InvalidState,
    /// Operation invalid in the current power state.
    InvalidPowerState,
    /// Base of virtual machine configuration faults.
    VmConfigFault,
    /// Invalid virtual machine configuration.
    InvalidVmConfig,
    /// Base of datastore file faults.
    FileFault,
    /// Referenced file does not exist.
    FileNotFound,
    /// An object with the same identity exists.
    AlreadyExists,
    /// An object with the same name exists.
    DuplicateName,
    /// A referenced item does not exist.
    NotFound,
    /// Another task holds the object.
    TaskInProgress,
    /// A name is not valid.
    InvalidName,
}

impl FaultKind {
    /// All kinds, parents before children.
    pub const ALL: &'static [FaultKind] = &[
        FaultKind::MethodFault,
        FaultKind::RuntimeFault,
        FaultKind::SystemError,
        FaultKind::NotImplemented,
        FaultKind::NotSupported,
        FaultKind::InvalidArgument,
        FaultKind::InvalidRequest,
        FaultKind::ManagedObjectNotFound,
        FaultKind::RequestCanceled,
        FaultKind::SecurityError,
        FaultKind::NoPermission,
        FaultKind::NotAuthenticated,
        FaultKind::VimFault,
        FaultKind::InvalidLogin,
        FaultKind::InvalidLocale,
        FaultKind::InvalidState,
        FaultKind::InvalidPowerState,
        FaultKind::VmConfigFault,
        FaultKind::InvalidVmConfig,
        FaultKind::FileFault,
        FaultKind::FileNotFound,
        FaultKind::AlreadyExists,
        FaultKind::DuplicateName,
        FaultKind::NotFound,
        FaultKind::TaskInProgress,
        FaultKind::InvalidName,
    ];

    /// Wire type name.
    pub fn name(self) -> &'static str {
        match self {
            Self::MethodFault => "MethodFault",
            Self::RuntimeFault => "RuntimeFault",
            Self::SystemError => "SystemError",
            Self::NotImplemented => "NotImplemented",
            Self::NotSupported => "NotSupported",
            Self::InvalidArgument => "InvalidArgument",
            Self::InvalidRequest => "InvalidRequest",
            Self::ManagedObjectNotFound => "ManagedObjectNotFound",
            Self::RequestCanceled => "RequestCanceled",
            Self::SecurityError => "SecurityError",
            Self::NoPermission => "NoPermission",
            Self::NotAuthenticated => "NotAuthenticated",
            Self::VimFault => "VimFault",
            Self::InvalidLogin => "InvalidLogin",
            Self::InvalidLocale => "InvalidLocale",
            Self::InvalidState => "InvalidState",
            Self::InvalidPowerState => "InvalidPowerState",
            Self::VmConfigFault => "VmConfigFault",
            Self::InvalidVmConfig => "InvalidVmConfig",
            Self::FileFault => "FileFault",
            Self::FileNotFound => "FileNotFound",
            Self::AlreadyExists => "AlreadyExists",
            Self::DuplicateName => "DuplicateName",
            Self::NotFound => "NotFound",
            Self::TaskInProgress => "TaskInProgress",
            Self::InvalidName => "InvalidName",
        }
    }

    /// Direct supertype, `None` for `MethodFault`.
    pub fn parent(self) -> Option<FaultKind> {
        match self {
            Self::MethodFault => None,
            Self::RuntimeFault | Self::VimFault => Some(Self::MethodFault),
            Self::SystemError
            | Self::NotImplemented
            | Self::NotSupported
            | Self::InvalidArgument
            | Self::InvalidRequest
            | Self::ManagedObjectNotFound
            | Self::RequestCanceled
            | Self::SecurityError => Some(Self::RuntimeFault),
            Self::NoPermission => Some(Self::SecurityError),
            Self::NotAuthenticated => Some(Self::NoPermission),
            Self::InvalidLogin
            | Self::InvalidLocale
            | Self::InvalidState
            | Self::VmConfigFault
            | Self::FileFault
            | Self::AlreadyExists
            | Self::DuplicateName
            | Self::NotFound
            | Self::TaskInProgress
            | Self::InvalidName => Some(Self::VimFault),
            Self::InvalidPowerState => Some(Self::InvalidState),
            Self::InvalidVmConfig => Some(Self::VmConfigFault),
            Self::FileNotFound => Some(Self::FileFault),
        }
    }

    /// This kind followed by each supertype up to `MethodFault`.
    pub fn ancestors(self) -> impl Iterator<Item = FaultKind> {
        std::iter::successors(Some(self), |k| k.parent())
    }

    /// Whether `self` is `other` or one of its subtypes.
    pub fn is_subtype_of(self, other: FaultKind) -> bool {
        self.ancestors().any(|k| k == other)
    }

    /// Look a kind up by wire type name.
    pub fn from_name(name: &str) -> Option<FaultKind> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FaultKind {
    type Err = vimsoap_core::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| vimsoap_core::Error::UnknownType {
            name: s.to_string(),
        })
    }
}
