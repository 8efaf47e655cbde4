//! Typed vim25 faults.
//!
//! Each fault type embeds its supertype as a field, so the fields of every
//! ancestor are reachable (`InvalidLogin.vim_fault.method_fault.fault_cause`)
//! and [`BaseMethodFault::method_fault`] always returns the shared root.
//!
//! [`AnyFault`] is the polymorphic value produced by the registry.

use crate::decode::{self, Decode, DecodeContext};
use crate::kind::FaultKind;
use crate::message::{LocalizableMessage, LocalizedMethodFault};
use crate::registry::FaultDecoder;
use std::fmt;
use vimsoap_core::Result;
use vimsoap_xml::Node;

/// Access to the `MethodFault` root of any fault structure.
pub trait BaseMethodFault {
    /// The shared `MethodFault` fields.
    fn method_fault(&self) -> &MethodFault;

    /// Mutable access to the shared `MethodFault` fields.
    fn method_fault_mut(&mut self) -> &mut MethodFault;

    /// Builder: attach a `faultCause`.
    fn with_cause(mut self, cause: LocalizedMethodFault) -> Self
    where
        Self: Sized,
    {
        self.method_fault_mut().fault_cause = Some(Box::new(cause));
        self
    }

    /// The next link in the `faultCause` chain.
    fn cause(&self) -> Option<&LocalizedMethodFault> {
        self.method_fault().fault_cause.as_deref()
    }
}

/// A concrete fault type known to the registry.
pub trait FaultType: BaseMethodFault + Decode + Into<AnyFault> {
    /// The kind this type decodes.
    const KIND: FaultKind;

    /// Borrow `fault` as `Self` if it is exactly this type.
    fn from_any(fault: &AnyFault) -> Option<&Self>;
}

/// Implement [`BaseMethodFault`] by delegating to the embedded supertype.
macro_rules! inherits {
    ($ty:ident => $field:ident) => {
        impl $crate::faults::BaseMethodFault for $ty {
            fn method_fault(&self) -> &$crate::faults::MethodFault {
                $crate::faults::BaseMethodFault::method_fault(&self.$field)
            }

            fn method_fault_mut(&mut self) -> &mut $crate::faults::MethodFault {
                $crate::faults::BaseMethodFault::method_fault_mut(&mut self.$field)
            }
        }
    };
}

/// A fault type that adds no fields to its supertype.
macro_rules! derived_fault {
    ($(#[$meta:meta])* $ty:ident => $field:ident: $parent:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $ty {
            #[doc = concat!("Inherited `", stringify!($parent), "` fields.")]
            pub $field: $parent,
        }

        inherits!($ty => $field);

        impl $crate::decode::Decode for $ty {
            fn decode(
                node: &vimsoap_xml::Node,
                cx: &$crate::decode::DecodeContext<'_>,
            ) -> vimsoap_core::Result<Self> {
                Ok(Self {
                    $field: <$parent as $crate::decode::Decode>::decode(node, cx)?,
                })
            }
        }
    };
}

mod runtime;
mod vim;

pub use runtime::*;
pub use vim::*;

// ============================================================================
// MethodFault
// ============================================================================

/// Root of the fault hierarchy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MethodFault {
    /// The fault that caused this one, if the server reported it.
    pub fault_cause: Option<Box<LocalizedMethodFault>>,
    /// Structured messages for client-side localization.
    pub fault_message: Vec<LocalizableMessage>,
}

impl BaseMethodFault for MethodFault {
    fn method_fault(&self) -> &MethodFault {
        self
    }

    fn method_fault_mut(&mut self) -> &mut MethodFault {
        self
    }
}

impl Decode for MethodFault {
    fn decode(node: &Node, cx: &DecodeContext<'_>) -> Result<Self> {
        Ok(Self {
            fault_cause: decode::optional::<LocalizedMethodFault>(node, "faultCause", cx)?
                .map(Box::new),
            fault_message: decode::repeated(node, "faultMessage", cx)?,
        })
    }
}

/// A fault whose type name the registry could not resolve.
///
/// The base fields are decoded; everything else is kept as the raw node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnknownFault {
    /// Type name carried in the document.
    pub type_name: String,
    /// Inherited `MethodFault` fields.
    pub method_fault: MethodFault,
    /// The undecoded element.
    pub node: Node,
}

inherits!(UnknownFault => method_fault);

// ============================================================================
// AnyFault
// ============================================================================

fn decode_as<T: FaultType>(node: &Node, cx: &DecodeContext<'_>) -> Result<AnyFault> {
    Ok(T::decode(node, cx)?.into())
}

macro_rules! any_fault {
    ($($kind:ident),+ $(,)?) => {
        /// A decoded fault of any type.
        #[derive(Clone, Debug, PartialEq)]
        #[non_exhaustive]
        pub enum AnyFault {
            $(
                #[doc = concat!("A decoded `", stringify!($kind), "`.")]
                $kind($kind),
            )+
            /// A fault whose type is not registered.
            Unknown(UnknownFault),
        }

        impl AnyFault {
            /// The concrete kind, `None` for unregistered types.
            pub fn kind(&self) -> Option<FaultKind> {
                match self {
                    $(Self::$kind(_) => Some(FaultKind::$kind),)+
                    Self::Unknown(_) => None,
                }
            }
        }

        impl BaseMethodFault for AnyFault {
            fn method_fault(&self) -> &MethodFault {
                match self {
                    $(Self::$kind(f) => f.method_fault(),)+
                    Self::Unknown(f) => f.method_fault(),
                }
            }

            fn method_fault_mut(&mut self) -> &mut MethodFault {
                match self {
                    $(Self::$kind(f) => f.method_fault_mut(),)+
                    Self::Unknown(f) => f.method_fault_mut(),
                }
            }
        }

        $(
            impl From<$kind> for AnyFault {
                fn from(fault: $kind) -> Self {
                    Self::$kind(fault)
                }
            }

            impl FaultType for $kind {
                const KIND: FaultKind = FaultKind::$kind;

                fn from_any(fault: &AnyFault) -> Option<&Self> {
                    match fault {
                        AnyFault::$kind(f) => Some(f),
                        _ => None,
                    }
                }
            }
        )+

        /// Decoders for every built-in fault type.
        pub(crate) fn builtin_decoders() -> Vec<(FaultKind, FaultDecoder)> {
            vec![$((FaultKind::$kind, decode_as::<$kind> as FaultDecoder),)+]
        }
    };
}

any_fault! {
    MethodFault,
    RuntimeFault,
    SystemError,
    NotImplemented,
    NotSupported,
    InvalidArgument,
    InvalidRequest,
    ManagedObjectNotFound,
    RequestCanceled,
    SecurityError,
    NoPermission,
    NotAuthenticated,
    VimFault,
    InvalidLogin,
    InvalidLocale,
    InvalidState,
    InvalidPowerState,
    VmConfigFault,
    InvalidVmConfig,
    FileFault,
    FileNotFound,
    AlreadyExists,
    DuplicateName,
    NotFound,
    TaskInProgress,
    InvalidName,
}

impl AnyFault {
    /// Wire type name of this fault.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Unknown(f) => &f.type_name,
            known => known.kind().map_or("MethodFault", FaultKind::name),
        }
    }

    /// Whether this fault is `kind` or one of its subtypes.
    ///
    /// Unregistered faults are only known to be a `MethodFault`.
    pub fn is_a(&self, kind: FaultKind) -> bool {
        match self.kind() {
            Some(own) => own.is_subtype_of(kind),
            None => kind == FaultKind::MethodFault,
        }
    }

    /// Borrow this fault as a concrete type.
    pub fn downcast_ref<T: FaultType>(&self) -> Option<&T> {
        T::from_any(self)
    }
}

impl Default for AnyFault {
    fn default() -> Self {
        Self::MethodFault(MethodFault::default())
    }
}

impl fmt::Display for AnyFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
