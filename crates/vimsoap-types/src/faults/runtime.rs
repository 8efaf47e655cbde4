//! `RuntimeFault` and its subtypes: failures raised by the server itself.

use super::MethodFault;
use crate::decode::{self, Decode, DecodeContext};
use crate::mor::ManagedObjectReference;
use vimsoap_core::Result;
use vimsoap_xml::Node;

derived_fault! {
    /// Failures raised by the server runtime rather than the API contract.
    RuntimeFault => method_fault: MethodFault
}

/// Internal server error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SystemError {
    /// Inherited `RuntimeFault` fields.
    pub runtime_fault: RuntimeFault,
    /// Server-provided reason.
    pub reason: String,
}

inherits!(SystemError => runtime_fault);

impl Decode for SystemError {
    fn decode(node: &Node, cx: &DecodeContext<'_>) -> Result<Self> {
        Ok(Self {
            runtime_fault: RuntimeFault::decode(node, cx)?,
            reason: decode::required_text(node, "reason")?.to_string(),
        })
    }
}

derived_fault! {
    /// Method not implemented by this server.
    NotImplemented => runtime_fault: RuntimeFault
}

derived_fault! {
    /// Operation not supported in this configuration.
    NotSupported => runtime_fault: RuntimeFault
}

/// A method argument was invalid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InvalidArgument {
    /// Inherited `RuntimeFault` fields.
    pub runtime_fault: RuntimeFault,
    /// Path of the offending property, if known.
    pub invalid_property: Option<String>,
}

inherits!(InvalidArgument => runtime_fault);

impl Decode for InvalidArgument {
    fn decode(node: &Node, cx: &DecodeContext<'_>) -> Result<Self> {
        Ok(Self {
            runtime_fault: RuntimeFault::decode(node, cx)?,
            invalid_property: decode::optional_text(node, "invalidProperty"),
        })
    }
}

derived_fault! {
    /// The request itself was malformed.
    InvalidRequest => runtime_fault: RuntimeFault
}

/// A referenced managed object no longer exists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManagedObjectNotFound {
    /// Inherited `RuntimeFault` fields.
    pub runtime_fault: RuntimeFault,
    /// The missing object.
    pub obj: ManagedObjectReference,
}

inherits!(ManagedObjectNotFound => runtime_fault);

impl Decode for ManagedObjectNotFound {
    fn decode(node: &Node, cx: &DecodeContext<'_>) -> Result<Self> {
        Ok(Self {
            runtime_fault: RuntimeFault::decode(node, cx)?,
            obj: decode::required(node, "obj", cx)?,
        })
    }
}

derived_fault! {
    /// The request was canceled by the caller.
    RequestCanceled => runtime_fault: RuntimeFault
}

derived_fault! {
    /// Base of authorization failures.
    SecurityError => runtime_fault: RuntimeFault
}

/// The session lacks a privilege on an object.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoPermission {
    /// Inherited `SecurityError` fields.
    pub security_error: SecurityError,
    /// Object the privilege was checked against.
    pub object: Option<ManagedObjectReference>,
    /// Privilege that was missing.
    pub privilege_id: Option<String>,
}

inherits!(NoPermission => security_error);

impl Decode for NoPermission {
    fn decode(node: &Node, cx: &DecodeContext<'_>) -> Result<Self> {
        Ok(Self {
            security_error: SecurityError::decode(node, cx)?,
            object: decode::optional(node, "object", cx)?,
            privilege_id: decode::optional_text(node, "privilegeId"),
        })
    }
}

derived_fault! {
    /// The session is not logged in or has expired.
    NotAuthenticated => no_permission: NoPermission
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{AnyFault, BaseMethodFault, FaultKind};

    fn cx() -> DecodeContext<'static> {
        DecodeContext::default()
    }

    #[test]
    fn test_system_error() {
        let node = Node::new("SystemErrorFault")
            .with_type("SystemError")
            .with_child(Node::new("reason").with_text("Undefined"));
        let fault = cx().decode_fault(&node).unwrap();
        let AnyFault::SystemError(err) = fault else {
            unreachable!("Expected SystemError variant");
        };
        assert_eq!(err.reason, "Undefined");
    }

    #[test]
    fn test_system_error_requires_reason() {
        let node = Node::new("SystemErrorFault").with_type("SystemError");
        assert!(cx().decode_fault(&node).is_err());
    }

    #[test]
    fn test_invalid_argument_property() {
        let node = Node::new("InvalidArgumentFault")
            .with_type("InvalidArgument")
            .with_child(Node::new("invalidProperty").with_text("spec.name"));
        let fault = cx().decode::<InvalidArgument>(&node).unwrap();
        assert_eq!(fault.invalid_property.as_deref(), Some("spec.name"));
    }

    #[test]
    fn test_managed_object_not_found() {
        let node = Node::new("ManagedObjectNotFoundFault")
            .with_type("ManagedObjectNotFound")
            .with_child(Node::new("obj").with_attr("type", "VirtualMachine").with_text("vm-9"));
        let fault = cx().decode::<ManagedObjectNotFound>(&node).unwrap();
        assert_eq!(fault.obj, ManagedObjectReference::new("VirtualMachine", "vm-9"));
    }

    #[test]
    fn test_not_authenticated_inherits_no_permission() {
        let node = Node::new("NotAuthenticatedFault")
            .with_type("NotAuthenticated")
            .with_child(
                Node::new("object")
                    .with_attr("type", "SessionManager")
                    .with_text("SessionManager"),
            )
            .with_child(Node::new("privilegeId").with_text("System.View"));
        let fault = cx().decode_fault(&node).unwrap();
        assert!(fault.is_a(FaultKind::SecurityError));

        let AnyFault::NotAuthenticated(inner) = fault else {
            unreachable!("Expected NotAuthenticated variant");
        };
        assert_eq!(inner.no_permission.privilege_id.as_deref(), Some("System.View"));
        assert_eq!(
            inner.no_permission.object.unwrap().kind,
            "SessionManager".to_string()
        );
    }

    #[test]
    fn test_runtime_fault_with_cause() {
        let node = Node::new("RuntimeFaultFault")
            .with_type("RuntimeFault")
            .with_child(
                Node::new("faultCause")
                    .with_child(Node::new("fault").with_type("RequestCanceled"))
                    .with_child(Node::new("localizedMessage").with_text("canceled")),
            );
        let fault = cx().decode::<RuntimeFault>(&node).unwrap();
        let cause = fault.cause().unwrap();
        assert_eq!(cause.fault.kind(), Some(FaultKind::RequestCanceled));
        assert_eq!(cause.localized_message, "canceled");
    }
}
