//! `VimFault` and its subtypes: failures defined by the API contract.

use super::MethodFault;
use crate::decode::{self, Decode, DecodeContext};
use crate::mor::ManagedObjectReference;
use crate::power::VirtualMachinePowerState;
use vimsoap_core::Result;
use vimsoap_xml::Node;

derived_fault! {
    /// Base of API-level failures.
    VimFault => method_fault: MethodFault
}

derived_fault! {
    /// Incorrect user name or password.
    InvalidLogin => vim_fault: VimFault
}

derived_fault! {
    /// Unsupported locale.
    InvalidLocale => vim_fault: VimFault
}

derived_fault! {
    /// Operation invalid in the current state.
    InvalidState => vim_fault: VimFault
}

/// Operation invalid in the virtual machine's current power state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InvalidPowerState {
    /// Inherited `InvalidState` fields.
    pub invalid_state: InvalidState,
    /// State the operation required, if reported.
    pub requested_state: Option<VirtualMachinePowerState>,
    /// State the virtual machine was in.
    pub existing_state: VirtualMachinePowerState,
}

inherits!(InvalidPowerState => invalid_state);

impl Decode for InvalidPowerState {
    fn decode(node: &Node, cx: &DecodeContext<'_>) -> Result<Self> {
        Ok(Self {
            invalid_state: InvalidState::decode(node, cx)?,
            requested_state: decode::parse_optional(node, "requestedState")?,
            existing_state: decode::parse_required(node, "existingState")?,
        })
    }
}

derived_fault! {
    /// Base of virtual machine configuration faults.
    VmConfigFault => vim_fault: VimFault
}

/// Invalid virtual machine configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InvalidVmConfig {
    /// Inherited `VmConfigFault` fields.
    pub vm_config_fault: VmConfigFault,
    /// Path of the offending property, if known.
    pub property: Option<String>,
}

inherits!(InvalidVmConfig => vm_config_fault);

impl Decode for InvalidVmConfig {
    fn decode(node: &Node, cx: &DecodeContext<'_>) -> Result<Self> {
        Ok(Self {
            vm_config_fault: VmConfigFault::decode(node, cx)?,
            property: decode::optional_text(node, "property"),
        })
    }
}

/// Base of datastore file faults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FileFault {
    /// Inherited `VimFault` fields.
    pub vim_fault: VimFault,
    /// Datastore path of the file.
    pub file: String,
}

inherits!(FileFault => vim_fault);

impl Decode for FileFault {
    fn decode(node: &Node, cx: &DecodeContext<'_>) -> Result<Self> {
        Ok(Self {
            vim_fault: VimFault::decode(node, cx)?,
            file: decode::required_text(node, "file")?.to_string(),
        })
    }
}

derived_fault! {
    /// Referenced file does not exist.
    FileNotFound => file_fault: FileFault
}

/// An object with the same identity already exists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlreadyExists {
    /// Inherited `VimFault` fields.
    pub vim_fault: VimFault,
    /// Name of the existing object, if reported.
    pub name: Option<String>,
}

inherits!(AlreadyExists => vim_fault);

impl Decode for AlreadyExists {
    fn decode(node: &Node, cx: &DecodeContext<'_>) -> Result<Self> {
        Ok(Self {
            vim_fault: VimFault::decode(node, cx)?,
            name: decode::optional_text(node, "name"),
        })
    }
}

/// An object with the same name exists in the target container.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DuplicateName {
    /// Inherited `VimFault` fields.
    pub vim_fault: VimFault,
    /// The conflicting name.
    pub name: String,
    /// The object that already holds it.
    pub object: ManagedObjectReference,
}

inherits!(DuplicateName => vim_fault);

impl Decode for DuplicateName {
    fn decode(node: &Node, cx: &DecodeContext<'_>) -> Result<Self> {
        Ok(Self {
            vim_fault: VimFault::decode(node, cx)?,
            name: decode::required_text(node, "name")?.to_string(),
            object: decode::required(node, "object", cx)?,
        })
    }
}

derived_fault! {
    /// A referenced item does not exist.
    NotFound => vim_fault: VimFault
}

/// Another task currently holds the object.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskInProgress {
    /// Inherited `VimFault` fields.
    pub vim_fault: VimFault,
    /// The busy task.
    pub task: ManagedObjectReference,
}

inherits!(TaskInProgress => vim_fault);

impl Decode for TaskInProgress {
    fn decode(node: &Node, cx: &DecodeContext<'_>) -> Result<Self> {
        Ok(Self {
            vim_fault: VimFault::decode(node, cx)?,
            task: decode::required(node, "task", cx)?,
        })
    }
}

/// A name is not valid for the target entity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InvalidName {
    /// Inherited `VimFault` fields.
    pub vim_fault: VimFault,
    /// The rejected name.
    pub name: String,
    /// The entity being named, if reported.
    pub entity: Option<ManagedObjectReference>,
}

inherits!(InvalidName => vim_fault);

impl Decode for InvalidName {
    fn decode(node: &Node, cx: &DecodeContext<'_>) -> Result<Self> {
        Ok(Self {
            vim_fault: VimFault::decode(node, cx)?,
            name: decode::required_text(node, "name")?.to_string(),
            entity: decode::optional(node, "entity", cx)?,
        })
    }
}
