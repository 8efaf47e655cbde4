//! Virtual machine power state enumeration.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use vimsoap_core::Error;

/// Power state of a virtual machine, as carried by `InvalidPowerState`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum VirtualMachinePowerState {
    /// The virtual machine is powered off.
    #[default]
    PoweredOff,
    /// The virtual machine is powered on.
    PoweredOn,
    /// The virtual machine is suspended.
    Suspended,
}

impl VirtualMachinePowerState {
    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PoweredOff => "poweredOff",
            Self::PoweredOn => "poweredOn",
            Self::Suspended => "suspended",
        }
    }
}

impl fmt::Display for VirtualMachinePowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VirtualMachinePowerState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "poweredOff" => Ok(Self::PoweredOff),
            "poweredOn" => Ok(Self::PoweredOn),
            "suspended" => Ok(Self::Suspended),
            other => Err(Error::invalid(
                "VirtualMachinePowerState",
                other,
                "expected poweredOff, poweredOn or suspended",
            )),
        }
    }
}
