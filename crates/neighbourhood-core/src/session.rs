//! Session-level types: the role attribute read from a profile and the
//! events the login flow emits for the surrounding application.

use serde::{Deserialize, Serialize};

/// Role attribute of a profile, controlling the post-login destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Resident,
    CommitteeMember,
}

impl Role {
    /// Interpret the raw `role` attribute of a profile record.
    ///
    /// A missing or empty attribute defaults to [`Role::Resident`]. Any other
    /// value must match a known role exactly (case-sensitive); unrecognized
    /// non-empty values are rejected rather than defaulted. The asymmetry is
    /// deliberate — absence means "never assigned", a wrong string means a
    /// data-entry problem in the profile record.
    pub fn from_attribute(attr: Option<&str>) -> Result<Self, String> {
        match attr {
            None => Ok(Self::Resident),
            Some("") => Ok(Self::Resident),
            Some(s) => s.parse(),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resident => write!(f, "Resident"),
            Self::CommitteeMember => write!(f, "Committee Member"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Resident" => Ok(Self::Resident),
            "Committee Member" => Ok(Self::CommitteeMember),
            _ => Err(format!("Unknown role: {s}")),
        }
    }
}

/// Events emitted by the login flow for the surrounding application.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    LoginSucceeded,
    LoginFailed { reason: String },
}
