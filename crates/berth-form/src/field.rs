//! Field identity and the account-type switch.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The closed set of fields on the connection form, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    /// Connection mode; controls which other fields apply.
    AccountType,
    /// Login identifier, `local@domain` shaped.
    Username,
    /// Login secret, entered masked.
    Password,
    /// Hostname or URL fragment of the server.
    ServerAddress,
    /// Resource path on the server. Only applies in advanced mode.
    ServerPath,
    /// TCP port. Only applies in advanced mode.
    Port,
}

impl FieldName {
    /// Every field, in render order.
    pub const ALL: [Self; 6] = [
        Self::AccountType,
        Self::Username,
        Self::Password,
        Self::ServerAddress,
        Self::ServerPath,
        Self::Port,
    ];

    /// The record key for this field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AccountType => "accountType",
            Self::Username => "username",
            Self::Password => "password",
            Self::ServerAddress => "serverAddress",
            Self::ServerPath => "serverPath",
            Self::Port => "port",
        }
    }

    /// The label shown next to the field on screen.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AccountType => "Account Type",
            Self::Username => "User Name",
            Self::Password => "Password",
            Self::ServerAddress => "Server Address",
            Self::ServerPath => "Server Path",
            Self::Port => "Port",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown account type name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown account type: {0}")]
pub struct UnknownAccountType(pub String);

/// Connection mode selected by the picker.
///
/// `Advanced` asks for the server path and port on top of the base
/// credentials; `Manual` hides them and skips their rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountType {
    /// Base credentials only.
    Manual,
    /// Base credentials plus server path and port.
    #[default]
    Advanced,
}

impl AccountType {
    /// Every mode, in picker order.
    pub const ALL: [Self; 2] = [Self::Manual, Self::Advanced];

    /// The display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Manual => "Manual",
            Self::Advanced => "Advanced",
        }
    }

    /// Whether the server path and port rows apply in this mode.
    #[must_use]
    pub const fn requires_server_details(self) -> bool {
        !matches!(self, Self::Manual)
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AccountType {
    type Err = UnknownAccountType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Manual" => Ok(Self::Manual),
            "Advanced" => Ok(Self::Advanced),
            other => Err(UnknownAccountType(other.to_string())),
        }
    }
}
