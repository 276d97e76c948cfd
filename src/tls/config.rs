use std::{fmt, path::PathBuf, str::FromStr};

/// TLS configuration for the database connection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlsConfig {
    pub mode: TlsMode,
    pub ca: Option<PathBuf>,
    pub cert: Option<PathBuf>,
    pub key: Option<PathBuf>,
}

/// TLS/SSL mode for the database connection
///
/// Transport encryption is mandatory, there is no variant that disables it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TlsMode {
    /// TLS required, but no certificate verification
    #[default]
    Require,
    /// Verify server certificate against CA
    VerifyCA,
    /// Verify certificate and hostname
    VerifyFull,
}

impl FromStr for TlsMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "require" => Ok(Self::Require),
            "verify-ca" => Ok(Self::VerifyCA),
            "verify-full" => Ok(Self::VerifyFull),
            "disable" | "allow" | "prefer" => {
                Err(format!("TLS mode {s} is not allowed, encryption is mandatory"))
            }
            _ => Err(format!("Invalid TLS mode: {s}")),
        }
    }
}

impl fmt::Display for TlsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Require => "require",
            Self::VerifyCA => "verify-ca",
            Self::VerifyFull => "verify-full",
        })
    }
}

impl TlsMode {
    /// Whether the server certificate is checked against a CA
    #[must_use]
    pub const fn verifies_certificate(&self) -> bool {
        !matches!(self, Self::Require)
    }
}
