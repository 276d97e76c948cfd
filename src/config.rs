use crate::{
    error::{Error, Result},
    tls::TlsConfig,
};
use std::{fmt, time::Duration};

/// Parameters needed to open the database connection
///
/// Built once at startup and never mutated afterwards. Every connection field
/// is optional here so that a missing value surfaces as a failed connection
/// attempt instead of aborting before the check starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub host: Option<String>,
    /// Kept as given, parsed when the connection is attempted
    pub port: Option<String>,
    pub database: Option<String>,
    pub user: Option<String>,
    pub password: Option<Password>,
    pub tls: TlsConfig,
    /// `None` leaves the timeout to the driver
    pub connect_timeout: Option<Duration>,
}

impl ConnectionConfig {
    /// # Errors
    ///
    /// Returns [`Error::MissingSetting`] if the host is not set
    pub fn host(&self) -> Result<&str> {
        required(self.host.as_deref(), "host")
    }

    /// # Errors
    ///
    /// Returns [`Error::MissingSetting`] if the port is not set, or
    /// [`Error::InvalidSetting`] if it is not a TCP port number
    pub fn port(&self) -> Result<u16> {
        let port = required(self.port.as_deref(), "port")?;
        match port.trim().parse::<u16>() {
            Ok(0) | Err(_) => Err(Error::InvalidSetting("port")),
            Ok(port) => Ok(port),
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::MissingSetting`] if the database name is not set
    pub fn database(&self) -> Result<&str> {
        required(self.database.as_deref(), "database")
    }

    /// # Errors
    ///
    /// Returns [`Error::MissingSetting`] if the user is not set
    pub fn user(&self) -> Result<&str> {
        required(self.user.as_deref(), "user")
    }

    /// # Errors
    ///
    /// Returns [`Error::MissingSetting`] if the password is not set
    pub fn password(&self) -> Result<&str> {
        required(self.password.as_ref().map(Password::expose), "password")
    }
}

fn required<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(Error::MissingSetting(name))
}

/// Database password, redacted from `Debug` output
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for Password {
    fn from(secret: String) -> Self {
        Self(secret)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(********)")
    }
}
