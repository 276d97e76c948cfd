use std::time::Duration;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while connecting to or verifying a database.
///
/// None of these are shown to the user: the checker collapses them into a
/// single failure outcome and only logs the detail at debug level.
#[derive(Debug, Error)]
pub enum Error {
    #[error("missing connection setting: {0}")]
    MissingSetting(&'static str),

    #[error("invalid connection setting: {0}")]
    InvalidSetting(&'static str),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("connection attempt timed out after {0:?}")]
    Timeout(Duration),

    #[error("server returned an empty version string")]
    EmptyVersion,

    #[error("check panicked")]
    Panicked,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_setting_names_the_field() {
        let err = Error::MissingSetting("host");
        assert_eq!(err.to_string(), "missing connection setting: host");
    }

    #[test]
    fn test_invalid_setting_hides_the_value() {
        let err = Error::InvalidSetting("port");
        assert_eq!(err.to_string(), "invalid connection setting: port");
    }

    #[test]
    fn test_database_error_is_transparent() {
        let err = Error::from(sqlx::Error::Protocol("bad handshake".to_string()));
        assert!(matches!(err, Error::Database(_)));
        assert!(err.to_string().contains("bad handshake"));
    }

    #[test]
    fn test_timeout_display() {
        let err = Error::Timeout(Duration::from_secs(5));
        assert_eq!(err.to_string(), "connection attempt timed out after 5s");
    }
}
