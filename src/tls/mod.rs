//! TLS settings for the database connection
//!
//! - `config` - TLS configuration and modes
//! - `provider` - rustls crypto provider installation

pub mod config;
pub mod provider;

pub use config::{TlsConfig, TlsMode};
pub use provider::ensure_crypto_provider;
