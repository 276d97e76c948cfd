use sqlx::{
    ConnectOptions, Connection, PgConnection,
    postgres::{PgConnectOptions, PgSslMode},
};
use tokio::time;
use tracing::{debug, warn};

use super::VERSION_QUERY;
use crate::{
    check::{Connector, DatabaseHandle},
    config::ConnectionConfig,
    error::{Error, Result},
    tls::{TlsMode, ensure_crypto_provider},
};

/// Opens a single TLS connection with sqlx
#[derive(Debug, Clone, Copy, Default)]
pub struct PgConnector;

/// An open `PostgreSQL` connection
#[derive(Debug)]
pub struct PgHandle {
    conn: PgConnection,
}

/// Build sqlx connect options from the config
///
/// Every connection value is taken from the config, none of them fall back to
/// the driver's `PG*` environment defaults.
///
/// # Errors
///
/// Returns [`Error::MissingSetting`] for the first connection value that is
/// not set, or [`Error::InvalidSetting`] for a malformed port
pub fn connect_options(config: &ConnectionConfig) -> Result<PgConnectOptions> {
    let mut options = PgConnectOptions::new()
        .host(config.host()?)
        .port(config.port()?)
        .database(config.database()?)
        .username(config.user()?)
        .password(config.password()?)
        .application_name(env!("CARGO_PKG_NAME"));

    let tls = &config.tls;
    options = match tls.mode {
        TlsMode::Require => options.ssl_mode(PgSslMode::Require),
        TlsMode::VerifyCA => options.ssl_mode(PgSslMode::VerifyCa),
        TlsMode::VerifyFull => options.ssl_mode(PgSslMode::VerifyFull),
    };

    match &tls.ca {
        Some(ca_path) => options = options.ssl_root_cert(ca_path),
        None if tls.mode.verifies_certificate() => {
            warn!(tls_mode = %tls.mode, "no CA certificate given, using the system trust store");
        }
        None => {}
    }

    // Apply client certificate if provided
    if let (Some(cert_path), Some(key_path)) = (&tls.cert, &tls.key) {
        options = options.ssl_client_cert(cert_path).ssl_client_key(key_path);
    }

    Ok(options)
}

impl Connector for PgConnector {
    type Handle = PgHandle;

    async fn connect(&self, config: &ConnectionConfig) -> Result<PgHandle> {
        let options = connect_options(config)?;
        ensure_crypto_provider();

        debug!(
            host = ?config.host,
            port = ?config.port,
            database = ?config.database,
            tls_mode = %config.tls.mode,
            "connecting"
        );

        let conn = match config.connect_timeout {
            Some(limit) => time::timeout(limit, options.connect())
                .await
                .map_err(|_| Error::Timeout(limit))??,
            None => options.connect().await?,
        };

        Ok(PgHandle { conn })
    }
}

impl DatabaseHandle for PgHandle {
    async fn server_version(&mut self) -> Result<String> {
        let version: String = sqlx::query_scalar(VERSION_QUERY)
            .fetch_one(&mut self.conn)
            .await?;
        Ok(version)
    }

    async fn close(self) -> Result<()> {
        self.conn.close().await?;
        Ok(())
    }
}
