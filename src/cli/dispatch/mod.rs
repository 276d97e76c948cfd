use crate::{
    cli::actions::Action,
    config::{ConnectionConfig, Password},
    report::OutputFormat,
    tls::{TlsConfig, TlsMode},
};
use anyhow::{Result, anyhow};
use clap::ArgMatches;
use std::{path::PathBuf, time::Duration};

/// Non-empty string value of an argument
fn string_arg(matches: &ArgMatches, id: &str) -> Option<String> {
    matches
        .get_one::<String>(id)
        .filter(|value| !value.is_empty())
        .cloned()
}

/// Extract TLS configuration from the `--tls-*` arguments
///
/// An empty mode falls back to the default, anything that would turn
/// encryption off is rejected.
fn extract_tls_config(matches: &ArgMatches) -> Result<TlsConfig> {
    let mode = match string_arg(matches, "tls-mode") {
        Some(mode) => mode.parse::<TlsMode>().map_err(|e| anyhow!(e))?,
        None => TlsMode::default(),
    };

    Ok(TlsConfig {
        mode,
        ca: matches.get_one::<PathBuf>("tls-ca").cloned(),
        cert: matches.get_one::<PathBuf>("tls-cert").cloned(),
        key: matches.get_one::<PathBuf>("tls-key").cloned(),
    })
}

/// Convert `ArgMatches` into typed Action enum with validation
///
/// Missing connection values are not an error here, they fail the check
/// itself so the user gets the usual failure report.
///
/// # Errors
///
/// Returns an error if the TLS mode or output format is invalid
pub fn dispatch(matches: &ArgMatches) -> Result<Action> {
    let config = ConnectionConfig {
        host: string_arg(matches, "host"),
        port: string_arg(matches, "port"),
        database: string_arg(matches, "database"),
        user: string_arg(matches, "user"),
        password: string_arg(matches, "password").map(Password::from),
        tls: extract_tls_config(matches)?,
        connect_timeout: matches
            .get_one::<u64>("connect-timeout")
            .copied()
            .map(Duration::from_secs),
    };

    let output = match matches.get_one::<String>("output") {
        Some(output) => output.parse::<OutputFormat>().map_err(|e| anyhow!(e))?,
        None => OutputFormat::default(),
    };

    Ok(Action::Check { config, output })
}
