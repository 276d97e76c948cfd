use crate::envs;
use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

/// Pure clap command definitions with zero business logic
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("host")
                .env(envs::HOST)
                .help("database host address")
                .long("host")
                .short('H')
                .value_name("HOST"),
        )
        .arg(
            Arg::new("port")
                .env(envs::PORT)
                .help("database port")
                .long("port")
                .short('p')
                .value_name("PORT"),
        )
        .arg(
            Arg::new("database")
                .env(envs::DATABASE)
                .help("database name")
                .long("database")
                .short('d')
                .value_name("NAME"),
        )
        .arg(
            Arg::new("user")
                .env(envs::USER)
                .help("database user")
                .long("user")
                .short('u')
                .value_name("USER"),
        )
        .arg(
            Arg::new("password")
                .env(envs::PASSWORD)
                .hide_env_values(true)
                .help("database password")
                .long("password")
                .value_name("PASSWORD"),
        )
        .arg(
            Arg::new("tls-mode")
                .default_value("require")
                .env("PGCHECK_TLS_MODE")
                .help("TLS/SSL mode: require, verify-ca, verify-full")
                .long("tls-mode")
                .long_help(
                    "TLS/SSL connection mode, encryption is always on:\n\n\
                    - require: TLS required, no certificate verification (default)\n\
                    - verify-ca: Verify server certificate against CA\n\
                    - verify-full: Verify certificate and hostname\n\n\
                    Maps to the PostgreSQL sslmode of the same name."
                )
                .value_name("MODE"),
        )
        .arg(
            Arg::new("tls-ca")
                .env("PGCHECK_TLS_CA")
                .help("Path to CA certificate file for TLS verification")
                .long("tls-ca")
                .long_help(
                    "Path to Certificate Authority (CA) certificate file.\n\
                    Used by the verify-ca and verify-full modes.\n\n\
                    Example: /etc/ssl/certs/ca-certificates.crt"
                )
                .value_name("PATH")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            Arg::new("tls-cert")
                .env("PGCHECK_TLS_CERT")
                .help("Path to client certificate file for TLS client authentication")
                .long("tls-cert")
                .value_name("PATH")
                .value_parser(clap::value_parser!(std::path::PathBuf))
                .requires("tls-key"),
        )
        .arg(
            Arg::new("tls-key")
                .env("PGCHECK_TLS_KEY")
                .help("Path to client private key file for TLS client authentication")
                .long("tls-key")
                .value_name("PATH")
                .value_parser(clap::value_parser!(std::path::PathBuf))
                .requires("tls-cert"),
        )
        .arg(
            Arg::new("connect-timeout")
                .env("PGCHECK_CONNECT_TIMEOUT")
                .help("seconds to wait for the connection (default: driver default)")
                .long("connect-timeout")
                .short('t')
                .value_name("SECONDS")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("output")
                .default_value("text")
                .env("PGCHECK_OUTPUT")
                .help("output format: text, json")
                .long("output")
                .short('o')
                .value_name("FORMAT")
                .value_parser(["text", "json"]),
        )
        .arg(
            Arg::new("env-file")
                .env("PGCHECK_ENV_FILE")
                .help("key-value file loaded into the environment before the check (default: .env)")
                .long("env-file")
                .value_name("PATH")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .help("log to stderr, repeat for more detail (-vv shows hidden error detail)")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count),
        )
}
