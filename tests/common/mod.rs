#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use pgcheck::{
    ConnectionConfig, Connector, DatabaseHandle, Error, Outcome, Password, Result,
    report::Reporter,
};
use std::{
    env,
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

/// Text that must never reach the console
pub const SECRET_DETAIL: &str = "password authentication failed for user \"checker\"";

pub const POSTGRES_VERSION: &str =
    "PostgreSQL 16.4 on x86_64-pc-linux-gnu, compiled by gcc (GCC) 12.2.0, 64-bit";

pub fn skip_if_no_postgres() -> bool {
    env::var("SKIP_POSTGRES_TESTS").is_ok()
}

/// Settings for the live test container (TLS enabled)
pub fn postgres_config() -> ConnectionConfig {
    ConnectionConfig {
        host: Some("localhost".to_string()),
        port: Some("5432".to_string()),
        database: Some("testdb".to_string()),
        user: Some("postgres".to_string()),
        password: Some(Password::new("secret")),
        ..Default::default()
    }
}

/// A complete config pointing at nothing in particular
pub fn mock_config() -> ConnectionConfig {
    ConnectionConfig {
        host: Some("db.example.com".to_string()),
        port: Some("5432".to_string()),
        database: Some("app".to_string()),
        user: Some("checker".to_string()),
        password: Some(Password::new("hunter2")),
        ..Default::default()
    }
}

pub fn detail_error() -> Error {
    Error::Database(sqlx::Error::Protocol(SECRET_DETAIL.to_string()))
}

/// What the mock database does at each step
#[derive(Debug, Clone)]
pub enum Script {
    Version(String),
    RefuseConnect,
    PanicConnect,
    FailQuery,
    PanicQuery,
    FailClose,
}

/// Connector that follows a [`Script`] and counts connects and closes
#[derive(Debug)]
pub struct MockConnector {
    script: Script,
    connects: AtomicUsize,
    closes: Arc<AtomicUsize>,
}

impl MockConnector {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            connects: AtomicUsize::new(0),
            closes: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn healthy() -> Self {
        Self::new(Script::Version(POSTGRES_VERSION.to_string()))
    }

    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
pub struct MockHandle {
    script: Script,
    closes: Arc<AtomicUsize>,
}

impl Connector for MockConnector {
    type Handle = MockHandle;

    async fn connect(&self, _config: &ConnectionConfig) -> Result<MockHandle> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        match self.script {
            Script::RefuseConnect => Err(detail_error()),
            Script::PanicConnect => panic!("{SECRET_DETAIL}"),
            _ => Ok(MockHandle {
                script: self.script.clone(),
                closes: Arc::clone(&self.closes),
            }),
        }
    }
}

impl DatabaseHandle for MockHandle {
    async fn server_version(&mut self) -> Result<String> {
        match &self.script {
            Script::Version(version) => Ok(version.clone()),
            Script::FailQuery => Err(detail_error()),
            Script::PanicQuery => panic!("{SECRET_DETAIL}"),
            _ => Ok(POSTGRES_VERSION.to_string()),
        }
    }

    async fn close(self) -> Result<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        match self.script {
            Script::FailClose => Err(detail_error()),
            _ => Ok(()),
        }
    }
}

/// Reporter that records the order of events
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<String>,
}

impl Reporter for RecordingReporter {
    fn attempting(&mut self, _config: &ConnectionConfig) {
        self.events.push("attempting".to_string());
    }

    fn connected(&mut self) {
        self.events.push("connected".to_string());
    }

    fn succeeded(&mut self, engine: &str) {
        self.events.push(format!("succeeded:{engine}"));
    }

    fn failed(&mut self) {
        self.events.push("failed".to_string());
    }

    fn closed(&mut self) {
        self.events.push("closed".to_string());
    }

    fn finish(&mut self, outcome: &Outcome) {
        let status = if outcome.is_success() { "ok" } else { "error" };
        self.events.push(format!("finish:{status}"));
    }
}

pub fn pick_free_port() -> u16 {
    std::net::TcpListener::bind(("127.0.0.1", 0))
        .expect("failed to bind random local port")
        .local_addr()
        .expect("failed to read local addr")
        .port()
}

pub fn pgcheck_binary_path() -> PathBuf {
    env::var_os("CARGO_BIN_EXE_pgcheck")
        .map_or_else(|| PathBuf::from("target/debug/pgcheck"), PathBuf::from)
}

/// Command for the binary with an environment free of connection settings,
/// log filters and `.env` files
pub fn pgcheck_command() -> std::process::Command {
    let mut cmd = std::process::Command::new(pgcheck_binary_path());
    for var in [
        pgcheck::envs::HOST,
        pgcheck::envs::PORT,
        pgcheck::envs::DATABASE,
        pgcheck::envs::USER,
        pgcheck::envs::PASSWORD,
        "PGCHECK_TLS_MODE",
        "PGCHECK_TLS_CA",
        "PGCHECK_TLS_CERT",
        "PGCHECK_TLS_KEY",
        "PGCHECK_CONNECT_TIMEOUT",
        "PGCHECK_OUTPUT",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd.env(
        "PGCHECK_ENV_FILE",
        env::temp_dir().join("pgcheck-test-no-such-file.env"),
    );
    cmd
}
