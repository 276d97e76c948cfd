//! Console output for a check
//!
//! The text reporter prints fixed bilingual (Spanish / English) status lines as
//! the check progresses. The JSON reporter prints a single summary object once
//! the check is done. Neither ever prints error detail.

use crate::{check::Outcome, config::ConnectionConfig};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::{io::Write, str::FromStr};

const RULE: &str = "----------------------------------------------------";

/// Receives progress events from [`crate::check::run_check`]
pub trait Reporter {
    fn attempting(&mut self, config: &ConnectionConfig);
    fn connected(&mut self);
    fn succeeded(&mut self, engine: &str);
    fn failed(&mut self);
    /// Only called if a connection was opened
    fn closed(&mut self);
    fn finish(&mut self, outcome: &Outcome);
}

/// Console output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {s}")),
        }
    }
}

/// Human readable status lines
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    // Console output is best effort, a closed stdout must not abort the check.
    fn line(&mut self, text: &str) {
        writeln!(self.out, "{text}").ok();
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn attempting(&mut self, config: &ConnectionConfig) {
        match config.host.as_deref().filter(|h| !h.is_empty()) {
            Some(host) => self.line(&format!(
                "Intentando conectar a la base de datos en {host}... / Attempting to connect to the database at {host}..."
            )),
            None => self.line(
                "Intentando conectar a la base de datos... / Attempting to connect to the database...",
            ),
        }
    }

    fn connected(&mut self) {
        self.line(
            "Conexión establecida. Verificando la versión de PostgreSQL... / Connection established. Checking the PostgreSQL version...",
        );
    }

    fn succeeded(&mut self, engine: &str) {
        self.line("");
        self.line(RULE);
        self.line(
            "✅ ¡ÉXITO! La conexión se ha establecido correctamente. / SUCCESS! The connection was established.",
        );
        self.line(&format!(
            "La versión de la base de datos es: {engine} / The database version is: {engine}"
        ));
        self.line(RULE);
        self.line("");
    }

    fn failed(&mut self) {
        self.line("");
        self.line(RULE);
        self.line(
            "❌ ¡FALLO! No se pudo conectar a la base de datos. / FAILURE! Could not connect to the database.",
        );
        self.line(
            "Error de PostgreSQL: (detalles ocultos por seguridad) / PostgreSQL error: (details hidden for security)",
        );
        self.line(RULE);
        self.line("");
    }

    fn closed(&mut self) {
        self.line("La conexión ha sido cerrada. / The connection has been closed.");
    }

    fn finish(&mut self, _outcome: &Outcome) {
        self.out.flush().ok();
    }
}

#[derive(Serialize, Debug, Default)]
struct Summary {
    status: &'static str,
    time: String,
    runtime_ms: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    engine: Option<String>,
    connected: bool,
    closed: bool,
}

/// One JSON object per check, printed when the check finishes
pub struct JsonReporter<W: Write> {
    out: W,
    started: DateTime<Utc>,
    summary: Summary,
}

impl<W: Write> JsonReporter<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out,
            started: Utc::now(),
            summary: Summary::default(),
        }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn attempting(&mut self, config: &ConnectionConfig) {
        self.started = Utc::now();
        self.summary.time = self.started.to_rfc3339_opts(SecondsFormat::Secs, true);
        self.summary.host.clone_from(&config.host);
        self.summary.database.clone_from(&config.database);
    }

    fn connected(&mut self) {
        self.summary.connected = true;
    }

    fn succeeded(&mut self, engine: &str) {
        self.summary.engine = Some(engine.to_string());
    }

    fn failed(&mut self) {
        self.summary.engine = None;
    }

    fn closed(&mut self) {
        self.summary.closed = true;
    }

    fn finish(&mut self, outcome: &Outcome) {
        self.summary.status = if outcome.is_success() { "ok" } else { "error" };
        self.summary.runtime_ms = Utc::now()
            .signed_duration_since(self.started)
            .num_milliseconds();

        if let Ok(serialized) = serde_json::to_string(&self.summary) {
            writeln!(self.out, "{serialized}").ok();
            self.out.flush().ok();
        }
    }
}
