//! The connect → query → report → close sequence
//!
//! [`run_check`] only talks to the database through the [`Connector`] and
//! [`DatabaseHandle`] traits, so the whole sequence can be driven by a mock in
//! tests. The production implementation lives in [`crate::queries::postgres`].

use crate::{
    config::ConnectionConfig,
    error::{Error, Result},
    report::Reporter,
};
use futures::FutureExt;
use std::{future::Future, panic::AssertUnwindSafe, process::ExitCode};
use tracing::{debug, info};

/// Opens connections described by a [`ConnectionConfig`]
pub trait Connector {
    type Handle: DatabaseHandle;

    fn connect(
        &self,
        config: &ConnectionConfig,
    ) -> impl Future<Output = Result<Self::Handle>> + Send;
}

/// An open connection, owned by exactly one check
pub trait DatabaseHandle: Send + Sized {
    /// Run the fixed version query and return the raw version string
    fn server_version(&mut self) -> impl Future<Output = Result<String>> + Send;

    /// Release the connection. Consumes the handle so it can only happen once.
    fn close(self) -> impl Future<Output = Result<()>> + Send;
}

/// Result of a single check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success { engine: String },
    Failure,
}

impl Outcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Connect, verify, report and release
///
/// Every error is collapsed into [`Outcome::Failure`]; the underlying detail
/// only goes to the debug log. If a handle was acquired it is closed exactly
/// once before returning, whatever happened in between.
pub async fn run_check<C, R>(connector: &C, config: &ConnectionConfig, reporter: &mut R) -> Outcome
where
    C: Connector,
    R: Reporter,
{
    reporter.attempting(config);

    let mut handle = match guarded(connector.connect(config)).await {
        Ok(handle) => handle,
        Err(err) => {
            debug!(error = %err, stage = "connect", "connectivity check failed");
            reporter.failed();
            reporter.finish(&Outcome::Failure);
            return Outcome::Failure;
        }
    };

    info!("connection established");
    reporter.connected();

    let outcome = match guarded(handle.server_version())
        .await
        .and_then(|version| engine_token(&version).map(str::to_string))
    {
        Ok(engine) => {
            info!(%engine, "database verified");
            reporter.succeeded(&engine);
            Outcome::Success { engine }
        }
        Err(err) => {
            debug!(error = %err, stage = "verify", "connectivity check failed");
            reporter.failed();
            Outcome::Failure
        }
    };

    if let Err(err) = guarded(handle.close()).await {
        debug!(error = %err, "error while closing connection");
    }
    reporter.closed();
    reporter.finish(&outcome);

    outcome
}

/// First whitespace-delimited token of a version string, e.g. `PostgreSQL`
///
/// # Errors
///
/// Returns [`Error::EmptyVersion`] if the string has no tokens
pub fn engine_token(version: &str) -> Result<&str> {
    version.split_whitespace().next().ok_or(Error::EmptyVersion)
}

// A panic inside the driver is reported like any other failure.
async fn guarded<T>(fut: impl Future<Output = Result<T>>) -> Result<T> {
    AssertUnwindSafe(fut)
        .catch_unwind()
        .await
        .unwrap_or(Err(Error::Panicked))
}
