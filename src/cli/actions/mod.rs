mod run;

use crate::{check::Outcome, config::ConnectionConfig, report::OutputFormat};

/// Action enum representing each possible command
#[derive(Debug)]
pub enum Action {
    Check {
        config: ConnectionConfig,
        output: OutputFormat,
    },
}

impl Action {
    /// Execute the action
    ///
    /// # Errors
    ///
    /// Returns an error if the action fails to execute. A failed connectivity
    /// check is not an error, it is reported through the returned [`Outcome`].
    pub async fn execute(self) -> anyhow::Result<Outcome> {
        run::execute(self).await
    }
}
