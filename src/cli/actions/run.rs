use super::Action;
use crate::{
    check::{Outcome, run_check},
    queries::postgres::PgConnector,
    report::{JsonReporter, OutputFormat, TextReporter},
};
use std::io;

/// Execute the action's business logic by delegating to the appropriate module
pub async fn execute(action: Action) -> anyhow::Result<Outcome> {
    match action {
        Action::Check { config, output } => {
            let outcome = match output {
                OutputFormat::Text => {
                    run_check(&PgConnector, &config, &mut TextReporter::new(io::stdout())).await
                }
                OutputFormat::Json => {
                    run_check(&PgConnector, &config, &mut JsonReporter::new(io::stdout())).await
                }
            };
            Ok(outcome)
        }
    }
}
