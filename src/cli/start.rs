use super::{actions::Action, commands, dispatch};
use crate::{check::Outcome, envs, telemetry};
use anyhow::Result;
use std::{env, path::PathBuf};

/// Main orchestrator - Pure orchestration with no business logic
///
/// Data flow:
/// 1. Load environment file: populate the process environment
/// 2. Parse: Extract CLI arguments (and the variables they fall back to)
/// 3. Extract Verbosity: Convert flag count to logging level
/// 4. Initialize Telemetry: Set up structured logging/tracing
/// 5. Dispatch: Convert `ArgMatches` into typed Action enum
/// 6. Execute: Run the action's business logic
///
/// # Errors
///
/// Returns an error if any step in the flow fails. A failed check is not an
/// error, it comes back as [`Outcome::Failure`].
pub async fn start() -> Result<Outcome> {
    let cmd = commands::new();

    // 1. Load environment file. Its path may come from the CLI, but clap reads
    //    the env fallbacks while parsing, so the file has to be loaded before
    //    the real parse. The pre-parse ignores errors, the real one reports them.
    let env_file = cmd
        .clone()
        .ignore_errors(true)
        .try_get_matches_from(env::args_os())
        .ok()
        .and_then(|matches| matches.get_one::<PathBuf>("env-file").cloned());
    let loaded = envs::load(env_file.as_deref());

    // 2. Parse
    let matches = cmd.get_matches();

    // 3. Extract Verbosity
    let verbosity = matches.get_count("verbose");

    // 4. Initialize Telemetry
    telemetry::init(verbosity)?;
    if let Some(path) = loaded {
        tracing::info!(path = %path.display(), "loaded environment file");
    }

    // 5. Dispatch: Convert ArgMatches into typed Action enum
    let action: Action = dispatch::dispatch(&matches)?;

    // 6. Execute: Run the action's business logic
    action.execute().await
}
