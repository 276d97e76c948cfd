//! Connectivity smoke test for `PostgreSQL`
//!
//! Opens one TLS connection with credentials from the environment, runs
//! `SELECT version()`, reports the engine name and closes the connection.

pub mod check;
pub mod cli;
pub mod config;
pub mod envs;
pub mod error;
pub mod queries;
pub mod report;
pub mod telemetry;
pub mod tls;

pub use check::{Connector, DatabaseHandle, Outcome, run_check};
pub use config::{ConnectionConfig, Password};
pub use error::{Error, Result};
