pub mod postgres;

/// The one diagnostic query the checker runs: fixed, parameterless, read-only
pub const VERSION_QUERY: &str = "SELECT version()";
