//! Fixed locations and environment names for the wizard's collaborators.

/// Key=value configuration file, read once at startup.
pub const CONFIG_FILE: &str = "data/config.txt";

/// Flat append-only record store.
pub const RECORDS_FILE: &str = "records/records.jsonl";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "INTAKE_LOG";

/// Seconds counted down before the form resets after a finished session.
pub const RESET_COUNTDOWN_SECS: u64 = 5;
