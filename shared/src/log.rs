use std::str::FromStr;
use tracing::Level;

pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
pub const DEFAULT_LEVEL: Level = Level::DEBUG;

pub fn init() {
    tracing_subscriber::fmt()
        .json()
        .with_max_level(level_from_env())
        .with_current_span(false)
        .with_span_list(false)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_line_number(true)
        .init();
}

pub fn level_from_env() -> Level {
    parse_level(std::env::var(LOG_LEVEL_VAR).ok().as_deref())
}

/// Falls back to [`DEFAULT_LEVEL`] when unset or unrecognised.
pub fn parse_level(value: Option<&str>) -> Level {
    value
        .map(str::trim)
        .and_then(|v| Level::from_str(v).ok())
        .unwrap_or(DEFAULT_LEVEL)
}
