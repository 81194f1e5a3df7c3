use crate::error::{Result, ShelfError};
use tracing_subscriber::EnvFilter;

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Picks the log level: each `-v` raises the configured level one step,
/// up to `trace`. An unknown configured level is left alone when `-v` is
/// not given and counts as `warn` otherwise.
pub fn effective_level(configured: &str, verbosity: u8) -> String {
    if verbosity == 0 {
        return configured.to_string();
    }
    let start = LEVELS
        .iter()
        .position(|level| level.eq_ignore_ascii_case(configured.trim()))
        .unwrap_or(1);
    let raised = (start + usize::from(verbosity)).min(LEVELS.len() - 1);
    LEVELS[raised].to_string()
}

/// Installs the global subscriber.
///
/// Logs go to stderr so they never interleave with the menu on stdout.
/// `RUST_LOG` wins over `level` when set.
pub fn init(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("shelf={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| ShelfError::Config(format!("failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flag_keeps_configured_level() {
        assert_eq!(effective_level("error", 0), "error");
    }

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(effective_level("warn", 1), "info");
        assert_eq!(effective_level("warn", 2), "debug");
        assert_eq!(effective_level("warn", 5), "trace");
    }

    #[test]
    fn verbosity_steps_one_level_from_error() {
        assert_eq!(effective_level("error", 1), "warn");
        assert_eq!(effective_level("error", 2), "info");
    }

    #[test]
    fn verbosity_never_lowers_the_level() {
        assert_eq!(effective_level("trace", 1), "trace");
        assert_eq!(effective_level("debug", 1), "trace");
        assert_eq!(effective_level("DEBUG", 3), "trace");
    }

    #[test]
    fn unknown_level_counts_as_warn() {
        assert_eq!(effective_level("loud", 1), "info");
    }
}
