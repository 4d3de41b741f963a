use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{GraphError, Result};

/// Environment variable that overrides the computed filter
pub const LOG_ENV_VAR: &str = "ROUTEGRAPH_LOG";

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", visited = path.visited().len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging for a host program.
///
/// `log_level` wins over `verbose`; a bare level such as `"trace"` is scoped
/// to this crate, a full directive (`"routegraph_core=debug,other=info"`) is
/// used as given.
pub fn init_tracing(verbose: bool, log_level: Option<&str>, log_json: bool) -> Result<()> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };

    init_with_level(level, log_json)
}

/// Build the filter directive for a level, scoping bare levels to this crate
pub fn filter_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("routegraph_core={}", level)
    }
}

fn init_with_level(level: &str, log_json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()
            .map_err(|e| GraphError::failed("initialize logging", e))?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()
            .map_err(|e| GraphError::failed("initialize logging", e))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_level_is_scoped() {
        assert_eq!(filter_directive("debug"), "routegraph_core=debug");
    }

    #[test]
    fn test_full_directive_passes_through() {
        assert_eq!(
            filter_directive("routegraph_core=trace,hyper=off"),
            "routegraph_core=trace,hyper=off"
        );
    }

    #[test]
    fn test_second_init_reports_error() {
        // Only one global subscriber may be installed per process; whichever
        // call comes second must fail instead of panicking.
        let first = init_tracing(false, Some("error"), false);
        let second = init_tracing(false, Some("error"), true);
        assert!(first.is_err() || second.is_err());
        if let Err(err) = second {
            assert_eq!(err.error_type(), "failed_operation");
        }
    }
}
