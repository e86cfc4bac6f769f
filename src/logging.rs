//! Tracing subscriber setup for binaries and tools embedding the generator.

use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs a global subscriber.
///
/// Filter comes from `RUST_LOG`, falling back to `info`. With `json` the
/// output is one JSON object per event, otherwise human-readable.
///
/// # Errors
/// Fails if a global subscriber is already set.
pub fn init_tracing(json: bool) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let base = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_span_events(fmt::format::FmtSpan::CLOSE);

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(base.json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(base.pretty())
            .try_init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        let _ = init_tracing(false);
        assert!(init_tracing(true).is_err());
    }
}
