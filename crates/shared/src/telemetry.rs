//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured filter when set.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(
    logging: &LoggingConfig,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        let logging = LoggingConfig::default();
        // The first call may lose to another test in the same binary.
        let _ = init_tracing(&logging);
        assert!(init_tracing(&logging).is_err());
    }
}
