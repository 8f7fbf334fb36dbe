//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ServiceConfig;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. Returns `false` if a global
/// subscriber was already installed, so repeated calls are harmless.
pub fn init_tracing(config: &ServiceConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(service = %config.service_name, "Tracing initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        let config = ServiceConfig::default();
        init_tracing(&config);
        assert!(!init_tracing(&config));
    }
}
