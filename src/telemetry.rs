use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::VaultConfig;

pub const DEFAULT_LOG_FILTER: &str = "secret_harvest=info";

/// Initialize tracing with the default filter.
/// `RUST_LOG` takes precedence when set.
pub fn init() {
    init_with_filter(DEFAULT_LOG_FILTER);
}

pub fn init_from_config(config: &VaultConfig) {
    init_with_filter(&config.log_filter);
}

fn init_with_filter(fallback: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
