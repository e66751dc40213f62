//! Installs a `tracing` subscriber for binaries and demos.
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Installs a global `fmt` subscriber at the configured level, overridable through `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already installed; that one is left in place.
pub fn init(config: &LoggingConfig) -> bool {
    let level: tracing::Level = config.level.into();
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let res = if config.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
    };
    res.is_ok()
}

#[cfg(test)]
mod test {
    use super::init;
    use crate::config::LoggingConfig;

    #[test]
    fn second_init_is_not_an_error() {
        let config = LoggingConfig::default();
        init(&config);
        assert!(!init(&config));
    }
}
