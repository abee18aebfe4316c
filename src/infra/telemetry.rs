//! Tracing subscriber setup for the binaries.

use crate::infra::config::DEFAULT_LOG_FILTER;
use tracing::Subscriber;
use tracing_subscriber::{fmt::Layer, layer::SubscriberExt, EnvFilter, Registry};

/// Parses `filter` (already read from `RUST_LOG` by the settings). An
/// unparsable filter falls back to the default level.
pub fn env_filter(filter: &str) -> EnvFilter {
    EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

pub fn get_subscriber(filter: &str) -> impl Subscriber + Send + Sync {
    Registry::default()
        .with(env_filter(filter))
        .with(Layer::new().compact().with_target(true))
}

pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn filter_comes_from_settings_value() {
        assert_eq!(env_filter("warn").max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(
            env_filter("info,tower_http=trace").max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }
}
