//! Tracing subscriber setup for hosts that do not install their own

use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::{Error, Result},
};

fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a JSON tracing subscriber filtered by `service.log_level`
///
/// An unparseable level falls back to `info`. Fails if a global subscriber
/// is already installed.
#[cfg(feature = "observability")]
pub fn init_tracing(config: &Config) -> Result<()> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter(config))
        .try_init()
        .map_err(|e| Error::Observability(e.to_string()))?;

    tracing::info!("Tracing initialized for: {}", config.service.name);

    Ok(())
}

/// Install a plain-text tracing subscriber filtered by `service.log_level`
#[cfg(not(feature = "observability"))]
pub fn init_tracing(config: &Config) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .try_init()
        .map_err(|e| Error::Observability(e.to_string()))?;

    tracing::info!("Tracing initialized for: {}", config.service.name);

    Ok(())
}
