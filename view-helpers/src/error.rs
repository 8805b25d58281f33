//! Error types for view helper inputs, configuration and rendering

use thiserror::Error;

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type
///
/// The derivations themselves never fail once their inputs exist; every
/// input-shaped variant here is raised while constructing an
/// [`ActionContext`](crate::context::ActionContext) or filling a
/// [`FlashStore`](crate::flash::FlashStore).
#[derive(Debug, Error)]
pub enum Error {
    /// Controller name is empty or not a lowercase identifier path
    #[error("Invalid controller name: {0:?}")]
    InvalidControllerName(String),

    /// Action name is empty or not a lowercase identifier
    #[error("Invalid action name: {0:?}")]
    InvalidActionName(String),

    /// Flash key is empty or contains whitespace
    #[error("Invalid flash key: {0:?}")]
    InvalidFlashKey(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// Configuration extracted but holds a value that would corrupt output
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Template rendering error
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Tracing subscriber could not be installed
    #[error("Observability error: {0}")]
    Observability(String),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}
