use super::config::ConfigError;
use thiserror::Error;

type HostError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Host scene rejected {operation} '{name}': {source}")]
    Host {
        operation: &'static str,
        name: String,
        #[source]
        source: HostError,
    },

    #[error("Degenerate geometry for '{name}': {reason}")]
    Geometry { name: String, reason: String },
}

impl EngineError {
    pub(crate) fn host<E>(operation: &'static str, name: &str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        EngineError::Host {
            operation,
            name: name.to_string(),
            source: Box::new(source),
        }
    }
}
