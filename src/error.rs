use thiserror::Error;

/// Errors that can occur when using the llm-gateway library.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no configuration named '{0}'")]
    ConfigNotFound(String),

    #[error("configuration store error: {0}")]
    Store(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config_not_found(name: impl Into<String>) -> Self {
        Error::ConfigNotFound(name.into())
    }

    pub fn store(message: impl Into<String>) -> Self {
        Error::Store(message.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Error::Transport(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Error::Internal(message.into())
    }
}
