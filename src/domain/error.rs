use thiserror::Error;

use super::mode::Mode;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Embedding error: {message}")]
    Embedding { message: String },

    #[error("Knowledge base for mode '{mode}' is not ready")]
    ModeNotReady { mode: Mode },

    #[error("Generation error: {message}")]
    Generation { message: String },
}

impl DomainError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn embedding(message: impl Into<String>) -> Self {
        Self::Embedding {
            message: message.into(),
        }
    }

    pub fn mode_not_ready(mode: Mode) -> Self {
        Self::ModeNotReady { mode }
    }

    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }
}
