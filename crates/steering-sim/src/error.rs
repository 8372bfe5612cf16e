//! Simulation host errors.

use std::path::PathBuf;

use steering_core::error::ConfigError;
use steering_core::types::AgentId;

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("invalid steering config: {0}")]
    Config(#[from] ConfigError),

    /// A command or query named an agent that was never spawned.
    #[error("unknown agent {0:?}")]
    UnknownAgent(AgentId),

    #[error("malformed scenario: {0}")]
    Scenario(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
