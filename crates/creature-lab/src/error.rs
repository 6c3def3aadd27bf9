//! Errors surfaced by the creature lab.

use std::path::PathBuf;

use creature_config::ConfigError;
use creature_mesh::MeshError;

/// Everything that can stop a lab session or the command-line driver.
#[derive(Debug, thiserror::Error)]
pub enum LabError {
    /// Loading or saving configuration failed.
    #[error("configuration error: {0}")]
    Config(#[source] ConfigError),

    /// Mesh generation failed.
    #[error("mesh generation failed: {0}")]
    Mesh(#[source] MeshError),

    /// Serializing the export document failed.
    #[error("failed to serialize export: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Writing the export document failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<ConfigError> for LabError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<MeshError> for LabError {
    fn from(err: MeshError) -> Self {
        Self::Mesh(err)
    }
}
