//! Errors raised by mesh generation.

use creature_voxel::GridError;
use thiserror::Error;

/// Unrecoverable mesh generation failures.
#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    /// No segment had finite geometry to take bounds from.
    #[error("no segment has finite geometry to mesh")]
    NoUsableSegments,

    /// More segments than a voxel label can address.
    #[error("{count} segments exceed the {max} a voxel label can address")]
    TooManySegments { count: usize, max: usize },

    /// The voxel grid could not be sized.
    #[error("failed to size voxel grid: {0}")]
    Grid(#[source] GridError),
}

impl From<GridError> for MeshError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}
