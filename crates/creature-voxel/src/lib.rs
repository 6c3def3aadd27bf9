//! Voxel ownership grids: per-cell bone labels sized from a bounding box.

pub mod grid;
mod label;

pub use grid::{GridError, GridLayout, MAX_CELLS, VoxelGrid};
pub use label::BoneLabel;
