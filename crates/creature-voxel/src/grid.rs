//! Dense ownership grid sampled over a creature's bounding box.
//!
//! Cells are cubes of edge [`GridLayout::voxel_size`], chosen so the longest
//! axis of the bounds spans `resolution` cells. Storage is a flat array with
//! x varying fastest.

use creature_math::Aabb;
use glam::{UVec3, Vec3};
use thiserror::Error;

use crate::label::BoneLabel;

/// Upper bound on the number of cells in one grid.
pub const MAX_CELLS: usize = 1 << 28;

/// Errors raised while sizing a grid.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    /// A grid needs at least one cell along its longest axis.
    #[error("grid resolution must be at least 1")]
    ZeroResolution,

    /// Bounds are non-finite or have no extent.
    #[error("cannot size a grid over degenerate bounds {min:?}..{max:?}")]
    DegenerateBounds { min: Vec3, max: Vec3 },

    /// The requested grid would exceed [`MAX_CELLS`].
    #[error("grid of {x}x{y}x{z} cells exceeds the {MAX_CELLS} cell limit")]
    TooLarge { x: u32, y: u32, z: u32 },
}

// ---------------------------------------------------------------------------
// GridLayout
// ---------------------------------------------------------------------------

/// World placement and dimensions of a voxel grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    /// World-space corner of cell `(0, 0, 0)`.
    pub origin: Vec3,
    /// Edge length of one cubic cell.
    pub voxel_size: f32,
    /// Cell counts along x, y and z.
    pub dims: UVec3,
}

impl GridLayout {
    /// Sizes a grid over `bounds` with `resolution` cells along the longest axis.
    ///
    /// # Errors
    ///
    /// Fails for a zero resolution, degenerate bounds, or a grid above
    /// [`MAX_CELLS`].
    pub fn from_bounds(bounds: Aabb, resolution: u32) -> Result<Self, GridError> {
        if resolution == 0 {
            return Err(GridError::ZeroResolution);
        }
        let size = bounds.size();
        let longest = bounds.longest_extent();
        if !bounds.min.is_finite() || !bounds.max.is_finite() || longest <= 0.0 {
            return Err(GridError::DegenerateBounds {
                min: bounds.min,
                max: bounds.max,
            });
        }

        let voxel_size = longest / resolution as f32;
        let cells = (size / voxel_size).ceil().clamp(Vec3::ONE, Vec3::splat(resolution as f32));
        let mut dims = UVec3::new(cells.x as u32, cells.y as u32, cells.z as u32);
        // Rounding in the division must not add a cell along the longest axis.
        for axis in 0..3 {
            if size[axis] == longest {
                dims[axis] = resolution;
            }
        }

        let total = (dims.x as usize)
            .checked_mul(dims.y as usize)
            .and_then(|n| n.checked_mul(dims.z as usize));
        match total {
            Some(n) if n <= MAX_CELLS => {}
            _ => {
                return Err(GridError::TooLarge {
                    x: dims.x,
                    y: dims.y,
                    z: dims.z,
                });
            }
        }

        tracing::debug!(?dims, voxel_size, "grid sized");

        Ok(Self {
            origin: bounds.min,
            voxel_size,
            dims,
        })
    }

    /// Total number of cells.
    pub fn volume(&self) -> usize {
        self.dims.x as usize * self.dims.y as usize * self.dims.z as usize
    }

    /// World-space centre of cell `(x, y, z)`.
    pub fn cell_center(&self, x: usize, y: usize, z: usize) -> Vec3 {
        self.origin + (Vec3::new(x as f32, y as f32, z as f32) + 0.5) * self.voxel_size
    }

    /// True when `(x, y, z)` is not on the outer ring of cells.
    pub fn is_interior(&self, x: usize, y: usize, z: usize) -> bool {
        let d = self.dims;
        x >= 1
            && y >= 1
            && z >= 1
            && x + 1 < d.x as usize
            && y + 1 < d.y as usize
            && z + 1 < d.z as usize
    }

    /// Converts `(x, y, z)` to a linear index (x varies fastest).
    pub fn linear_index(&self, x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < self.dims.x as usize);
        debug_assert!(y < self.dims.y as usize);
        debug_assert!(z < self.dims.z as usize);
        x + y * self.stride_y() + z * self.stride_z()
    }

    /// Linear distance between vertically adjacent cells.
    pub fn stride_y(&self) -> usize {
        self.dims.x as usize
    }

    /// Linear distance between depth-adjacent cells.
    pub fn stride_z(&self) -> usize {
        self.dims.x as usize * self.dims.y as usize
    }
}

// ---------------------------------------------------------------------------
// VoxelGrid
// ---------------------------------------------------------------------------

/// Ownership labels for every cell of a [`GridLayout`].
#[derive(Clone, Debug)]
pub struct VoxelGrid {
    layout: GridLayout,
    labels: Vec<BoneLabel>,
}

impl VoxelGrid {
    /// Creates an all-empty grid.
    pub fn new(layout: GridLayout) -> Self {
        Self {
            labels: vec![BoneLabel::EMPTY; layout.volume()],
            layout,
        }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> BoneLabel {
        self.labels[self.layout.linear_index(x, y, z)]
    }

    pub fn set(&mut self, x: usize, y: usize, z: usize, label: BoneLabel) {
        let idx = self.layout.linear_index(x, y, z);
        self.labels[idx] = label;
    }

    /// Label at a linear index.
    pub fn get_linear(&self, index: usize) -> BoneLabel {
        self.labels[index]
    }

    /// Flat label storage, x fastest.
    pub fn labels(&self) -> &[BoneLabel] {
        &self.labels
    }

    /// Number of solid cells.
    pub fn solid_count(&self) -> usize {
        self.labels.iter().filter(|l| l.is_solid()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_layout(resolution: u32) -> GridLayout {
        GridLayout::from_bounds(Aabb::new(Vec3::ZERO, Vec3::new(2.0, 1.0, 0.5)), resolution)
            .unwrap()
    }

    #[test]
    fn test_longest_axis_gets_resolution_cells() {
        let layout = unit_layout(20);
        assert_eq!(layout.voxel_size, 0.1);
        assert_eq!(layout.dims.x, 20);
        assert_eq!(layout.dims.y, 10);
        assert_eq!(layout.dims.z, 5);
    }

    #[test]
    fn test_inexact_voxel_size_keeps_longest_axis_at_resolution() {
        let bounds = Aabb::new(Vec3::new(-1.3, -0.5, -0.5), Vec3::new(1.3, 3.2, 0.7));
        for resolution in [3, 7, 11, 33, 49, 50, 97] {
            let layout = GridLayout::from_bounds(bounds, resolution).unwrap();
            assert_eq!(layout.dims.y, resolution);
            assert!(layout.dims.x <= resolution);
            assert!(layout.dims.z <= resolution);
        }
    }

    #[test]
    fn test_zero_resolution_rejected() {
        let err = GridLayout::from_bounds(Aabb::new(Vec3::ZERO, Vec3::ONE), 0);
        assert_eq!(err, Err(GridError::ZeroResolution));
    }

    #[test]
    fn test_degenerate_bounds_rejected() {
        let err = GridLayout::from_bounds(Aabb::new(Vec3::ONE, Vec3::ONE), 10);
        assert!(matches!(err, Err(GridError::DegenerateBounds { .. })));
        let err = GridLayout::from_bounds(
            Aabb {
                min: Vec3::ZERO,
                max: Vec3::new(f32::INFINITY, 1.0, 1.0),
            },
            10,
        );
        assert!(matches!(err, Err(GridError::DegenerateBounds { .. })));
    }

    #[test]
    fn test_flat_axis_gets_one_cell() {
        let layout =
            GridLayout::from_bounds(Aabb::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0)), 4).unwrap();
        assert_eq!(layout.dims.z, 1);
    }

    #[test]
    fn test_cell_center() {
        let layout = unit_layout(20);
        let c = layout.cell_center(0, 0, 0);
        assert!((c - Vec3::splat(0.05)).length() < 1e-6);
    }

    #[test]
    fn test_interior() {
        let layout = unit_layout(20);
        assert!(!layout.is_interior(0, 5, 2));
        assert!(!layout.is_interior(19, 5, 2));
        assert!(layout.is_interior(1, 1, 1));
        assert!(!layout.is_interior(1, 1, 4));
    }

    #[test]
    fn test_set_get_and_count() {
        let mut grid = VoxelGrid::new(unit_layout(10));
        assert_eq!(grid.solid_count(), 0);
        grid.set(3, 2, 1, BoneLabel(4));
        assert_eq!(grid.get(3, 2, 1), BoneLabel(4));
        assert_eq!(grid.solid_count(), 1);
        let idx = grid.layout().linear_index(3, 2, 1);
        assert_eq!(grid.get_linear(idx), BoneLabel(4));
    }

    #[test]
    fn test_linear_index_x_fastest() {
        let layout = unit_layout(10);
        assert_eq!(layout.linear_index(1, 0, 0), 1);
        assert_eq!(layout.linear_index(0, 1, 0), layout.stride_y());
        assert_eq!(layout.linear_index(0, 0, 1), layout.stride_z());
    }
}
