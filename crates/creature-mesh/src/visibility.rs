//! Visible face detection: determines which voxel faces border empty space
//! and need geometry.

use creature_voxel::VoxelGrid;

use crate::face_direction::FaceDirection;
use crate::visible_faces::VisibleFaces;

/// Computes per-voxel visible-face bitmasks for a grid.
///
/// Only interior voxels are considered; the outer ring of cells never emits
/// faces. For each solid interior voxel a face is visible when its neighbor
/// in that direction is empty. Neighbors owned by a different segment do not
/// expose the shared face.
///
/// Returns a flat `Vec` indexed the same way as the grid (x varies fastest).
pub fn compute_visible_faces(grid: &VoxelGrid) -> Vec<VisibleFaces> {
    let layout = grid.layout();
    let dims = layout.dims;
    let mut result = vec![VisibleFaces::NONE; layout.volume()];

    for z in 0..dims.z as usize {
        for y in 0..dims.y as usize {
            for x in 0..dims.x as usize {
                if !layout.is_interior(x, y, z) || grid.get(x, y, z).is_empty() {
                    continue;
                }

                let mut faces = VisibleFaces::NONE;
                for dir in FaceDirection::ALL {
                    // Interior cells always have all six neighbours in range.
                    let Some((nx, ny, nz)) = dir.neighbor(x, y, z) else {
                        continue;
                    };
                    if grid.get(nx, ny, nz).is_empty() {
                        faces.set_visible(dir);
                    }
                }
                result[layout.linear_index(x, y, z)] = faces;
            }
        }
    }

    result
}

/// Counts the total number of visible faces in a visibility array.
pub fn count_visible_faces(faces: &[VisibleFaces]) -> u32 {
    faces.iter().map(|vf| vf.count()).sum()
}

#[cfg(test)]
mod tests {
    use creature_math::Aabb;
    use creature_voxel::{BoneLabel, GridLayout};
    use glam::Vec3;

    use super::*;

    fn empty_grid(n: u32) -> VoxelGrid {
        let layout =
            GridLayout::from_bounds(Aabb::new(Vec3::ZERO, Vec3::splat(n as f32)), n).unwrap();
        VoxelGrid::new(layout)
    }

    #[test]
    fn test_single_interior_voxel_has_six_visible_faces() {
        let mut grid = empty_grid(8);
        grid.set(4, 4, 4, BoneLabel(1));

        let faces = compute_visible_faces(&grid);
        let vf = faces[grid.layout().linear_index(4, 4, 4)];

        assert_eq!(vf.count(), 6);
        assert_eq!(vf, VisibleFaces::ALL);
        assert_eq!(count_visible_faces(&faces), 6);
    }

    #[test]
    fn test_two_adjacent_voxels_share_hidden_face() {
        let mut grid = empty_grid(8);
        grid.set(3, 3, 3, BoneLabel(1));
        grid.set(4, 3, 3, BoneLabel(2));

        let faces = compute_visible_faces(&grid);
        let a = faces[grid.layout().linear_index(3, 3, 3)];
        let b = faces[grid.layout().linear_index(4, 3, 3)];

        assert!(!a.is_visible(FaceDirection::PosX));
        assert!(!b.is_visible(FaceDirection::NegX));
        assert_eq!(a.count(), 5);
        assert_eq!(b.count(), 5);
    }

    #[test]
    fn test_boundary_voxels_emit_nothing() {
        let mut grid = empty_grid(6);
        grid.set(0, 3, 3, BoneLabel(1));
        grid.set(5, 5, 5, BoneLabel(1));

        let faces = compute_visible_faces(&grid);
        assert_eq!(count_visible_faces(&faces), 0);
    }

    #[test]
    fn test_voxel_next_to_boundary_ring_sees_empty_ring() {
        let mut grid = empty_grid(6);
        grid.set(1, 3, 3, BoneLabel(1));

        let faces = compute_visible_faces(&grid);
        let vf = faces[grid.layout().linear_index(1, 3, 3)];
        assert!(vf.is_visible(FaceDirection::NegX));
        assert_eq!(vf.count(), 6);
    }

    #[test]
    fn test_empty_grid_produces_zero_faces() {
        let grid = empty_grid(5);
        let faces = compute_visible_faces(&grid);
        assert!(faces.iter().all(|vf| *vf == VisibleFaces::NONE));
    }

    #[test]
    fn test_thin_grid_has_no_interior() {
        let layout =
            GridLayout::from_bounds(Aabb::new(Vec3::ZERO, Vec3::new(4.0, 4.0, 0.5)), 4).unwrap();
        let mut grid = VoxelGrid::new(layout);
        grid.set(1, 1, 0, BoneLabel(1));
        assert_eq!(count_visible_faces(&compute_visible_faces(&grid)), 0);
    }

    #[test]
    fn test_solid_block_only_shows_shell() {
        let mut grid = empty_grid(6);
        for z in 2..4 {
            for y in 2..4 {
                for x in 2..4 {
                    grid.set(x, y, z, BoneLabel(1));
                }
            }
        }
        // 2x2x2 block: 4 faces per side.
        assert_eq!(count_visible_faces(&compute_visible_faces(&grid)), 24);
    }
}
