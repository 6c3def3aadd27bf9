//! Stand-in geometry for skeletons whose field has no solid voxel.

use glam::Vec3;

use crate::face_direction::FaceDirection;
use crate::geometry::{Geometry, INDICES_PER_FACE, MaterialGroup};

/// Edge length of the placeholder cube.
pub const PLACEHOLDER_SIZE: f32 = 0.5;

/// A cube of edge [`PLACEHOLDER_SIZE`] centred at the origin.
///
/// Every vertex is bound to bone 0 and the whole cube is one material-0
/// group, so renderers treat it like any other creature mesh.
pub fn placeholder_cube(color: [f32; 3], uv_scale: f32) -> Geometry {
    let mut geometry = Geometry::new();
    for dir in FaceDirection::ALL {
        geometry.push_face(Vec3::ZERO, PLACEHOLDER_SIZE / 2.0, dir, color, 0, uv_scale);
    }
    geometry.groups.push(MaterialGroup {
        start: 0,
        count: (FaceDirection::ALL.len() * INDICES_PER_FACE) as u32,
        material: 0,
    });
    geometry.is_placeholder = true;
    geometry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_a_closed_cube() {
        let cube = placeholder_cube([1.0; 3], 0.5);
        assert!(cube.is_placeholder);
        assert_eq!(cube.face_count(), 6);
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.groups.len(), 1);
        assert_eq!(cube.groups[0].count as usize, cube.indices.len());

        let b = cube.bounds().unwrap();
        assert_eq!(b.min, Vec3::splat(-0.25));
        assert_eq!(b.max, Vec3::splat(0.25));
    }
}
