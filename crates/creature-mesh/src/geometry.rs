//! Output geometry: per-vertex buffers, material groups, and GPU vertex packing.

use std::time::Duration;

use creature_math::Aabb;
use glam::{UVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::face_direction::{FaceDirection, corner_offset};

/// Vertices emitted per voxel face.
pub const VERTICES_PER_FACE: usize = 4;
/// Indices emitted per voxel face (two triangles).
pub const INDICES_PER_FACE: usize = 6;

/// Quad triangulation, applied to the corners of [`FaceDirection::corners`].
const QUAD_INDICES: [u32; INDICES_PER_FACE] = [0, 1, 2, 0, 2, 3];

/// A contiguous run of the index buffer drawn with one material.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialGroup {
    /// First index in [`Geometry::indices`].
    pub start: u32,
    /// Number of indices.
    pub count: u32,
    /// Surface material index.
    pub material: u32,
}

/// A skinned, vertex-coloured triangle mesh.
///
/// All per-vertex vectors have the same length. Each vertex is bound to a
/// single bone with weight 1.0.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    /// Owning segment index per vertex.
    pub skin_indices: Vec<u32>,
    pub skin_weights: Vec<f32>,
    /// Triangle list, three indices per triangle.
    pub indices: Vec<u32>,
    /// Material runs partitioning `indices`, in ascending material order.
    pub groups: Vec<MaterialGroup>,
    /// Set when no voxel was solid and a stand-in cube was emitted.
    pub is_placeholder: bool,
}

impl Geometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn face_count(&self) -> usize {
        self.indices.len() / INDICES_PER_FACE
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Bounds of every vertex position.
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.positions.iter().map(|&p| Vec3::from_array(p)))
    }

    /// Appends one voxel face centred on `center` with half-edge `half`.
    ///
    /// UVs are the vertex's in-plane world coordinates scaled by `uv_scale`.
    pub fn push_face(
        &mut self,
        center: Vec3,
        half: f32,
        direction: FaceDirection,
        color: [f32; 3],
        bone: u32,
        uv_scale: f32,
    ) {
        let (_, u_axis, v_axis) = direction.sweep_axes();
        let normal = direction.normal();
        let base = self.positions.len() as u32;

        for bits in direction.corners() {
            let p = center + corner_offset(bits, half);
            self.positions.push(p.to_array());
            self.normals.push(normal);
            self.colors.push(color);
            self.uvs.push([p[u_axis] * uv_scale, p[v_axis] * uv_scale]);
            self.skin_indices.push(bone);
            self.skin_weights.push(1.0);
        }
        self.indices.extend(QUAD_INDICES.iter().map(|i| base + i));
    }

    /// Packs every vertex into a single interleaved buffer.
    pub fn interleaved(&self) -> Vec<SkinnedVertex> {
        (0..self.vertex_count())
            .map(|i| SkinnedVertex {
                position: self.positions[i],
                normal: self.normals[i],
                color: self.colors[i],
                uv: self.uvs[i],
                skin_index: self.skin_indices[i],
                skin_weight: self.skin_weights[i],
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// SkinnedVertex
// ---------------------------------------------------------------------------

/// Interleaved vertex for GPU upload.
///
/// Layout (52 bytes total):
///   - `[0..12]`  position `[f32; 3]`
///   - `[12..24]` normal `[f32; 3]`
///   - `[24..36]` color `[f32; 3]`
///   - `[36..44]` uv `[f32; 2]`
///   - `[44..48]` skin_index `u32`
///   - `[48..52]` skin_weight `f32`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SkinnedVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
    pub uv: [f32; 2],
    pub skin_index: u32,
    pub skin_weight: f32,
}

static_assertions::assert_eq_size!(SkinnedVertex, [u8; 52]);

// ---------------------------------------------------------------------------
// MeshStats
// ---------------------------------------------------------------------------

/// Summary of one mesh build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshStats {
    /// Solid voxels in the grid.
    pub active_voxels: usize,
    /// Quads emitted.
    pub faces: usize,
    pub vertices: usize,
    pub triangles: usize,
    /// Grid cell counts along x, y and z.
    pub grid_dims: UVec3,
    pub voxel_size: f32,
    pub build_time: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_face_counts() {
        let mut g = Geometry::new();
        g.push_face(Vec3::ZERO, 0.5, FaceDirection::PosY, [1.0; 3], 3, 0.5);
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(g.face_count(), 1);
        assert_eq!(g.triangle_count(), 2);
        assert!(g.skin_indices.iter().all(|&b| b == 3));
        assert!(g.skin_weights.iter().all(|&w| w == 1.0));
    }

    #[test]
    fn test_push_face_triangles_wind_outward() {
        for dir in FaceDirection::ALL {
            let mut g = Geometry::new();
            g.push_face(Vec3::new(1.0, 2.0, 3.0), 0.25, dir, [1.0; 3], 0, 0.5);
            let n = Vec3::from_array(dir.normal());
            for tri in g.indices.chunks(3) {
                let [a, b, c] =
                    [tri[0], tri[1], tri[2]].map(|i| Vec3::from_array(g.positions[i as usize]));
                assert!((b - a).cross(c - a).dot(n) > 0.0, "{dir:?}");
            }
        }
    }

    #[test]
    fn test_uvs_follow_in_plane_world_coordinates() {
        let mut g = Geometry::new();
        g.push_face(Vec3::new(2.0, 4.0, 6.0), 0.5, FaceDirection::PosX, [1.0; 3], 0, 0.5);
        // +X faces map (z, y) to (u, v); first corner is (+x, -y, +z).
        assert_eq!(g.uvs[0], [6.5 * 0.5, 3.5 * 0.5]);
    }

    #[test]
    fn test_interleaved_matches_buffers() {
        let mut g = Geometry::new();
        g.push_face(Vec3::ZERO, 0.5, FaceDirection::NegZ, [0.2, 0.4, 0.6], 7, 0.5);
        let verts = g.interleaved();
        assert_eq!(verts.len(), 4);
        assert_eq!(verts[2].position, g.positions[2]);
        assert_eq!(verts[2].skin_index, 7);
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 4 * 52);
    }

    #[test]
    fn test_bounds() {
        let mut g = Geometry::new();
        assert!(g.bounds().is_none());
        g.push_face(Vec3::ZERO, 0.5, FaceDirection::PosZ, [1.0; 3], 0, 0.5);
        let b = g.bounds().unwrap();
        assert_eq!(b.max.z, 0.5);
        assert_eq!(b.min.x, -0.5);
    }
}
