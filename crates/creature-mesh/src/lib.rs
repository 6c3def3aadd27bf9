//! Skeleton meshing: a blended distance field is voxelized and every exposed
//! voxel face becomes a skinned, vertex-coloured quad.

pub mod error;
pub mod face_direction;
pub mod fallback;
pub mod field;
pub mod geometry;
pub mod mesher;
pub mod visibility;
pub mod visible_faces;

pub use error::MeshError;
pub use face_direction::FaceDirection;
pub use fallback::{PLACEHOLDER_SIZE, placeholder_cube};
pub use field::{BOUNDS_PADDING, BlendRule, SkeletonField, voxelize};
pub use geometry::{Geometry, MaterialGroup, MeshStats, SkinnedVertex};
pub use mesher::{
    DEFAULT_UV_SCALE, MaterialAssignment, MeshOptions, generate_mesh, generate_mesh_with_stats,
};
pub use visibility::{compute_visible_faces, count_visible_faces};
pub use visible_faces::VisibleFaces;
