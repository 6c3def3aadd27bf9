//! Skeleton to surface mesh: field, voxelization, face extraction, assembly.

use std::time::Instant;

use creature_dna::{GenerationParams, MATERIAL_COUNT, vertex_tint};
use creature_skeleton::Segment;
use creature_voxel::VoxelGrid;
use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::face_direction::FaceDirection;
use crate::fallback::placeholder_cube;
use crate::field::{BlendRule, SkeletonField, voxelize};
use crate::geometry::{Geometry, INDICES_PER_FACE, MaterialGroup, MeshStats, VERTICES_PER_FACE};
use crate::visibility::compute_visible_faces;

/// Default texture coordinate scale: world units to UV units.
pub const DEFAULT_UV_SCALE: f32 = 0.5;

/// Height below which faces get the darkest shade.
const SHADE_FLOOR_Y: f32 = -2.0;
/// Vertical span over which the shade ramps up to full brightness.
const SHADE_RAMP: f32 = 4.0;
const MIN_SHADE: f32 = 0.5;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// How faces are sorted into material groups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialAssignment {
    /// Material follows the owning segment: `owner % material_count`.
    #[default]
    ByOwner,
    /// Each face draws a material from a stream seeded by the creature seed.
    Scattered,
}

/// Inputs to [`generate_mesh`] besides the segments themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshOptions {
    /// Cells along the longest axis of the padded bounds.
    pub resolution: u32,
    /// Base smooth-min width.
    pub smoothness: f32,
    pub blend: BlendRule,
    pub uv_scale: f32,
    /// Number of surface materials; zero is treated as one.
    pub material_count: usize,
    pub assignment: MaterialAssignment,
    /// Seed for [`MaterialAssignment::Scattered`].
    pub seed: i64,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self::from_params(&GenerationParams::default(), MATERIAL_COUNT)
    }
}

impl MeshOptions {
    /// Options for `params` after sanitizing, with default blending and UVs.
    pub fn from_params(params: &GenerationParams, material_count: usize) -> Self {
        let params = params.sanitized();
        Self {
            resolution: params.resolution,
            smoothness: params.smoothness,
            blend: BlendRule::default(),
            uv_scale: DEFAULT_UV_SCALE,
            material_count,
            assignment: MaterialAssignment::default(),
            seed: params.seed,
        }
    }
}

// ---------------------------------------------------------------------------
// Meshing
// ---------------------------------------------------------------------------

/// An exposed voxel face waiting for its material group.
#[derive(Clone, Copy, Debug)]
struct PendingFace {
    center: Vec3,
    direction: FaceDirection,
    owner: u32,
}

/// Builds the surface mesh of `segments` at the given health.
///
/// `health_fraction` in `[0, 1]` only tints the vertices; damage to the
/// segments themselves is applied by the caller.
///
/// # Errors
///
/// See [`generate_mesh_with_stats`].
pub fn generate_mesh(
    segments: &[Segment],
    options: &MeshOptions,
    health_fraction: f32,
) -> Result<Geometry, MeshError> {
    generate_mesh_with_stats(segments, options, health_fraction).map(|(geometry, _)| geometry)
}

/// Like [`generate_mesh`], also returning build statistics.
///
/// When no face is exposed, either because no voxel is solid or because
/// every solid voxel sits on the outer ring of the grid, the result is
/// [`placeholder_cube`] with [`Geometry::is_placeholder`] set.
///
/// # Errors
///
/// Fails when no segment has finite geometry, when there are more segments
/// than voxel labels can address, or when the grid cannot be sized.
pub fn generate_mesh_with_stats(
    segments: &[Segment],
    options: &MeshOptions,
    health_fraction: f32,
) -> Result<(Geometry, MeshStats), MeshError> {
    let started = Instant::now();

    let field = SkeletonField::new(segments, options.smoothness, options.blend)?;
    let grid = voxelize(&field, options.resolution)?;
    let layout = *grid.layout();
    let active_voxels = grid.solid_count();

    let tint = vertex_tint(health_fraction * 100.0);

    let surface = if active_voxels == 0 {
        Geometry::new()
    } else {
        let buckets = collect_faces(&grid, options);
        assemble(&buckets, tint, layout.voxel_size / 2.0, options.uv_scale)
    };

    let geometry = if surface.is_empty() {
        tracing::warn!(
            segments = segments.len(),
            active_voxels,
            "no exposed faces, emitting placeholder cube"
        );
        placeholder_cube(shade(tint, 0.0), options.uv_scale)
    } else {
        surface
    };

    let stats = MeshStats {
        active_voxels,
        faces: geometry.face_count(),
        vertices: geometry.vertex_count(),
        triangles: geometry.triangle_count(),
        grid_dims: layout.dims,
        voxel_size: layout.voxel_size,
        build_time: started.elapsed(),
    };

    tracing::info!(
        active_voxels,
        faces = stats.faces,
        vertices = stats.vertices,
        groups = geometry.groups.len(),
        elapsed_ms = stats.build_time.as_secs_f64() * 1000.0,
        "mesh generated"
    );

    Ok((geometry, stats))
}

/// Walks interior voxels and buckets every exposed face by material.
fn collect_faces(grid: &VoxelGrid, options: &MeshOptions) -> Vec<Vec<PendingFace>> {
    let layout = grid.layout();
    let dims = layout.dims;
    let material_count = options.material_count.max(1);
    let mut buckets: Vec<Vec<PendingFace>> = vec![Vec::new(); material_count];
    let mut scatter = match options.assignment {
        MaterialAssignment::ByOwner => None,
        MaterialAssignment::Scattered => Some(ChaCha8Rng::seed_from_u64(options.seed as u64)),
    };

    let visible = compute_visible_faces(grid);

    for z in 0..dims.z as usize {
        for y in 0..dims.y as usize {
            for x in 0..dims.x as usize {
                let i = layout.linear_index(x, y, z);
                let faces = visible[i];
                if faces.count() == 0 {
                    continue;
                }
                let Some(owner) = grid.get_linear(i).owner() else {
                    continue;
                };
                let center = layout.cell_center(x, y, z);
                for direction in faces.iter() {
                    let material = match scatter.as_mut() {
                        Some(rng) => rng.random_range(0..material_count),
                        None => owner % material_count,
                    };
                    buckets[material].push(PendingFace {
                        center,
                        direction,
                        owner: owner as u32,
                    });
                }
            }
        }
    }

    buckets
}

/// Concatenates buckets in material order into one geometry with groups.
fn assemble(buckets: &[Vec<PendingFace>], tint: [f32; 3], half: f32, uv_scale: f32) -> Geometry {
    let total: usize = buckets.iter().map(Vec::len).sum();
    let mut geometry = Geometry::new();
    geometry.positions.reserve(total * VERTICES_PER_FACE);
    geometry.indices.reserve(total * INDICES_PER_FACE);

    for (material, bucket) in buckets.iter().enumerate() {
        if bucket.is_empty() {
            continue;
        }
        let start = geometry.indices.len() as u32;
        for face in bucket {
            let color = shade(tint, face.center.y);
            geometry.push_face(face.center, half, face.direction, color, face.owner, uv_scale);
        }
        geometry.groups.push(MaterialGroup {
            start,
            count: geometry.indices.len() as u32 - start,
            material: material as u32,
        });
    }

    geometry
}

/// Darkens `tint` towards the ground: full brightness from y = 2 upwards.
fn shade(tint: [f32; 3], y: f32) -> [f32; 3] {
    let s = ((y - SHADE_FLOOR_Y) / SHADE_RAMP).clamp(MIN_SHADE, 1.0);
    tint.map(|c| c * s)
}
