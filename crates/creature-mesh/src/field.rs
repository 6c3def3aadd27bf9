//! Signed distance field over a skeleton and its voxelization.
//!
//! Each segment contributes a tapered capsule plus a small surface noise.
//! Contributions are folded in segment order with a smooth minimum whose
//! width depends on the segment, and every solid voxel is labelled with the
//! segment whose own (unblended) distance is smallest there.

use creature_math::{Aabb, field_noise, smooth_min, tapered_segment_distance};
use creature_skeleton::Segment;
use creature_voxel::{BoneLabel, GridLayout, VoxelGrid};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// Margin added on every side of the skeleton's endpoint bounds.
pub const BOUNDS_PADDING: f32 = 0.5;

// ---------------------------------------------------------------------------
// Blend rule
// ---------------------------------------------------------------------------

/// Picks the smooth-min width for each segment.
///
/// Extremities (head, eyes, decorations) and segments deep in a chain blend
/// with a narrower width so they keep their shape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendRule {
    /// Multiplier applied to the base width for narrow segments.
    pub narrow_factor: f32,
    /// Chain index from which segments blend narrowly.
    pub narrow_chain_index: u32,
}

impl Default for BlendRule {
    fn default() -> Self {
        Self {
            narrow_factor: 0.3,
            narrow_chain_index: 2,
        }
    }
}

impl BlendRule {
    /// Blend width for `segment` given the base smoothness `k`.
    pub fn width(&self, segment: &Segment, k: f32) -> f32 {
        if segment.kind.is_extremity() || segment.chain_index >= self.narrow_chain_index {
            k * self.narrow_factor
        } else {
            k
        }
    }
}

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

/// A segment prepared for sampling.
#[derive(Clone, Copy, Debug)]
struct Bone {
    owner: usize,
    start: Vec3,
    end: Vec3,
    r1: f32,
    r2: f32,
    blend: f32,
}

/// The blended distance field of a set of segments.
#[derive(Clone, Debug)]
pub struct SkeletonField {
    bones: Vec<Bone>,
    bounds: Aabb,
}

impl SkeletonField {
    /// Prepares `segments` for sampling with base smoothness `smoothness`.
    ///
    /// Segments with non-finite data are logged and skipped. Destroyed
    /// segments (both radii zero) still count towards the bounds but add
    /// nothing to the field.
    ///
    /// # Errors
    ///
    /// [`MeshError::NoUsableSegments`] when no segment is finite, and
    /// [`MeshError::TooManySegments`] when labels cannot address every segment.
    pub fn new(segments: &[Segment], smoothness: f32, blend: BlendRule) -> Result<Self, MeshError> {
        if segments.len() > BoneLabel::MAX_OWNER + 1 {
            return Err(MeshError::TooManySegments {
                count: segments.len(),
                max: BoneLabel::MAX_OWNER + 1,
            });
        }

        let k = if smoothness.is_finite() {
            smoothness.max(0.0)
        } else {
            0.0
        };

        let mut bounds: Option<Aabb> = None;
        let mut bones = Vec::with_capacity(segments.len());
        for (owner, s) in segments.iter().enumerate() {
            if !s.is_finite() {
                tracing::warn!(segment = owner, name = %s.name, "skipping non-finite segment");
                continue;
            }
            let seg_bounds = Aabb::new(s.start, s.end);
            bounds = Some(match bounds {
                Some(b) => b.union(&seg_bounds),
                None => seg_bounds,
            });
            if s.max_radius() <= 0.0 {
                continue;
            }
            bones.push(Bone {
                owner,
                start: s.start,
                end: s.end,
                r1: s.radius.max(0.0),
                r2: s.radius_end.max(0.0),
                blend: blend.width(s, k),
            });
        }

        let bounds = bounds
            .ok_or(MeshError::NoUsableSegments)?
            .expand_by(BOUNDS_PADDING);

        Ok(Self { bones, bounds })
    }

    /// Padded bounds of every finite segment.
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Number of segments that contribute to the field.
    pub fn contributing(&self) -> usize {
        self.bones.len()
    }

    /// Blended distance at `p` and the index of the nearest segment.
    ///
    /// Returns `None` when no segment contributes.
    pub fn sample(&self, p: Vec3) -> Option<(f32, usize)> {
        let noise = field_noise(p);
        let mut bones = self.bones.iter();
        let first = bones.next()?;

        let d0 = tapered_segment_distance(p, first.start, first.end, first.r1, first.r2) + noise;
        let mut blended = d0;
        let mut nearest = d0;
        let mut owner = first.owner;

        for bone in bones {
            let d = tapered_segment_distance(p, bone.start, bone.end, bone.r1, bone.r2) + noise;
            blended = smooth_min(blended, d, bone.blend);
            if d < nearest {
                nearest = d;
                owner = bone.owner;
            }
        }

        Some((blended, owner))
    }
}

// ---------------------------------------------------------------------------
// Voxelization
// ---------------------------------------------------------------------------

/// Samples `field` at every cell centre of a grid with `resolution` cells
/// along its longest axis.
///
/// A cell is solid when the blended distance is finite and negative; its
/// label names the nearest segment.
///
/// # Errors
///
/// Propagates [`GridLayout::from_bounds`] failures.
pub fn voxelize(field: &SkeletonField, resolution: u32) -> Result<VoxelGrid, MeshError> {
    let layout = GridLayout::from_bounds(field.bounds(), resolution)?;
    let mut grid = VoxelGrid::new(layout);
    let dims = layout.dims;

    if field.contributing() == 0 {
        tracing::debug!(cells = layout.volume(), "no contributing segments, grid left empty");
        return Ok(grid);
    }

    for z in 0..dims.z as usize {
        for y in 0..dims.y as usize {
            for x in 0..dims.x as usize {
                let p = layout.cell_center(x, y, z);
                let Some((value, owner)) = field.sample(p) else {
                    continue;
                };
                if value < 0.0
                    && let Some(label) = BoneLabel::from_owner(owner)
                {
                    grid.set(x, y, z, label);
                }
            }
        }
    }

    tracing::debug!(
        solid = grid.solid_count(),
        cells = layout.volume(),
        "voxelization complete"
    );
    Ok(grid)
}
