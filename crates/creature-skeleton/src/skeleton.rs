//! Segment arena with index-based parent links.

use creature_math::Aabb;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::segment::Segment;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Violations of the skeleton tree invariant.
#[derive(Debug, Error, PartialEq)]
pub enum SkeletonError {
    /// No segment is parentless.
    #[error("skeleton has no root segment")]
    NoRoot,

    /// More than one parentless segment.
    #[error("skeleton has multiple roots: {first} and {second}")]
    MultipleRoots { first: usize, second: usize },

    /// A parent link does not point at an earlier segment.
    #[error("segment {index} has parent {parent}, which is not an earlier segment")]
    ParentNotBefore { index: usize, parent: usize },

    /// A segment's `id` disagrees with its position in the arena.
    #[error("segment at index {index} carries id {id}")]
    IdMismatch { index: usize, id: usize },

    /// A radius is below zero.
    #[error("segment {index} has negative radius")]
    NegativeRadius { index: usize },
}

// ---------------------------------------------------------------------------
// Bone
// ---------------------------------------------------------------------------

/// Rest-pose bone for skinning: positioned relative to its parent bone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bone {
    pub name: String,
    pub parent: Option<usize>,
    /// Root bones hold their absolute start; others hold `start - parent.start`.
    pub local_position: Vec3,
}

// ---------------------------------------------------------------------------
// Skeleton
// ---------------------------------------------------------------------------

/// A creature skeleton: segments in a flat array forming a rooted tree.
///
/// Indices are stable for the lifetime of the skeleton and are the skin
/// indices written into mesh vertices.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Skeleton {
    segments: Vec<Segment>,
}

impl Skeleton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps existing segments after checking the tree invariant.
    ///
    /// # Errors
    ///
    /// Returns the first [`SkeletonError`] found by [`Skeleton::validate`].
    pub fn from_segments(segments: Vec<Segment>) -> Result<Self, SkeletonError> {
        let skeleton = Self { segments };
        skeleton.validate()?;
        Ok(skeleton)
    }

    /// Appends a segment, assigning its id, and returns that id.
    pub fn push(&mut self, mut segment: Segment) -> usize {
        let id = self.segments.len();
        debug_assert!(segment.parent.is_none_or(|p| p < id));
        segment.id = id;
        self.segments.push(segment);
        id
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Mutable access for in-crate transforms that keep topology intact.
    pub(crate) fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Index of the first parentless segment.
    pub fn root(&self) -> Option<usize> {
        self.segments.iter().position(|s| s.parent.is_none())
    }

    /// Indices of the direct children of `index`.
    pub fn children_of(&self, index: usize) -> Vec<usize> {
        self.segments
            .iter()
            .filter(|s| s.parent == Some(index))
            .map(|s| s.id)
            .collect()
    }

    /// Number of parent hops from `index` to the root.
    ///
    /// Returns `None` for an out-of-range index or a cycle.
    pub fn depth(&self, index: usize) -> Option<usize> {
        let mut current = self.segments.get(index)?;
        let mut hops = 0;
        while let Some(parent) = current.parent {
            hops += 1;
            if hops > self.segments.len() {
                return None;
            }
            current = self.segments.get(parent)?;
        }
        Some(hops)
    }

    /// Bounds of all finite segment endpoints.
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.segments.iter().flat_map(|s| [s.start, s.end]))
    }

    /// Checks the rooted-tree invariant and radius sign.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, scanning in index order.
    pub fn validate(&self) -> Result<(), SkeletonError> {
        let mut root = None;
        for (index, s) in self.segments.iter().enumerate() {
            if s.id != index {
                return Err(SkeletonError::IdMismatch { index, id: s.id });
            }
            match s.parent {
                None => match root {
                    None => root = Some(index),
                    Some(first) => {
                        return Err(SkeletonError::MultipleRoots {
                            first,
                            second: index,
                        });
                    }
                },
                Some(parent) if parent >= index => {
                    return Err(SkeletonError::ParentNotBefore { index, parent });
                }
                Some(_) => {}
            }
            if s.radius < 0.0 || s.radius_end < 0.0 {
                return Err(SkeletonError::NegativeRadius { index });
            }
        }
        if root.is_none() {
            return Err(SkeletonError::NoRoot);
        }
        Ok(())
    }

    /// Rest-pose bones, one per segment, in segment order.
    pub fn bind_pose(&self) -> Vec<Bone> {
        self.segments
            .iter()
            .map(|s| {
                let local_position = match s.parent.and_then(|p| self.segments.get(p)) {
                    Some(parent) => s.start - parent.start,
                    None => s.start,
                };
                Bone {
                    name: s.name.clone(),
                    parent: s.parent,
                    local_position,
                }
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Skeleton {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl std::ops::Index<usize> for Skeleton {
    type Output = Segment;

    fn index(&self, index: usize) -> &Segment {
        &self.segments[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::SegmentKind;

    fn chain(n: usize) -> Skeleton {
        let mut sk = Skeleton::new();
        for i in 0..n {
            let y = i as f32;
            sk.push(Segment::new(
                format!("s{i}"),
                Vec3::new(0.0, y, 0.0),
                Vec3::new(0.0, y + 1.0, 0.0),
                0.2,
                SegmentKind::Spine,
                i.checked_sub(1),
            ));
        }
        sk
    }

    #[test]
    fn test_push_assigns_ids() {
        let sk = chain(3);
        for (i, s) in sk.iter().enumerate() {
            assert_eq!(s.id, i);
        }
        assert!(sk.validate().is_ok());
    }

    #[test]
    fn test_depth_and_children() {
        let sk = chain(4);
        assert_eq!(sk.root(), Some(0));
        assert_eq!(sk.depth(3), Some(3));
        assert_eq!(sk.children_of(1), vec![2]);
        assert_eq!(sk.depth(99), None);
    }

    #[test]
    fn test_validate_rejects_forward_parent() {
        let mut segments = chain(2).into_segments();
        segments[0].parent = Some(1);
        segments[1].parent = None;
        assert_eq!(
            Skeleton::from_segments(segments),
            Err(SkeletonError::ParentNotBefore {
                index: 0,
                parent: 1
            })
        );
    }

    #[test]
    fn test_validate_rejects_two_roots() {
        let mut segments = chain(3).into_segments();
        segments[2].parent = None;
        assert_eq!(
            Skeleton::from_segments(segments),
            Err(SkeletonError::MultipleRoots {
                first: 0,
                second: 2
            })
        );
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert_eq!(Skeleton::new().validate(), Err(SkeletonError::NoRoot));
    }

    #[test]
    fn test_validate_rejects_negative_radius() {
        let mut segments = chain(2).into_segments();
        segments[1].radius_end = -0.1;
        assert_eq!(
            Skeleton::from_segments(segments),
            Err(SkeletonError::NegativeRadius { index: 1 })
        );
    }

    #[test]
    fn test_bind_pose_is_parent_relative() {
        let sk = chain(3);
        let bones = sk.bind_pose();
        assert_eq!(bones.len(), 3);
        assert_eq!(bones[0].local_position, Vec3::ZERO);
        assert_eq!(bones[1].local_position, Vec3::Y);
        assert_eq!(bones[2].parent, Some(1));
    }

    #[test]
    fn test_bounds() {
        let b = chain(2).bounds().unwrap();
        assert_eq!(b.min, Vec3::ZERO);
        assert_eq!(b.max, Vec3::new(0.0, 2.0, 0.0));
    }
}
