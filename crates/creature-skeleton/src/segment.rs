//! The skeletal segment: a tapered capsule with a parent link.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Anatomical category of a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Head,
    Spine,
    Leg,
    Arm,
    Eye,
    Decoration,
}

impl SegmentKind {
    /// Fine extremities that keep a crisp silhouette when blended.
    pub fn is_extremity(self) -> bool {
        matches!(self, Self::Head | Self::Eye | Self::Decoration)
    }

    pub fn is_limb(self) -> bool {
        matches!(self, Self::Leg | Self::Arm)
    }
}

/// Which side of the body a segment sits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    #[default]
    Center,
    Right,
}

impl Side {
    /// `-1.0`, `0.0` or `1.0`.
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Center => 0.0,
            Self::Right => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Center => "Center",
            Self::Right => "Right",
        }
    }
}

/// One skeletal segment.
///
/// `parent` is an index into the owning skeleton, always lower than `id`.
/// `None` marks the root.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Stable index into the skeleton; doubles as the skin index.
    pub id: usize,
    pub name: String,
    pub start: Vec3,
    pub end: Vec3,
    /// Radius at `start`. Zero means destroyed.
    pub radius: f32,
    /// Radius at `end`.
    pub radius_end: f32,
    pub kind: SegmentKind,
    pub parent: Option<usize>,
    pub side: Side,
    /// Position along a spine or limb chain, 0-based.
    pub chain_index: u32,
}

impl Segment {
    /// Creates a uniform-radius segment with no side and chain index 0.
    pub fn new(
        name: impl Into<String>,
        start: Vec3,
        end: Vec3,
        radius: f32,
        kind: SegmentKind,
        parent: Option<usize>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            start,
            end,
            radius,
            radius_end: radius,
            kind,
            parent,
            side: Side::Center,
            chain_index: 0,
        }
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn with_chain_index(mut self, chain_index: u32) -> Self {
        self.chain_index = chain_index;
        self
    }

    pub fn with_radius_end(mut self, radius_end: f32) -> Self {
        self.radius_end = radius_end;
        self
    }

    /// True when every coordinate and radius is finite.
    pub fn is_finite(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.radius.is_finite()
            && self.radius_end.is_finite()
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Largest of the two end radii.
    pub fn max_radius(&self) -> f32 {
        self.radius.max(self.radius_end)
    }
}
