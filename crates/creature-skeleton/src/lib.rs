//! Creature skeletons: segment arena, synthesis from DNA, damage, and bind pose.

pub mod damage;
pub mod segment;
pub mod skeleton;
pub mod synth;

pub use damage::{apply_damage, health_fraction};
pub use segment::{Segment, SegmentKind, Side};
pub use skeleton::{Bone, Skeleton, SkeletonError};
pub use synth::{SkeletonBlueprint, generate_blueprint, generate_skeleton};
