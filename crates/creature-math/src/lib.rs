//! Deterministic random stream, signed-distance primitives and bounding boxes for creature generation.

mod aabb;
pub mod rng;
pub mod sdf;

pub use aabb::Aabb;
pub use rng::Lcg;
pub use sdf::{field_noise, smooth_min, tapered_segment_distance};
