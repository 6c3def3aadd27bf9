//! Damage propagation: a thinned copy of the blueprint for a health level.

use crate::skeleton::Skeleton;

/// Health percentage in `[0, 100]` as a fraction in `[0, 1]`.
///
/// Non-finite input counts as no health.
pub fn health_fraction(health_percent: f32) -> f32 {
    if !health_percent.is_finite() {
        tracing::warn!(health_percent, "non-finite health, treating as 0");
        return 0.0;
    }
    (health_percent / 100.0).clamp(0.0, 1.0)
}

/// Returns a copy of `blueprint` with every radius scaled by the health fraction.
///
/// Topology, positions, kinds, sides and chain indices are copied verbatim.
/// Always derive from the undamaged blueprint; the blueprint is never touched.
pub fn apply_damage(blueprint: &Skeleton, health_percent: f32) -> Skeleton {
    let h = health_fraction(health_percent);
    let mut damaged = blueprint.clone();
    for s in damaged.segments_mut() {
        s.radius *= h;
        s.radius_end *= h;
    }
    tracing::debug!(health = h, segments = damaged.len(), "damage applied");
    damaged
}
