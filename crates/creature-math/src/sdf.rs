//! Signed-distance primitives used to sculpt the creature body.

use glam::Vec3;

/// Squared length below which a segment collapses to a sphere.
pub const DEGENERATE_SEGMENT_EPSILON: f32 = 1e-6;

/// Peak amplitude of [`field_noise`].
pub const NOISE_AMPLITUDE: f32 = 0.03;

/// Spatial frequency of [`field_noise`].
pub const NOISE_FREQUENCY: f32 = 8.0;

/// Signed distance from `p` to a cone-like solid from `a` (radius `r1`) to `b` (radius `r2`).
///
/// Negative inside, positive outside. A segment shorter than
/// [`DEGENERATE_SEGMENT_EPSILON`] is treated as a sphere of radius `r1` at `a`.
pub fn tapered_segment_distance(p: Vec3, a: Vec3, b: Vec3, r1: f32, r2: f32) -> f32 {
    let pa = p - a;
    let ba = b - a;
    let len_sq = ba.length_squared();

    if len_sq < DEGENERATE_SEGMENT_EPSILON {
        return pa.length() - r1;
    }

    let h = (pa.dot(ba) / len_sq).clamp(0.0, 1.0);
    (pa - ba * h).length() - (r1 * (1.0 - h) + r2 * h)
}

/// Polynomial smooth minimum with blend width `k`.
///
/// `k <= 0` is a hard union and returns exactly `a.min(b)`.
pub fn smooth_min(a: f32, b: f32, k: f32) -> f32 {
    if k <= 0.0 {
        return a.min(b);
    }
    let h = (k - (a - b).abs()).max(0.0) / k;
    a.min(b) - h * h * k * 0.25
}

/// Cheap trigonometric perturbation, bounded by ±[`NOISE_AMPLITUDE`].
pub fn field_noise(p: Vec3) -> f32 {
    (p.x * NOISE_FREQUENCY).sin()
        * (p.y * NOISE_FREQUENCY).cos()
        * (p.z * NOISE_FREQUENCY).sin()
        * NOISE_AMPLITUDE
}
