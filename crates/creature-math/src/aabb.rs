use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in creature space.
///
/// Invariant: min.x <= max.x, min.y <= max.y, min.z <= max.z.
/// The constructor enforces this by sorting components.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create an AABB from two corners. Automatically sorts
    /// components so that min <= max on every axis.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Smallest box enclosing every point, or `None` for an empty iterator.
    ///
    /// Non-finite points are skipped.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut bounds: Option<Aabb> = None;
        for p in points.into_iter().filter(|p| p.is_finite()) {
            bounds = Some(match bounds {
                Some(b) => b.include(p),
                None => Aabb { min: p, max: p },
            });
        }
        bounds
    }

    /// Returns a box grown to contain `p`.
    pub fn include(&self, p: Vec3) -> Aabb {
        Aabb {
            min: self.min.min(p),
            max: self.max.max(p),
        }
    }

    /// Returns the smallest AABB enclosing both self and other.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Returns a new AABB expanded by `margin` on each side.
    pub fn expand_by(&self, margin: f32) -> Aabb {
        Aabb {
            min: self.min - Vec3::splat(margin),
            max: self.max + Vec3::splat(margin),
        }
    }

    /// Size along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Length of the longest axis.
    pub fn longest_extent(&self) -> f32 {
        self.size().max_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_auto_sorts() {
        let aabb = Aabb::new(Vec3::splat(10.0), Vec3::ZERO);
        assert_eq!(aabb.min, Vec3::ZERO);
        assert_eq!(aabb.max, Vec3::splat(10.0));
    }

    #[test]
    fn test_from_points_encloses_all() {
        let aabb = Aabb::from_points([
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(-0.8, 0.5, 0.0),
            Vec3::new(0.6, -0.3, 0.1),
        ])
        .unwrap();
        assert_eq!(aabb.min, Vec3::new(-0.8, -0.3, 0.0));
        assert_eq!(aabb.max, Vec3::new(0.6, 2.0, 0.1));
    }

    #[test]
    fn test_from_points_skips_non_finite() {
        let aabb = Aabb::from_points([Vec3::ONE, Vec3::new(f32::NAN, 0.0, 0.0)]).unwrap();
        assert_eq!(aabb.min, Vec3::ONE);
        assert_eq!(aabb.max, Vec3::ONE);
    }

    #[test]
    fn test_from_points_empty_is_none() {
        assert!(Aabb::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_expand_by() {
        let aabb = Aabb::new(Vec3::splat(5.0), Vec3::splat(15.0));
        let expanded = aabb.expand_by(0.5);
        assert_eq!(expanded.min, Vec3::splat(4.5));
        assert_eq!(expanded.max, Vec3::splat(15.5));
    }

    #[test]
    fn test_longest_extent() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 3.0, 2.0));
        assert_eq!(aabb.longest_extent(), 3.0);
    }

    #[test]
    fn test_union_encloses_both() {
        let a = Aabb::new(Vec3::ZERO, Vec3::splat(5.0));
        let b = Aabb::new(Vec3::splat(3.0), Vec3::splat(10.0));
        let u = a.union(&b);
        assert_eq!(u.min, Vec3::ZERO);
        assert_eq!(u.max, Vec3::splat(10.0));
    }
}
