//! Bitmask recording which of a voxel's six faces border empty space.

use crate::face_direction::FaceDirection;

/// Bitmask indicating which of a voxel's 6 faces are exposed.
///
/// Bit 0 = +X, Bit 1 = −X, Bit 2 = +Y, Bit 3 = −Y, Bit 4 = +Z, Bit 5 = −Z.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibleFaces(pub u8);

impl VisibleFaces {
    /// No faces visible.
    pub const NONE: Self = Self(0);
    /// All six faces visible.
    pub const ALL: Self = Self(0b0011_1111);

    /// Returns `true` if the face in the given direction is visible.
    pub fn is_visible(self, direction: FaceDirection) -> bool {
        self.0 & (1 << direction.index()) != 0
    }

    /// Marks the face in the given direction as visible.
    pub fn set_visible(&mut self, direction: FaceDirection) {
        self.0 |= 1 << direction.index();
    }

    /// Returns the number of visible faces (0–6).
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Visible directions in [`FaceDirection::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = FaceDirection> {
        FaceDirection::ALL
            .into_iter()
            .filter(move |&dir| self.is_visible(dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_has_zero_count() {
        assert_eq!(VisibleFaces::NONE.count(), 0);
    }

    #[test]
    fn test_all_has_six_count() {
        assert_eq!(VisibleFaces::ALL.count(), 6);
    }

    #[test]
    fn test_set_and_query_individual_face() {
        let mut vf = VisibleFaces::NONE;
        vf.set_visible(FaceDirection::PosZ);
        assert!(vf.is_visible(FaceDirection::PosZ));
        assert!(!vf.is_visible(FaceDirection::NegZ));
        assert_eq!(vf.count(), 1);
    }

    #[test]
    fn test_set_all_directions_individually() {
        let mut vf = VisibleFaces::NONE;
        for dir in FaceDirection::ALL {
            vf.set_visible(dir);
        }
        assert_eq!(vf, VisibleFaces::ALL);
    }

    #[test]
    fn test_iter_yields_set_faces_in_order() {
        let mut vf = VisibleFaces::NONE;
        vf.set_visible(FaceDirection::NegZ);
        vf.set_visible(FaceDirection::PosX);
        let dirs: Vec<_> = vf.iter().collect();
        assert_eq!(dirs, vec![FaceDirection::PosX, FaceDirection::NegZ]);
    }
}
