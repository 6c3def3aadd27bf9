use serde::{Deserialize, Serialize};

/// Ownership label stored in every voxel cell.
///
/// `BoneLabel(0)` is empty space; `BoneLabel(k)` is solid and owned by
/// segment `k - 1`, so zero-initialised grids represent empty space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoneLabel(pub u16);

impl BoneLabel {
    pub const EMPTY: Self = Self(0);

    /// Largest segment index a label can carry.
    pub const MAX_OWNER: usize = u16::MAX as usize - 1;

    /// Label for a voxel owned by segment `owner`, or `None` past [`Self::MAX_OWNER`].
    pub fn from_owner(owner: usize) -> Option<Self> {
        if owner > Self::MAX_OWNER {
            return None;
        }
        Some(Self(owner as u16 + 1))
    }

    /// Owning segment index, or `None` for empty space.
    pub fn owner(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_solid(self) -> bool {
        self.0 != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_owner() {
        assert!(BoneLabel::EMPTY.is_empty());
        assert_eq!(BoneLabel::EMPTY.owner(), None);
        assert_eq!(BoneLabel::default(), BoneLabel::EMPTY);
    }

    #[test]
    fn test_owner_is_offset_by_one() {
        let label = BoneLabel::from_owner(0).unwrap();
        assert_eq!(label, BoneLabel(1));
        assert_eq!(label.owner(), Some(0));
        assert!(label.is_solid());
    }

    #[test]
    fn test_owner_overflow_rejected() {
        assert!(BoneLabel::from_owner(BoneLabel::MAX_OWNER).is_some());
        assert!(BoneLabel::from_owner(BoneLabel::MAX_OWNER + 1).is_none());
    }
}
