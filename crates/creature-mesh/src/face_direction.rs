//! The six axis directions a voxel face can point.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One of the six cardinal directions a voxel face can point.
///
/// The `repr(u8)` discriminant doubles as the bit index inside [`super::VisibleFaces`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum FaceDirection {
    /// +X direction.
    PosX = 0,
    /// −X direction.
    NegX = 1,
    /// +Y direction.
    PosY = 2,
    /// −Y direction.
    NegY = 3,
    /// +Z direction.
    PosZ = 4,
    /// −Z direction.
    NegZ = 5,
}

impl FaceDirection {
    /// All six directions in emission order.
    pub const ALL: [FaceDirection; 6] = [
        Self::PosX,
        Self::NegX,
        Self::PosY,
        Self::NegY,
        Self::PosZ,
        Self::NegZ,
    ];

    /// Returns `(layer_axis, u_axis, v_axis)`.
    ///
    /// `layer_axis` is perpendicular to the face; `u_axis` and `v_axis` span
    /// the face plane and pick the world coordinates used as UVs.
    /// Each value is 0=X, 1=Y, 2=Z.
    pub fn sweep_axes(self) -> (usize, usize, usize) {
        match self {
            Self::PosX | Self::NegX => (0, 2, 1), // layer=X, u=Z, v=Y
            Self::PosY | Self::NegY => (1, 0, 2), // layer=Y, u=X, v=Z
            Self::PosZ | Self::NegZ => (2, 0, 1), // layer=Z, u=X, v=Y
        }
    }

    /// Returns the unit normal as `[f32; 3]` for this face direction.
    pub fn normal(self) -> [f32; 3] {
        match self {
            Self::PosX => [1.0, 0.0, 0.0],
            Self::NegX => [-1.0, 0.0, 0.0],
            Self::PosY => [0.0, 1.0, 0.0],
            Self::NegY => [0.0, -1.0, 0.0],
            Self::PosZ => [0.0, 0.0, 1.0],
            Self::NegZ => [0.0, 0.0, -1.0],
        }
    }

    /// Cell across this face from `(x, y, z)`, or `None` below zero.
    pub fn neighbor(self, x: usize, y: usize, z: usize) -> Option<(usize, usize, usize)> {
        Some(match self {
            Self::PosX => (x + 1, y, z),
            Self::NegX => (x.checked_sub(1)?, y, z),
            Self::PosY => (x, y + 1, z),
            Self::NegY => (x, y.checked_sub(1)?, z),
            Self::PosZ => (x, y, z + 1),
            Self::NegZ => (x, y, z.checked_sub(1)?),
        })
    }

    /// Bit index inside [`super::VisibleFaces`] (0 to 5).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The four cube corners of this face, counter-clockwise seen from outside.
    ///
    /// Corner bits: 1 = +X, 2 = +Y, 4 = +Z; a clear bit is the negative side.
    pub fn corners(self) -> [u8; 4] {
        match self {
            Self::PosX => [5, 1, 3, 7],
            Self::NegX => [0, 4, 6, 2],
            Self::PosY => [6, 7, 3, 2],
            Self::NegY => [0, 1, 5, 4],
            Self::PosZ => [4, 5, 7, 6],
            Self::NegZ => [1, 0, 2, 3],
        }
    }
}

/// Offset of cube corner `bits` from the cube centre, for half-edge `half`.
pub fn corner_offset(bits: u8, half: f32) -> Vec3 {
    let pick = |mask: u8| if bits & mask != 0 { half } else { -half };
    Vec3::new(pick(1), pick(2), pick(4))
}
