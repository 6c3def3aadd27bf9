//! Skin materials, the surface material palette, and health tinting.

use serde::{Deserialize, Serialize};

use crate::phenotype::SkinType;

// ---------------------------------------------------------------------------
// SkinMaterial
// ---------------------------------------------------------------------------

/// Base shading parameters for a skin category.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkinMaterial {
    /// Linear RGB.
    pub base_color: [f32; 3],
    pub roughness: f32,
}

/// Looks up the shading parameters for a skin category.
pub fn material_mapping(skin: SkinType) -> SkinMaterial {
    match skin {
        SkinType::Flesh => SkinMaterial {
            base_color: [0.8, 0.6, 0.5],
            roughness: 0.7,
        },
        SkinType::Scale => SkinMaterial {
            base_color: [0.4, 0.7, 0.5],
            roughness: 0.5,
        },
        SkinType::Fur => SkinMaterial {
            base_color: [0.5, 0.4, 0.3],
            roughness: 0.9,
        },
        SkinType::Chitin => SkinMaterial {
            base_color: [0.3, 0.3, 0.4],
            roughness: 0.4,
        },
        SkinType::Rock => SkinMaterial {
            base_color: [0.5, 0.5, 0.5],
            roughness: 0.8,
        },
    }
}

/// Looks up a skin by name; unrecognised names get the flesh material.
pub fn material_mapping_by_name(name: &str) -> SkinMaterial {
    material_mapping(name.parse().unwrap_or(SkinType::Flesh))
}

// ---------------------------------------------------------------------------
// Surface palette
// ---------------------------------------------------------------------------

/// Number of surface materials a mesh is bucketed into.
pub const MATERIAL_COUNT: usize = 8;

/// Textured surface materials. The index is the mesh group's material slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceMaterial {
    Noise,
    Scales,
    Striated,
    Keratin,
    Feathers,
    Fur,
    Chitin,
    Crystal,
}

impl SurfaceMaterial {
    /// Palette in slot order.
    pub const ALL: [SurfaceMaterial; MATERIAL_COUNT] = [
        Self::Noise,
        Self::Scales,
        Self::Striated,
        Self::Keratin,
        Self::Feathers,
        Self::Fur,
        Self::Chitin,
        Self::Crystal,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// sRGB colour the texture generator tints this material with.
    pub fn color_base(self) -> [u8; 3] {
        match self {
            Self::Noise => [255, 200, 150],
            Self::Scales => [100, 180, 100],
            Self::Striated => [150, 100, 100],
            Self::Keratin => [200, 200, 200],
            Self::Feathers => [180, 150, 100],
            Self::Fur => [120, 100, 80],
            Self::Chitin => [80, 100, 120],
            Self::Crystal => [200, 150, 100],
        }
    }
}

// ---------------------------------------------------------------------------
// Health tint
// ---------------------------------------------------------------------------

/// Vertex tint for a health percentage in `[0, 100]`.
///
/// Full health is near white; damage shifts towards a dull red.
pub fn vertex_tint(health_percent: f32) -> [f32; 3] {
    let h = if health_percent.is_finite() {
        (health_percent / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    };
    [0.8 + h * 0.2, 0.4 + h * 0.4, 0.3 + h * 0.3]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_per_skin() {
        assert_eq!(material_mapping(SkinType::Chitin).roughness, 0.4);
        assert_eq!(material_mapping(SkinType::Scale).base_color, [0.4, 0.7, 0.5]);
    }

    #[test]
    fn test_unknown_name_falls_back_to_flesh() {
        assert_eq!(
            material_mapping_by_name("plasma"),
            material_mapping(SkinType::Flesh)
        );
        assert_eq!(
            material_mapping_by_name("rock"),
            material_mapping(SkinType::Rock)
        );
    }

    #[test]
    fn test_palette_indices() {
        for (i, m) in SurfaceMaterial::ALL.iter().enumerate() {
            assert_eq!(m.index(), i);
            assert_eq!(SurfaceMaterial::from_index(i), Some(*m));
        }
        assert_eq!(SurfaceMaterial::from_index(MATERIAL_COUNT), None);
    }

    #[test]
    fn test_vertex_tint_extremes() {
        assert_eq!(vertex_tint(100.0), [1.0, 0.8, 0.6]);
        assert_eq!(vertex_tint(0.0), [0.8, 0.4, 0.3]);
        assert_eq!(vertex_tint(250.0), vertex_tint(100.0));
        assert_eq!(vertex_tint(f32::NAN), vertex_tint(0.0));
    }
}
