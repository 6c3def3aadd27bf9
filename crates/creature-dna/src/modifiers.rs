//! Body-proportion multipliers composed from active traits.

use serde::{Deserialize, Serialize};

use crate::traits::TraitId;

/// Combined proportion multipliers for a creature.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Overall size; also scales spine and limb counts.
    pub scale: f64,
    /// Segment thickness.
    pub muscle: f64,
    pub limb_len: f64,
    pub spine_len: f64,
}

impl Default for Modifiers {
    fn default() -> Self {
        Self {
            scale: 1.0,
            muscle: 1.0,
            limb_len: 1.0,
            spine_len: 1.0,
        }
    }
}

/// Multiplies together the factors of every active trait.
///
/// Pure multiplication, so the result does not depend on trait order.
pub fn apply_trait_modifiers(traits: &[TraitId]) -> Modifiers {
    traits.iter().fold(Modifiers::default(), |mut m, id| {
        let f = id.def().modifiers;
        m.scale *= f.scale;
        m.muscle *= f.muscle;
        m.limb_len *= f.limb_len;
        m.spine_len *= f.spine_len;
        m
    })
}
