//! Static trait table: the selectable modifiers a creature can be built with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::phenotype::{LegType, SkinType};

// ---------------------------------------------------------------------------
// TraitId
// ---------------------------------------------------------------------------

/// Closed set of trait identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitId {
    Shield,
    Haste,
    Regen,
    Clone,
    Berserk,
    Healer,
    Devour,
    Jump,
}

impl TraitId {
    /// Every trait, in table order.
    pub const ALL: [TraitId; 8] = [
        Self::Shield,
        Self::Haste,
        Self::Regen,
        Self::Clone,
        Self::Berserk,
        Self::Healer,
        Self::Devour,
        Self::Jump,
    ];

    /// Lowercase key used in configs and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Self::Shield => "shield",
            Self::Haste => "haste",
            Self::Regen => "regen",
            Self::Clone => "clone",
            Self::Berserk => "berserk",
            Self::Healer => "healer",
            Self::Devour => "devour",
            Self::Jump => "jump",
        }
    }

    /// Returns the static definition for this trait.
    pub fn def(self) -> &'static TraitDef {
        &TRAIT_DEFINITIONS[self as usize]
    }
}

impl fmt::Display for TraitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string does not name a known trait.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown trait: {0}")]
pub struct UnknownTrait(pub String);

impl FromStr for TraitId {
    type Err = UnknownTrait;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        TraitId::ALL
            .into_iter()
            .find(|t| t.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownTrait(s.to_string()))
    }
}

/// Parses trait names, silently dropping unknown ones and duplicates.
///
/// Caller order is preserved (first occurrence wins), since skin and
/// phenotype overrides are applied last-writer-wins.
pub fn parse_traits<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<TraitId> {
    let mut traits = Vec::new();
    for name in names {
        match name.parse::<TraitId>() {
            Ok(id) if !traits.contains(&id) => traits.push(id),
            Ok(_) => {}
            Err(e) => tracing::debug!("ignoring {e}"),
        }
    }
    traits
}

// ---------------------------------------------------------------------------
// TraitDef
// ---------------------------------------------------------------------------

/// Multiplicative factors a trait applies to body proportions.
///
/// A factor of 1.0 leaves the proportion unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModifierFactors {
    pub scale: f64,
    pub muscle: f64,
    pub limb_len: f64,
    pub spine_len: f64,
}

impl ModifierFactors {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        muscle: 1.0,
        limb_len: 1.0,
        spine_len: 1.0,
    };
}

/// Direct phenotype field overrides.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhenotypeOverrides {
    pub leg_type: Option<LegType>,
    pub spine_count: Option<u32>,
    pub limb_count: Option<u32>,
}

impl PhenotypeOverrides {
    pub const NONE: Self = Self {
        leg_type: None,
        spine_count: None,
        limb_count: None,
    };
}

/// Static definition of one trait.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraitDef {
    pub id: TraitId,
    /// Display name.
    pub name: &'static str,
    pub description: &'static str,
    pub modifiers: ModifierFactors,
    pub forced_skin: Option<SkinType>,
    pub overrides: PhenotypeOverrides,
    /// Linear RGB tint for presentation layers.
    pub tint: [f32; 3],
    /// Cosmetic feature tag consumed by presentation layers.
    pub feature: &'static str,
}

/// Trait table, indexed by `TraitId as usize`.
pub static TRAIT_DEFINITIONS: [TraitDef; 8] = [
    TraitDef {
        id: TraitId::Shield,
        name: "Shield",
        description: "Metal and crystal carapace",
        modifiers: ModifierFactors {
            scale: 1.3,
            muscle: 1.5,
            limb_len: 0.9,
            spine_len: 1.0,
        },
        forced_skin: Some(SkinType::Chitin),
        overrides: PhenotypeOverrides::NONE,
        tint: [0.6, 0.7, 1.0],
        feature: "crystal_shoulders",
    },
    TraitDef {
        id: TraitId::Haste,
        name: "Haste",
        description: "Streamlined thrusters",
        modifiers: ModifierFactors {
            scale: 0.7,
            muscle: 0.6,
            limb_len: 1.6,
            spine_len: 1.0,
        },
        forced_skin: Some(SkinType::Scale),
        overrides: PhenotypeOverrides::NONE,
        tint: [1.0, 1.0, 0.6],
        feature: "back_boosters",
    },
    TraitDef {
        id: TraitId::Regen,
        name: "Regeneration",
        description: "Exposed core",
        modifiers: ModifierFactors {
            scale: 1.1,
            muscle: 1.0,
            limb_len: 1.0,
            spine_len: 1.0,
        },
        forced_skin: Some(SkinType::Flesh),
        overrides: PhenotypeOverrides::NONE,
        tint: [0.6, 1.0, 0.6],
        feature: "exposed_heart",
    },
    TraitDef {
        id: TraitId::Clone,
        name: "Proliferation",
        description: "Parasitic head",
        modifiers: ModifierFactors {
            scale: 0.6,
            muscle: 0.8,
            limb_len: 1.0,
            spine_len: 0.7,
        },
        forced_skin: Some(SkinType::Flesh),
        overrides: PhenotypeOverrides::NONE,
        tint: [0.9, 0.6, 0.9],
        feature: "parasite_head",
    },
    TraitDef {
        id: TraitId::Berserk,
        name: "Berserk",
        description: "Heat-venting ridges",
        modifiers: ModifierFactors {
            scale: 1.2,
            muscle: 1.8,
            limb_len: 1.1,
            spine_len: 1.0,
        },
        forced_skin: Some(SkinType::Rock),
        overrides: PhenotypeOverrides::NONE,
        tint: [1.0, 0.4, 0.4],
        feature: "heat_vents",
    },
    TraitDef {
        id: TraitId::Healer,
        name: "Healer",
        description: "Sacred halo",
        modifiers: ModifierFactors {
            scale: 0.9,
            muscle: 0.7,
            limb_len: 1.0,
            spine_len: 1.3,
        },
        forced_skin: Some(SkinType::Fur),
        overrides: PhenotypeOverrides::NONE,
        tint: [1.0, 0.95, 0.8],
        feature: "halo",
    },
    TraitDef {
        id: TraitId::Devour,
        name: "Devour",
        description: "Belly maw",
        modifiers: ModifierFactors {
            scale: 1.5,
            muscle: 1.2,
            limb_len: 1.0,
            spine_len: 0.6,
        },
        forced_skin: Some(SkinType::Flesh),
        overrides: PhenotypeOverrides::NONE,
        tint: [0.8, 0.4, 0.6],
        feature: "belly_maw",
    },
    TraitDef {
        id: TraitId::Jump,
        name: "Jump",
        description: "Mechanical legs",
        modifiers: ModifierFactors {
            scale: 1.0,
            muscle: 1.1,
            limb_len: 1.8,
            spine_len: 1.0,
        },
        forced_skin: None,
        overrides: PhenotypeOverrides {
            leg_type: Some(LegType::Digitigrade),
            spine_count: None,
            limb_count: None,
        },
        tint: [0.7, 0.8, 0.9],
        feature: "leg_hydraulics",
    },
];
