//! Phenotype resolution: seed + traits → the creature's resolved genes.

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use creature_math::Lcg;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::GenerationParams;
use crate::traits::TraitId;

// ---------------------------------------------------------------------------
// Categorical genes
// ---------------------------------------------------------------------------

/// Skin category. Declaration order is the draw order of [`resolve_dna`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinType {
    Flesh,
    Scale,
    Fur,
    Chitin,
    Rock,
}

impl SkinType {
    pub const ALL: [SkinType; 5] = [
        Self::Flesh,
        Self::Scale,
        Self::Fur,
        Self::Chitin,
        Self::Rock,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Flesh => "flesh",
            Self::Scale => "scale",
            Self::Fur => "fur",
            Self::Chitin => "chitin",
            Self::Rock => "rock",
        }
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string does not name a skin category.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown skin type: {0}")]
pub struct UnknownSkin(pub String);

impl FromStr for SkinType {
    type Err = UnknownSkin;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkinType::ALL
            .into_iter()
            .find(|k| k.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSkin(s.to_string()))
    }
}

/// Leg posture. Declaration order is the draw order of [`resolve_dna`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegType {
    Digitigrade,
    Plantigrade,
}

impl LegType {
    pub const ALL: [LegType; 2] = [Self::Digitigrade, Self::Plantigrade];
}

// ---------------------------------------------------------------------------
// Phenotype
// ---------------------------------------------------------------------------

/// Resolved genes for one creature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Phenotype {
    pub seed: i64,
    /// Animation tempo multiplier.
    pub speed: f64,
    pub breath_rate: f64,
    pub sway: f64,
    /// Animation phase in radians.
    pub phase_offset: f64,
    pub skin_type: SkinType,
    pub leg_type: LegType,
    pub spine_count: u32,
    pub limb_count: u32,
}

/// Resolves the phenotype for `params.seed` with `traits` applied in order.
///
/// Draw order is fixed: speed, breath rate, sway, phase offset, skin type,
/// leg type, spine count, limb count. Changing it changes every creature.
/// Traits then overwrite skin type and phenotype fields, last writer wins.
pub fn resolve_dna(params: &GenerationParams, traits: &[TraitId]) -> Phenotype {
    let mut rng = Lcg::new(params.seed);

    let speed = rng.range(0.8, 1.2);
    let breath_rate = rng.range(0.5, 1.5);
    let sway = rng.range(0.3, 0.8);
    let phase_offset = rng.range(0.0, TAU);
    let skin_type = rng
        .choose(&SkinType::ALL)
        .copied()
        .unwrap_or(SkinType::Flesh);
    let leg_type = rng
        .choose(&LegType::ALL)
        .copied()
        .unwrap_or(LegType::Plantigrade);
    let spine_count = rng.range(3.0, 8.0).floor() as u32;
    let limb_count = rng.range(2.0, 6.0).floor() as u32;

    let mut dna = Phenotype {
        seed: params.seed,
        speed,
        breath_rate,
        sway,
        phase_offset,
        skin_type,
        leg_type,
        spine_count,
        limb_count,
    };

    for id in traits {
        let def = id.def();
        if let Some(skin) = def.forced_skin {
            dna.skin_type = skin;
        }
        if let Some(leg) = def.overrides.leg_type {
            dna.leg_type = leg;
        }
        if let Some(n) = def.overrides.spine_count {
            dna.spine_count = n;
        }
        if let Some(n) = def.overrides.limb_count {
            dna.limb_count = n;
        }
    }

    tracing::debug!(
        seed = dna.seed,
        skin = %dna.skin_type,
        spine_count = dna.spine_count,
        limb_count = dna.limb_count,
        "resolved phenotype"
    );

    dna
}
