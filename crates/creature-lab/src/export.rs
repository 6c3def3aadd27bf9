//! JSON export of a generated creature.

use std::path::Path;

use creature_dna::{Modifiers, Phenotype, TraitId};
use creature_mesh::Geometry;
use creature_skeleton::{Bone, Segment};
use serde::Serialize;

use crate::error::LabError;
use crate::session::{CreatureLab, LabStats};

/// Everything needed to rebuild or render a creature elsewhere.
#[derive(Debug, Serialize)]
pub struct CreatureExport<'a> {
    pub seed: i64,
    pub traits: &'a [TraitId],
    pub health: f32,
    pub phenotype: &'a Phenotype,
    pub modifiers: &'a Modifiers,
    pub segments: &'a [Segment],
    pub bind_pose: Vec<Bone>,
    pub stats: LabStats,
    pub geometry: &'a Geometry,
}

impl<'a> CreatureExport<'a> {
    pub fn from_lab(lab: &'a CreatureLab) -> Self {
        Self {
            seed: lab.params().seed,
            traits: lab.traits(),
            health: lab.health(),
            phenotype: lab.phenotype(),
            modifiers: lab.modifiers(),
            segments: lab.segments(),
            bind_pose: lab.bind_pose(),
            stats: lab.stats(),
            geometry: lab.geometry(),
        }
    }
}

/// Pretty-printed JSON for `lab`.
///
/// # Errors
///
/// Returns [`LabError::Serialize`] if serialization fails.
pub fn to_json(lab: &CreatureLab) -> Result<String, LabError> {
    serde_json::to_string_pretty(&CreatureExport::from_lab(lab)).map_err(LabError::Serialize)
}

/// Writes [`to_json`] output to `path`.
///
/// # Errors
///
/// Returns [`LabError::Serialize`] or [`LabError::Write`].
pub fn write_json(path: &Path, lab: &CreatureLab) -> Result<(), LabError> {
    let json = to_json(lab)?;
    std::fs::write(path, json).map_err(|source| LabError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "creature exported");
    Ok(())
}
