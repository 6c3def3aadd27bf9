//! Creature DNA: generation parameters, the trait table, phenotype resolution and materials.
//!
//! Everything here is a pure function of `(seed, traits)`. The trait table is
//! static data; unknown trait names are dropped at parse time rather than
//! rejected.

pub mod material;
pub mod modifiers;
pub mod params;
pub mod phenotype;
pub mod traits;

pub use material::{
    MATERIAL_COUNT, SkinMaterial, SurfaceMaterial, material_mapping, material_mapping_by_name,
    vertex_tint,
};
pub use modifiers::{Modifiers, apply_trait_modifiers};
pub use params::GenerationParams;
pub use phenotype::{LegType, Phenotype, SkinType, UnknownSkin, resolve_dna};
pub use traits::{TRAIT_DEFINITIONS, TraitDef, TraitId, UnknownTrait, parse_traits};
