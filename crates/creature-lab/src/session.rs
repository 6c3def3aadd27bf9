//! The creature lab session: one creature's blueprint, damaged skeleton and mesh.

use creature_config::{Config, MaterialMode};
use creature_dna::{GenerationParams, MATERIAL_COUNT, Modifiers, Phenotype, TraitId, parse_traits};
use creature_mesh::{
    BlendRule, Geometry, MaterialAssignment, MeshOptions, MeshStats, generate_mesh_with_stats,
};
use creature_skeleton::{
    Bone, Segment, Skeleton, SkeletonBlueprint, apply_damage, generate_blueprint, health_fraction,
};
use serde::{Deserialize, Serialize};

use crate::error::LabError;

/// Generation parameters described by `config`.
pub fn params_from_config(config: &Config) -> GenerationParams {
    let g = &config.generation;
    GenerationParams {
        seed: g.seed,
        gravity: g.gravity,
        resolution: g.resolution,
        smoothness: g.smoothness,
    }
}

/// Mesh options described by `config`, for `params`.
pub fn mesh_options_from_config(config: &Config, params: &GenerationParams) -> MeshOptions {
    let m = &config.mesh;
    MeshOptions {
        blend: BlendRule {
            narrow_factor: m.narrow_blend_factor,
            narrow_chain_index: m.narrow_chain_index,
        },
        uv_scale: m.uv_scale,
        assignment: match m.material_assignment {
            MaterialMode::ByOwner => MaterialAssignment::ByOwner,
            MaterialMode::Scattered => MaterialAssignment::Scattered,
        },
        ..MeshOptions::from_params(params, MATERIAL_COUNT)
    }
}

/// Headline numbers for the current creature.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabStats {
    /// Skeleton segments.
    pub nodes: usize,
    pub triangles: usize,
    pub vertices: usize,
    pub material_groups: usize,
    /// True when the mesh is the stand-in cube.
    pub placeholder: bool,
    pub mesh: MeshStats,
}

/// Long-lived generation state, replaced wholesale on every rebuild.
///
/// The blueprint is the undamaged skeleton; the current skeleton is always
/// re-derived from it so repeated health changes never compound.
#[derive(Clone, Debug)]
pub struct CreatureLab {
    params: GenerationParams,
    traits: Vec<TraitId>,
    health: f32,
    options: MeshOptions,
    blueprint: SkeletonBlueprint,
    current: Skeleton,
    geometry: Geometry,
    mesh_stats: MeshStats,
}

impl CreatureLab {
    /// Builds the creature described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::Mesh`] if the mesh cannot be generated.
    pub fn new(config: &Config) -> Result<Self, LabError> {
        let params = params_from_config(config).sanitized();
        let traits = parse_traits(config.generation.traits.iter().map(String::as_str));
        let options = mesh_options_from_config(config, &params);
        Self::build(params, traits, config.generation.health, options)
    }

    fn build(
        params: GenerationParams,
        traits: Vec<TraitId>,
        health: f32,
        options: MeshOptions,
    ) -> Result<Self, LabError> {
        let blueprint = generate_blueprint(&params, &traits);
        if let Err(err) = blueprint.skeleton.validate() {
            tracing::warn!(%err, "generated skeleton breaks the tree invariant");
        }
        let current = apply_damage(&blueprint.skeleton, health);
        let (geometry, mesh_stats) =
            generate_mesh_with_stats(current.segments(), &options, health_fraction(health))?;

        Ok(Self {
            params,
            traits,
            health,
            options,
            blueprint,
            current,
            geometry,
            mesh_stats,
        })
    }

    /// Rebuilds blueprint, skeleton and mesh for new inputs at the current health.
    ///
    /// On error the previous creature is kept.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::Mesh`] if the mesh cannot be generated.
    pub fn regenerate(
        &mut self,
        params: GenerationParams,
        traits: &[TraitId],
    ) -> Result<(), LabError> {
        let params = params.sanitized();
        let options = MeshOptions {
            resolution: params.resolution,
            smoothness: params.smoothness,
            seed: params.seed,
            ..self.options.clone()
        };
        *self = Self::build(params, traits.to_vec(), self.health, options)?;
        Ok(())
    }

    /// Re-derives the damaged skeleton from the blueprint and rebuilds the mesh.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::Mesh`] if the mesh cannot be generated; the
    /// previous skeleton and mesh are kept.
    pub fn set_health(&mut self, health_percent: f32) -> Result<(), LabError> {
        let current = apply_damage(&self.blueprint.skeleton, health_percent);
        let (geometry, mesh_stats) = generate_mesh_with_stats(
            current.segments(),
            &self.options,
            health_fraction(health_percent),
        )?;
        self.health = health_percent;
        self.current = current;
        self.geometry = geometry;
        self.mesh_stats = mesh_stats;
        tracing::debug!(health = health_percent, "health updated");
        Ok(())
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn traits(&self) -> &[TraitId] {
        &self.traits
    }

    /// Health percentage last applied.
    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn blueprint(&self) -> &SkeletonBlueprint {
        &self.blueprint
    }

    pub fn phenotype(&self) -> &Phenotype {
        &self.blueprint.phenotype
    }

    pub fn modifiers(&self) -> &Modifiers {
        &self.blueprint.modifiers
    }

    /// Segments of the damaged skeleton.
    pub fn segments(&self) -> &[Segment] {
        self.current.segments()
    }

    /// Rest pose of the undamaged skeleton.
    pub fn bind_pose(&self) -> Vec<Bone> {
        self.blueprint.skeleton.bind_pose()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn stats(&self) -> LabStats {
        LabStats {
            nodes: self.current.len(),
            triangles: self.geometry.triangle_count(),
            vertices: self.geometry.vertex_count(),
            material_groups: self.geometry.groups.len(),
            placeholder: self.geometry.is_placeholder,
            mesh: self.mesh_stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(seed: i64) -> Config {
        let mut config = Config::default();
        config.generation.seed = seed;
        config.generation.resolution = 24;
        config
    }

    #[test]
    fn test_new_builds_everything() {
        let lab = CreatureLab::new(&small_config(123)).unwrap();
        let stats = lab.stats();
        assert_eq!(stats.nodes, lab.blueprint().skeleton.len());
        assert!(stats.triangles > 0);
        assert!(!stats.placeholder);
        assert_eq!(lab.bind_pose().len(), stats.nodes);
    }

    #[test]
    fn test_config_traits_are_parsed_leniently() {
        let mut config = small_config(5);
        config.generation.traits = vec![
            "shield".to_string(),
            "wings".to_string(),
            "shield".to_string(),
        ];
        let lab = CreatureLab::new(&config).unwrap();
        assert_eq!(lab.traits(), &[TraitId::Shield]);
    }

    #[test]
    fn test_set_health_never_compounds() {
        let mut lab = CreatureLab::new(&small_config(42)).unwrap();
        let blueprint_radius = lab.blueprint().skeleton[0].radius;
        lab.set_health(50.0).unwrap();
        lab.set_health(50.0).unwrap();
        assert_eq!(lab.segments()[0].radius, blueprint_radius * 0.5);
        lab.set_health(100.0).unwrap();
        assert_eq!(lab.segments()[0].radius, blueprint_radius);
    }

    #[test]
    fn test_zero_health_gives_placeholder() {
        let mut lab = CreatureLab::new(&small_config(42)).unwrap();
        lab.set_health(0.0).unwrap();
        assert!(lab.stats().placeholder);
        assert!(lab.stats().triangles > 0);
        assert_ne!(lab.blueprint().skeleton[0].radius, 0.0);
    }

    #[test]
    fn test_regenerate_replaces_creature_and_keeps_health() {
        let mut lab = CreatureLab::new(&small_config(1)).unwrap();
        lab.set_health(70.0).unwrap();
        let params = GenerationParams {
            seed: 2,
            resolution: 24,
            ..Default::default()
        };
        lab.regenerate(params, &[TraitId::Clone]).unwrap();
        assert_eq!(lab.params().seed, 2);
        assert_eq!(lab.traits(), &[TraitId::Clone]);
        assert_eq!(lab.health(), 70.0);

        let fresh = CreatureLab::new(&{
            let mut c = small_config(2);
            c.generation.traits = vec!["clone".to_string()];
            c.generation.health = 70.0;
            c
        })
        .unwrap();
        assert_eq!(lab.segments(), fresh.segments());
        assert_eq!(lab.geometry(), fresh.geometry());
    }

    #[test]
    fn test_regenerate_sanitizes_resolution() {
        let mut lab = CreatureLab::new(&small_config(3)).unwrap();
        let params = GenerationParams {
            seed: 3,
            resolution: 0,
            ..Default::default()
        };
        lab.regenerate(params, &[]).unwrap();
        assert_eq!(lab.params().resolution, 1);
        assert_eq!(lab.stats().mesh.grid_dims.max_element(), 1);
        assert!(lab.geometry().is_placeholder);
        assert!(!lab.geometry().is_empty());
    }

    #[test]
    fn test_mesh_config_flows_into_options() {
        let mut config = small_config(4);
        config.mesh.material_assignment = MaterialMode::Scattered;
        config.mesh.narrow_blend_factor = 0.5;
        let params = params_from_config(&config);
        let options = mesh_options_from_config(&config, &params);
        assert_eq!(options.assignment, MaterialAssignment::Scattered);
        assert_eq!(options.blend.narrow_factor, 0.5);
        assert_eq!(options.resolution, 24);
        assert_eq!(options.material_count, MATERIAL_COUNT);
    }
}
