//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Per-user config directory, `None` when the platform has none.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("creature-lab"))
}

/// Top-level creature lab configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Creature generation inputs.
    pub generation: GenerationConfig,
    /// Surface mesh settings.
    pub mesh: MeshConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Inputs for one creature build.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    /// Creature seed.
    pub seed: i64,
    /// Carried through for the animation layer; unused by generation.
    pub gravity: f32,
    /// Voxel cells along the longest axis of the creature's bounds.
    pub resolution: u32,
    /// Smooth-union width between segments.
    pub smoothness: f32,
    /// Health percentage in `[0, 100]`.
    pub health: f32,
    /// Active trait names; unknown names are ignored.
    pub traits: Vec<String>,
}

/// How mesh faces are sorted into material groups.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum MaterialMode {
    /// One material per owning segment.
    #[default]
    ByOwner,
    /// Seeded per-face scatter across all materials.
    Scattered,
}

/// Surface mesh configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MeshConfig {
    /// World units to texture units.
    pub uv_scale: f32,
    /// Blend width multiplier for extremities and deep chain segments.
    pub narrow_blend_factor: f32,
    /// Chain index from which segments blend narrowly.
    pub narrow_chain_index: u32,
    /// Face to material assignment.
    pub material_assignment: MaterialMode,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Print every segment after generation.
    pub print_segments: bool,
}

// --- Default implementations ---

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: 123,
            gravity: 1.0,
            resolution: 50,
            smoothness: 0.4,
            health: 100.0,
            traits: Vec::new(),
        }
    }
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            uv_scale: 0.5,
            narrow_blend_factor: 0.3,
            narrow_chain_index: 2,
            material_assignment: MaterialMode::ByOwner,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            print_segments: false,
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = read_config(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path,
            source,
        })?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let new_config = read_config(&config_path)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
