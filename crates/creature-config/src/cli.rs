//! Command-line argument parsing for the creature lab.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Creature lab command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "creature-lab", about = "Procedural creature skeleton and mesh generator")]
pub struct CliArgs {
    /// Creature seed.
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Active trait; repeat for several. Replaces the configured list.
    #[arg(long = "trait", value_name = "NAME")]
    pub traits: Vec<String>,

    /// Health percentage (0-100).
    #[arg(long)]
    pub health: Option<f32>,

    /// Voxel cells along the creature's longest axis.
    #[arg(long)]
    pub resolution: Option<u32>,

    /// Smooth-union width between segments.
    #[arg(long)]
    pub smoothness: Option<f32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the generated creature as JSON to this path.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.generation.seed = seed;
        }
        if !args.traits.is_empty() {
            self.generation.traits = args.traits.clone();
        }
        if let Some(health) = args.health {
            self.generation.health = health;
        }
        if let Some(resolution) = args.resolution {
            self.generation.resolution = resolution;
        }
        if let Some(smoothness) = args.smoothness {
            self.generation.smoothness = smoothness;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
