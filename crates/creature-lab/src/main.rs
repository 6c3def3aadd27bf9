//! Command-line driver: generates one creature and prints its stats.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p creature-lab -- --seed 7 --trait shield --health 60`.
//! Add `--export creature.json` to write the skeleton and mesh as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use creature_config::{CliArgs, Config, default_config_dir};
use creature_lab::{CreatureLab, LabError, write_json};
use tracing::info;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    creature_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&config, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "creature generation failed");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config, args: &CliArgs) -> Result<(), LabError> {
    let lab = CreatureLab::new(config)?;
    let phenotype = lab.phenotype();
    let stats = lab.stats();

    info!(
        seed = lab.params().seed,
        traits = ?lab.traits(),
        skin = %phenotype.skin_type,
        "creature ready"
    );

    println!("seed:       {}", lab.params().seed);
    println!(
        "traits:     {}",
        lab.traits()
            .iter()
            .map(|t| t.key())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("skin:       {}", phenotype.skin_type);
    println!("health:     {:.0}%", lab.health());
    println!("nodes:      {}", stats.nodes);
    println!("triangles:  {}", stats.triangles);
    println!("vertices:   {}", stats.vertices);
    println!("materials:  {}", stats.material_groups);
    println!(
        "voxels:     {} active in {}x{}x{}",
        stats.mesh.active_voxels,
        stats.mesh.grid_dims.x,
        stats.mesh.grid_dims.y,
        stats.mesh.grid_dims.z
    );
    println!(
        "build time: {:.2} ms",
        stats.mesh.build_time.as_secs_f64() * 1000.0
    );
    if stats.placeholder {
        println!("note:       no solid voxels, placeholder cube emitted");
    }

    if config.debug.print_segments {
        for s in lab.segments() {
            println!(
                "  [{:>2}] {:<12} parent={:<4} r={:.3} {:?}",
                s.id,
                s.name,
                s.parent.map_or_else(|| "-".to_string(), |p| p.to_string()),
                s.radius,
                s.kind
            );
        }
    }

    if let Some(path) = &args.export {
        write_json(path, &lab)?;
        println!("exported:   {}", path.display());
    }

    Ok(())
}
