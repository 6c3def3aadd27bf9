//! Creature lab: a session holding one generated creature, and its JSON export.

pub mod error;
pub mod export;
pub mod session;

pub use error::LabError;
pub use export::{CreatureExport, to_json, write_json};
pub use session::{CreatureLab, LabStats, mesh_options_from_config, params_from_config};
