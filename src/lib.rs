pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{EmbeddedDataset, JsonFileDataset};
pub use app::{OutputFormat, Query, QueryEngine, Settings};
pub use config::TomlConfig;
pub use crate::core::{
    dinosaur_description, dinosaurs_alive_at, longest_dinosaur, DatasetSource, DinosaurRecord,
    Field, Mya, METERS_TO_FEET,
};
pub use utils::error::{DinoError, Result};
