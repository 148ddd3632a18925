// Adapters layer: concrete dataset sources.

use crate::domain::model::DinosaurRecord;
use crate::domain::ports::DatasetSource;
use crate::utils::error::{DinoError, Result};
use std::fs;
use std::path::PathBuf;

const EMBEDDED_DATA: &str = include_str!("../../data/dinosaurs.json");

/// The static dataset shipped with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDataset;

impl DatasetSource for EmbeddedDataset {
    fn load(&self) -> Result<Vec<DinosaurRecord>> {
        let dinosaurs = parse_dataset(EMBEDDED_DATA)?;
        tracing::debug!("Loaded {} dinosaurs from embedded dataset", dinosaurs.len());
        Ok(dinosaurs)
    }

    fn describe(&self) -> String {
        "embedded dataset".to_string()
    }
}

/// A JSON array of records read from disk.
#[derive(Debug, Clone)]
pub struct JsonFileDataset {
    path: PathBuf,
}

impl JsonFileDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for JsonFileDataset {
    fn load(&self) -> Result<Vec<DinosaurRecord>> {
        let content = fs::read_to_string(&self.path)?;
        let dinosaurs = parse_dataset(&content)?;
        tracing::debug!(
            "Loaded {} dinosaurs from {}",
            dinosaurs.len(),
            self.path.display()
        );
        Ok(dinosaurs)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Picks the file source when a path is configured, the embedded one otherwise.
pub fn dataset_from_path(path: Option<&str>) -> Box<dyn DatasetSource> {
    match path {
        Some(path) => Box::new(JsonFileDataset::new(path)),
        None => Box::new(EmbeddedDataset),
    }
}

fn parse_dataset(content: &str) -> Result<Vec<DinosaurRecord>> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if !value.is_array() {
        return Err(DinoError::DatasetError {
            message: "expected a JSON array of dinosaur records".to_string(),
        });
    }
    Ok(serde_json::from_value(value)?)
}
