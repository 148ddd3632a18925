//! The three dinosaur queries. Each takes the whole collection and never
//! mutates it.

use crate::core::projection::project;
use crate::domain::model::DinosaurRecord;
use serde_json::Value;
use std::collections::HashMap;

pub const METERS_TO_FEET: f64 = 3.281;

/// Returns `{ name: length_in_feet }` for the longest dinosaur.
///
/// Ties keep the first record seen. The map is empty when the collection is
/// empty or no record has a positive length.
pub fn longest_dinosaur(dinosaurs: &[DinosaurRecord]) -> HashMap<String, f64> {
    let mut longest: Option<&DinosaurRecord> = None;
    let mut longest_length = 0.0;

    for dinosaur in dinosaurs {
        if dinosaur.length_in_meters > longest_length {
            longest = Some(dinosaur);
            longest_length = dinosaur.length_in_meters;
        }
    }

    let mut result = HashMap::new();
    if let Some(dinosaur) = longest {
        tracing::debug!("Longest dinosaur is {} ({} m)", dinosaur.name, longest_length);
        result.insert(dinosaur.name.clone(), longest_length * METERS_TO_FEET);
    } else {
        tracing::debug!("No dinosaur with a positive length among {}", dinosaurs.len());
    }
    result
}

/// Formats a two-line description of the dinosaur with the given id, or a
/// not-found message.
pub fn dinosaur_description(dinosaurs: &[DinosaurRecord], id: &str) -> String {
    match dinosaurs.iter().find(|dinosaur| dinosaur.id == id) {
        Some(dino) => format!(
            "{} ({})\n{} It lived in the {} period, over {} million years ago.",
            dino.name,
            dino.pronunciation,
            dino.info,
            dino.period,
            dino.mya.min()
        ),
        None => {
            tracing::debug!("No dinosaur with id '{}'", id);
            format!("A dinosaur with an ID of '{}' cannot be found.", id)
        }
    }
}

/// Lists the dinosaurs alive `mya` million years ago, projecting `key` (or the
/// id) out of each match in collection order.
pub fn dinosaurs_alive_at(dinosaurs: &[DinosaurRecord], mya: f64, key: Option<&str>) -> Vec<Value> {
    let alive: Vec<Value> = dinosaurs
        .iter()
        .filter(|dinosaur| dinosaur.mya.contains(mya))
        .map(|dinosaur| project(dinosaur, key))
        .collect();

    tracing::debug!("{} dinosaurs alive {} million years ago", alive.len(), mya);
    alive
}
