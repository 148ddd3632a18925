//! Rendering of query results as text, JSON or CSV.

use crate::domain::model::json_number;
use crate::utils::error::{DinoError, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::str::FromStr;

const NO_DINOSAURS: &str = "(no dinosaurs)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["text", "json", "csv"];
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("unsupported output format: {}", other)),
        }
    }
}

pub fn render_longest(longest: &HashMap<String, f64>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            if longest.is_empty() {
                return Ok(NO_DINOSAURS.to_string());
            }
            let lines: Vec<String> = longest
                .iter()
                .map(|(name, feet)| format!("{}: {} ft", name, feet))
                .collect();
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => {
            let object: serde_json::Map<String, Value> = longest
                .iter()
                .map(|(name, feet)| (name.clone(), json_number(*feet)))
                .collect();
            Ok(serde_json::to_string_pretty(&object)?)
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(vec![]);
            writer.write_record(["name", "length_in_feet"])?;
            for (name, feet) in longest {
                writer.write_record([name.as_str(), feet.to_string().as_str()])?;
            }
            finish_csv(writer)
        }
    }
}

pub fn render_description(description: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(description)?),
        OutputFormat::Text | OutputFormat::Csv => Ok(description.to_string()),
    }
}

pub fn render_values(values: &[Value], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            if values.is_empty() {
                return Ok(NO_DINOSAURS.to_string());
            }
            let lines: Vec<String> = values.iter().map(value_to_cell).collect();
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(values)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(vec![]);
            writer.write_record(["value"])?;
            for value in values {
                writer.write_record([value_to_cell(value)])?;
            }
            finish_csv(writer)
        }
    }
}

/// Strings unquoted, everything else in its JSON form.
fn value_to_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().map_err(|e| DinoError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).trim_end().to_string())
}
