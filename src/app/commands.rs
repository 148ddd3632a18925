use crate::app::render::{render_description, render_longest, render_values, OutputFormat};
use crate::config::TomlConfig;
use crate::core::{dinosaur_description, dinosaurs_alive_at, longest_dinosaur};
use crate::domain::model::DinosaurRecord;
use crate::domain::ports::DatasetSource;
use crate::utils::error::Result;
use crate::utils::validation::validate_finite;

/// One of the three dinosaur questions.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Longest,
    Describe { id: String },
    Alive { mya: f64, key: Option<String> },
}

/// Effective settings after merging flags over the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub dataset_path: Option<String>,
    pub format: OutputFormat,
    pub default_key: Option<String>,
}

impl Settings {
    /// Flags win over the config file, which wins over defaults.
    pub fn resolve(
        data: Option<String>,
        format: Option<OutputFormat>,
        config: Option<&TomlConfig>,
    ) -> Self {
        Self {
            dataset_path: data.or_else(|| config.and_then(|c| c.dataset_path().map(String::from))),
            format: format
                .or_else(|| config.and_then(TomlConfig::output_format))
                .unwrap_or_default(),
            default_key: config.and_then(|c| c.default_key().map(String::from)),
        }
    }
}

pub struct QueryEngine {
    source: Box<dyn DatasetSource>,
    settings: Settings,
}

impl QueryEngine {
    pub fn new(source: Box<dyn DatasetSource>, settings: Settings) -> Self {
        Self { source, settings }
    }

    /// Loads the dataset, answers `query` and renders the answer.
    pub fn run(&self, query: &Query) -> Result<String> {
        tracing::info!("Loading dinosaurs from {}", self.source.describe());
        let dinosaurs = self.source.load()?;
        tracing::info!("Loaded {} dinosaurs", dinosaurs.len());

        answer(&dinosaurs, query, &self.settings)
    }
}

pub fn answer(dinosaurs: &[DinosaurRecord], query: &Query, settings: &Settings) -> Result<String> {
    match query {
        Query::Longest => render_longest(&longest_dinosaur(dinosaurs), settings.format),
        Query::Describe { id } => {
            render_description(&dinosaur_description(dinosaurs, id), settings.format)
        }
        Query::Alive { mya, key } => {
            validate_finite("mya", *mya)?;
            let key = key.as_deref().or(settings.default_key.as_deref());
            render_values(&dinosaurs_alive_at(dinosaurs, *mya, key), settings.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::EmbeddedDataset;

    #[test]
    fn test_resolve_prefers_flags() {
        let config = TomlConfig::from_toml_str(
            r#"
[dataset]
path = "from-config.json"

[output]
format = "csv"
default_key = "name"
"#,
        )
        .unwrap();

        let settings = Settings::resolve(
            Some("from-flag.json".to_string()),
            Some(OutputFormat::Json),
            Some(&config),
        );
        assert_eq!(settings.dataset_path.as_deref(), Some("from-flag.json"));
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.default_key.as_deref(), Some("name"));

        let settings = Settings::resolve(None, None, Some(&config));
        assert_eq!(settings.dataset_path.as_deref(), Some("from-config.json"));
        assert_eq!(settings.format, OutputFormat::Csv);

        assert_eq!(Settings::resolve(None, None, None), Settings::default());
    }

    #[test]
    fn test_engine_runs_against_embedded_dataset() {
        let engine = QueryEngine::new(Box::new(EmbeddedDataset), Settings::default());

        let output = engine
            .run(&Query::Alive {
                mya: 65.0,
                key: Some("name".to_string()),
            })
            .unwrap();
        assert_eq!(output, "Dracorex");
    }

    #[test]
    fn test_default_key_applies_when_no_key_given() {
        let dinosaurs = EmbeddedDataset.load().unwrap();
        let settings = Settings {
            default_key: Some("name".to_string()),
            ..Settings::default()
        };

        let output = answer(&dinosaurs, &Query::Alive { mya: 65.0, key: None }, &settings).unwrap();
        assert_eq!(output, "Dracorex");

        let output = answer(
            &dinosaurs,
            &Query::Alive {
                mya: 65.0,
                key: Some("dinosaurId".to_string()),
            },
            &settings,
        )
        .unwrap();
        assert_eq!(output, "WHQcpcOj0G");
    }

    #[test]
    fn test_whole_numbers_render_like_the_description() {
        let dinosaurs = EmbeddedDataset.load().unwrap();
        let settings = Settings::default();

        let mya = answer(
            &dinosaurs,
            &Query::Alive {
                mya: 65.0,
                key: Some("mya".to_string()),
            },
            &settings,
        )
        .unwrap();
        assert_eq!(mya, "[65]");

        let description = answer(
            &dinosaurs,
            &Query::Describe {
                id: "WHQcpcOj0G".to_string(),
            },
            &settings,
        )
        .unwrap();
        assert!(description.ends_with("over 65 million years ago."));
    }

    #[test]
    fn test_non_finite_mya_is_rejected() {
        let result = answer(
            &[],
            &Query::Alive {
                mya: f64::NAN,
                key: None,
            },
            &Settings::default(),
        );
        assert!(result.is_err());
    }
}
