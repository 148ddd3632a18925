use crate::app::commands::Query;
use crate::app::render::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "dinosaur-facts")]
#[command(about = "Query facts about dinosaurs")]
pub struct CliConfig {
    /// JSON dataset to query instead of the embedded one
    #[arg(long, global = true)]
    pub data: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Output format (overrides the config file)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the longest dinosaur, in feet
    Longest,

    /// Describe the dinosaur with the given id
    Describe { id: String },

    /// List dinosaurs alive the given number of millions of years ago
    Alive {
        #[arg(allow_negative_numbers = true)]
        mya: f64,

        /// Field to show for each dinosaur instead of its id
        #[arg(short, long)]
        key: Option<String>,
    },
}

impl From<Command> for Query {
    fn from(command: Command) -> Self {
        match command {
            Command::Longest => Query::Longest,
            Command::Describe { id } => Query::Describe { id },
            Command::Alive { mya, key } => Query::Alive { mya, key },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_alive_with_key() {
        let config =
            CliConfig::try_parse_from(["dinosaur-facts", "alive", "65", "--key", "name"]).unwrap();

        match config.command {
            Command::Alive { mya, key } => {
                assert_eq!(mya, 65.0);
                assert_eq!(key.as_deref(), Some("name"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let config = CliConfig::try_parse_from([
            "dinosaur-facts",
            "describe",
            "WHQcpcOj0G",
            "--format",
            "json",
            "--data",
            "dinos.json",
        ])
        .unwrap();

        assert_eq!(config.format, Some(OutputFormat::Json));
        assert_eq!(config.data.as_deref(), Some("dinos.json"));
        assert!(matches!(config.command, Command::Describe { ref id } if id == "WHQcpcOj0G"));
    }

    #[test]
    fn test_command_into_query() {
        let config = CliConfig::try_parse_from(["dinosaur-facts", "longest"]).unwrap();
        assert_eq!(Query::from(config.command), Query::Longest);
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(CliConfig::try_parse_from(["dinosaur-facts", "--format", "xml", "longest"]).is_err());
    }
}
