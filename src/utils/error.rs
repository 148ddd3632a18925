use thiserror::Error;

#[derive(Error, Debug)]
pub enum DinoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Dataset error: {message}")]
    DatasetError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Dataset,
    Output,
}

impl DinoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DinoError::ConfigError { .. }
            | DinoError::ConfigValidationError { .. }
            | DinoError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DinoError::IoError(_)
            | DinoError::SerializationError(_)
            | DinoError::DatasetError { .. } => ErrorCategory::Dataset,
            DinoError::CsvError(_) => ErrorCategory::Output,
        }
    }

    /// Process exit code used by the binary for this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Dataset => 2,
            ErrorCategory::Output => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DinoError::IoError(e) => format!("Could not read the dataset: {}", e),
            DinoError::SerializationError(e) => {
                format!("The dataset is not a valid list of dinosaurs: {}", e)
            }
            DinoError::CsvError(e) => format!("Could not write CSV output: {}", e),
            DinoError::ConfigError { message } => format!("Configuration problem: {}", message),
            DinoError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            DinoError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
            DinoError::DatasetError { message } => format!("Dataset problem: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the command-line flags and the TOML configuration file"
            }
            ErrorCategory::Dataset => {
                "Make sure the dataset file exists and holds a JSON array of dinosaur records"
            }
            ErrorCategory::Output => "Try another output format such as --format json",
        }
    }
}

pub type Result<T> = std::result::Result<T, DinoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_category() {
        let config = DinoError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config.category(), ErrorCategory::Configuration);
        assert_eq!(config.exit_code(), 1);

        let dataset = DinoError::DatasetError {
            message: "empty".to_string(),
        };
        assert_eq!(dataset.exit_code(), 2);

        let io = DinoError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.category(), ErrorCategory::Dataset);
    }

    #[test]
    fn test_invalid_value_message() {
        let err = DinoError::InvalidConfigValueError {
            field: "output.format".to_string(),
            value: "xml".to_string(),
            reason: "Unsupported format".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value 'xml' for 'output.format': Unsupported format"
        );
        assert!(err.user_friendly_message().contains("xml"));
    }
}
