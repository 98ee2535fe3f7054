use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatusError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for '{field}' ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl StatusError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            StatusError::IoError(_) => "Could not write the status message to standard output".to_string(),
            StatusError::ConfigReadError { path, .. } => format!("Config file '{}' could not be read", path),
            StatusError::ConfigParseError { path, .. } => format!("Config file '{}' is not valid TOML", path),
            StatusError::InvalidConfigValueError { field, reason, .. } => {
                format!("Config field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StatusError::IoError(_) => "Check that standard output is open and not a closed pipe",
            StatusError::ConfigReadError { .. } => "Make sure the file exists and is readable",
            StatusError::ConfigParseError { .. } => "Fix the TOML syntax or remove unknown keys",
            StatusError::InvalidConfigValueError { .. } => "Use a single-line, non-empty value and a port between 1 and 65535",
        }
    }

    /// Process exit code for this failure. Configuration problems exit with 1,
    /// output failures with 3.
    pub fn exit_code(&self) -> i32 {
        match self {
            StatusError::IoError(_) => 3,
            StatusError::ConfigReadError { .. }
            | StatusError::ConfigParseError { .. }
            | StatusError::InvalidConfigValueError { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, StatusError>;
