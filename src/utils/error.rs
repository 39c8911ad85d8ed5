use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Configuration error in {entity}: `{field}` {reason}")]
    ConfigError {
        entity: String,
        field: String,
        reason: String,
    },

    #[error("Failed to parse {format} portfolio document: {message}")]
    ParseError { format: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl SiteError {
    pub fn config(
        entity: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SiteError::ConfigError {
            entity: entity.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Parse failures count as configuration errors: both mean the portfolio
    /// never reached the renderer.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SiteError::ConfigError { .. } | SiteError::ParseError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::ConfigError {
                entity,
                field,
                reason,
            } => format!("Invalid portfolio: {} has a bad `{}` ({})", entity, field, reason),
            SiteError::ParseError { format, .. } => {
                format!("The portfolio file could not be read as {}", format)
            }
            SiteError::IoError(e) => format!("Could not read or write a file: {}", e),
            SiteError::SerializationError(_) => "Could not serialize the rendered site".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SiteError::ConfigError { .. } => {
                "Fix the named field in the portfolio file and run again"
            }
            SiteError::ParseError { .. } => {
                "Check the file syntax; use a .toml or .json extension to pick the format"
            }
            SiteError::IoError(_) => "Check that the paths exist and are writable",
            SiteError::SerializationError(_) => "Re-run with --verbose and report the failure",
        }
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            1
        } else {
            3
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
