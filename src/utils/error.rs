use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("No response registered for path: {path}")]
    NotFound { path: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Server returned HTTP {status} for path: {path}")]
    HttpStatus { path: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lookup,
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FixtureError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FixtureError::NotFound { .. } => ErrorCategory::Lookup,
            FixtureError::ApiError(_) | FixtureError::HttpStatus { .. } => ErrorCategory::Network,
            FixtureError::SerializationError(_) => ErrorCategory::Data,
            FixtureError::ConfigValidationError { .. }
            | FixtureError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            FixtureError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FixtureError::NotFound { .. } => ErrorSeverity::Low,
            FixtureError::ApiError(_) => ErrorSeverity::Medium,
            // 5xx 可重試，4xx 代表請求本身有問題
            FixtureError::HttpStatus { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            FixtureError::HttpStatus { .. } => ErrorSeverity::High,
            FixtureError::SerializationError(_) => ErrorSeverity::High,
            FixtureError::ConfigValidationError { .. }
            | FixtureError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            FixtureError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FixtureError::NotFound { .. } => {
                "Run with --list to see the registered endpoint paths".to_string()
            }
            FixtureError::ApiError(_) => {
                "Check that the server is reachable and retry the request".to_string()
            }
            FixtureError::HttpStatus { status, .. } if *status >= 500 => {
                "The server failed to answer; retry later".to_string()
            }
            FixtureError::HttpStatus { .. } => {
                "Check the base URL and the endpoint path".to_string()
            }
            FixtureError::SerializationError(_) => {
                "The response body is not the expected JSON document".to_string()
            }
            FixtureError::ConfigValidationError { field, .. }
            | FixtureError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting in your configuration", field)
            }
            FixtureError::IoError(_) => "Check file paths and permissions".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Lookup => format!("Unknown endpoint: {}", self),
            ErrorCategory::Network => format!("Could not fetch datatypes: {}", self),
            ErrorCategory::Data => format!("Invalid datatypes payload: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, FixtureError>;
