use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Data,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LookupError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LookupError::ApiError(_) => ErrorCategory::Network,
            LookupError::IoError(_) => ErrorCategory::Io,
            LookupError::SerializationError(_) => ErrorCategory::Data,
            LookupError::UrlError(_)
            | LookupError::ConfigError { .. }
            | LookupError::ConfigValidationError { .. }
            | LookupError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            LookupError::ValidationError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 輸入錯誤只影響本次查詢
            LookupError::ValidationError { .. } => ErrorSeverity::Low,
            LookupError::ApiError(_) => ErrorSeverity::Medium,
            LookupError::SerializationError(_) => ErrorSeverity::High,
            LookupError::IoError(_) => ErrorSeverity::Critical,
            LookupError::UrlError(_)
            | LookupError::ConfigError { .. }
            | LookupError::ConfigValidationError { .. }
            | LookupError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the network connection and the proxy relay, then try again",
            ErrorCategory::Io => "Check that the file exists and is readable",
            ErrorCategory::Data => "The API returned an unexpected payload; check the API endpoint",
            ErrorCategory::Configuration => "Fix the configuration value and run again",
            ErrorCategory::Input => "Enter a postal code and try again",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LookupError::ApiError(_) => "Could not reach the postal code service".to_string(),
            LookupError::IoError(e) => format!("File access failed: {}", e),
            LookupError::SerializationError(_) => {
                "The postal code service returned an unreadable response".to_string()
            }
            LookupError::UrlError(e) => format!("Invalid URL: {}", e),
            LookupError::ConfigError { message } => format!("Configuration problem: {}", message),
            LookupError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            LookupError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            LookupError::ValidationError { message } => message.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
