use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Predictor request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Prediction failed: {message}")]
    PredictionError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Prediction,
    System,
}

impl AppError {
    pub fn prediction(message: impl Into<String>) -> Self {
        AppError::PredictionError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::ConfigError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::MissingConfigError { .. }
            | AppError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            AppError::HttpError(_) => ErrorCategory::Network,
            AppError::PredictionError { .. } | AppError::SerializationError(_) => {
                ErrorCategory::Prediction
            }
            AppError::IoError(_) => ErrorCategory::System,
        }
    }

    /// 給操作人員看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            AppError::MissingConfigError { field } => {
                format!("Setting '{}' is required but was not provided", field)
            }
            AppError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            AppError::ConfigError { message } => format!("Configuration problem: {}", message),
            AppError::HttpError(_) => "Could not reach the prediction model service".to_string(),
            AppError::PredictionError { message } => format!("Prediction failed: {}", message),
            AppError::SerializationError(_) => {
                "Received malformed data from the prediction model".to_string()
            }
            AppError::IoError(e) => format!("File system or network error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::MissingConfigError { .. } => {
                "Pass the value on the command line or set it in the TOML config file"
            }
            AppError::InvalidConfigValueError { .. }
            | AppError::ConfigValidationError { .. }
            | AppError::ConfigError { .. } => "Check the configuration file and command-line flags",
            AppError::HttpError(_) => {
                "Make sure the model service is running and the predictor endpoint is correct"
            }
            AppError::PredictionError { .. } | AppError::SerializationError(_) => {
                "Check the model service logs"
            }
            AppError::IoError(_) => {
                "Check that the address is free and the static directory is readable"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let missing = AppError::MissingConfigError {
            field: "predictor.endpoint".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Configuration);
        assert!(missing
            .user_friendly_message()
            .contains("predictor.endpoint"));

        let prediction = AppError::prediction("model unavailable");
        assert_eq!(prediction.category(), ErrorCategory::Prediction);
        assert_eq!(prediction.to_string(), "Prediction failed: model unavailable");

        let io = AppError::from(std::io::Error::other("boom"));
        assert_eq!(io.category(), ErrorCategory::System);
    }
}
