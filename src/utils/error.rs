use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopfrontError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Workload error at slice [{start}, {end}): {message}")]
    WorkloadError {
        start: u64,
        end: u64,
        message: String,
    },

    #[error("Rendering error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ShopfrontError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ShopfrontError::ApiError(_) => ErrorSeverity::Medium,
            ShopfrontError::IoError(_) => ErrorSeverity::Critical,
            ShopfrontError::SerializationError(_) => ErrorSeverity::High,
            ShopfrontError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            ShopfrontError::WorkloadError { .. } => ErrorSeverity::High,
            ShopfrontError::RenderError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ShopfrontError::ApiError(_) => {
                "Check the API endpoint URL and network connectivity".to_string()
            }
            ShopfrontError::IoError(_) => {
                "Check that the output path exists and is writable".to_string()
            }
            ShopfrontError::SerializationError(_) => {
                "The API returned a payload that does not match the product schema".to_string()
            }
            ShopfrontError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' argument and try again", field)
            }
            ShopfrontError::WorkloadError { .. } => {
                "The chunked workload failed; no slices are retried".to_string()
            }
            ShopfrontError::RenderError { .. } => {
                "Rendering failed; check the product data".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ShopfrontError::ApiError(_) => "Could not reach the product API".to_string(),
            ShopfrontError::IoError(_) => "Could not write the rendered page".to_string(),
            ShopfrontError::SerializationError(_) => {
                "The product list could not be decoded".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShopfrontError>;
