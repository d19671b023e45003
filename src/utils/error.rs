use thiserror::Error;

#[derive(Error, Debug)]
pub enum SocialGraphError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SocialGraphError {
    /// Short message for terminal output, without transport internals.
    pub fn user_friendly_message(&self) -> String {
        match self {
            SocialGraphError::ApiError(e) if e.is_connect() => {
                "Could not reach the graph API. Is the backend running?".to_string()
            }
            SocialGraphError::ApiError(e) if e.is_decode() => {
                "The graph API returned a response in an unexpected format.".to_string()
            }
            SocialGraphError::ApiError(_) => "Request to the graph API failed.".to_string(),
            SocialGraphError::UnexpectedStatus { status, url } => {
                format!("The graph API answered {} for {}", status, url)
            }
            SocialGraphError::UrlError(e) => format!("Invalid URL: {}", e),
            SocialGraphError::CsvError(_) | SocialGraphError::IoError(_) => {
                "Could not write export files.".to_string()
            }
            SocialGraphError::SerializationError(_) => {
                "Could not encode or decode JSON data.".to_string()
            }
            SocialGraphError::ConfigError { message } => format!("Configuration problem: {}", message),
            SocialGraphError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SocialGraphError>;
