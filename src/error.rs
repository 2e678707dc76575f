// src/error.rs
// Standardized error types for eleme-fun

use thiserror::Error;

/// Main error type for the eleme-fun library
#[derive(Error, Debug)]
pub enum FunError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no API key configured for provider {0}")]
    MissingApiKey(&'static str),

    #[error("{provider} API error {status}: {body}")]
    ProviderStatus {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} is busy")]
    Busy(&'static str),

    #[error("not found: {0}")]
    NotFound(String),
}

/// Convenience type alias for Result using FunError
pub type Result<T> = std::result::Result<T, FunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_status_display() {
        let err = FunError::ProviderStatus {
            provider: "moonshot",
            status: 429,
            body: "rate limited".to_string(),
        };
        assert_eq!(err.to_string(), "moonshot API error 429: rate limited");
    }

    #[test]
    fn test_busy_display() {
        assert_eq!(FunError::Busy("joke widget").to_string(), "joke widget is busy");
    }
}
