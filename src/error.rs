//! Error types for the Echo Nest API.

use thiserror::Error;

/// Main error type for all Echo Nest operations.
#[derive(Debug, Error)]
pub enum EchonestError {
    /// No API key was supplied.
    #[error("API key is required for Echo Nest API access")]
    MissingApiKey,

    /// Invalid input provided to a client constructor.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid API key or credentials (401/403-class response).
    #[error("Unauthorized: invalid API key or credentials")]
    Unauthorized,

    /// Too many requests - rate limited.
    #[error("Rate limited by the Echo Nest API")]
    RateLimited,

    /// The service reported an error, either via HTTP status or via the
    /// status block inside the response envelope.
    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },

    /// The response envelope did not have the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// HTTP request failed.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for Echo Nest operations.
pub type Result<T> = std::result::Result<T, EchonestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = EchonestError::Api {
            code: 5,
            message: "invalid parameter".to_string(),
        };
        assert_eq!(err.to_string(), "API error 5: invalid parameter");
    }

    #[test]
    fn test_unauthorized_display_mentions_credentials() {
        let err = EchonestError::Unauthorized;
        assert!(err.to_string().contains("credentials"));
    }
}
