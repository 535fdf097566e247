use thiserror::Error;

/// Remote suggestion payload related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Malformed suggestions payload: {source}")]
    MalformedPayload {
        #[from]
        source: serde_json::Error,
    },

    #[error("Remote suggestions unavailable: {details}")]
    Unavailable { details: String },
}

/// Main error type for the suggestion components
#[derive(Debug, Error)]
pub enum SuggestionsError {
    #[error("Invalid URL: {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API error: {source}")]
    Api {
        #[from]
        source: ApiError,
    },

    #[error("Configuration error: {details}")]
    Configuration { details: String },
}

impl SuggestionsError {
    pub fn invalid_url(url: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for SuggestionsError {
    fn from(source: serde_json::Error) -> Self {
        ApiError::from(source).into()
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SuggestionsError>;
