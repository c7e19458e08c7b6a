use hindi_tutor::ExtractError;

/// Error types for the tutor pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TutorError {
    /// Transport failure or unusable reply from the generation service
    UpstreamError(String),
    /// The reply text holds no usable JSON object
    MalformedResponseError(String),
    /// Missing or invalid configuration
    ConfigError(String),
}

impl std::fmt::Display for TutorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TutorError::UpstreamError(msg) => write!(f, "Upstream error: {}", msg),
            TutorError::MalformedResponseError(msg) => write!(f, "Malformed response: {}", msg),
            TutorError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for TutorError {}

impl From<reqwest::Error> for TutorError {
    fn from(e: reqwest::Error) -> Self {
        TutorError::UpstreamError(e.to_string())
    }
}

impl From<serde_json::Error> for TutorError {
    fn from(e: serde_json::Error) -> Self {
        TutorError::MalformedResponseError(e.to_string())
    }
}

impl From<ExtractError> for TutorError {
    fn from(e: ExtractError) -> Self {
        TutorError::MalformedResponseError(e.to_string())
    }
}

/// Result type for tutor operations
pub type TutorResult<T> = Result<T, TutorError>;
