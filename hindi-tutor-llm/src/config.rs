//! Configuration read from the process environment
//!
//! | Variable | Default |
//! |----------|---------|
//! | `GROQ_API_KEY` | required |
//! | `GROQ_BASE_URL` | `https://api.groq.com/openai/v1` |
//! | `GROQ_MODEL` | `llama3-70b-8192` |
//! | `HINDI_TUTOR_EXTRACTION` | `balanced` |
//! | `HINDI_TUTOR_TIMEOUT_SECS` | none |

use crate::error::{TutorError, TutorResult};
use crate::generator::GenerationParams;
use hindi_tutor::Extraction;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";

#[derive(Clone)]
pub struct TutorConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub extraction: Extraction,
    /// No timeout when `None`; the call waits for the upstream indefinitely
    pub timeout: Option<Duration>,
    pub params: GenerationParams,
}

impl TutorConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            extraction: Extraction::default(),
            timeout: None,
            params: GenerationParams::default(),
        }
    }

    pub fn from_env() -> TutorResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> TutorResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values are treated as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("GROQ_API_KEY").ok_or_else(|| {
            TutorError::ConfigError("GROQ_API_KEY environment variable not set".to_string())
        })?;

        let mut config = Self::new(api_key);

        if let Some(base_url) = get("GROQ_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(model) = get("GROQ_MODEL") {
            config.model = model;
        }
        if let Some(mode) = get("HINDI_TUTOR_EXTRACTION") {
            config.extraction = mode.parse().map_err(TutorError::ConfigError)?;
        }
        if let Some(secs) = get("HINDI_TUTOR_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                TutorError::ConfigError(format!(
                    "HINDI_TUTOR_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    secs
                ))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

impl std::fmt::Debug for TutorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TutorConfig")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("extraction", &self.extraction)
            .field("timeout", &self.timeout)
            .field("params", &self.params)
            .finish()
    }
}
