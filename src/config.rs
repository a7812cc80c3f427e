use thiserror::Error;

/// Model sent with every completion request.
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";

/// Instruction used when the payload carries no `promptOverride`.
pub const DEFAULT_PROMPT: &str = "请根据以下数据产出一句简短中文推荐理由。";

// ============================================================================
// Config
// ============================================================================

/// Process-wide configuration, built once at startup and immutable after.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the LLM provider. Startup fails without it.
    pub api_key: String,
    pub base_url: String,
    pub host: String,
    pub port: u16,
    pub request_timeout_seconds: u64,
    pub model: String,
    pub default_prompt: String,
}

impl Config {
    /// Build the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an injected variable lookup.
    ///
    /// Tests pass a closure over a map instead of mutating process env.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = var("LLM_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let port = match var("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => default_port(),
        };

        let request_timeout_seconds = match var("REQUEST_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout { value: raw })?,
            None => default_request_timeout(),
        };

        Ok(Self {
            api_key,
            base_url: var("LLM_BASE_URL").unwrap_or_else(default_base_url),
            host: var("HOST").unwrap_or_else(default_host),
            port,
            request_timeout_seconds,
            model: DEFAULT_MODEL.to_string(),
            default_prompt: DEFAULT_PROMPT.to_string(),
        })
    }
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_request_timeout() -> u64 {
    300
}

// ============================================================================
// ConfigError
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("LLM_API_KEY is required")]
    MissingApiKey,

    #[error("PORT is not a valid port number: {value}")]
    InvalidPort { value: String },

    #[error("REQUEST_TIMEOUT_SECONDS is not a valid duration: {value}")]
    InvalidTimeout { value: String },
}

// ============================================================================
// Tests
// ============================================================================
