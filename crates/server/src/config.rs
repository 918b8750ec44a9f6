//! Server configuration

/// Server configuration loaded from environment variables.
///
/// Provider API keys are read once at startup and injected into the
/// respective clients; nothing reads the process environment at request time.
/// A missing key disables that provider's endpoint, which then answers every
/// invocation with a configuration error.
pub struct Config {
    pub bind_address: String,
    pub cors_origins: Vec<String>,
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
        }
    }
}
