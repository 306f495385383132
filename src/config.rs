//! Process configuration, parsed once at startup from CLI flags and
//! environment variables.

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "civic-damage-gateway",
    about = "Gateway service for AI-assisted infrastructure damage assessment",
    version
)]
pub struct Config {
    /// Address to bind the HTTP server on.
    #[arg(long, env = "CDG_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind the HTTP server on.
    #[arg(long, env = "CDG_PORT", default_value_t = 3001)]
    pub port: u16,

    /// API key for the Gemini inference endpoint.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    /// Model used for assessments.
    #[arg(long, env = "CDG_GEMINI_MODEL", default_value = "gemini-2.5-flash")]
    pub gemini_model: String,

    /// Base URL of the inference API. Overridable for proxies and tests.
    #[arg(
        long,
        env = "CDG_GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com"
    )]
    pub gemini_base_url: String,

    /// Upper bound on one inference round-trip, in seconds. On expiry the
    /// request degrades to the fallback assessment.
    #[arg(long, env = "CDG_GEMINI_TIMEOUT_SECS", default_value_t = 30)]
    pub gemini_timeout_secs: u64,

    /// Maximum accepted request body size in bytes. Bounds the in-memory
    /// image since bodies are read fully before processing.
    #[arg(long, env = "CDG_MAX_BODY_BYTES", default_value_t = 8 * 1024 * 1024)]
    pub max_body_bytes: usize,

    /// Log filter in tracing `EnvFilter` syntax.
    #[arg(long, env = "CDG_LOG", default_value = "info")]
    pub log_filter: String,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_defaults() {
        let config =
            Config::try_parse_from(["civic-damage-gateway", "--gemini-api-key", "test-key"])
                .unwrap();
        assert_eq!(config.port, 3001);
        assert_eq!(config.gemini_model, "gemini-2.5-flash");
        assert_eq!(config.gemini_timeout_secs, 30);
        assert_eq!(config.max_body_bytes, 8 * 1024 * 1024);
    }

    #[test]
    fn test_api_key_required() {
        // Only run meaningfully when the env var is absent; the flag form
        // is what the assertion below exercises.
        if std::env::var("GEMINI_API_KEY").is_err() {
            assert!(Config::try_parse_from(["civic-damage-gateway"]).is_err());
        }
    }
}
