use anyhow::{bail, Context, Result};

use crate::generation::enhancer::FallbackPolicy;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` disables AI enhancement entirely. The `use_ai` toggle then has no effect.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub llm_timeout_secs: u64,
    pub fallback_policy: FallbackPolicy,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_base_url: optional_env("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            openai_model: optional_env("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            llm_timeout_secs: parse_timeout(optional_env("LLM_TIMEOUT_SECS").as_deref())?,
            fallback_policy: parse_policy(optional_env("AI_FALLBACK_POLICY").as_deref())?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads a variable, treating unset and blank the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_timeout(raw: Option<&str>) -> Result<u64> {
    let secs = raw
        .unwrap_or("120")
        .parse::<u64>()
        .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?;
    if secs == 0 {
        bail!("LLM_TIMEOUT_SECS must be at least 1 second");
    }
    Ok(secs)
}

fn parse_policy(raw: Option<&str>) -> Result<FallbackPolicy> {
    match raw.map(|s| s.to_ascii_lowercase()).as_deref() {
        None | Some("per_document") => Ok(FallbackPolicy::PerDocument),
        Some("stop_on_first_failure") => Ok(FallbackPolicy::StopOnFirstFailure),
        Some(other) => bail!(
            "AI_FALLBACK_POLICY must be 'per_document' or 'stop_on_first_failure', got '{other}'"
        ),
    }
}
