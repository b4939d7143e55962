use crate::infrastructure::generator::SamplingConfig;
use crate::infrastructure::{openrouter, replicate};
use fifufa_errors::AppError;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 60;

pub enum LlmProvider {
    Replicate { api_token: String, model: String },
    OpenRouter { api_key: String, model: String },
}

impl LlmProvider {
    /// Human readable, without credentials.
    pub fn describe(&self) -> String {
        match self {
            Self::Replicate { model, .. } => format!("Replicate ({})", model),
            Self::OpenRouter { model, .. } => format!("OpenRouter ({})", model),
        }
    }
}

pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub provider: LlmProvider,
    pub upstream_timeout: Duration,
    pub facts_sampling: SamplingConfig,
    pub topics_sampling: SamplingConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let provider = match var("LLM_PROVIDER").map(|p| p.to_lowercase()).as_deref() {
            Some("replicate") => Self::replicate(&var)?,
            Some("openrouter") => Self::openrouter(&var)?,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "LLM_PROVIDER must be replicate or openrouter, got {:?}",
                    other
                )))
            }
            None if var("REPLICATE_API_TOKEN").is_some() => Self::replicate(&var)?,
            None if var("OPENROUTER_API_KEY").is_some() => Self::openrouter(&var)?,
            None => {
                return Err(AppError::Config(
                    "REPLICATE_API_TOKEN or OPENROUTER_API_KEY must be set".to_string(),
                ))
            }
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(&var, "PORT", DEFAULT_PORT)?,
            provider,
            upstream_timeout: Duration::from_secs(parse_or(
                &var,
                "UPSTREAM_TIMEOUT_SECS",
                DEFAULT_UPSTREAM_TIMEOUT_SECS,
            )?),
            facts_sampling: sampling_or(&var, "FACTS", SamplingConfig::FACTS)?,
            topics_sampling: sampling_or(&var, "TOPICS", SamplingConfig::TOPICS)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn replicate(var: &impl Fn(&str) -> Option<String>) -> Result<LlmProvider, AppError> {
        let api_token = var("REPLICATE_API_TOKEN")
            .ok_or_else(|| AppError::Config("REPLICATE_API_TOKEN must be set".to_string()))?;
        Ok(LlmProvider::Replicate {
            api_token,
            model: var("REPLICATE_MODEL").unwrap_or_else(|| replicate::DEFAULT_MODEL.to_string()),
        })
    }

    fn openrouter(var: &impl Fn(&str) -> Option<String>) -> Result<LlmProvider, AppError> {
        let api_key = var("OPENROUTER_API_KEY")
            .ok_or_else(|| AppError::Config("OPENROUTER_API_KEY must be set".to_string()))?;
        Ok(LlmProvider::OpenRouter {
            api_key,
            model: var("OPENROUTER_MODEL").unwrap_or_else(|| openrouter::DEFAULT_MODEL.to_string()),
        })
    }
}

fn parse_or<T: FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, AppError> {
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} has an invalid value: {:?}", key, raw))),
        None => Ok(default),
    }
}

fn sampling_or(
    var: &impl Fn(&str) -> Option<String>,
    prefix: &str,
    defaults: SamplingConfig,
) -> Result<SamplingConfig, AppError> {
    let key = |name: &str| format!("{}_{}", prefix, name);

    Ok(SamplingConfig {
        top_k: parse_or(var, &key("TOP_K"), defaults.top_k)?,
        top_p: parse_or(var, &key("TOP_P"), defaults.top_p)?,
        max_tokens: parse_or(var, &key("MAX_TOKENS"), defaults.max_tokens)?,
        temperature: parse_or(var, &key("TEMPERATURE"), defaults.temperature)?,
        presence_penalty: parse_or(var, &key("PRESENCE_PENALTY"), defaults.presence_penalty)?,
        frequency_penalty: parse_or(var, &key("FREQUENCY_PENALTY"), defaults.frequency_penalty)?,
    })
}
