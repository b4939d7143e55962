use async_trait::async_trait;
use fifufa_errors::AppError;
use serde::Serialize;

/// Sampling knobs passed through to the upstream model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplingConfig {
    pub top_k: u32,
    pub top_p: f32,
    pub max_tokens: u32,
    pub temperature: f32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
}

impl SamplingConfig {
    /// Low temperature: facts should stay on topic.
    pub const FACTS: SamplingConfig = SamplingConfig {
        top_k: 50,
        top_p: 0.7,
        max_tokens: 250,
        temperature: 0.3,
        presence_penalty: 0.4,
        frequency_penalty: 0.3,
    };

    /// High temperature: suggestions should vary between refills.
    pub const TOPICS: SamplingConfig = SamplingConfig {
        top_k: 50,
        top_p: 0.9,
        max_tokens: 150,
        temperature: 0.8,
        presence_penalty: 0.7,
        frequency_penalty: 0.7,
    };
}

/// A text-completion service: one prompt in, the full completion out.
///
/// Implementations map a 429 to [`AppError::UpstreamRateLimited`], rejected
/// credentials to [`AppError::UpstreamAuth`] and everything else to
/// [`AppError::UpstreamUnavailable`]. They never retry.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, sampling: &SamplingConfig) -> Result<String, AppError>;
}

pub(crate) fn error_for_status(status: reqwest::StatusCode, body: &str) -> AppError {
    match status {
        reqwest::StatusCode::TOO_MANY_REQUESTS => AppError::UpstreamRateLimited,
        reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
            AppError::UpstreamAuth(format!("API error: {}", status))
        }
        _ => AppError::UpstreamUnavailable(format!("API error: {} - {}", status, body)),
    }
}
