use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::infrastructure::generator::{error_for_status, SamplingConfig, TextGenerator};
use async_trait::async_trait;
use fifufa_errors::AppError;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat";

const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

pub struct OpenRouterClient {
    http_client: reqwest::Client,
    api_key: String,
    model: String,
    api_url: String,
}

impl OpenRouterClient {
    pub fn new(api_key: String, model: String, timeout: Duration) -> Result<Self, AppError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_key,
            model,
            api_url: OPENROUTER_API_URL.to_string(),
        })
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

#[async_trait]
impl TextGenerator for OpenRouterClient {
    async fn generate(&self, prompt: &str, sampling: &SamplingConfig) -> Result<String, AppError> {
        let request = ChatCompletionRequest::new(&self.model, prompt, sampling);

        let response = self
            .http_client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("X-Title", "FiFuFa")
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("OpenRouter error: {} - {}", status, body);
            return Err(error_for_status(status, &body));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AppError::UpstreamUnavailable("No response from AI".to_string()))
    }
}
