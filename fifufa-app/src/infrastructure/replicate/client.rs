use super::types::{Prediction, PredictionInput, PredictionRequest, PredictionStatus};
use crate::infrastructure::generator::{error_for_status, SamplingConfig, TextGenerator};
use async_trait::async_trait;
use fifufa_errors::AppError;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "ibm-granite/granite-3.3-8b-instruct:618ecbe80773609e96ea19d8c96e708f6f2b368bb89be8fad509983194466bf8";

const REPLICATE_API_URL: &str = "https://api.replicate.com/v1";
const USER_AGENT: &str = "FiFuFa/1.0.0";
const POLL_INTERVAL: Duration = Duration::from_millis(500);
const MAX_SYNC_WAIT_SECS: u64 = 60;

/// `owner/name` with an optional pinned `:version`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ModelRef {
    name: String,
    version: Option<String>,
}

impl ModelRef {
    fn parse(model: &str) -> Result<Self, AppError> {
        let (name, version) = match model.split_once(':') {
            Some((name, version)) => (name, Some(version.to_string())),
            None => (model, None),
        };

        match name.split_once('/') {
            Some((owner, model_name)) if !owner.is_empty() && !model_name.is_empty() => Ok(Self {
                name: name.to_string(),
                version: version.filter(|v| !v.is_empty()),
            }),
            _ => Err(AppError::Config(format!(
                "Replicate model must look like owner/name[:version], got {:?}",
                model
            ))),
        }
    }
}

pub struct ReplicateClient {
    http_client: reqwest::Client,
    api_token: String,
    model: ModelRef,
    base_url: String,
    timeout: Duration,
}

impl ReplicateClient {
    pub fn new(api_token: String, model: &str, timeout: Duration) -> Result<Self, AppError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_token,
            model: ModelRef::parse(model)?,
            base_url: REPLICATE_API_URL.to_string(),
            timeout,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn create_prediction(
        &self,
        prompt: &str,
        sampling: &SamplingConfig,
    ) -> Result<Prediction, AppError> {
        let url = match &self.model.version {
            Some(_) => format!("{}/predictions", self.base_url),
            None => format!("{}/models/{}/predictions", self.base_url, self.model.name),
        };
        let request = PredictionRequest {
            version: self.model.version.as_deref(),
            input: PredictionInput {
                prompt,
                sampling: *sampling,
            },
        };
        let wait_secs = self.timeout.as_secs().clamp(1, MAX_SYNC_WAIT_SECS);

        let response = self
            .http_client
            .post(url)
            .bearer_auth(&self.api_token)
            .header("Prefer", format!("wait={}", wait_secs))
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(e.to_string()))?;

        Self::read_prediction(response).await
    }

    async fn fetch_prediction(&self, url: &str) -> Result<Prediction, AppError> {
        let response = self
            .http_client
            .get(url)
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(e.to_string()))?;

        Self::read_prediction(response).await
    }

    async fn read_prediction(response: reqwest::Response) -> Result<Prediction, AppError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Replicate error: {} - {}", status, body);
            return Err(error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(e.to_string()))
    }

    async fn run(&self, prompt: &str, sampling: &SamplingConfig) -> Result<String, AppError> {
        let mut prediction = self.create_prediction(prompt, sampling).await?;

        while !prediction.status.is_terminal() {
            let poll_url = prediction
                .urls
                .as_ref()
                .map(|urls| urls.get.clone())
                .ok_or_else(|| {
                    AppError::UpstreamUnavailable("Prediction has no polling URL".to_string())
                })?;
            tracing::debug!("Prediction still {:?}, polling", prediction.status);
            tokio::time::sleep(POLL_INTERVAL).await;
            prediction = self.fetch_prediction(&poll_url).await?;
        }

        match prediction.status {
            PredictionStatus::Succeeded => prediction
                .output
                .map(|output| output.into_text())
                .ok_or_else(|| AppError::UpstreamUnavailable("Prediction has no output".to_string())),
            status => {
                let reason = prediction
                    .error
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| "no error detail".to_string());
                Err(AppError::UpstreamUnavailable(format!(
                    "Prediction {:?}: {}",
                    status, reason
                )))
            }
        }
    }
}

#[async_trait]
impl TextGenerator for ReplicateClient {
    async fn generate(&self, prompt: &str, sampling: &SamplingConfig) -> Result<String, AppError> {
        tokio::time::timeout(self.timeout, self.run(prompt, sampling))
            .await
            .map_err(|_| AppError::UpstreamUnavailable("Replicate request timed out".to_string()))?
    }
}
