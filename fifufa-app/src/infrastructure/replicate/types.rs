use crate::infrastructure::generator::SamplingConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct PredictionRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<&'a str>,
    pub input: PredictionInput<'a>,
}

#[derive(Debug, Serialize)]
pub struct PredictionInput<'a> {
    pub prompt: &'a str,
    #[serde(flatten)]
    pub sampling: SamplingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Prediction {
    pub status: PredictionStatus,
    #[serde(default)]
    pub output: Option<PredictionOutput>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    #[serde(default)]
    pub urls: Option<PredictionUrls>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionStatus {
    Starting,
    Processing,
    Succeeded,
    Failed,
    Canceled,
    Aborted,
}

impl PredictionStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Starting | Self::Processing)
    }
}

/// Language models stream tokens, so the output is usually a list of chunks.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PredictionOutput {
    Chunks(Vec<String>),
    Text(String),
}

impl PredictionOutput {
    pub fn into_text(self) -> String {
        match self {
            Self::Chunks(chunks) => chunks.concat(),
            Self::Text(text) => text,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PredictionUrls {
    pub get: String,
}
