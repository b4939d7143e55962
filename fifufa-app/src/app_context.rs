use crate::application::{FallbackWords, GenerateFacts, ServeRandomWord};
use crate::config::{AppConfig, LlmProvider};
use crate::infrastructure::generator::{SamplingConfig, TextGenerator};
use crate::infrastructure::openrouter::OpenRouterClient;
use crate::infrastructure::replicate::ReplicateClient;
use fifufa_errors::AppError;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub generate_facts: Arc<GenerateFacts>,
    pub serve_random_word: Arc<ServeRandomWord>,
}

impl AppContext {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        facts_sampling: SamplingConfig,
        topics_sampling: SamplingConfig,
        fallback: FallbackWords,
    ) -> Self {
        Self {
            generate_facts: Arc::new(GenerateFacts::new(generator.clone(), facts_sampling)),
            serve_random_word: Arc::new(ServeRandomWord::new(
                generator,
                topics_sampling,
                fallback,
            )),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let generator: Arc<dyn TextGenerator> = match &config.provider {
            LlmProvider::Replicate { api_token, model } => Arc::new(ReplicateClient::new(
                api_token.clone(),
                model,
                config.upstream_timeout,
            )?),
            LlmProvider::OpenRouter { api_key, model } => Arc::new(OpenRouterClient::new(
                api_key.clone(),
                model.clone(),
                config.upstream_timeout,
            )?),
        };
        tracing::info!("Using {} backend", config.provider.describe());

        Ok(Self::new(
            generator,
            config.facts_sampling,
            config.topics_sampling,
            FallbackWords::default(),
        ))
    }
}
