use crate::domain::{BatchTier, FactList};
use crate::infrastructure::generator::{SamplingConfig, TextGenerator};
use crate::infrastructure::prompt::build_facts_prompt;
use crate::infrastructure::text::normalize_facts;
use crate::infrastructure::validation::InputValidator;
use fifufa_errors::AppError;
use std::sync::Arc;

pub struct GenerateFacts {
    generator: Arc<dyn TextGenerator>,
    sampling: SamplingConfig,
}

impl GenerateFacts {
    pub fn new(generator: Arc<dyn TextGenerator>, sampling: SamplingConfig) -> Self {
        Self {
            generator,
            sampling,
        }
    }

    /// Validates before anything else, so a bad topic never reaches the
    /// generator.
    pub async fn execute(
        &self,
        topic: Option<&str>,
        language: Option<&str>,
        more: bool,
    ) -> Result<FactList, AppError> {
        let topic = InputValidator::validate_topic(topic).inspect_err(|e| {
            tracing::warn!("Facts request rejected: {} ({})", e.message(), e.code());
        })?;
        let language = InputValidator::validate_language(language);
        let tier = BatchTier::from_more(more);

        tracing::info!(
            "Facts requested [{}] for topic: \"{}\" ({})",
            language,
            topic,
            tier
        );

        let prompt = build_facts_prompt(&topic, language, tier);
        let raw = self
            .generator
            .generate(&prompt, &self.sampling)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    "Facts generation failed [{}] for topic: \"{}\" ({}): {}",
                    language,
                    topic,
                    tier,
                    e
                );
            })?;

        let facts = normalize_facts(&raw);
        tracing::info!(
            "Result [{}] for topic: \"{}\" ({}): {} facts",
            language,
            topic,
            tier,
            facts.len()
        );

        Ok(FactList::new(facts, language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Language;
    use crate::infrastructure::generator::fake::ScriptedGenerator;
    use fifufa_errors::TopicError;

    fn service(generator: &Arc<ScriptedGenerator>) -> GenerateFacts {
        GenerateFacts::new(generator.clone(), SamplingConfig::FACTS)
    }

    #[tokio::test]
    async fn test_blank_topic_never_calls_generator() {
        let generator = Arc::new(ScriptedGenerator::new([Ok("1. unused".to_string())]));

        let err = service(&generator)
            .execute(Some("  "), Some("en"), false)
            .await
            .unwrap_err();

        assert_eq!(err, AppError::Validation(TopicError::TopicRequired));
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_generates_normalized_facts() {
        let generator = Arc::new(ScriptedGenerator::new([Ok(
            "1. Foo 🎉 2. Bar ✨ 3. Baz 🔥".to_string()
        )]));

        let facts = service(&generator)
            .execute(Some("  volcanoes "), Some("en"), false)
            .await
            .unwrap();

        assert_eq!(facts.facts, vec!["Foo 🎉", "Bar ✨", "Baz 🔥"]);
        assert_eq!(facts.language, Language::En);
        assert_eq!(generator.calls(), 1);
        assert_eq!(
            generator.prompts(),
            vec!["List 5 popular facts about volcanoes. Each <35 words & give relevant emojis"]
        );
    }

    #[tokio::test]
    async fn test_more_uses_supplemental_prompt_and_unknown_language_falls_back() {
        let generator = Arc::new(ScriptedGenerator::new([Ok("- six\n- seven".to_string())]));

        let facts = service(&generator)
            .execute(Some("pizza"), Some("fr"), true)
            .await
            .unwrap();

        assert_eq!(facts.language, Language::En);
        assert_eq!(facts.len(), 2);
        assert!(generator.prompts()[0].starts_with("(facts 6-10)"));
    }

    #[tokio::test]
    async fn test_indonesian_prompt() {
        let generator = Arc::new(ScriptedGenerator::new([Ok("1. Rendang 🍛".to_string())]));

        let facts = service(&generator)
            .execute(Some("rendang"), Some("id"), false)
            .await
            .unwrap();

        assert_eq!(facts.language, Language::Id);
        assert!(generator.prompts()[0].contains("Pakai Bahasa Indonesia"));
    }

    #[tokio::test]
    async fn test_empty_completion_is_empty_list() {
        let generator = Arc::new(ScriptedGenerator::new([Ok("   ".to_string())]));

        let facts = service(&generator)
            .execute(Some("origami"), None, false)
            .await
            .unwrap();

        assert!(facts.is_empty());
    }

    #[tokio::test]
    async fn test_upstream_errors_pass_through() {
        let generator = Arc::new(ScriptedGenerator::new([Err(AppError::UpstreamRateLimited)]));

        let err = service(&generator)
            .execute(Some("aurora"), Some("en"), false)
            .await
            .unwrap_err();

        assert_eq!(err, AppError::UpstreamRateLimited);
    }
}
