use super::FallbackWords;
use crate::domain::{Language, RandomWord, WordCache, WordSource};
use crate::infrastructure::generator::{SamplingConfig, TextGenerator};
use crate::infrastructure::prompt::build_topic_suggestion_prompt;
use crate::infrastructure::text::{parse_topic_words, MAX_CACHED_WORDS};
use crate::infrastructure::validation::InputValidator;
use dashmap::DashMap;
use fifufa_errors::AppError;
use std::sync::Arc;

/// Hands out random topic suggestions from one [`WordCache`] per language,
/// refilling a cache from the generator once it runs dry.
///
/// Cache entries are only locked for the synchronous dispense and refill
/// steps, never across the upstream call. Two requests that find the same
/// cache exhausted will therefore both refill it; the later refill replaces
/// the earlier one. That costs at most one extra upstream call and is
/// tolerated.
pub struct ServeRandomWord {
    generator: Arc<dyn TextGenerator>,
    sampling: SamplingConfig,
    fallback: FallbackWords,
    caches: DashMap<Language, WordCache>,
}

impl ServeRandomWord {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        sampling: SamplingConfig,
        fallback: FallbackWords,
    ) -> Self {
        Self {
            generator,
            sampling,
            fallback,
            caches: DashMap::new(),
        }
    }

    pub async fn execute(&self, language: Option<&str>) -> Result<RandomWord, AppError> {
        let language = InputValidator::validate_language(language);

        if let Some(word) = self.dispense(language) {
            return Ok(word);
        }

        tracing::info!("Generating new batch of random words [{}]...", language);
        let (words, source) = self.fetch_words(language).await;

        let mut cache = self.caches.entry(language).or_default();
        cache.refill(words, source);
        Self::take_next(&mut cache, language).ok_or_else(|| {
            tracing::error!("No words available in cache [{}]", language);
            AppError::NoWordsAvailable
        })
    }

    fn dispense(&self, language: Language) -> Option<RandomWord> {
        let mut cache = self.caches.get_mut(&language)?;
        Self::take_next(&mut cache, language)
    }

    fn take_next(cache: &mut WordCache, language: Language) -> Option<RandomWord> {
        let (word, remaining) = cache.dispense()?;
        tracing::info!(
            "Served random word [{}] {}/{}: \"{}\" ({} remaining)",
            language,
            cache.len() - remaining,
            cache.len(),
            word,
            remaining
        );

        Some(RandomWord {
            word,
            language,
            remaining,
            source: cache.source(),
        })
    }

    async fn fetch_words(&self, language: Language) -> (Vec<String>, WordSource) {
        let prompt = build_topic_suggestion_prompt(language);

        match self.generator.generate(prompt, &self.sampling).await {
            Ok(raw) => {
                let words = parse_topic_words(&raw);
                if !words.is_empty() {
                    tracing::info!(
                        "Generated word cache [{}]: [{}]",
                        language,
                        words.join(", ")
                    );
                    return (words, WordSource::Generated);
                }
                tracing::warn!(
                    "Generator returned no usable words, using fallback words [{}]",
                    language
                );
            }
            Err(e) => {
                tracing::warn!(
                    "Generator failed, using fallback words [{}]: {}",
                    language,
                    e
                );
            }
        }

        let words = self.fallback.shuffled(language, MAX_CACHED_WORDS);
        tracing::info!(
            "Using fallback word cache [{}]: [{}]",
            language,
            words.join(", ")
        );
        (words, WordSource::Fallback)
    }
}
