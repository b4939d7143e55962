use super::Language;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordSource {
    #[default]
    Generated,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RandomWord {
    pub word: String,
    pub language: Language,
    pub remaining: usize,
    pub source: WordSource,
}

/// One language's batch of topic suggestions and a cursor into it.
///
/// `index` never exceeds `words.len()`. A cache whose cursor reached the end
/// is exhausted and must be refilled before it can dispense again; refilling
/// starts a new generation, so no word is handed out twice within one.
#[derive(Debug, Clone, Default)]
pub struct WordCache {
    words: Vec<String>,
    index: usize,
    source: WordSource,
}

impl WordCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_exhausted(&self) -> bool {
        self.index >= self.words.len()
    }

    pub fn remaining(&self) -> usize {
        self.words.len() - self.index
    }

    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }

    pub fn source(&self) -> WordSource {
        self.source
    }

    pub fn refill(&mut self, words: Vec<String>, source: WordSource) {
        self.words = words;
        self.index = 0;
        self.source = source;
    }

    /// Hands out the next word with the count still left in this generation.
    pub fn dispense(&mut self) -> Option<(String, usize)> {
        let word = self.words.get(self.index)?.clone();
        self.index += 1;
        Some((word, self.remaining()))
    }
}
