use super::Language;
use serde::Serialize;
use std::fmt;

/// Which five facts are being asked for: the first batch, or the follow-up
/// "more" batch (facts 6 to 10).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchTier {
    Popular,
    Supplemental,
}

impl BatchTier {
    pub fn from_more(more: bool) -> Self {
        if more {
            BatchTier::Supplemental
        } else {
            BatchTier::Popular
        }
    }
}

impl fmt::Display for BatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchTier::Popular => f.write_str("popular"),
            BatchTier::Supplemental => f.write_str("unpopular"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactList {
    pub facts: Vec<String>,
    pub language: Language,
}

impl FactList {
    pub fn new(facts: Vec<String>, language: Language) -> Self {
        Self { facts, language }
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}
