mod fact_normalizer;

pub use fact_normalizer::{normalize_facts, parse_topic_words, MAX_CACHED_WORDS};
