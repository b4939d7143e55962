mod fact_list;
mod language;
mod topic;
mod word_cache;

pub use fact_list::{BatchTier, FactList};
pub use language::Language;
pub use topic::{Topic, MAX_TOPIC_CHARS, MIN_TOPIC_CHARS};
pub use word_cache::{RandomWord, WordCache, WordSource};
