mod fallback_words;
mod generate_facts;
mod serve_random_word;

pub use fallback_words::FallbackWords;
pub use generate_facts::GenerateFacts;
pub use serve_random_word::ServeRandomWord;
