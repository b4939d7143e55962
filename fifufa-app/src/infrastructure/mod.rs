pub mod generator;
pub mod openrouter;
pub mod prompt;
pub mod replicate;
pub mod text;
pub mod validation;
