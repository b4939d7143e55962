use crate::domain::{Language, Topic, MAX_TOPIC_CHARS, MIN_TOPIC_CHARS};
use fifufa_errors::TopicError;

pub struct InputValidator;

impl InputValidator {
    /// `None` covers a missing field as well as a non-string JSON value.
    pub fn validate_topic(topic: Option<&str>) -> Result<Topic, TopicError> {
        let topic = topic.map(str::trim).unwrap_or_default();

        if topic.is_empty() {
            return Err(TopicError::TopicRequired);
        }

        let chars = topic.chars().count();
        if chars < MIN_TOPIC_CHARS {
            return Err(TopicError::TopicTooShort);
        }
        if chars > MAX_TOPIC_CHARS {
            return Err(TopicError::TopicTooLong);
        }

        Ok(Topic::new_unchecked(topic.to_string()))
    }

    pub fn validate_language(code: Option<&str>) -> Language {
        code.map(Language::from_code).unwrap_or_default()
    }
}
