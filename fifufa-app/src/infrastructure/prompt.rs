use crate::domain::{BatchTier, Language, Topic};

pub fn build_facts_prompt(topic: &Topic, language: Language, tier: BatchTier) -> String {
    let topic = sanitize_for_prompt(topic.as_str());

    match (language, tier) {
        (Language::En, BatchTier::Popular) => format!(
            "List 5 popular facts about {topic}. Each <35 words & give relevant emojis"
        ),
        (Language::En, BatchTier::Supplemental) => format!(
            "(facts 6-10) List 5 unpopular facts about {topic}. Each <35 word & give relevant emojis. Be Unique"
        ),
        (Language::Id, BatchTier::Popular) => format!(
            "Beri 5 fakta ringkas umum soal {topic}. Per fakta beri emoji relevan per fakta SINGKAT AJA. Each <15 words. Pakai Bahasa Indonesia"
        ),
        (Language::Id, BatchTier::Supplemental) => format!(
            "Beri 5 fakta ringkas unpopular soal {topic}. Each <15 words. Per fakta beri emoji relevan per fakta SINGKAT AJA. Pakai Bahasa Indonesia"
        ),
    }
}

pub fn build_topic_suggestion_prompt(language: Language) -> &'static str {
    match language {
        Language::En => {
            "Say 7 specific topics from countries, history, pop culture, hobbies, etc. Separated commas, NOT list, max 2 terms each."
        }
        Language::Id => {
            "Sebut 7 topik spesifik dari Indonesia soal sejarah, budaya pop, hobi, dll. Dipisah koma, BUKAN list, maks 2 kata per topik."
        }
    }
}

fn sanitize_for_prompt(input: &str) -> String {
    input.chars().filter(|c| !c.is_control()).collect()
}
