use crate::domain::Language;
use rand::seq::SliceRandom;

const FALLBACK_EN: &[&str] = &[
    "ninja", "einstein", "pizza", "dolphins", "aurora", "chocolate", "robots", "space", "ocean",
    "mountains", "dragons", "crystals", "volcanoes", "antarctica", "pyramids", "sakura", "thunder",
    "diamonds", "galaxies", "rainbows",
];

const FALLBACK_ID: &[&str] = &[
    "rendang", "borobudur", "komodo", "batik", "gamelan", "wayang", "angklung", "raisa", "sunda",
    "java", "bali", "lombok", "sulawesi", "kalimantan", "sumatra", "papua", "maluku", "nusantara",
    "majapahit", "sriwijaya",
];

/// Topic suggestions served when the generator cannot be reached.
#[derive(Debug, Clone)]
pub struct FallbackWords {
    en: Vec<String>,
    id: Vec<String>,
}

impl FallbackWords {
    pub fn new(en: Vec<String>, id: Vec<String>) -> Self {
        Self { en, id }
    }

    pub fn words(&self, language: Language) -> &[String] {
        match language {
            Language::En => &self.en,
            Language::Id => &self.id,
        }
    }

    pub fn shuffled(&self, language: Language, limit: usize) -> Vec<String> {
        let mut words = self.words(language).to_vec();
        words.shuffle(&mut rand::thread_rng());
        words.truncate(limit);
        words
    }
}

impl Default for FallbackWords {
    fn default() -> Self {
        let owned = |words: &[&str]| -> Vec<String> { words.iter().map(|w| w.to_string()).collect() };
        Self::new(owned(FALLBACK_EN), owned(FALLBACK_ID))
    }
}
