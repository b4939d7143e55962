use regex_lite::Regex;
use std::sync::LazyLock;

pub const MAX_CACHED_WORDS: usize = 10;
const MAX_TOPIC_WORD_CHARS: usize = 25;

// An ordinal ("1.", "2)") or bullet ("-", "*") that opens a list item and is
// followed by whitespace. Markers may start the text or follow whitespace;
// an ordinal may also sit right after an emoji or punctuation mark, which is
// captured so it stays with the previous item. Ordinals stop at two digits so
// years in running text are left alone, and letters before an ordinal
// ("B12.") keep it part of the word.
static ITEM_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:(?:^|\s+)(?:\d{1,2}[.)]|[-*])|([^\w\s])\d{1,2}[.)])\s+")
        .expect("item separator pattern is valid")
});

static LEADING_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d{1,2}[.)]|[-*])").expect("leading marker pattern is valid")
});

static ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\s*").expect("ordinal pattern is valid"));

/// Turns a free-text numbered or bulleted list into one string per item.
///
/// Text without any markers comes back as a single item. Items are never
/// padded or truncated to a fixed count, and an empty input yields an empty
/// list. Feeding the result back in (joined by newlines) returns it unchanged.
pub fn normalize_facts(raw: &str) -> Vec<String> {
    split_items(raw)
        .into_iter()
        .map(|fragment| strip_leading_markers(fragment.trim()))
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_items(raw: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    for caps in ITEM_SEPARATOR.captures_iter(raw) {
        let Some(separator) = caps.get(0) else {
            continue;
        };
        let end = caps.get(1).map_or(separator.start(), |kept| kept.end());
        fragments.push(&raw[start..end]);
        start = separator.end();
    }
    fragments.push(&raw[start..]);
    fragments
}

/// Removes markers the separator could not consume, e.g. an item that starts
/// with "2.Bar" because the generator dropped the space.
fn strip_leading_markers(mut fragment: &str) -> &str {
    while let Some(marker) = LEADING_MARKER.find(fragment) {
        let rest = &fragment[marker.end()..];
        let next = rest.chars().next();

        let is_marker = if marker.as_str().starts_with(|c: char| c.is_ascii_digit()) {
            // "3.5 million" is a number, not an ordinal
            !next.is_some_and(|c| c.is_ascii_digit())
        } else {
            next.map_or(true, char::is_whitespace)
        };

        if !is_marker {
            break;
        }
        fragment = rest.trim_start();
    }
    fragment
}

/// Parses a comma or newline separated list of topic suggestions.
pub fn parse_topic_words(raw: &str) -> Vec<String> {
    let without_ordinals = ORDINAL.replace_all(raw, "");

    without_ordinals
        .split(|c: char| c == ',' || c == '\n')
        .map(|word| {
            word.trim_matches(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '*' | '-' | '.'))
                .to_lowercase()
        })
        .filter(|word| {
            let chars = word.chars().count();
            chars > 0 && chars < MAX_TOPIC_WORD_CHARS
        })
        .take(MAX_CACHED_WORDS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_numbered_list() {
        assert_eq!(
            normalize_facts("1. Foo 🎉 2. Bar ✨ 3. Baz 🔥"),
            vec!["Foo 🎉", "Bar ✨", "Baz 🔥"]
        );
    }

    #[test]
    fn test_ordinal_right_after_emoji_or_punctuation() {
        assert_eq!(
            normalize_facts("1. Foo 🎉2. Bar ✨3. Baz"),
            vec!["Foo 🎉", "Bar ✨", "Baz"]
        );
        assert_eq!(
            normalize_facts("1. Rendang is from Padang!2) Batik is UNESCO heritage.3. Komodo"),
            vec!["Rendang is from Padang!", "Batik is UNESCO heritage.", "Komodo"]
        );
        assert_eq!(
            normalize_facts("1. Vitamin B12. It is made by bacteria 🦠"),
            vec!["Vitamin B12. It is made by bacteria 🦠"]
        );
    }

    #[test]
    fn test_one_item_per_line() {
        let raw = "1. Pizza was born in Naples 🍕\n2. Margherita is named after a queen 👑\n3. Americans eat 100 acres a day 🇺🇸\n";
        assert_eq!(
            normalize_facts(raw),
            vec![
                "Pizza was born in Naples 🍕",
                "Margherita is named after a queen 👑",
                "Americans eat 100 acres a day 🇺🇸",
            ]
        );
    }

    #[test]
    fn test_parenthesis_ordinals_and_bullets() {
        assert_eq!(
            normalize_facts("1) Alpha\n2) Beta\n- Gamma\n* Delta"),
            vec!["Alpha", "Beta", "Gamma", "Delta"]
        );
    }

    #[test]
    fn test_unmarked_paragraph_is_single_item() {
        assert_eq!(
            normalize_facts("  Dolphins sleep with one eye open. 🐬  "),
            vec!["Dolphins sleep with one eye open. 🐬"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_facts("").is_empty());
        assert!(normalize_facts("   \n  ").is_empty());
        assert!(normalize_facts("1. \n2. \n").is_empty());
    }

    #[test]
    fn test_residual_marker_is_stripped() {
        assert_eq!(normalize_facts("1.Foo 2. Bar"), vec!["Foo", "Bar"]);
        assert_eq!(normalize_facts("2.Bar"), vec!["Bar"]);
        assert_eq!(normalize_facts("- - Baz"), vec!["Baz"]);
    }

    #[test]
    fn test_years_and_decimals_are_kept() {
        assert_eq!(
            normalize_facts("1. The tower opened in 1889. It was repainted 19 times 🗼 2. It grows 3.5 cm in summer ☀️"),
            vec![
                "The tower opened in 1889. It was repainted 19 times 🗼",
                "It grows 3.5 cm in summer ☀️",
            ]
        );
        assert_eq!(normalize_facts("3.5 million fans"), vec!["3.5 million fans"]);
    }

    #[test]
    fn test_segment_count_matches_markers() {
        for n in 1..=12 {
            let raw: String = (1..=n).map(|i| format!("{}. fact number {} ✨ ", i, i)).collect();
            let facts = normalize_facts(&raw);
            assert_eq!(facts.len(), n);
            for (i, fact) in facts.iter().enumerate() {
                assert_eq!(fact, &format!("fact number {} ✨", i + 1));
            }
        }
    }

    #[test]
    fn test_idempotent_on_clean_list() {
        let inputs = [
            "1. Foo 🎉 2. Bar ✨ 3. Baz 🔥",
            "1. Foo 🎉2. Bar ✨3. Baz",
            "- Komodo dragons are the largest lizards 🦎\n- They live on five islands 🏝️",
            "1) Built in 1889. 2) Painted every 7 years 🎨\n3) 330 m tall",
            "Just one paragraph about rendang 🍛",
            "- - 1.Foo",
        ];
        for raw in inputs {
            let once = normalize_facts(raw);
            let twice = normalize_facts(&once.join("\n"));
            assert_eq!(once, twice, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_parse_topic_words() {
        let raw = "1. Ancient Rome, K-Pop, Origami\n2. Mount Everest, \"Jazz\", chess.";
        assert_eq!(
            parse_topic_words(raw),
            vec!["ancient rome", "k-pop", "origami", "mount everest", "jazz", "chess"]
        );
    }

    #[test]
    fn test_parse_topic_words_filters_and_truncates() {
        let long = "x".repeat(25);
        let raw = format!("{}, , a, b, c, d, e, f, g, h, i, j, k", long);
        let words = parse_topic_words(&raw);
        assert_eq!(words.len(), MAX_CACHED_WORDS);
        assert_eq!(words[0], "a");
        assert_eq!(words[9], "j");
    }
}
