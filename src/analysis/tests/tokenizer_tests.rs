use crate::analysis::tokenizer::{self, StopWordSet};

#[cfg(test)]
mod basic_tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert!(tokenizer::tokenize("").is_empty());
        assert!(tokenizer::tokenize("   \n\t  ").is_empty());
    }

    #[test]
    fn test_pangram() {
        // "the" and "over" are stop words
        let tokens = tokenizer::tokenize("The quick brown fox jumps over the lazy dog.");
        assert_eq!(tokens, vec!["quick", "brown", "fox", "jumps", "lazy", "dog"]);
    }

    #[test]
    fn test_lowercases_input() {
        let tokens = tokenizer::tokenize("RUST Programming LANGUAGE");
        assert_eq!(tokens, vec!["rust", "programming", "language"]);
    }

    #[test]
    fn test_short_runs_are_dropped() {
        let tokens = tokenizer::tokenize("go js ts web api");
        assert_eq!(tokens, vec!["web", "api"]);
    }

    #[test]
    fn test_digits_and_underscores_disqualify_runs() {
        let tokens = tokenizer::tokenize("abc123 def_ghi 2024 jkl");
        assert_eq!(tokens, vec!["jkl"]);
    }

    #[test]
    fn test_punctuation_splits_runs() {
        let tokens = tokenizer::tokenize("search-engine optimization, don't");
        assert_eq!(tokens, vec!["search", "engine", "optimization", "don"]);
    }

    #[test]
    fn test_preserves_source_order_and_duplicates() {
        let tokens = tokenizer::tokenize("rust seo rust guide seo rust");
        assert_eq!(tokens, vec!["rust", "seo", "rust", "guide", "seo", "rust"]);
    }
}

#[cfg(test)]
mod stop_word_tests {
    use super::*;

    #[test]
    fn test_stop_word_set_size() {
        let set = StopWordSet::english();
        assert_eq!(set.len(), 126);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_membership() {
        let set = StopWordSet::english();
        for word in ["the", "over", "yourselves", "because", "s", "t"] {
            assert!(set.contains(word), "'{}' should be a stop word", word);
        }
        for word in ["quick", "rust", "seo", "can", "would"] {
            assert!(!set.contains(word), "'{}' should not be a stop word", word);
        }
    }

    #[test]
    fn test_only_stop_words() {
        let tokens = tokenizer::tokenize("The and with from their through");
        assert!(tokens.is_empty());
    }
}
