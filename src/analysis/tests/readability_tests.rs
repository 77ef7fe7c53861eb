use crate::analysis::readability::{self, ReadabilityResult, TextCounts};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[cfg(test)]
mod count_tests {
    use super::*;

    #[test]
    fn test_counts_simple_sentence() {
        let counts = TextCounts::of("Hello world.");
        assert_eq!(counts.words, 2);
        // The trailing piece after "." counts as a sentence
        assert_eq!(counts.sentences, 2);
        assert_eq!(counts.syllables, 3);
    }

    #[test]
    fn test_counts_collapse_punctuation_and_whitespace() {
        let counts = TextCounts::of("  Wait... what?!   Really  ");
        assert_eq!(counts.words, 3);
        assert_eq!(counts.sentences, 3);
        assert_eq!(counts.syllables, 5);
    }

    #[test]
    fn test_vowels_are_case_insensitive() {
        let counts = TextCounts::of("AEIOU aeiou y");
        assert_eq!(counts.syllables, 10);
    }

    #[test]
    fn test_empty_text_counts_are_one() {
        let counts = TextCounts::of("");
        assert_eq!(counts.words, 1);
        assert_eq!(counts.sentences, 1);
        assert_eq!(counts.syllables, 0);
    }
}

#[cfg(test)]
mod score_tests {
    use super::*;

    #[test]
    fn test_known_score() {
        // 206.835 - 1.015 * (2 / 2) - 84.6 * (3 / 2)
        let score = readability::readability_score("Hello world.");
        assert!(approx(score, 78.92));
    }

    #[test]
    fn test_empty_text_is_finite() {
        let score = readability::readability_score("");
        assert!(score.is_finite());
        assert!(approx(score, 205.82));
    }

    #[test]
    fn test_punctuation_only_is_finite() {
        let score = readability::readability_score("...");
        assert!(score.is_finite());
        assert!(approx(score, 206.835 - 1.015 * 0.5));
    }

    #[test]
    fn test_score_is_unbounded() {
        let dense = "Extraordinarily unquestionably incomprehensible administrative";
        assert!(readability::readability_score(dense) < 0.0);
        assert!(readability::readability_score("Hm.") > 100.0);
    }

    #[test]
    fn test_score_is_pure() {
        let text = "Search engines reward clear pages. Keep sentences short!";
        let first = readability::readability_score(text);
        for _ in 0..5 {
            assert_eq!(readability::readability_score(text), first);
        }
    }
}

#[cfg(test)]
mod suggestion_tests {
    use super::*;

    #[test]
    fn test_bands() {
        assert_eq!(
            readability::readability_suggestion(95.0),
            "The text is very easy to read. Great job!"
        );
        assert_eq!(
            readability::readability_suggestion(85.0),
            "The text is easy to read. Well done!"
        );
        assert_eq!(
            readability::readability_suggestion(75.0),
            "The text is fairly easy to read. Good work!"
        );
        assert_eq!(
            readability::readability_suggestion(65.0),
            "The text is of standard/average difficulty. Consider simplifying it slightly."
        );
        assert_eq!(
            readability::readability_suggestion(55.0),
            "The text is fairly difficult to read. Try to simplify your language."
        );
        assert_eq!(
            readability::readability_suggestion(10.0),
            "The text is difficult to read. Consider rewriting with simpler language for better accessibility."
        );
    }

    #[test]
    fn test_thresholds_are_strict() {
        // A score equal to a threshold falls into the band below it
        assert_eq!(
            readability::readability_suggestion(90.0),
            readability::readability_suggestion(85.0)
        );
        assert_eq!(
            readability::readability_suggestion(50.0),
            readability::readability_suggestion(-20.0)
        );
    }

    #[test]
    fn test_evaluate() {
        let result = ReadabilityResult::evaluate("Hello world.");
        assert_eq!(result.display_score(), "78.92");
        assert_eq!(result.suggestion, "The text is fairly easy to read. Good work!");
    }
}
