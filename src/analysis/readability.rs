//! Flesch-style reading ease for short page text (title plus meta description).
//!
//! `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`
//!
//! The counts are crude: syllables are vowel letters, sentences
//! are pieces between runs of terminal punctuation. The score is not clamped.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence pattern is valid"));

/// Reading-ease score together with the advice it maps to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityResult {
    /// Unbounded score; higher reads easier
    pub score: f64,

    /// Advice for the band the score falls into
    pub suggestion: String,
}

impl ReadabilityResult {
    /// Scores `text` and attaches the matching suggestion
    pub fn evaluate(text: &str) -> Self {
        let score = readability_score(text);
        Self {
            score,
            suggestion: readability_suggestion(score).to_string(),
        }
    }

    /// Score rendered with two decimal places
    pub fn display_score(&self) -> String {
        format!("{:.2}", self.score)
    }
}

/// Raw counts feeding the formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCounts {
    pub words: usize,
    pub sentences: usize,
    pub syllables: usize,
}

impl TextCounts {
    /// Counts words, sentences and vowel "syllables" in `text`.
    ///
    /// Word and sentence counts are piece counts of a split, so they are at
    /// least 1 even for empty text.
    pub fn of(text: &str) -> Self {
        let trimmed = text.trim();
        let words = WHITESPACE_RUN.find_iter(trimmed).count() + 1;
        let sentences = SENTENCE_BREAK.find_iter(text).count() + 1;
        let syllables = text
            .chars()
            .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
            .count();

        Self {
            words,
            sentences,
            syllables,
        }
    }
}

/// Computes the reading-ease score of `text`
pub fn readability_score(text: &str) -> f64 {
    let counts = TextCounts::of(text);

    // Split counts never drop below one; the guard keeps the score finite regardless
    let words = counts.words.max(1) as f64;
    let sentences = counts.sentences.max(1) as f64;
    let syllables = counts.syllables as f64;

    let score = 206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words);
    ::log::trace!("Readability {:?} -> {:.2}", counts, score);
    score
}

/// Maps a score onto one of six fixed advice strings
pub fn readability_suggestion(score: f64) -> &'static str {
    if score > 90.0 {
        "The text is very easy to read. Great job!"
    } else if score > 80.0 {
        "The text is easy to read. Well done!"
    } else if score > 70.0 {
        "The text is fairly easy to read. Good work!"
    } else if score > 60.0 {
        "The text is of standard/average difficulty. Consider simplifying it slightly."
    } else if score > 50.0 {
        "The text is fairly difficult to read. Try to simplify your language."
    } else {
        "The text is difficult to read. Consider rewriting with simpler language for better accessibility."
    }
}
