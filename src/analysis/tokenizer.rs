use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Common English function words that carry no topical signal
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
    "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
    "or", "other", "our", "ours", "ourselves", "out", "over", "own", "s", "same", "she", "should",
    "so", "some", "such", "t", "than", "that", "the", "their", "theirs", "them", "themselves",
    "then", "there", "these", "they", "this", "those", "through", "to", "too", "under", "until",
    "up", "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom",
    "why", "will", "with", "you", "your", "yours", "yourself", "yourselves",
];

static STOP_WORD_SET: Lazy<StopWordSet> = Lazy::new(|| StopWordSet {
    words: STOP_WORDS.iter().copied().collect(),
});

// Runs of ASCII word characters; digits and underscores disqualify the whole run
static WORD_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9_]+").expect("word run pattern is valid"));

/// Shortest run kept as a token
const MIN_TOKEN_LEN: usize = 3;

/// Fixed, read-only set of stop words shared by every analysis
#[derive(Debug)]
pub struct StopWordSet {
    words: HashSet<&'static str>,
}

impl StopWordSet {
    /// The process-wide English stop-word set
    pub fn english() -> &'static StopWordSet {
        &STOP_WORD_SET
    }

    /// Returns true if the word is a stop word
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Splits text into lowercase keyword candidates, in source order.
///
/// A token is a maximal run of at least three ASCII letters bounded by
/// non-word characters. Stop words are removed.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    let stop_words = StopWordSet::english();

    let tokens = WORD_RUN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|run| run.len() >= MIN_TOKEN_LEN && run.bytes().all(|b| b.is_ascii_lowercase()))
        .filter(|token| !stop_words.contains(token))
        .map(str::to_string)
        .collect::<Vec<_>>();

    ::log::trace!("Tokenizer kept {} tokens", tokens.len());
    tokens
}
