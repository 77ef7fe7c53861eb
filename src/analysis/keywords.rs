use crate::analysis::tokenizer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of keywords kept when the caller does not ask for a specific amount
pub const DEFAULT_MAX_KEYWORDS: usize = 10;

/// A distinct token with its occurrence count and relevance weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredKeyword {
    /// The keyword itself (lowercase)
    pub word: String,

    /// Occurrences of the word in the filtered token sequence
    pub count: usize,

    /// Relevance weight, full precision
    pub score: f64,
}

impl ScoredKeyword {
    /// Score rendered with four decimal places
    pub fn display_score(&self) -> String {
        format!("{:.4}", self.score)
    }
}

/// Scores tokens and returns at most `max_keywords` of them, best first.
///
/// Each distinct token gets `tf * idf` where `tf = c / total` and
/// `idf = ln(total / (c + 1))`. The idf is computed against the same
/// document, so it mostly pushes very frequent terms down. Ties keep the
/// order in which the words first appeared.
pub fn score_keywords<S: AsRef<str>>(tokens: &[S], max_keywords: usize) -> Vec<ScoredKeyword> {
    let total = tokens.len();
    if total == 0 {
        return Vec::new();
    }

    // Distinct words in first-seen order, with counts
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counted: Vec<(&str, usize)> = Vec::new();
    for token in tokens {
        let token = token.as_ref();
        match index.get(token) {
            Some(&slot) => counted[slot].1 += 1,
            None => {
                index.insert(token, counted.len());
                counted.push((token, 1));
            }
        }
    }

    let total = total as f64;
    let mut scored = counted
        .into_iter()
        .map(|(word, count)| {
            let c = count as f64;
            let tf = c / total;
            let idf = (total / (c + 1.0)).ln();
            ScoredKeyword {
                word: word.to_string(),
                count,
                score: tf * idf,
            }
        })
        .collect::<Vec<_>>();

    // sort_by is stable, so equal scores stay in first-seen order
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(max_keywords);

    ::log::debug!(
        "Scored {} tokens into {} keywords",
        tokens.len(),
        scored.len()
    );
    scored
}

/// Tokenizes raw text and scores the result
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<ScoredKeyword> {
    let tokens = tokenizer::tokenize(text);
    score_keywords(&tokens, max_keywords)
}
