pub mod keywords;
pub mod readability;
pub mod suggestions;
pub mod tokenizer;

#[cfg(test)]
mod tests;

pub use keywords::{DEFAULT_MAX_KEYWORDS, ScoredKeyword, extract_keywords, score_keywords};
pub use readability::{ReadabilityResult, readability_score, readability_suggestion};
pub use suggestions::generate_suggestions;
pub use tokenizer::{StopWordSet, tokenize};
