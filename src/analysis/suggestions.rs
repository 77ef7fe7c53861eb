use crate::analysis::readability::ReadabilityResult;
use crate::signals::PageSignals;

/// Title lengths inside this range (inclusive) are considered good
pub const TITLE_LENGTH_RANGE: (usize, usize) = (30, 60);

/// Meta description lengths inside this range (inclusive) are considered good
pub const META_DESCRIPTION_LENGTH_RANGE: (usize, usize) = (120, 160);

/// How many top keywords the focus suggestion names
const FOCUS_KEYWORDS: usize = 3;

/// Where a length sits relative to its recommended range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthBand {
    TooShort,
    Good,
    TooLong,
}

impl LengthBand {
    pub fn classify(length: usize, (min, max): (usize, usize)) -> Self {
        if length < min {
            LengthBand::TooShort
        } else if length > max {
            LengthBand::TooLong
        } else {
            LengthBand::Good
        }
    }
}

pub fn title_length_suggestion(length: usize) -> &'static str {
    match LengthBand::classify(length, TITLE_LENGTH_RANGE) {
        LengthBand::TooShort => {
            "Consider making your title longer (aim for 30-60 characters) to potentially improve SEO performance."
        }
        LengthBand::TooLong => {
            "Consider shortening your title (aim for 30-60 characters) to avoid potential truncation in search results."
        }
        LengthBand::Good => "Great job! Your title length looks good for SEO.",
    }
}

pub fn meta_description_length_suggestion(length: usize) -> &'static str {
    match LengthBand::classify(length, META_DESCRIPTION_LENGTH_RANGE) {
        LengthBand::TooShort => {
            "Consider making your meta description longer (aim for 120-160 characters) to provide more context and potentially improve click-through rates."
        }
        LengthBand::TooLong => {
            "Consider shortening your meta description (aim for 120-160 characters) to avoid potential truncation in search results."
        }
        LengthBand::Good => "Excellent! Your meta description length looks good for SEO.",
    }
}

/// Builds the ordered list of content-improvement suggestions.
///
/// The order is fixed: readability, title, meta description, H1, H2, alt
/// text, and finally the top keywords when there are any.
pub fn generate_suggestions(signals: &PageSignals, readability: &ReadabilityResult) -> Vec<String> {
    let mut suggestions = Vec::with_capacity(7);
    suggestions.push(readability.suggestion.clone());

    let title_len = signals.title_len();
    suggestions.push(format!(
        "Title ({} characters): {}",
        title_len,
        title_length_suggestion(title_len)
    ));

    let meta_len = signals.meta_description_len();
    suggestions.push(format!(
        "Meta description ({} characters): {}",
        meta_len,
        meta_description_length_suggestion(meta_len)
    ));

    if signals.h1_tags != 1 {
        suggestions
            .push("Ensure your page has exactly one H1 tag for proper heading structure.".to_string());
    } else {
        suggestions.push("Good job! Your page has one H1 tag, which is ideal for SEO.".to_string());
    }

    if signals.h2_tags < 2 {
        suggestions.push(
            "Consider adding more H2 tags to improve content structure and readability."
                .to_string(),
        );
    } else {
        suggestions.push(format!(
            "Great! Your page has {} H2 tags, which helps with content structure.",
            signals.h2_tags
        ));
    }

    let missing_alt = signals.img_without_alt.len();
    if missing_alt > 0 {
        suggestions.push(format!(
            "Add alt text to {} image(s) for better accessibility and SEO.",
            missing_alt
        ));
    } else {
        suggestions.push(
            "Excellent! All images have alt text, which is great for accessibility and SEO."
                .to_string(),
        );
    }

    if !signals.keywords.is_empty() {
        let top = signals
            .keywords
            .iter()
            .take(FOCUS_KEYWORDS)
            .map(|k| k.word.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        suggestions.push(format!("Focus on your top keywords: {}.", top));
    }

    suggestions
}
