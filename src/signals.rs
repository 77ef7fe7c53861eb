use crate::analysis::keywords::ScoredKeyword;
use serde::{Deserialize, Serialize};

/// An `<img>` element without an `alt` attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingAltImage {
    /// Image source, resolved against the page URL when possible
    pub src: String,

    /// Declared size as "WxH"
    pub dimensions: String,
}

/// Open Graph and Twitter card metadata (empty strings when absent)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialTags {
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub twitter_card: String,
}

/// Snapshot of the SEO-relevant facts extracted from one page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSignals {
    /// Document title
    pub title: String,

    /// `<meta name="description">` content (may be empty)
    pub meta_description: String,

    /// Visible body text, whitespace-normalized
    pub body_text: String,

    /// Number of `<h1>` elements
    pub h1_tags: usize,

    /// Number of `<h2>` elements
    pub h2_tags: usize,

    /// Images lacking alternative text
    pub img_without_alt: Vec<MissingAltImage>,

    /// Links pointing at the same site
    pub internal_links: usize,

    /// Links pointing elsewhere
    pub external_links: usize,

    /// Social sharing metadata
    pub social_tags: SocialTags,

    /// Ranked keywords for title, description and body text
    pub keywords: Vec<ScoredKeyword>,
}

impl PageSignals {
    /// Text fed to the readability evaluator
    pub fn readability_text(&self) -> String {
        format!("{} {}", self.title, self.meta_description)
    }

    /// Text fed to the keyword scorer
    pub fn keyword_text(&self) -> String {
        format!("{} {} {}", self.title, self.meta_description, self.body_text)
    }

    /// Title length in UTF-16 code units, as a browser reports it
    pub fn title_len(&self) -> usize {
        self.title.encode_utf16().count()
    }

    /// Meta description length in UTF-16 code units
    pub fn meta_description_len(&self) -> usize {
        self.meta_description.encode_utf16().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths_count_utf16_units() {
        let signals = PageSignals {
            title: "Rust 🦀 SEO".to_string(),
            meta_description: "Café guide".to_string(),
            ..Default::default()
        };

        // The crab sits outside the BMP and takes two units
        assert_eq!(signals.title_len(), 11);
        assert_eq!(signals.meta_description_len(), 10);
    }

    #[test]
    fn test_text_inputs() {
        let signals = PageSignals {
            title: "Title".to_string(),
            meta_description: "Meta".to_string(),
            body_text: "Body".to_string(),
            ..Default::default()
        };
        assert_eq!(signals.readability_text(), "Title Meta");
        assert_eq!(signals.keyword_text(), "Title Meta Body");
    }
}
