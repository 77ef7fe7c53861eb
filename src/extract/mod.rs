pub mod html;

#[cfg(test)]
mod tests;

use crate::analysis::keywords;
use crate::links::LinkClassifier;
use crate::signals::PageSignals;
use scraper::Html;
use url::Url;

/// Extracts a [`PageSignals`] snapshot from an HTML document.
///
/// `page_url` is used to resolve image sources and to tell internal links
/// from external ones; without it only root-relative links count as internal.
pub fn extract_signals(html: &str, page_url: Option<&Url>, max_keywords: usize) -> PageSignals {
    let doc = Html::parse_document(html);

    let title = html::title(&doc);
    let meta_description = html::meta_description(&doc);
    let body_text = html::body_text(&doc);
    let (h1_tags, h2_tags) = html::heading_counts(&doc);
    let img_without_alt = html::images_without_alt(&doc, page_url);

    let hrefs = html::link_hrefs(&doc);
    let links = LinkClassifier::new(page_url).count(hrefs.iter().copied());

    let mut signals = PageSignals {
        title,
        meta_description,
        body_text,
        h1_tags,
        h2_tags,
        img_without_alt,
        internal_links: links.internal,
        external_links: links.external,
        social_tags: html::social_tags(&doc),
        keywords: Vec::new(),
    };
    signals.keywords = keywords::extract_keywords(&signals.keyword_text(), max_keywords);

    ::log::debug!(
        "Extracted signals: title {} chars, {} h1, {} h2, {} images without alt, {} keywords",
        signals.title_len(),
        signals.h1_tags,
        signals.h2_tags,
        signals.img_without_alt.len(),
        signals.keywords.len()
    );

    signals
}
