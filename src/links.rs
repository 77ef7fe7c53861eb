use url::{Origin, Url};

/// Where a link points relative to the analysed page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkScope {
    /// Root-relative (`/...`) or prefixed with the page origin
    Internal,
    /// Absolute `http(s)` link to another origin
    External,
    /// Fragments, relative paths, `mailto:` and the like
    Other,
}

/// Internal/external link totals for a page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkCounts {
    pub internal: usize,
    pub external: usize,
}

/// Classifies raw `href` values against the page origin.
///
/// Matching is a plain prefix test on the attribute value, the same as the
/// `a[href^="/"]` / `a[href^="http"]` selectors, so protocol-relative
/// `//host/...` links count as internal.
#[derive(Debug, Clone, Default)]
pub struct LinkClassifier {
    origin: Option<String>,
}

impl LinkClassifier {
    /// Create a classifier for a page; opaque origins (e.g. `file://`) have no origin prefix
    pub fn new(page_url: Option<&Url>) -> Self {
        let origin = page_url
            .map(|url| url.origin())
            .filter(Origin::is_tuple)
            .map(|origin| origin.ascii_serialization());

        Self { origin }
    }

    /// Serialized page origin, if the page has one
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Classify a single raw `href` attribute value
    pub fn classify(&self, href: &str) -> LinkScope {
        let same_origin = self
            .origin
            .as_deref()
            .is_some_and(|origin| href.starts_with(origin));

        if href.starts_with('/') || same_origin {
            LinkScope::Internal
        } else if href.starts_with("http") {
            LinkScope::External
        } else {
            LinkScope::Other
        }
    }

    /// Tally internal and external links
    pub fn count<'a>(&self, hrefs: impl IntoIterator<Item = &'a str>) -> LinkCounts {
        let mut counts = LinkCounts::default();
        for href in hrefs {
            match self.classify(href) {
                LinkScope::Internal => counts.internal += 1,
                LinkScope::External => counts.external += 1,
                LinkScope::Other => {}
            }
        }
        ::log::debug!(
            "Classified links: {} internal, {} external",
            counts.internal,
            counts.external
        );
        counts
    }
}

/// Resolve a possibly relative reference against the page URL.
///
/// Returns the reference unchanged when there is no base or it cannot be joined.
pub fn resolve(base: Option<&Url>, reference: &str) -> String {
    match base.map(|base| base.join(reference)) {
        Some(Ok(resolved)) => resolved.to_string(),
        _ => reference.to_string(),
    }
}
