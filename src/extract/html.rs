use crate::signals::{MissingAltImage, SocialTags};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use url::Url;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

static TITLE: Lazy<Selector> = Lazy::new(|| selector("title"));
static BASE: Lazy<Selector> = Lazy::new(|| selector("base[href]"));
static BODY: Lazy<Selector> = Lazy::new(|| selector("body"));
static H1: Lazy<Selector> = Lazy::new(|| selector("h1"));
static H2: Lazy<Selector> = Lazy::new(|| selector("h2"));
static IMG_WITHOUT_ALT: Lazy<Selector> = Lazy::new(|| selector("img:not([alt])"));
static ANCHOR: Lazy<Selector> = Lazy::new(|| selector("a[href]"));
static META_DESCRIPTION: Lazy<Selector> = Lazy::new(|| selector(r#"meta[name="description"]"#));
static OG_TITLE: Lazy<Selector> = Lazy::new(|| selector(r#"meta[property="og:title"]"#));
static OG_DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| selector(r#"meta[property="og:description"]"#));
static OG_IMAGE: Lazy<Selector> = Lazy::new(|| selector(r#"meta[property="og:image"]"#));
static TWITTER_CARD: Lazy<Selector> = Lazy::new(|| selector(r#"meta[name="twitter:card"]"#));

/// Elements whose text never renders
const HIDDEN_TEXT_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Elements that start on their own line, so their text never runs into a neighbour's
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "caption", "dd", "details", "div", "dl",
    "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5",
    "h6", "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "summary", "table",
    "tbody", "td", "tfoot", "th", "thead", "tr", "ul",
];

// ASCII only: a non-breaking space survives, as it does in a browser
fn collapse_whitespace(text: &str) -> String {
    text.split_ascii_whitespace().collect::<Vec<_>>().join(" ")
}

// Template contents are parsed into the tree but never become part of the document
fn rendered(el: &ElementRef) -> bool {
    !el.ancestors().any(|ancestor| {
        ancestor
            .value()
            .as_element()
            .is_some_and(|a| a.name() == "template")
    })
}

/// Document title with whitespace collapsed; empty when there is no `<title>`
pub fn title(doc: &Html) -> String {
    doc.select(&TITLE)
        .next()
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .unwrap_or_default()
}

/// Meta description content; empty when missing
pub fn meta_description(doc: &Html) -> String {
    meta_content(doc, &META_DESCRIPTION)
}

fn meta_content(doc: &Html, selector: &Selector) -> String {
    doc.select(selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(str::to_string)
        .unwrap_or_default()
}

/// Rendered body text with whitespace collapsed to single spaces.
///
/// Inline markup joins its text to the surrounding words; block elements
/// are separated by a space.
pub fn body_text(doc: &Html) -> String {
    let Some(body) = doc.select(&BODY).next() else {
        return String::new();
    };

    let mut text = String::new();
    push_text(body, &mut text);
    collapse_whitespace(&text)
}

fn push_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(&**text);
        } else if let Some(el) = ElementRef::wrap(child) {
            let name = el.value().name();
            if HIDDEN_TEXT_ELEMENTS.contains(&name) {
                continue;
            }

            let block = BLOCK_ELEMENTS.contains(&name);
            if block {
                out.push(' ');
            }
            push_text(el, out);
            if block {
                out.push(' ');
            }
        }
    }
}

/// Number of `<h1>` and `<h2>` elements in the document
pub fn heading_counts(doc: &Html) -> (usize, usize) {
    let count = |selector: &Selector| doc.select(selector).filter(rendered).count();
    (count(&H1), count(&H2))
}

/// URL relative references resolve against: the first `<base href>` if any, else the page URL
pub fn base_url(doc: &Html, page_url: Option<&Url>) -> Option<Url> {
    let href = doc
        .select(&BASE)
        .next()
        .and_then(|el| el.value().attr("href"));

    match (href, page_url) {
        (Some(href), Some(page)) => page.join(href.trim()).ok().or_else(|| Some(page.clone())),
        (Some(href), None) => Url::parse(href.trim()).ok(),
        (None, page) => page.cloned(),
    }
}

/// Images with no `alt` attribute at all (an empty `alt=""` counts as present)
///
/// Sources resolve against [`base_url`].
pub fn images_without_alt(doc: &Html, page_url: Option<&Url>) -> Vec<MissingAltImage> {
    let base = base_url(doc, page_url);
    doc.select(&IMG_WITHOUT_ALT)
        .filter(rendered)
        .map(|img| MissingAltImage {
            src: img
                .value()
                .attr("src")
                .map(|src| crate::links::resolve(base.as_ref(), src))
                .unwrap_or_default(),
            dimensions: format!("{}x{}", dimension(&img, "width"), dimension(&img, "height")),
        })
        .collect()
}

// No layout happens here, so the declared attribute is the only size available
fn dimension(img: &ElementRef, attr: &str) -> u32 {
    img.value()
        .attr(attr)
        .and_then(|value| value.trim().trim_end_matches("px").parse().ok())
        .unwrap_or(0)
}

/// Raw `href` values of every anchor
pub fn link_hrefs(doc: &Html) -> Vec<&str> {
    doc.select(&ANCHOR)
        .filter(rendered)
        .filter_map(|a| a.value().attr("href"))
        .collect()
}

/// Open Graph and Twitter card metadata
pub fn social_tags(doc: &Html) -> SocialTags {
    SocialTags {
        og_title: meta_content(doc, &OG_TITLE),
        og_description: meta_content(doc, &OG_DESCRIPTION),
        og_image: meta_content(doc, &OG_IMAGE),
        twitter_card: meta_content(doc, &TWITTER_CARD),
    }
}
