use super::SAMPLE_PAGE;
use crate::extract::html;
use scraper::Html;
use url::Url;

#[cfg(test)]
mod element_tests {
    use super::*;

    #[test]
    fn test_title_and_meta() {
        let doc = Html::parse_document(SAMPLE_PAGE);
        assert_eq!(html::title(&doc), "Rust SEO Toolkit: Analyze Pages Quickly");
        assert_eq!(
            html::meta_description(&doc),
            "Score keywords and readability for any page."
        );
    }

    #[test]
    fn test_missing_title_and_meta() {
        let doc = Html::parse_document("<html><body><p>Bare page</p></body></html>");
        assert_eq!(html::title(&doc), "");
        assert_eq!(html::meta_description(&doc), "");
    }

    #[test]
    fn test_body_text_skips_scripts_and_styles() {
        let doc = Html::parse_document(SAMPLE_PAGE);
        let text = html::body_text(&doc);
        assert!(text.starts_with("Rust SEO Toolkit Keywords Keyword scoring"));
        assert!(text.ends_with("Docs Blog Crates Top"));
        assert!(!text.contains("ignored"));
        assert!(!text.contains("display"));
        assert!(!text.contains("  "));
    }

    #[test]
    fn test_heading_counts() {
        let doc = Html::parse_document(SAMPLE_PAGE);
        assert_eq!(html::heading_counts(&doc), (1, 2));
    }

    #[test]
    fn test_images_without_alt() {
        let doc = Html::parse_document(SAMPLE_PAGE);
        let base = Url::parse("https://example.com/tools/").unwrap();
        let images = html::images_without_alt(&doc, Some(&base));

        // alt="" counts as present
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].src, "https://example.com/images/logo.png");
        assert_eq!(images[0].dimensions, "120x40");
        assert_eq!(images[1].src, "https://cdn.example.net/hero.jpg");
        assert_eq!(images[1].dimensions, "0x0");
    }

    #[test]
    fn test_images_without_base_keep_raw_src() {
        let doc = Html::parse_document(SAMPLE_PAGE);
        let images = html::images_without_alt(&doc, None);
        assert_eq!(images[0].src, "/images/logo.png");
    }

    #[test]
    fn test_social_tags() {
        let doc = Html::parse_document(SAMPLE_PAGE);
        let tags = html::social_tags(&doc);
        assert_eq!(tags.og_title, "Rust SEO Toolkit");
        assert_eq!(tags.og_description, "");
        assert_eq!(tags.og_image, "https://example.com/card.png");
        assert_eq!(tags.twitter_card, "summary_large_image");
    }

    #[test]
    fn test_link_hrefs() {
        let doc = Html::parse_document(SAMPLE_PAGE);
        assert_eq!(
            html::link_hrefs(&doc),
            vec!["/docs", "https://example.com/blog", "https://crates.io/", "#top"]
        );
    }
}

#[cfg(test)]
mod rendering_tests {
    use super::*;

    #[test]
    fn test_title_whitespace_is_collapsed() {
        let doc = Html::parse_document(
            "<html><head><title>\n  Rust\n      SEO    Guide\n</title></head></html>",
        );
        assert_eq!(html::title(&doc), "Rust SEO Guide");
    }

    #[test]
    fn test_inline_markup_does_not_split_words() {
        let doc = Html::parse_document("<body><p>Sour<b>dough</b> bread</p></body>");
        assert_eq!(html::body_text(&doc), "Sourdough bread");
    }

    #[test]
    fn test_block_elements_are_separated() {
        let doc = Html::parse_document(
            "<body><ul><li>flour</li><li>water</li></ul><p>salt<br>yeast</p>\
             <div>crumb</div><div>crust</div></body>",
        );
        assert_eq!(html::body_text(&doc), "flour water salt yeast crumb crust");
    }

    #[test]
    fn test_template_contents_are_ignored() {
        let doc = Html::parse_document(
            "<body><h1>Shown</h1><template><h1>Hidden</h1><h2>Hidden</h2>\
             <img src=\"x.png\"><a href=\"/inner\">Inner</a></template>\
             <h2>Shown</h2></body>",
        );
        assert_eq!(html::heading_counts(&doc), (1, 1));
        assert!(html::images_without_alt(&doc, None).is_empty());
        assert!(html::link_hrefs(&doc).is_empty());
        assert_eq!(html::body_text(&doc), "Shown Shown");
    }

    #[test]
    fn test_images_resolve_against_base_href() {
        let doc = Html::parse_document(
            "<html><head><base href=\"/static/\"></head>\
             <body><img src=\"logo.png\"></body></html>",
        );
        let page = Url::parse("https://example.com/blog/post").unwrap();

        assert_eq!(
            html::base_url(&doc, Some(&page)).unwrap().as_str(),
            "https://example.com/static/"
        );
        let images = html::images_without_alt(&doc, Some(&page));
        assert_eq!(images[0].src, "https://example.com/static/logo.png");
    }

    #[test]
    fn test_absolute_base_href_without_page_url() {
        let doc = Html::parse_document(
            "<html><head><base href=\"https://cdn.example.net/assets/\"></head>\
             <body><img src=\"hero.jpg\"></body></html>",
        );
        let images = html::images_without_alt(&doc, None);
        assert_eq!(images[0].src, "https://cdn.example.net/assets/hero.jpg");
    }
}
