pub mod file;
pub mod web;

use crate::PageSource;
use crate::config::AnalyzerConfig;
use crate::error::{Result, SeoError};
use std::future::Future;
use url::Url;

/// Raw HTML of a page together with where it came from
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Location as displayed in reports
    pub url: String,

    /// Parsed location, used to resolve relative references
    pub page_url: Option<Url>,

    /// Page source
    pub html: String,
}

/// A way of obtaining page HTML
pub trait PageFetcher {
    /// Load one page and return its source
    fn fetch(&mut self, target: &str) -> impl Future<Output = Result<FetchedPage>> + Send;
}

/// Browser-internal pages cannot be analysed
pub fn ensure_analyzable(url: &str) -> Result<()> {
    if url.starts_with("chrome://") {
        ::log::warn!("Cannot run on chrome:// pages: {}", url);
        return Err(SeoError::RestrictedPage(url.to_string()));
    }
    Ok(())
}

/// Fetch a page from whichever source it lives in
pub async fn fetch_page(source: &PageSource, config: &AnalyzerConfig) -> Result<FetchedPage> {
    match source {
        PageSource::Web(url) => {
            let mut fetcher = web::WebFetcher::new(config.clone());
            let result = fetcher.fetch(url).await;
            fetcher.close().await;
            result
        }
        PageSource::File(path) => {
            let mut fetcher = file::FileFetcher;
            fetcher.fetch(&path.to_string_lossy()).await
        }
    }
}
