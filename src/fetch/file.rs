use crate::error::Result;
use crate::fetch::{FetchedPage, PageFetcher};
use std::path::Path;
use url::Url;

/// Reads saved HTML pages from disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFetcher;

impl PageFetcher for FileFetcher {
    async fn fetch(&mut self, target: &str) -> Result<FetchedPage> {
        ::log::debug!("Reading page from file: {}", target);
        let html = tokio::fs::read_to_string(target).await?;

        let page_url = match tokio::fs::canonicalize(Path::new(target)).await {
            Ok(path) => Url::from_file_path(path).ok(),
            Err(_) => None,
        };
        let url = page_url
            .as_ref()
            .map(Url::to_string)
            .unwrap_or_else(|| target.to_string());

        ::log::info!("Read {} bytes from {}", html.len(), url);
        Ok(FetchedPage {
            url,
            page_url,
            html,
        })
    }
}
