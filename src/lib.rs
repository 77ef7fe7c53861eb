pub mod analysis;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod links;
pub mod report;
pub mod session;
pub mod signals;
pub mod utils;

// Re-export commonly used types for convenience
pub use analysis::{ReadabilityResult, ScoredKeyword};
pub use config::AnalyzerConfig;
pub use error::{Result, SeoError};
pub use report::SeoReport;
pub use signals::PageSignals;

use std::path::PathBuf;
use std::time::Duration;

/// Where the page to analyse comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    /// Live page loaded through WebDriver
    Web(String),
    /// Saved HTML file
    File(PathBuf),
}

/// Runs the extraction and evaluation pipeline on HTML already in memory
pub fn analyze_html(html: &str, page_url: Option<&url::Url>, max_keywords: usize) -> SeoReport {
    let signals = extract::extract_signals(html, page_url, max_keywords);
    let url = page_url.map(|u| u.to_string()).unwrap_or_default();
    SeoReport::build(url, signals)
}

/// Fetches a page and analyses it
pub async fn analyze(source: &PageSource, config: &AnalyzerConfig) -> Result<SeoReport> {
    let page = fetch::fetch_page(source, config).await?;
    let mut report = analyze_html(&page.html, page.page_url.as_ref(), config.max_keywords);
    report.url = page.url;

    ::log::info!(
        "Analysis complete for {}: readability {}, {} keywords, {} suggestions",
        report.url,
        report.readability.display_score(),
        report.signals.keywords.len(),
        report.suggestions.len()
    );
    Ok(report)
}

/// Builder for a single-page analysis
pub struct Analysis {
    source: PageSource,
    config: AnalyzerConfig,
}

impl Analysis {
    /// Create a new analysis of the given page with default configuration
    pub fn new(source: PageSource) -> Self {
        Self {
            source,
            config: AnalyzerConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config = AnalyzerConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(self, config_str: &str) -> Result<Self> {
        let config = AnalyzerConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    /// Set how many keywords are kept
    pub fn with_max_keywords(mut self, max_keywords: usize) -> Self {
        self.config.max_keywords = max_keywords;
        self
    }

    /// Set the page-load timeout
    pub fn with_page_load_timeout(mut self, timeout: Duration) -> Self {
        self.config.page_load_timeout_secs = timeout.as_secs().max(1);
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Fetch, extract and evaluate the page
    pub async fn run(self) -> Result<SeoReport> {
        let config = self.config.with_env_overrides();
        config.validate()?;
        analyze(&self.source, &config).await
    }
}
