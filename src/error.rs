use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeoError {
    #[error("WebDriver connection failed: {0}")]
    WebDriver(String),

    #[error("WebDriver command failed while {context} {url}: {message}")]
    Command {
        context: String,
        url: String,
        message: String,
    },

    #[error("SEO analysis is not available on chrome:// pages: {0}")]
    RestrictedPage(String),

    #[error("Timed out after {secs}s loading {url}")]
    Timeout { url: String, secs: u64 },

    #[error("Invalid URL {0}: {1}")]
    InvalidUrl(String, url::ParseError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Analysis already in progress for tab {0}")]
    AnalysisInProgress(u32),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Analysis for tab {0} was dropped before completing")]
    AnalysisCancelled(u32),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SeoError>;
