use crate::analysis::DEFAULT_MAX_KEYWORDS;
use crate::error::{Result, SeoError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the WebDriver URL
pub const WEBDRIVER_URL_ENV: &str = "WEBDRIVER_URL";

/// Configuration for page analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Alternative WebDriver URLs tried when the primary one refuses the connection
    #[serde(default = "default_connect_fallbacks")]
    pub connect_fallbacks: Vec<String>,

    /// Maximum number of keywords kept per page
    #[serde(default = "default_max_keywords")]
    pub max_keywords: usize,

    /// Seconds allowed for navigating to a page and reading its source
    #[serde(default = "default_page_load_timeout_secs")]
    pub page_load_timeout_secs: u64,

    /// Directory exports are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Common local driver endpoints
fn default_connect_fallbacks() -> Vec<String> {
    vec![
        "http://localhost:9515".to_string(), // ChromeDriver default
        "http://127.0.0.1:4444".to_string(),
    ]
}

fn default_max_keywords() -> usize {
    DEFAULT_MAX_KEYWORDS
}

fn default_page_load_timeout_secs() -> u64 {
    45
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            connect_fallbacks: default_connect_fallbacks(),
            max_keywords: default_max_keywords(),
            page_load_timeout_secs: default_page_load_timeout_secs(),
            output_dir: default_output_dir(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        ::log::debug!("Loaded configuration from {}", path.display());
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply the `WEBDRIVER_URL` environment override, if set and non-empty
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(webdriver_url) = std::env::var(WEBDRIVER_URL_ENV) {
            if !webdriver_url.is_empty() {
                self.webdriver_url = webdriver_url;
            }
        }
        self
    }

    /// Page-load timeout as a duration
    pub fn page_load_timeout(&self) -> Duration {
        Duration::from_secs(self.page_load_timeout_secs)
    }

    /// Reject values that would make an analysis meaningless
    pub fn validate(&self) -> Result<()> {
        if self.webdriver_url.trim().is_empty() {
            return Err(SeoError::Config("webdriver_url must not be empty".to_string()));
        }
        if self.page_load_timeout_secs == 0 {
            return Err(SeoError::Config(
                "page_load_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.webdriver_url, "http://localhost:4444");
        assert_eq!(config.max_keywords, 10);
        assert_eq!(config.page_load_timeout(), Duration::from_secs(45));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = AnalyzerConfig::from_json(r#"{"max_keywords": 5}"#).unwrap();
        assert_eq!(config.max_keywords, 5);
        assert_eq!(config.webdriver_url, "http://localhost:4444");
        assert_eq!(config.output_dir, PathBuf::from("."));

        let empty = AnalyzerConfig::from_json("{}").unwrap();
        assert_eq!(empty, AnalyzerConfig::default());
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            AnalyzerConfig::from_json(r#"{"page_load_timeout_secs": 0}"#),
            Err(SeoError::Config(_))
        ));
        assert!(matches!(
            AnalyzerConfig::from_json(r#"{"webdriver_url": " "}"#),
            Err(SeoError::Config(_))
        ));
        assert!(matches!(
            AnalyzerConfig::from_json("not json"),
            Err(SeoError::Json(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"webdriver_url": "http://driver:9515", "output_dir": "reports"}}"#
        )
        .unwrap();

        let config = AnalyzerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.webdriver_url, "http://driver:9515");
        assert_eq!(config.output_dir, PathBuf::from("reports"));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            AnalyzerConfig::from_file("/definitely/not/here.json"),
            Err(SeoError::Io(_))
        ));
    }
}
