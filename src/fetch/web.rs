use crate::config::AnalyzerConfig;
use crate::error::{Result, SeoError};
use crate::fetch::{self, FetchedPage, PageFetcher};
use fantoccini::{Client, ClientBuilder};
use tokio::time::timeout;
use url::Url;

/// Loads live pages through a WebDriver session.
///
/// The session is opened lazily on the first fetch and reused until
/// [`WebFetcher::close`] is called.
pub struct WebFetcher {
    config: AnalyzerConfig,
    client: Option<Client>,
}

impl WebFetcher {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            client: None,
        }
    }

    /// Close the WebDriver session, if one was opened
    pub async fn close(&mut self) {
        if let Some(client) = self.client.take() {
            if let Err(e) = client.close().await {
                ::log::warn!("Failed to close WebDriver session: {}", e);
            }
        }
    }

    /// Returns the live client, connecting first if needed
    async fn client(&mut self) -> Result<&mut Client> {
        if self.client.is_none() {
            self.client = Some(connect(&self.config).await?);
        }
        self.client
            .as_mut()
            .ok_or_else(|| SeoError::WebDriver("no WebDriver session".to_string()))
    }

    /// Navigate and read the page source within the page-load timeout
    async fn load(&mut self, url: &str) -> Result<String> {
        let secs = self.config.page_load_timeout_secs;
        let limit = self.config.page_load_timeout();
        let client = self.client().await?;

        let loaded = timeout(limit, async {
            client
                .goto(url)
                .await
                .map_err(|e| command_error(e, "accessing", url))?;
            client
                .source()
                .await
                .map_err(|e| command_error(e, "getting source for", url))
        })
        .await;

        match loaded {
            Ok(result) => result,
            Err(_) => {
                ::log::error!("Timeout loading: {}", url);
                Err(SeoError::Timeout {
                    url: url.to_string(),
                    secs,
                })
            }
        }
    }
}

impl PageFetcher for WebFetcher {
    async fn fetch(&mut self, target: &str) -> Result<FetchedPage> {
        fetch::ensure_analyzable(target)?;
        let page_url =
            Url::parse(target).map_err(|e| SeoError::InvalidUrl(target.to_string(), e))?;

        let started = std::time::Instant::now();
        ::log::debug!("Loading page: {}", target);

        // One retry after reconnecting if the session went away mid-load
        let mut attempt = 0;
        let html = loop {
            match self.load(target).await {
                Ok(html) => break html,
                Err(e) if attempt == 0 && is_lost_session(&e) => {
                    ::log::warn!("WebDriver session lost, reconnecting");
                    self.client = None;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        };

        ::log::info!(
            "Loaded {} ({} bytes) in {:.2} seconds",
            target,
            html.len(),
            started.elapsed().as_secs_f64()
        );

        Ok(FetchedPage {
            url: target.to_string(),
            page_url: Some(page_url),
            html,
        })
    }
}

/// Connect to the configured WebDriver, then to each fallback in turn
async fn connect(config: &AnalyzerConfig) -> Result<Client> {
    match ClientBuilder::native().connect(&config.webdriver_url).await {
        Ok(client) => {
            ::log::debug!("Connected to WebDriver at {}", config.webdriver_url);
            return Ok(client);
        }
        Err(e) => {
            ::log::error!(
                "Failed to connect to WebDriver at {}: {}",
                config.webdriver_url,
                e
            );
        }
    }

    for url in &config.connect_fallbacks {
        if *url == config.webdriver_url {
            continue;
        }

        ::log::info!("Trying fallback WebDriver URL: {}", url);
        if let Ok(client) = ClientBuilder::native().connect(url).await {
            ::log::debug!("Connected to fallback WebDriver at {}", url);
            return Ok(client);
        }
    }

    ::log::error!(
        "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
    );
    Err(SeoError::WebDriver(format!(
        "could not connect to {} or any fallback",
        config.webdriver_url
    )))
}

fn command_error(error: fantoccini::error::CmdError, context: &str, url: &str) -> SeoError {
    ::log::error!("Error {} {}: {}", context, url, error);
    SeoError::Command {
        context: context.to_string(),
        url: url.to_string(),
        message: error.to_string(),
    }
}

fn is_lost_session(error: &SeoError) -> bool {
    match error {
        SeoError::Command { message, .. } => {
            message.contains("Unable to find session") || message.contains("invalid session id")
        }
        _ => false,
    }
}
