//! Request/response protocol for running analyses on behalf of tabs.
//!
//! A caller submits [`Request::AnalyzeSeo`] and immediately gets back a
//! [`PendingAnalysis`]; the result arrives later as a [`Response`]. Each tab
//! may have at most one analysis in flight.

use crate::PageSource;
use crate::config::AnalyzerConfig;
use crate::error::{Result, SeoError};
use crate::report::SeoReport;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// Identifies the tab (caller context) an analysis belongs to
pub type TabId = u32;

/// Messages accepted by the service
#[derive(Debug, Clone)]
pub enum Request {
    /// Analyse the page currently shown in `tab`
    AnalyzeSeo { tab: TabId, source: PageSource },
}

/// Messages produced by the service
#[derive(Debug, Clone)]
pub enum Response {
    /// Analysis finished
    SeoDataReady(Box<SeoReport>),
    /// Analysis could not be completed
    Failed(String),
}

type InFlight = Arc<Mutex<HashSet<TabId>>>;

/// Releases a tab when the analysis task ends, however it ends
struct TabGuard {
    tab: TabId,
    in_flight: InFlight,
}

impl Drop for TabGuard {
    fn drop(&mut self) {
        let mut tabs = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        tabs.remove(&self.tab);
        ::log::debug!("Tab {} released", self.tab);
    }
}

/// Handle to an analysis that has been started
#[derive(Debug)]
pub struct PendingAnalysis {
    tab: TabId,
    rx: oneshot::Receiver<Response>,
}

impl PendingAnalysis {
    pub fn tab(&self) -> TabId {
        self.tab
    }

    /// Wait for the raw response message
    pub async fn response(self) -> Result<Response> {
        self.rx
            .await
            .map_err(|_| SeoError::AnalysisCancelled(self.tab))
    }

    /// Wait for the report, turning a failure response into an error
    pub async fn report(self) -> Result<SeoReport> {
        let tab = self.tab;
        match self.response().await? {
            Response::SeoDataReady(report) => Ok(*report),
            Response::Failed(message) => {
                ::log::warn!("Analysis for tab {} failed: {}", tab, message);
                Err(SeoError::AnalysisFailed(message))
            }
        }
    }
}

/// Runs analyses in background tasks, one at a time per tab
#[derive(Debug, Clone)]
pub struct AnalysisService {
    config: AnalyzerConfig,
    in_flight: InFlight,
}

impl AnalysisService {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Whether `tab` currently has an analysis running
    pub fn is_busy(&self, tab: TabId) -> bool {
        let tabs = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        tabs.contains(&tab)
    }

    /// Start handling a request.
    ///
    /// Must be called from within a tokio runtime. Fails with
    /// [`SeoError::AnalysisInProgress`] if the tab is already busy.
    pub fn submit(&self, request: Request) -> Result<PendingAnalysis> {
        let Request::AnalyzeSeo { tab, source } = request;

        {
            let mut tabs = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
            if !tabs.insert(tab) {
                ::log::warn!("Tab {} already has an analysis in progress", tab);
                return Err(SeoError::AnalysisInProgress(tab));
            }
        }

        let guard = TabGuard {
            tab,
            in_flight: self.in_flight.clone(),
        };
        let config = self.config.clone();
        let (tx, rx) = oneshot::channel();

        ::log::info!("Analysis started for tab {}", tab);
        tokio::spawn(async move {
            let response = match crate::analyze(&source, &config).await {
                Ok(report) => Response::SeoDataReady(Box::new(report)),
                Err(e) => Response::Failed(e.to_string()),
            };

            // Free the tab before replying so the caller can resubmit right away
            drop(guard);
            if tx.send(response).is_err() {
                ::log::debug!("Tab {} stopped waiting for its analysis", tab);
            }
        });

        Ok(PendingAnalysis { tab, rx })
    }
}
