pub mod admin;
pub mod camera;
pub mod capture;
pub mod cdp;
pub mod config;
pub mod panel;
pub mod scene;
pub mod sequence;
pub mod timeline;

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use cdp::{CdpClient, CdpError};
use config::CaptureConfig;
use sequence::SequenceStore;

/// Shared application state passed to every admin route handler.
pub struct AppContext {
    pub config: Arc<CaptureConfig>,
    pub store: SequenceStore,
    /// Lazily-opened DevTools session.  `None` until the first route needs
    /// the browser, and reset to `None` whenever a call fails so the next
    /// request reconnects.
    pub page: tokio::sync::Mutex<Option<CdpClient>>,
    pub started_at: std::time::Instant,
}

impl AppContext {
    pub fn new(config: CaptureConfig) -> Self {
        let store = SequenceStore::new(config.output_dir.clone());
        Self {
            config: Arc::new(config),
            store,
            page: tokio::sync::Mutex::new(None),
            started_at: std::time::Instant::now(),
        }
    }

    /// Evaluate an expression in the connected page, connecting on demand.
    /// A failed call drops the session so the next request reconnects.
    pub async fn evaluate(&self, expression: &str) -> Result<Value, CdpError> {
        let mut guard = self.page.lock().await;
        let mut client = match guard.take() {
            Some(c) => c,
            None => {
                debug!(devtools_url = %self.config.devtools_url, "opening devtools session");
                CdpClient::connect_to_first_page(&self.config.devtools_url).await?
            }
        };
        match client.evaluate(expression).await {
            Ok(value) => {
                *guard = Some(client);
                Ok(value)
            }
            Err(e) => {
                warn!(err = %e, "devtools call failed, dropping session");
                Err(e)
            }
        }
    }

    /// Navigate the connected page, connecting on demand.
    pub async fn navigate(&self, url: &str) -> Result<(), CdpError> {
        let mut guard = self.page.lock().await;
        let mut client = match guard.take() {
            Some(c) => c,
            None => CdpClient::connect_to_first_page(&self.config.devtools_url).await?,
        };
        match client.navigate(url).await {
            Ok(()) => {
                *guard = Some(client);
                Ok(())
            }
            Err(e) => {
                warn!(err = %e, "devtools navigate failed, dropping session");
                Err(e)
            }
        }
    }
}
