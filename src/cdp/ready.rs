//! Page-ready polling as an explicit state machine.
//!
//! The scripts polled a readiness flag on a fixed interval up to 50
//! attempts and failed silently past the bound. Here the attempt count and
//! the failure are explicit states, and the transition function is pure so
//! the bound can be tested without a browser.

use super::{CdpClient, CdpError};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, trace};

/// Where the probe currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    /// Still polling; `attempt` counts probes already made.
    Initializing { attempt: u32 },
    Ready,
    /// The bound was exhausted without the page reporting ready.
    FailedAfterAttempts(u32),
}

/// Fixed-interval readiness probe.
#[derive(Debug, Clone, Copy)]
pub struct ReadyProbe {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl Default for ReadyProbe {
    fn default() -> Self {
        Self {
            max_attempts: 50,
            interval: Duration::from_millis(200),
        }
    }
}

impl ReadyProbe {
    /// Advance the state machine with one probe result.
    pub fn step(self, state: ReadyState, page_ready: bool) -> ReadyState {
        match state {
            ReadyState::Ready => ReadyState::Ready,
            ReadyState::FailedAfterAttempts(n) => ReadyState::FailedAfterAttempts(n),
            ReadyState::Initializing { attempt } => {
                if page_ready {
                    ReadyState::Ready
                } else if attempt + 1 >= self.max_attempts {
                    ReadyState::FailedAfterAttempts(attempt + 1)
                } else {
                    ReadyState::Initializing {
                        attempt: attempt + 1,
                    }
                }
            }
        }
    }

    /// Poll the page until it reports ready or the attempt bound is hit.
    ///
    /// Readiness means `document.readyState === "complete"` and the
    /// configurator's own scene-ready flag, when present, is set.
    pub async fn wait_ready(&self, client: &mut CdpClient) -> Result<(), CdpError> {
        const EXPR: &str = "document.readyState === 'complete' \
             && (window.sceneReady === undefined || window.sceneReady === true)";

        let mut state = ReadyState::Initializing { attempt: 0 };
        loop {
            let ready = matches!(client.evaluate(EXPR).await?, Value::Bool(true));
            state = self.step(state, ready);
            trace!(?state, "ready probe");
            match state {
                ReadyState::Ready => {
                    debug!("page ready");
                    return Ok(());
                }
                ReadyState::FailedAfterAttempts(attempts) => {
                    return Err(CdpError::ReadyTimeout { attempts });
                }
                ReadyState::Initializing { .. } => {
                    tokio::time::sleep(self.interval).await;
                }
            }
        }
    }
}
