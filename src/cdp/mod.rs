//! Remote-debugging transport for the configurator page.
//!
//! Targets are discovered over plain HTTP (`GET {devtools}/json/list`);
//! commands then flow over a raw WebSocket as JSON frames keyed by a
//! monotonically increasing integer id, one blocking round trip at a time.

pub mod client;
pub mod ready;

pub use client::CdpClient;
pub use ready::{ReadyProbe, ReadyState};

use thiserror::Error;

/// Typed transport errors.
///
/// Most of these abort the current run — the capture scripts carry no
/// recovery strategy beyond the single navigation retry (see
/// [`CdpClient::navigate`]).
#[derive(Debug, Error)]
pub enum CdpError {
    #[error("DevTools endpoint unreachable at {url}: {source}")]
    Discovery {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("no debuggable page tab found at the DevTools endpoint")]
    TabNotFound,

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("connection closed while awaiting response to {method} (id {id})")]
    ConnectionClosed { method: String, id: u64 },

    #[error("{method} returned a protocol error: {message}")]
    Protocol { method: String, message: String },

    #[error("navigation to {url} failed twice: {detail}")]
    Navigation { url: String, detail: String },

    #[error("page did not report ready after {attempts} attempts")]
    ReadyTimeout { attempts: u32 },

    #[error("screenshot payload was not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
