// SPDX-License-Identifier: MIT
// Raw DevTools client — sequential JSON command/response over one WebSocket.

use super::CdpError;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpStream;
use tokio_tungstenite::{
    connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream,
};
use tracing::{debug, trace, warn};

/// One entry from `GET {devtools}/json/list`.
#[derive(Debug, Deserialize)]
struct TargetInfo {
    #[serde(rename = "type")]
    kind: String,
    #[serde(rename = "webSocketDebuggerUrl")]
    ws_url: Option<String>,
    url: Option<String>,
}

/// Find the WebSocket debugger URL of the first page target.
///
/// `devtools_url` is the HTTP endpoint of the browser's debugging server,
/// e.g. `http://127.0.0.1:9222`.
pub async fn discover_page(devtools_url: &str) -> Result<String, CdpError> {
    let list_url = format!("{}/json/list", devtools_url.trim_end_matches('/'));
    let targets: Vec<TargetInfo> = reqwest::get(&list_url)
        .await
        .map_err(|source| CdpError::Discovery {
            url: list_url.clone(),
            source,
        })?
        .json()
        .await
        .map_err(|source| CdpError::Discovery {
            url: list_url,
            source,
        })?;

    for target in targets {
        if target.kind == "page" {
            if let Some(ws_url) = target.ws_url {
                debug!(url = ?target.url, "page tab found");
                return Ok(ws_url);
            }
        }
    }
    Err(CdpError::TabNotFound)
}

/// A connected debugging session against one page tab.
///
/// Strictly sequential: `call` owns the socket for the duration of one
/// round trip, skipping interleaved event notifications until the response
/// with the matching id arrives. There is no command pipelining — the
/// capture loops issue one round trip at a time by design.
pub struct CdpClient {
    ws: WebSocketStream<MaybeTlsStream<TcpStream>>,
    next_id: u64,
}

impl CdpClient {
    /// Connect to a page target's WebSocket debugger URL.
    pub async fn connect(ws_url: &str) -> Result<Self, CdpError> {
        let (ws, _) = connect_async(ws_url).await?;
        debug!(url = %ws_url, "debugging session open");
        Ok(Self { ws, next_id: 0 })
    }

    /// Discover the first page tab at `devtools_url` and connect to it.
    pub async fn connect_to_first_page(devtools_url: &str) -> Result<Self, CdpError> {
        let ws_url = discover_page(devtools_url).await?;
        Self::connect(&ws_url).await
    }

    /// Issue one command and block until its response arrives.
    pub async fn call(&mut self, method: &str, params: Value) -> Result<Value, CdpError> {
        self.next_id += 1;
        let id = self.next_id;
        let frame = json!({ "id": id, "method": method, "params": params });
        trace!(id, method, "-> command");
        self.ws.send(Message::Text(frame.to_string())).await?;

        loop {
            let msg = match self.ws.next().await {
                Some(m) => m?,
                None => {
                    return Err(CdpError::ConnectionClosed {
                        method: method.to_string(),
                        id,
                    })
                }
            };
            let text = match msg {
                Message::Text(t) => t,
                Message::Ping(data) => {
                    self.ws.send(Message::Pong(data)).await?;
                    continue;
                }
                Message::Close(_) => {
                    return Err(CdpError::ConnectionClosed {
                        method: method.to_string(),
                        id,
                    })
                }
                _ => continue,
            };

            let value: Value = serde_json::from_str(&text)?;
            if value.get("id").and_then(Value::as_u64) != Some(id) {
                // Unsolicited protocol event — the capture loops don't
                // subscribe to any, so skip it.
                trace!(event = ?value.get("method"), "<- event skipped");
                continue;
            }
            if let Some(err) = value.get("error") {
                let message = err
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown protocol error")
                    .to_string();
                return Err(CdpError::Protocol {
                    method: method.to_string(),
                    message,
                });
            }
            trace!(id, method, "<- response");
            return Ok(value.get("result").cloned().unwrap_or(Value::Null));
        }
    }

    /// Navigate the page, retrying exactly once with identical parameters.
    pub async fn navigate(&mut self, url: &str) -> Result<(), CdpError> {
        match self.try_navigate(url).await {
            Ok(()) => Ok(()),
            Err(first) => {
                warn!(url = %url, err = %first, "navigation failed — retrying once");
                self.try_navigate(url)
                    .await
                    .map_err(|second| CdpError::Navigation {
                        url: url.to_string(),
                        detail: second.to_string(),
                    })
            }
        }
    }

    async fn try_navigate(&mut self, url: &str) -> Result<(), CdpError> {
        let result = self.call("Page.navigate", json!({ "url": url })).await?;
        if let Some(error_text) = result.get("errorText").and_then(Value::as_str) {
            if !error_text.is_empty() {
                return Err(CdpError::Navigation {
                    url: url.to_string(),
                    detail: error_text.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Evaluate an expression in page context, returning its value.
    pub async fn evaluate(&mut self, expression: &str) -> Result<Value, CdpError> {
        let result = self
            .call(
                "Runtime.evaluate",
                json!({ "expression": expression, "returnByValue": true }),
            )
            .await?;
        if let Some(exception) = result.get("exceptionDetails") {
            let message = exception
                .get("text")
                .and_then(Value::as_str)
                .unwrap_or("evaluate threw")
                .to_string();
            return Err(CdpError::Protocol {
                method: "Runtime.evaluate".to_string(),
                message,
            });
        }
        Ok(result
            .pointer("/result/value")
            .cloned()
            .unwrap_or(Value::Null))
    }

    /// Capture the current viewport as PNG bytes.
    pub async fn capture_screenshot(&mut self) -> Result<Vec<u8>, CdpError> {
        let result = self
            .call("Page.captureScreenshot", json!({ "format": "png" }))
            .await?;
        let data = result
            .get("data")
            .and_then(Value::as_str)
            .ok_or_else(|| CdpError::Protocol {
                method: "Page.captureScreenshot".to_string(),
                message: "response carried no data field".to_string(),
            })?;
        Ok(BASE64.decode(data)?)
    }
}
