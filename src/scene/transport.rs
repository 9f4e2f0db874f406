//! State transport: JSON → base64 → `state=` URL query parameter.
//!
//! The external app decodes the parameter itself; nothing here is read back.

use super::SceneState;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

/// Serialize a scene state to the base64 payload the app expects.
pub fn encode_state(state: &SceneState) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(state)?;
    Ok(BASE64.encode(json.as_bytes()))
}

/// Append the encoded state as a `state=` query parameter.
///
/// Query separators are handled textually — the base URL is taken as the
/// caller wrote it, with or without an existing query string.
pub fn state_url(base: &str, state: &SceneState) -> Result<String, serde_json::Error> {
    let payload = encode_state(state)?;
    let sep = if base.contains('?') { '&' } else { '?' };
    Ok(format!("{base}{sep}state={payload}"))
}
