use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::error;

const DEFAULT_DEVTOOLS_URL: &str = "http://127.0.0.1:9222";
const DEFAULT_APP_URL: &str = "http://127.0.0.1:8080/";
const DEFAULT_ADMIN_PORT: u16 = 4310;

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

// ─── ReadyConfig ──────────────────────────────────────────────────────────────

/// Page-ready probe configuration (`[ready]` in shedcap.toml).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReadyConfig {
    /// Probe attempts before giving up (default: 50).
    pub max_attempts: u32,
    /// Interval between probes, milliseconds (default: 200).
    pub interval_ms: u64,
}

impl Default for ReadyConfig {
    fn default() -> Self {
        Self {
            max_attempts: 50,
            interval_ms: 200,
        }
    }
}

// ─── TOML config file ─────────────────────────────────────────────────────────

/// `shedcap.toml` — all fields are optional overrides.
/// Priority: CLI / env var  >  TOML  >  built-in default.
#[derive(Deserialize, Default)]
struct TomlConfig {
    /// DevTools HTTP endpoint of the remote browser.
    devtools_url: Option<String>,
    /// Base URL of the configurator page.
    app_url: Option<String>,
    /// Directory for frames, per-frame configs, and sequence.json.
    output_dir: Option<PathBuf>,
    /// Admin HTTP API port (default: 4310).
    admin_port: Option<u16>,
    /// Bind address for the admin API (default: "127.0.0.1").
    bind_address: Option<String>,
    /// Log level filter string, e.g. "debug", "info,shedcap=trace".
    log: Option<String>,
    /// Log output format: "pretty" (default) | "json".
    log_format: Option<String>,
    /// Per-frame settle delay override, milliseconds.
    settle_ms: Option<u64>,
    /// Style-switch hold override, milliseconds.
    style_pause_ms: Option<u64>,
    /// Page-ready probe (`[ready]`).
    ready: Option<ReadyConfig>,
}

fn load_toml(path: &Path) -> Option<TomlConfig> {
    let contents = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<TomlConfig>(&contents) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            error!(path = %path.display(), err = %e, "failed to parse shedcap.toml — using defaults");
            None
        }
    }
}

// ─── CaptureConfig ────────────────────────────────────────────────────────────

/// Resolved configuration for both the capture loops and the admin server.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// DevTools HTTP endpoint (SHEDCAP_DEVTOOLS_URL env var).
    pub devtools_url: String,
    /// Configurator base URL the `state=` parameter is appended to.
    pub app_url: String,
    /// Output directory root; each scenario writes into its own subdirectory.
    pub output_dir: PathBuf,
    pub admin_port: u16,
    pub bind_address: String,
    pub log: String,
    /// "pretty" | "json".
    pub log_format: String,
    /// Per-frame settle override; scenarios keep their own value when unset.
    pub settle_ms: Option<u64>,
    /// Style-switch pause override; scenarios keep their own value when unset.
    pub style_pause_ms: Option<u64>,
    pub ready: ReadyConfig,
}

impl CaptureConfig {
    /// Build config from CLI/env args + optional TOML file.
    ///
    /// Priority (highest to lowest):
    ///   1. CLI / env — passed as `Some(value)` from clap
    ///   2. TOML file (`--config`, default `./shedcap.toml`)
    ///   3. Built-in defaults
    pub fn new(
        config_path: Option<PathBuf>,
        devtools_url: Option<String>,
        app_url: Option<String>,
        output_dir: Option<PathBuf>,
        admin_port: Option<u16>,
        log: Option<String>,
    ) -> Self {
        let path = config_path.unwrap_or_else(|| PathBuf::from("shedcap.toml"));
        let toml = load_toml(&path).unwrap_or_default();

        let devtools_url = devtools_url
            .or(toml.devtools_url)
            .unwrap_or_else(|| DEFAULT_DEVTOOLS_URL.to_string());
        let app_url = app_url
            .or(toml.app_url)
            .unwrap_or_else(|| DEFAULT_APP_URL.to_string());
        let output_dir = output_dir
            .or(toml.output_dir)
            .unwrap_or_else(|| PathBuf::from("frames"));
        let admin_port = admin_port.or(toml.admin_port).unwrap_or(DEFAULT_ADMIN_PORT);

        let bind_address = std::env::var("SHEDCAP_BIND")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.bind_address)
            .unwrap_or_else(default_bind_address);

        let log = log.or(toml.log).unwrap_or_else(|| "info".to_string());
        let log_format = std::env::var("SHEDCAP_LOG_FORMAT")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.log_format)
            .unwrap_or_else(|| "pretty".to_string());

        let settle_ms = toml.settle_ms;
        let style_pause_ms = toml.style_pause_ms;
        let ready = toml.ready.unwrap_or_default();

        Self {
            devtools_url,
            app_url,
            output_dir,
            admin_port,
            bind_address,
            log,
            log_format,
            settle_ms,
            style_pause_ms,
            ready,
        }
    }

    /// The ready probe this config describes.
    pub fn ready_probe(&self) -> crate::cdp::ReadyProbe {
        crate::cdp::ReadyProbe {
            max_attempts: self.ready.max_attempts,
            interval: std::time::Duration::from_millis(self.ready.interval_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_given() {
        let cfg = CaptureConfig::new(
            Some(PathBuf::from("/nonexistent/shedcap.toml")),
            None,
            None,
            None,
            None,
            None,
        );
        assert_eq!(cfg.devtools_url, DEFAULT_DEVTOOLS_URL);
        assert_eq!(cfg.admin_port, DEFAULT_ADMIN_PORT);
        assert_eq!(cfg.ready.max_attempts, 50);
    }

    #[test]
    fn cli_values_win_over_defaults() {
        let cfg = CaptureConfig::new(
            Some(PathBuf::from("/nonexistent/shedcap.toml")),
            Some("http://10.0.0.5:9222".to_string()),
            None,
            Some(PathBuf::from("/tmp/out")),
            Some(5000),
            Some("debug".to_string()),
        );
        assert_eq!(cfg.devtools_url, "http://10.0.0.5:9222");
        assert_eq!(cfg.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(cfg.admin_port, 5000);
        assert_eq!(cfg.log, "debug");
    }
}
