use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use shedcap::{
    capture::{builtin, builtin_names, CaptureRunner},
    cdp::CdpClient,
    config::CaptureConfig,
    sequence::SequenceStore,
    AppContext,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "shedcap",
    about = "Capture driver + admin daemon for a browser-based shed configurator",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to shedcap.toml (default: ./shedcap.toml)
    #[arg(long, env = "SHEDCAP_CONFIG")]
    config: Option<std::path::PathBuf>,

    /// DevTools HTTP endpoint of the remote browser
    #[arg(long, env = "SHEDCAP_DEVTOOLS_URL")]
    devtools_url: Option<String>,

    /// Base URL of the configurator page
    #[arg(long, env = "SHEDCAP_APP_URL")]
    app_url: Option<String>,

    /// Output directory for frames and sequence metadata
    #[arg(long, env = "SHEDCAP_OUTPUT_DIR")]
    output_dir: Option<std::path::PathBuf>,

    /// Admin HTTP API port (default: 4310)
    #[arg(long, env = "SHEDCAP_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SHEDCAP_LOG")]
    log: Option<String>,

    /// Write logs to this file path (rotated daily). Optional.
    #[arg(long, env = "SHEDCAP_LOG_FILE")]
    log_file: Option<std::path::PathBuf>,

    /// Suppress progress and informational output.
    ///
    /// Errors are still printed to stderr. JSON output (--json flags) is
    /// unaffected. Use this flag when piping output to other tools.
    #[arg(long, short = 'q', global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Start the admin API server (default when no subcommand given).
    ///
    /// Examples:
    ///   shedcap serve
    ///   shedcap
    Serve,
    /// Run one capture scenario against the connected browser.
    ///
    /// Connects to the first page target of the DevTools endpoint, drives
    /// the scenario frame by frame, and writes per-frame configs, PNGs,
    /// and sequence.json under the output directory.
    ///
    /// Examples:
    ///   shedcap capture orbit
    ///   shedcap capture morph --start-frame 45
    ///   shedcap capture --list
    Capture {
        /// Built-in scenario name (see --list)
        scenario: Option<String>,
        /// Resume from this frame number (1-based)
        #[arg(long, default_value_t = 1)]
        start_frame: u32,
        /// List the built-in scenarios and exit
        #[arg(long)]
        list: bool,
    },
    /// Inspect or initialise sequence metadata.
    Sequence {
        #[command(subcommand)]
        action: SequenceAction,
    },
}

#[derive(Subcommand)]
enum SequenceAction {
    /// Write a fresh, empty sequence.json.
    Init {
        name: String,
        #[arg(long)]
        total_frames: u32,
    },
    /// Print the recorded sequence metadata.
    Show {
        /// Print raw JSON instead of a summary line.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Init once — must happen before any tracing calls.
    let config = CaptureConfig::new(
        args.config,
        args.devtools_url,
        args.app_url,
        args.output_dir,
        args.port,
        args.log,
    );
    let log_level = if args.quiet {
        "error".to_string()
    } else {
        config.log.clone()
    };
    let _file_guard = setup_logging(&log_level, args.log_file.as_deref(), &config.log_format);

    let result = match args.command {
        Some(Command::Capture {
            scenario,
            start_frame,
            list,
        }) => run_capture(&config, scenario.as_deref(), start_frame, list).await,
        Some(Command::Sequence { action }) => run_sequence(&config, action).await,
        None | Some(Command::Serve) => run_serve(config).await,
    };

    if let Err(e) = result {
        error!(err = %e, "shedcap failed");
        std::process::exit(1);
    }
    Ok(())
}

async fn run_serve(config: CaptureConfig) -> Result<()> {
    info!(
        devtools_url = %config.devtools_url,
        output_dir = %config.output_dir.display(),
        "starting shedcap"
    );
    let ctx = Arc::new(AppContext::new(config));
    shedcap::admin::start_admin_server(ctx).await
}

async fn run_capture(
    config: &CaptureConfig,
    name: Option<&str>,
    start_frame: u32,
    list: bool,
) -> Result<()> {
    if list {
        for name in builtin_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let name = name.ok_or_else(|| anyhow!("missing scenario name (try --list)"))?;
    let mut scenario = builtin(name).ok_or_else(|| {
        anyhow!(
            "unknown scenario '{name}' — built-ins: {}",
            builtin_names().join(", ")
        )
    })?;
    // Config file can slow down or speed up every scenario uniformly.
    if let Some(ms) = config.settle_ms {
        scenario.settle_ms = ms;
    }
    if let Some(ms) = config.style_pause_ms {
        scenario.style_pause_ms = ms;
    }

    let store = SequenceStore::new(config.output_dir.join(&scenario.name));
    let mut client = CdpClient::connect_to_first_page(&config.devtools_url).await?;

    let runner = CaptureRunner::new(&scenario, &store, &config.app_url, config.ready_probe());
    let summary = runner.run(&mut client, start_frame).await?;
    info!(
        frames = summary.frames_captured,
        out_dir = %summary.out_dir.display(),
        "capture complete"
    );
    Ok(())
}

async fn run_sequence(config: &CaptureConfig, action: SequenceAction) -> Result<()> {
    match action {
        SequenceAction::Init { name, total_frames } => {
            let store = SequenceStore::new(config.output_dir.join(&name));
            let meta = store.init(&name, total_frames).await?;
            println!("initialised {} ({} frames)", meta.name, meta.total_frames);
        }
        SequenceAction::Show { json } => {
            let store = SequenceStore::new(config.output_dir.clone());
            let meta = store
                .load()
                .await?
                .ok_or_else(|| anyhow!("no sequence.json in {}", config.output_dir.display()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&meta)?);
            } else {
                println!(
                    "{}: {}/{} frames captured (created {})",
                    meta.name,
                    meta.frames.len(),
                    meta.total_frames,
                    meta.created_at
                );
            }
        }
    }
    Ok(())
}

/// Initialize the tracing subscriber.
/// If `log_file` is set, logs go to both stdout and a daily-rolling file.
/// Returns a `WorkerGuard` that must stay alive for the process lifetime.
///
/// `log_format` may be `"pretty"` (default, human-readable compact format) or
/// `"json"` (structured JSON for log aggregators).
///
/// If the log directory cannot be created, falls back to stdout-only logging
/// with a warning — never panics.
fn setup_logging(
    log_level: &str,
    log_file: Option<&std::path::Path>,
    log_format: &str,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let use_json = log_format == "json";

    if let Some(path) = log_file {
        let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
        let filename = path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("shedcap.log"));

        // Ensure the directory exists before tracing-appender tries to open it.
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!(
                "warn: could not create log directory '{}': {e} — falling back to stdout",
                dir.display()
            );
            if use_json {
                tracing_subscriber::fmt().json().with_env_filter(log_level).init();
            } else {
                tracing_subscriber::fmt().with_env_filter(log_level).compact().init();
            }
            return None;
        }

        let appender = tracing_appender::rolling::daily(dir, filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);

        if use_json {
            tracing_subscriber::registry()
                .with(EnvFilter::new(log_level))
                .with(fmt::layer().json())
                .with(fmt::layer().json().with_writer(non_blocking))
                .init();
        } else {
            tracing_subscriber::registry()
                .with(EnvFilter::new(log_level))
                .with(fmt::layer().compact())
                .with(fmt::layer().with_writer(non_blocking))
                .init();
        }

        Some(guard)
    } else if use_json {
        tracing_subscriber::fmt().json().with_env_filter(log_level).init();
        None
    } else {
        tracing_subscriber::fmt().with_env_filter(log_level).compact().init();
        None
    }
}
