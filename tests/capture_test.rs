//! Capture runner behavior against an in-process WebSocket server standing
//! in for the browser.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use futures_util::{SinkExt, StreamExt};
use serde_json::{json, Value};
use shedcap::camera::{Easing, PathParams};
use shedcap::capture::{CaptureRunner, DriveMode, Scenario};
use shedcap::cdp::{CdpClient, ReadyProbe};
use shedcap::scene::SceneState;
use shedcap::sequence::{FrameFileStyle, SequenceStore};
use shedcap::timeline::{FrameNorm, Phase, PhaseKind, Span, Timeline};
use tokio::net::TcpListener;
use tokio_tungstenite::{accept_async, tungstenite::Message};

/// A compliant page: navigations succeed, evaluates report ready, and
/// screenshots return a fixed payload. Accepts one connection per run.
async fn spawn_page_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let (stream, _) = listener.accept().await.unwrap();
            let mut ws = accept_async(stream).await.unwrap();
            tokio::spawn(async move {
                while let Some(Ok(msg)) = ws.next().await {
                    let Message::Text(text) = msg else { continue };
                    let cmd: Value = serde_json::from_str(&text).unwrap();
                    let id = cmd["id"].as_u64().unwrap();
                    let result = match cmd["method"].as_str().unwrap() {
                        "Runtime.evaluate" => json!({ "result": { "value": true } }),
                        "Page.captureScreenshot" => {
                            json!({ "data": BASE64.encode(b"not-a-real-png") })
                        }
                        _ => json!({}),
                    };
                    let reply = json!({ "id": id, "result": result });
                    if ws.send(Message::Text(reply.to_string())).await.is_err() {
                        break;
                    }
                }
            });
        }
    });

    format!("ws://{addr}")
}

fn four_frame_scenario() -> Scenario {
    Scenario {
        name: "tiny-orbit".to_string(),
        timeline: Timeline {
            total_frames: 4,
            norm: FrameNorm::EndInclusive,
            base: SceneState::default(),
            path: PathParams::orbit(0.0, 1.1, 12.0, Easing::Linear),
            phases: vec![Phase {
                name: "hold".to_string(),
                span: Span { start: 1, end: 4 },
                kind: PhaseKind::Hold,
            }],
        },
        drive: DriveMode::NavigateState,
        file_style: FrameFileStyle::Hyphen,
        settle_ms: 0,
        style_pause_ms: 0,
    }
}

fn fast_probe() -> ReadyProbe {
    ReadyProbe {
        max_attempts: 5,
        interval: std::time::Duration::ZERO,
    }
}

#[tokio::test]
async fn full_run_records_every_frame() {
    let ws_url = spawn_page_server().await;
    let dir = tempfile::tempdir().unwrap();
    let store = SequenceStore::new(dir.path());
    let scenario = four_frame_scenario();

    let mut client = CdpClient::connect(&ws_url).await.unwrap();
    let runner = CaptureRunner::new(&scenario, &store, "http://app.test/", fast_probe());
    let summary = runner.run(&mut client, 1).await.unwrap();
    assert_eq!(summary.frames_captured, 4);

    let meta = store.load().await.unwrap().unwrap();
    let frames: Vec<u32> = meta.frames.iter().map(|r| r.frame).collect();
    assert_eq!(frames, [1, 2, 3, 4]);
    assert!(store.image_path(1, FrameFileStyle::Hyphen).exists());
    assert!(store.config_path(4).exists());
}

#[tokio::test]
async fn resumed_run_keeps_the_earlier_frame_records() {
    let ws_url = spawn_page_server().await;
    let dir = tempfile::tempdir().unwrap();
    let store = SequenceStore::new(dir.path());
    let scenario = four_frame_scenario();
    let runner = CaptureRunner::new(&scenario, &store, "http://app.test/", fast_probe());

    let mut client = CdpClient::connect(&ws_url).await.unwrap();
    runner.run(&mut client, 1).await.unwrap();
    let first_pass = store.load().await.unwrap().unwrap();
    let frame_two_stamp = first_pass.frames[1].captured_at.clone();

    // Resume from frame 3 on a fresh session, as a restarted process would.
    let mut client = CdpClient::connect(&ws_url).await.unwrap();
    runner.run(&mut client, 3).await.unwrap();

    let meta = store.load().await.unwrap().unwrap();
    let frames: Vec<u32> = meta.frames.iter().map(|r| r.frame).collect();
    assert_eq!(frames, [1, 2, 3, 4], "records 1 and 2 survive the resume");
    // The retained records are the originals, not re-captures.
    assert_eq!(meta.frames[1].captured_at, frame_two_stamp);
    assert_eq!(meta.created_at, first_pass.created_at);
}
