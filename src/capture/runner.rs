// SPDX-License-Identifier: MIT
// CaptureRunner — the sequential frame loop.
//
// One frame at a time: compute pose + scene, persist the per-frame config,
// drive the page, let the render settle, screenshot, persist the PNG. No
// parallelism and no checkpointing — an interrupted run is restarted.

use super::js;
use super::scenario::{DriveMode, Scenario};
use crate::cdp::{CdpClient, ReadyProbe};
use crate::scene::transport;
use crate::sequence::{FrameRecord, SequenceMeta, SequenceStore};
use anyhow::{Context as _, Result};
use chrono::Utc;
use serde_json::json;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// What a finished run produced.
#[derive(Debug)]
pub struct CaptureSummary {
    pub frames_captured: u32,
    pub out_dir: PathBuf,
}

/// Drives one scenario against a connected page.
pub struct CaptureRunner<'a> {
    scenario: &'a Scenario,
    store: &'a SequenceStore,
    app_url: String,
    probe: ReadyProbe,
}

impl<'a> CaptureRunner<'a> {
    pub fn new(
        scenario: &'a Scenario,
        store: &'a SequenceStore,
        app_url: impl Into<String>,
        probe: ReadyProbe,
    ) -> Self {
        Self {
            scenario,
            store,
            app_url: app_url.into(),
            probe,
        }
    }

    /// Run the capture loop from `start_frame` through the final frame.
    ///
    /// `start_frame` below 1 starts at frame 1. Frames are strictly
    /// sequential; each iteration is one blocking remote round trip at a
    /// time with fixed settle delays in between.
    pub async fn run(&self, client: &mut CdpClient, start_frame: u32) -> Result<CaptureSummary> {
        let timeline = &self.scenario.timeline;
        let total = timeline.total_frames;
        let first = start_frame.max(1);

        tokio::fs::create_dir_all(self.store.dir())
            .await
            .with_context(|| format!("cannot create {}", self.store.dir().display()))?;

        // Bring the page up on the first frame's state before the loop so
        // evaluate-driven scenarios have a scene to mutate.
        let initial_url = transport::state_url(&self.app_url, &timeline.scene_at(first))?;
        client.navigate(&initial_url).await?;
        self.probe.wait_ready(client).await?;

        info!(
            scenario = %self.scenario.name,
            frames = total,
            start = first,
            out = %self.store.dir().display(),
            "capture started"
        );

        // A resumed run keeps the records of frames it is not re-capturing;
        // frames from `first` on are re-recorded as the loop overwrites them.
        let mut meta = match self.store.load().await? {
            Some(mut existing) if first > 1 => {
                existing.frames.retain(|r| r.frame < first);
                existing.name = self.scenario.name.clone();
                existing.scenario = Some(self.scenario.name.clone());
                existing.total_frames = total;
                existing
            }
            _ => SequenceMeta {
                name: self.scenario.name.clone(),
                scenario: Some(self.scenario.name.clone()),
                total_frames: total,
                created_at: Utc::now().to_rfc3339(),
                frames: Vec::new(),
            },
        };

        for frame in first..=total {
            let pose = timeline.pose_at(frame);
            let scene = timeline.scene_at(frame);

            // Per-frame config document, written before the page is driven
            // so a crashed run still leaves the config trail behind.
            let config_path = self.store.config_path(frame);
            let config = json!({ "frame": frame, "state": scene, "camera": pose });
            tokio::fs::write(&config_path, serde_json::to_string_pretty(&config)?)
                .await
                .with_context(|| format!("cannot write {}", config_path.display()))?;

            match self.scenario.drive {
                DriveMode::NavigateState => {
                    let url = transport::state_url(&self.app_url, &scene)?;
                    client.navigate(&url).await?;
                    self.probe.wait_ready(client).await?;
                }
                DriveMode::EvaluateState => {
                    client.evaluate(&js::apply_state(&scene)?).await?;
                }
            }
            client.evaluate(&js::set_camera(&pose)).await?;

            tokio::time::sleep(Duration::from_millis(self.scenario.settle_ms)).await;
            if timeline.pause_at(frame) {
                debug!(frame, "style switch — holding");
                tokio::time::sleep(Duration::from_millis(self.scenario.style_pause_ms)).await;
            }

            let png = client.capture_screenshot().await?;
            let image_path = self.store.image_path(frame, self.scenario.file_style);
            tokio::fs::write(&image_path, &png)
                .await
                .with_context(|| format!("cannot write {}", image_path.display()))?;

            debug!(frame, bytes = png.len(), "frame captured");
            meta.frames.push(FrameRecord {
                frame,
                config_file: config_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                image_file: image_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                captured_at: Utc::now().to_rfc3339(),
            });
        }

        self.store.save(&meta).await?;
        let captured = meta.frames.len() as u32;
        info!(scenario = %self.scenario.name, frames = captured, "capture finished");

        Ok(CaptureSummary {
            frames_captured: captured,
            out_dir: self.store.dir().to_path_buf(),
        })
    }
}
