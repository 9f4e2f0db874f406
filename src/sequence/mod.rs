//! Sequence metadata: thin CRUD over `sequence.json` plus the frame-file
//! naming conventions.
//!
//! The store owns one directory. Per-frame configs are written next to the
//! captured frames; nothing is relocated after a run.

use anyhow::{Context as _, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Captured-frame file naming — both spellings exist in the wild and are
/// kept as explicit conventions a scenario selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameFileStyle {
    /// `frame-0001.png`
    Hyphen,
    /// `frame_0001.png`
    Underscore,
}

impl FrameFileStyle {
    /// File name for a captured frame (four-digit zero-padded index).
    pub fn file_name(self, frame: u32) -> String {
        match self {
            Self::Hyphen => format!("frame-{frame:04}.png"),
            Self::Underscore => format!("frame_{frame:04}.png"),
        }
    }
}

/// File name for a per-frame config document (three-digit zero-padded index).
pub fn config_file_name(frame: u32) -> String {
    format!("config-frame-{frame:03}.json")
}

/// One captured frame's record in the sequence metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub frame: u32,
    pub config_file: String,
    pub image_file: String,
    /// RFC 3339 capture timestamp.
    pub captured_at: String,
}

/// The `sequence.json` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceMeta {
    pub name: String,
    pub scenario: Option<String>,
    pub total_frames: u32,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    pub frames: Vec<FrameRecord>,
}

impl Default for SequenceMeta {
    fn default() -> Self {
        Self {
            name: String::new(),
            scenario: None,
            total_frames: 0,
            created_at: Utc::now().to_rfc3339(),
            frames: Vec::new(),
        }
    }
}

/// Flat-file store for one capture output directory.
#[derive(Debug, Clone)]
pub struct SequenceStore {
    dir: PathBuf,
}

impl SequenceStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the metadata file.
    pub fn meta_path(&self) -> PathBuf {
        self.dir.join("sequence.json")
    }

    /// Absolute path for a frame's config document.
    pub fn config_path(&self, frame: u32) -> PathBuf {
        self.dir.join(config_file_name(frame))
    }

    /// Absolute path for a captured frame image.
    pub fn image_path(&self, frame: u32, style: FrameFileStyle) -> PathBuf {
        self.dir.join(style.file_name(frame))
    }

    /// Read `sequence.json`, or `None` when it does not exist yet.
    pub async fn load(&self) -> Result<Option<SequenceMeta>> {
        let path = self.meta_path();
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => {
                let meta = serde_json::from_str(&text)
                    .with_context(|| format!("malformed {}", path.display()))?;
                Ok(Some(meta))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("cannot read {}", path.display())),
        }
    }

    /// Write `sequence.json`, creating the directory if needed.
    pub async fn save(&self, meta: &SequenceMeta) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("cannot create {}", self.dir.display()))?;
        let path = self.meta_path();
        let text = serde_json::to_string_pretty(meta)?;
        tokio::fs::write(&path, text)
            .await
            .with_context(|| format!("cannot write {}", path.display()))?;
        Ok(())
    }

    /// Start a fresh metadata document and persist it.
    pub async fn init(&self, name: &str, total_frames: u32) -> Result<SequenceMeta> {
        let meta = SequenceMeta {
            name: name.to_string(),
            scenario: None,
            total_frames,
            created_at: Utc::now().to_rfc3339(),
            frames: Vec::new(),
        };
        self.save(&meta).await?;
        Ok(meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_file_names_follow_both_conventions() {
        assert_eq!(FrameFileStyle::Hyphen.file_name(7), "frame-0007.png");
        assert_eq!(FrameFileStyle::Underscore.file_name(360), "frame_0360.png");
    }

    #[test]
    fn config_file_names_are_three_digit_padded() {
        assert_eq!(config_file_name(7), "config-frame-007.json");
        assert_eq!(config_file_name(123), "config-frame-123.json");
    }
}
