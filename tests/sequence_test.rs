//! Sequence store filesystem behavior.

use shedcap::sequence::{FrameFileStyle, FrameRecord, SequenceStore};

#[tokio::test]
async fn load_returns_none_before_anything_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let store = SequenceStore::new(dir.path());
    assert!(store.load().await.unwrap().is_none());
}

#[tokio::test]
async fn init_writes_an_empty_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let store = SequenceStore::new(dir.path().join("orbit"));
    let meta = store.init("orbit", 360).await.unwrap();
    assert_eq!(meta.name, "orbit");
    assert_eq!(meta.total_frames, 360);
    assert!(meta.frames.is_empty());

    let loaded = store.load().await.unwrap().unwrap();
    assert_eq!(loaded.name, "orbit");
    assert_eq!(loaded.total_frames, 360);
}

#[tokio::test]
async fn save_and_load_round_trip_frame_records() {
    let dir = tempfile::tempdir().unwrap();
    let store = SequenceStore::new(dir.path());
    let mut meta = store.init("morph", 180).await.unwrap();
    meta.frames.push(FrameRecord {
        frame: 1,
        config_file: "config-frame-001.json".to_string(),
        image_file: "frame-0001.png".to_string(),
        captured_at: "2026-08-30T12:00:00+00:00".to_string(),
    });
    store.save(&meta).await.unwrap();

    let loaded = store.load().await.unwrap().unwrap();
    assert_eq!(loaded.frames.len(), 1);
    assert_eq!(loaded.frames[0].frame, 1);
    assert_eq!(loaded.frames[0].image_file, "frame-0001.png");
}

#[test]
fn file_names_follow_the_two_conventions() {
    assert_eq!(FrameFileStyle::Hyphen.file_name(7), "frame-0007.png");
    assert_eq!(FrameFileStyle::Underscore.file_name(123), "frame_0123.png");
    assert_eq!(shedcap::sequence::config_file_name(7), "config-frame-007.json");
}

#[test]
fn store_paths_land_inside_the_sequence_directory() {
    let store = SequenceStore::new("/tmp/frames/orbit");
    assert!(store.meta_path().ends_with("sequence.json"));
    assert!(store.config_path(12).ends_with("config-frame-012.json"));
    assert!(store
        .image_path(12, FrameFileStyle::Hyphen)
        .ends_with("frame-0012.png"));
}
