use std::io::Cursor;

use super::*;
use crate::{config::RenderConfig, pipeline::process_image};

fn png_upload(via: UploadVia) -> Upload {
    let img = image::RgbaImage::from_pixel(16, 8, image::Rgba([10, 200, 30, 255]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    Upload {
        name: "tile.png".to_owned(),
        media_type: Some("image/png".to_owned()),
        bytes,
        via,
    }
}

fn small_config() -> RenderConfig {
    RenderConfig {
        max_side: 64.0,
        ..RenderConfig::default()
    }
}

#[test]
fn newest_load_wins() {
    let mut session = Session::new();
    let upload = png_upload(UploadVia::Picked);

    let first = session.submit(&upload).unwrap();
    let second = session.submit(&upload).unwrap();
    assert!(second.generation() > first.generation());

    let done = session.complete(second, process_image(&upload.bytes, &small_config()));
    assert_eq!(done, Completion::Applied);
    assert!(session.presentation().is_some());

    let late = session.complete(first, process_image(&upload.bytes, &small_config()));
    assert_eq!(late, Completion::Stale);
    assert!(session.presentation().is_some());
}

#[test]
fn decode_failure_is_reported() {
    let mut session = Session::new();
    let upload = Upload {
        name: "broken.png".to_owned(),
        media_type: Some("image/png".to_owned()),
        bytes: b"not a png".to_vec(),
        via: UploadVia::Picked,
    };
    let ticket = session.submit(&upload).unwrap();
    let done = session.complete(ticket, process_image(&upload.bytes, &small_config()));
    assert_eq!(done, Completion::Applied);
    let SessionState::Failed(msg) = session.state() else {
        panic!("expected failure, got {:?}", session.state());
    };
    assert!(msg.contains("could not load image"));
}

#[test]
fn dropped_non_image_is_refused_before_decode() {
    let mut session = Session::new();
    let upload = Upload {
        name: "notes.txt".to_owned(),
        media_type: Some("text/plain".to_owned()),
        bytes: b"hello".to_vec(),
        via: UploadVia::Dropped,
    };
    let err = session.submit(&upload).unwrap_err();
    assert!(matches!(err, GoldenError::UnsupportedMedia(_)));
    assert!(matches!(session.state(), SessionState::Idle));

    // The picker path accepts anything and fails at decode instead.
    let picked = Upload {
        via: UploadVia::Picked,
        ..upload
    };
    assert!(session.submit(&picked).is_ok());
}

#[test]
fn reset_invalidates_in_flight_loads() {
    let mut session = Session::new();
    let upload = png_upload(UploadVia::Dropped);
    let ticket = session.submit(&upload).unwrap();
    session.reset();
    assert!(matches!(session.state(), SessionState::Idle));

    let done = session.complete(ticket, process_image(&upload.bytes, &small_config()));
    assert_eq!(done, Completion::Stale);
    assert!(matches!(session.state(), SessionState::Idle));
}

#[test]
fn completing_twice_is_stale() {
    let mut session = Session::new();
    let upload = png_upload(UploadVia::Picked);
    let ticket = session.submit(&upload).unwrap();
    assert_eq!(
        session.complete(ticket, Err(GoldenError::decode("boom"))),
        Completion::Applied
    );
    assert_eq!(
        session.complete(ticket, process_image(&upload.bytes, &small_config())),
        Completion::Stale
    );
    assert!(matches!(session.state(), SessionState::Failed(_)));
}

#[test]
fn upload_from_path_guesses_media_type() {
    let dir = std::path::PathBuf::from("target").join("session_upload");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("tile.png");
    std::fs::write(&path, png_upload(UploadVia::Picked).bytes).unwrap();

    let upload = Upload::from_path(&path, UploadVia::Dropped).unwrap();
    assert_eq!(upload.media_type.as_deref(), Some("image/png"));
    assert!(Upload::from_path(&dir.join("missing.png"), UploadVia::Picked).is_err());
}
