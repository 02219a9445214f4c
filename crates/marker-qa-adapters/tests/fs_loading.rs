//! Integration tests for loading markers from the filesystem.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};
use marker_qa_adapters::{FsImageSource, ReadError};
use marker_qa_core::{DecodeError, ImageSource};

fn write_image(path: &Path, format: ImageFormat) {
    let img = GrayImage::from_fn(8, 8, |_, y| Luma([if y % 2 == 0 { 0 } else { 255 }]));
    img.save_with_format(path, format).unwrap();
}

#[test]
fn test_load_single_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("marker.png");
    write_image(&path, ImageFormat::Png);

    let source = FsImageSource::new(vec![path], false);
    let images: Vec<_> = source.images().collect();
    assert_eq!(images.len(), 1);

    let info = images.into_iter().next().unwrap().expect("should load PNG");
    assert_eq!(info.width, 8);
    assert_eq!(info.height, 8);
    assert!(info.path.ends_with("marker.png"));
}

#[test]
fn test_load_directory_in_sorted_order() {
    let dir = tempfile::tempdir().unwrap();
    write_image(&dir.path().join("b.bmp"), ImageFormat::Bmp);
    write_image(&dir.path().join("a.png"), ImageFormat::Png);
    write_image(&dir.path().join("c.jpg"), ImageFormat::Jpeg);
    fs::write(dir.path().join("readme.txt"), "not a marker").unwrap();

    let source = FsImageSource::new(vec![dir.path().to_path_buf()], false);
    assert_eq!(source.count_hint(), Some(3));

    let paths: Vec<String> = source
        .images()
        .map(|r| r.expect("fixtures should load").path)
        .collect();
    assert!(paths[0].ends_with("a.png"));
    assert!(paths[1].ends_with("b.bmp"));
    assert!(paths[2].ends_with("c.jpg"));
}

#[test]
fn test_recursive_scan() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("nested");
    fs::create_dir(&nested).unwrap();
    write_image(&nested.join("deep.png"), ImageFormat::Png);

    let flat = FsImageSource::new(vec![dir.path().to_path_buf()], false);
    assert_eq!(flat.count_hint(), Some(0));

    let deep = FsImageSource::new(vec![dir.path().to_path_buf()], true);
    assert_eq!(deep.count_hint(), Some(1));
}

#[test]
fn test_corrupt_file_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    fs::write(&path, b"\x89PNG\r\n\x1a\ngarbage").unwrap();

    let source = FsImageSource::new(vec![path], false);
    let err = source.images().next().unwrap().unwrap_err();

    let decode = err
        .downcast_ref::<DecodeError>()
        .expect("should be a decode error");
    assert!(decode.label().ends_with("broken.png"));
}

#[test]
fn test_missing_path_is_skipped() {
    let source = FsImageSource::new(vec!["/nonexistent/marker.png".into()], false);
    assert_eq!(source.count_hint(), Some(0));
    assert_eq!(source.images().count(), 0);
}

#[test]
fn test_file_removed_after_scan_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vanished.png");
    write_image(&path, ImageFormat::Png);

    let source = FsImageSource::new(vec![dir.path().to_path_buf()], false);
    assert_eq!(source.count_hint(), Some(1));
    fs::remove_file(&path).unwrap();

    let err = source.images().next().unwrap().unwrap_err();
    let read = err
        .downcast_ref::<ReadError>()
        .expect("should carry the unreadable path");
    assert!(read.path().ends_with("vanished.png"));
    assert!(err.downcast_ref::<DecodeError>().is_none());
}
