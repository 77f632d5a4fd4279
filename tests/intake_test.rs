//! 画像読み込みテスト
//!
//! ディスク上のファイルをアップロード扱いで読み込めるかを検証

use image::{ImageBuffer, Rgb};
use sookshma::intake;
use sookshma_common::{validate_upload, Error, MAX_UPLOAD_BYTES};
use std::fs::File;
use tempfile::tempdir;

const MB: u64 = 1024 * 1024;

fn write_png(path: &std::path::Path, width: u32, height: u32) {
    let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 128]));
    img.save(path).expect("PNG書き込み失敗");
}

/// 実画像の読み込み
#[test]
fn test_read_png_upload() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("apples.png");
    write_png(&path, 16, 8);

    let file = intake::read_upload(&path).expect("読み込み失敗");
    assert_eq!(file.upload.name, "apples.png");
    assert_eq!(file.upload.mime_type, "image/png");
    assert_eq!(file.upload.size_bytes, std::fs::metadata(&path).unwrap().len());
    assert_eq!(file.dimensions(), Some((16, 8)));
    assert!(validate_upload(&file.upload).is_ok());
}

/// data URL の生成
#[test]
fn test_data_url_preview() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("preview.png");
    write_png(&path, 4, 4);

    let file = intake::read_upload(&path).unwrap();
    let url = file.to_data_url();
    assert!(url.starts_with("data:image/png;base64,"));
    assert!(url.len() > "data:image/png;base64,".len());
}

/// 拡張子を偽ったテキストは中身で判定されない → 拡張子のMIMEになる
#[test]
fn test_text_file_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "not an image").unwrap();

    let file = intake::read_upload(&path).unwrap();
    assert_eq!(file.upload.mime_type, "text/plain");
    assert!(matches!(
        validate_upload(&file.upload).unwrap_err(),
        Error::UnsupportedFileType { .. }
    ));
}

/// 15MBのPNGは読み込めるが検証で弾かれ、本体は保持しない
#[test]
fn test_oversized_png_not_buffered() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("huge.png");
    File::create(&path).unwrap().set_len(15 * MB).unwrap();

    let file = intake::read_upload(&path).unwrap();
    assert_eq!(file.upload.size_bytes, 15 * MB);
    assert_eq!(file.upload.mime_type, "image/png");
    assert!(file.bytes().is_empty());
    assert!(matches!(
        validate_upload(&file.upload).unwrap_err(),
        Error::FileTooLarge { .. }
    ));
}

/// ちょうど上限のファイルは受け付ける
#[test]
fn test_file_at_limit_accepted() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("edge.jpg");
    File::create(&path).unwrap().set_len(MAX_UPLOAD_BYTES).unwrap();

    let file = intake::read_upload(&path).unwrap();
    assert_eq!(file.bytes().len() as u64, MAX_UPLOAD_BYTES);
    assert!(validate_upload(&file.upload).is_ok());
}
