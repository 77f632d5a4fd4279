//! ディスク上の画像をアップロード扱いで読み込む
//!
//! MIMEタイプは中身から判定し、判定できなければ拡張子で補う。
//! 上限を超えるファイルは本体を読まない（判定用の先頭だけ読む）。

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{ImageFormat, ImageReader};
use sookshma_common::{UploadFile, MAX_UPLOAD_BYTES};
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use crate::error::{Result, SookshmaError};

/// 形式判定に読む先頭バイト数
const SNIFF_BYTES: u64 = 512;

const FALLBACK_MIME: &str = "application/octet-stream";

#[derive(Debug, Clone)]
pub struct IntakeFile {
    pub upload: UploadFile,
    bytes: Vec<u8>,
}

impl IntakeFile {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// プレビュー用の data URL
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.upload.mime_type, STANDARD.encode(&self.bytes))
    }

    /// 画像の縦横ピクセル数（壊れている場合は None）
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        ImageReader::new(Cursor::new(&self.bytes))
            .with_guessed_format()
            .ok()?
            .into_dimensions()
            .ok()
    }
}

pub fn read_upload(path: &Path) -> Result<IntakeFile> {
    if !path.is_file() {
        return Err(SookshmaError::FileNotFound(path.display().to_string()));
    }

    let size_bytes = std::fs::metadata(path)?.len();
    let limit = if size_bytes > MAX_UPLOAD_BYTES { SNIFF_BYTES } else { size_bytes };

    let mut bytes = Vec::with_capacity(limit as usize);
    File::open(path)?.take(limit).read_to_end(&mut bytes)?;

    let mime_type = detect_mime(path, &bytes);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    tracing::debug!(file = %name, mime = %mime_type, size_bytes, "intake");

    // 上限超えは検証で弾かれるので本体は保持しない
    if size_bytes > MAX_UPLOAD_BYTES {
        bytes.clear();
    }

    Ok(IntakeFile {
        upload: UploadFile::new(name, mime_type, size_bytes),
        bytes,
    })
}

pub fn detect_mime(path: &Path, head: &[u8]) -> String {
    if let Ok(format) = image::guess_format(head) {
        return format.to_mime_type().to_string();
    }
    if let Ok(format) = ImageFormat::from_path(path) {
        return format.to_mime_type().to_string();
    }

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "txt" | "md" => "text/plain",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "mp4" => "video/mp4",
        _ => FALLBACK_MIME,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0];

    #[test]
    fn test_detect_mime_from_content() {
        assert_eq!(detect_mime(Path::new("photo.bin"), PNG_MAGIC), "image/png");
        assert_eq!(detect_mime(Path::new("photo"), JPEG_MAGIC), "image/jpeg");
    }

    #[test]
    fn test_detect_mime_content_wins_over_extension() {
        assert_eq!(detect_mime(Path::new("mislabeled.txt"), PNG_MAGIC), "image/png");
    }

    #[test]
    fn test_detect_mime_falls_back_to_extension() {
        assert_eq!(detect_mime(Path::new("empty.jpg"), b""), "image/jpeg");
        assert_eq!(detect_mime(Path::new("notes.txt"), b"hello"), "text/plain");
        assert_eq!(detect_mime(Path::new("data.xyz"), b"???"), FALLBACK_MIME);
    }
}
