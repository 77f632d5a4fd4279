//! アップロード画像の入力チェック
//!
//! MIMEタイプが `image/*` であること、サイズが10MB以下であることだけを見る。

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// アップロード上限 (10 MiB)
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// アップロードされたファイルのメタ情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFile {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }
}

pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type
        .trim()
        .get(..6)
        .map(|prefix| prefix.eq_ignore_ascii_case("image/"))
        .unwrap_or(false)
}

/// 入力チェック（種別 → サイズの順）
pub fn validate_upload(file: &UploadFile) -> Result<()> {
    if !is_image_mime(&file.mime_type) {
        return Err(Error::UnsupportedFileType {
            mime_type: if file.mime_type.is_empty() {
                "unknown".to_string()
            } else {
                file.mime_type.clone()
            },
        });
    }

    if file.size_bytes > MAX_UPLOAD_BYTES {
        return Err(Error::FileTooLarge {
            size_bytes: file.size_bytes,
            limit_bytes: MAX_UPLOAD_BYTES,
        });
    }

    Ok(())
}
