use thiserror::Error;

#[derive(Error, Debug)]
pub enum SookshmaError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("No upload was accepted ({0} rejected)")]
    NoValidUploads(usize),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] sookshma_common::Error),
}

impl SookshmaError {
    /// アップロード拒否（通知だけ出して続行できる）かどうか
    pub fn is_upload_rejection(&self) -> bool {
        matches!(self, SookshmaError::Common(err) if err.is_upload_rejection())
    }
}

pub type Result<T> = std::result::Result<T, SookshmaError>;
