//! Sookshma Common Library
//!
//! CLIとWeb(WASM)で共有される型・擬似検出ジェネレータ・セッション状態

pub mod types;
pub mod catalog;
pub mod error;
pub mod generator;
pub mod upload;
pub mod session;
pub mod i18n;
pub mod routes;
pub mod presentation;
pub mod content;

pub use types::{DetectionResult, MetricKind, MetricReading, Status};
pub use catalog::{CropIcon, CropReference, ValueRange, CROP_CATALOG, find_crop};
pub use error::{Error, Result};
pub use generator::{DetectionSimulator, classify, generate_detection, run_detection, sample_metric, select_crops};
pub use upload::{MAX_UPLOAD_BYTES, UploadFile, validate_upload};
pub use session::{DashboardSession, FarmerSession, Phase, UploadTicket};
pub use i18n::Language;
pub use routes::{NAV_ITEMS, NavItem, Route};
pub use presentation::{BadgeStyle, MetricCardModel};
