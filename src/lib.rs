//! Sookshma Smart Edge CLI
//!
//! Web版と同じ擬似検出をディスク上の画像に対して実行する。

pub mod cli;
pub mod config;
pub mod error;
pub mod intake;
pub mod logging;
pub mod report;
pub mod simulate;
