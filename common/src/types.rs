//! 検出結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Status: 指標ごとの3段階判定（safe / attention / danger）
//! - MetricKind: 温度・湿度・エチレンの3指標
//! - MetricReading: 指標1つ分の測定値と判定
//! - DetectionResult: アップロード1回分の擬似検出結果（作物1種ごと）

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::CropIcon;

/// 指標の判定ステータス
///
/// 並び順は深刻度順（Safe < Attention < Danger）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Safe,
    Attention,
    Danger,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Safe, Status::Attention, Status::Danger];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Safe => "safe",
            Status::Attention => "attention",
            Status::Danger => "danger",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 判定対象の指標
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Temperature,
    Humidity,
    Ethylene,
}

impl MetricKind {
    pub const ALL: [MetricKind; 3] = [
        MetricKind::Temperature,
        MetricKind::Humidity,
        MetricKind::Ethylene,
    ];

    pub fn unit(&self) -> &'static str {
        match self {
            MetricKind::Temperature => "°C",
            MetricKind::Humidity => "%",
            MetricKind::Ethylene => "ppm",
        }
    }

    /// 結果カードの短いラベル
    pub fn short_label(&self) -> &'static str {
        match self {
            MetricKind::Temperature => "Temp",
            MetricKind::Humidity => "Humidity",
            MetricKind::Ethylene => "Ethylene",
        }
    }
}

/// 指標1つ分の測定値
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricReading {
    pub value: f64,
    pub status: Status,
}

/// 擬似検出結果
///
/// 生成時に確定し、以降は書き換えない。次のアップロードで丸ごと置き換わる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub crop: String,
    pub icon: CropIcon,
    pub temperature: MetricReading,
    pub humidity: MetricReading,
    pub ethylene: MetricReading,
    /// 数量 (kg)
    pub quantity_kg: u32,
    /// 信頼度 (%)
    pub confidence: u8,
}

impl DetectionResult {
    pub fn reading(&self, kind: MetricKind) -> MetricReading {
        match kind {
            MetricKind::Temperature => self.temperature,
            MetricKind::Humidity => self.humidity,
            MetricKind::Ethylene => self.ethylene,
        }
    }

    pub fn readings(&self) -> [(MetricKind, MetricReading); 3] {
        MetricKind::ALL.map(|kind| (kind, self.reading(kind)))
    }

    /// 3指標のうち最も深刻なステータス（カード見出しのバッジに使う）
    pub fn worst_status(&self) -> Status {
        self.readings()
            .iter()
            .map(|(_, reading)| reading.status)
            .max()
            .unwrap_or(Status::Safe)
    }
}
