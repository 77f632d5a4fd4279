//! 擬似測定値ジェネレータ
//!
//! 作物の基準レンジから「真値」を一様に引き、指標ごとのノイズを加えて
//! 「測定値」とする。ステータスは |測定値 - 真値| を2つの閾値で判定する。
//!
//! 乱数源は必ず引数で受け取る（テストでは `StdRng::seed_from_u64` を渡す）。

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::Duration;

use crate::catalog::{CropReference, ValueRange, CROP_CATALOG};
use crate::types::{DetectionResult, MetricKind, MetricReading, Status};

/// 1回の検出で選ぶ作物の最大数
pub const MAX_CROPS_PER_RUN: usize = 4;

/// 数量 (kg) の範囲 [20, 100)
pub const QUANTITY_RANGE_KG: std::ops::Range<u32> = 20..100;

/// 信頼度 (%) の範囲 [85, 99]
pub const CONFIDENCE_RANGE: std::ops::RangeInclusive<u8> = 85..=99;

/// 擬似処理ディレイの範囲 (ms)
pub const PROCESSING_DELAY_MS: std::ops::RangeInclusive<u64> = 1500..=3000;

/// 指標ごとのノイズ振幅と判定閾値
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricProfile {
    /// ノイズ振幅（±）
    pub noise_amplitude: f64,
    /// この偏差以上で attention
    pub attention_at: f64,
    /// この偏差以上で danger
    pub danger_at: f64,
    /// 表示桁数（小数点以下）
    pub precision: u32,
}

impl MetricKind {
    pub fn profile(&self) -> MetricProfile {
        match self {
            MetricKind::Temperature => MetricProfile {
                noise_amplitude: 3.0,
                attention_at: 1.0,
                danger_at: 2.0,
                precision: 1,
            },
            MetricKind::Humidity => MetricProfile {
                noise_amplitude: 10.0,
                attention_at: 3.0,
                danger_at: 6.0,
                precision: 0,
            },
            MetricKind::Ethylene => MetricProfile {
                noise_amplitude: 1.0,
                attention_at: 0.3,
                danger_at: 0.6,
                precision: 2,
            },
        }
    }
}

/// 偏差からステータスを判定
pub fn classify(kind: MetricKind, deviation: f64) -> Status {
    let profile = kind.profile();
    let deviation = deviation.abs();
    if deviation < profile.attention_at {
        Status::Safe
    } else if deviation < profile.danger_at {
        Status::Attention
    } else {
        Status::Danger
    }
}

/// 1指標分の合成サンプル
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticSample {
    pub true_value: f64,
    pub measured_value: f64,
    pub status: Status,
}

impl SyntheticSample {
    pub fn deviation(&self) -> f64 {
        (self.measured_value - self.true_value).abs()
    }

    /// 表示桁で丸めた測定値
    pub fn to_reading(&self, kind: MetricKind) -> MetricReading {
        MetricReading {
            value: round_to(self.measured_value, kind.profile().precision),
            status: self.status,
        }
    }
}

/// 基準レンジから1指標分のサンプルを生成
pub fn sample_metric<R: Rng + ?Sized>(
    rng: &mut R,
    kind: MetricKind,
    range: ValueRange,
) -> SyntheticSample {
    let profile = kind.profile();
    let true_value = rng.gen_range(range.lo..=range.hi);
    let noise = rng.gen_range(-profile.noise_amplitude..=profile.noise_amplitude);
    let measured_value = true_value + noise;

    SyntheticSample {
        true_value,
        measured_value,
        status: classify(kind, measured_value - true_value),
    }
}

/// 作物1品目分の検出結果を生成
pub fn generate_detection<R: Rng + ?Sized>(rng: &mut R, crop: &CropReference) -> DetectionResult {
    let [temperature, humidity, ethylene] = MetricKind::ALL
        .map(|kind| sample_metric(&mut *rng, kind, crop.range(kind)).to_reading(kind));

    DetectionResult {
        crop: crop.name.to_string(),
        icon: crop.icon,
        temperature,
        humidity,
        ethylene,
        quantity_kg: rng.gen_range(QUANTITY_RANGE_KG),
        confidence: rng.gen_range(CONFIDENCE_RANGE),
    }
}

/// マスタから1〜4品目を重複なしで選ぶ
pub fn select_crops<'a, R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &'a [CropReference],
) -> Vec<&'a CropReference> {
    let max = MAX_CROPS_PER_RUN.min(catalog.len());
    if max == 0 {
        return Vec::new();
    }
    let count = rng.gen_range(1..=max);
    catalog.choose_multiple(rng, count).collect()
}

/// 1回分の検出結果リストを生成
pub fn run_detection<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &[CropReference],
) -> Vec<DetectionResult> {
    let crops = select_crops(rng, catalog);
    crops
        .into_iter()
        .map(|crop| generate_detection(rng, crop))
        .collect()
}

/// 擬似処理ディレイ（1.5〜3.0秒）
pub fn processing_delay<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    Duration::from_millis(rng.gen_range(PROCESSING_DELAY_MS))
}

fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// 乱数源とマスタを束ねた検出シミュレータ
pub struct DetectionSimulator<R = StdRng> {
    rng: R,
}

impl DetectionSimulator<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> DetectionSimulator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn processing_delay(&mut self) -> Duration {
        processing_delay(&mut self.rng)
    }

    pub fn run(&mut self) -> Vec<DetectionResult> {
        let results = run_detection(&mut self.rng, &CROP_CATALOG);
        tracing::debug!(count = results.len(), "mock detection generated");
        results
    }
}
