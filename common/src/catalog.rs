//! 作物マスタ（保管基準レンジ）
//!
//! 7品目固定。実行中に変更されることはない。

use serde::{Deserialize, Serialize};

use crate::types::MetricKind;

/// 閉区間 [lo, hi]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub lo: f64,
    pub hi: f64,
}

impl ValueRange {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }
}

/// 作物アイコン
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropIcon {
    Apple,
    Banana,
    Carrot,
    Grape,
    Tomato,
    Potato,
    Onion,
}

impl CropIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            CropIcon::Apple => "🍎",
            CropIcon::Banana => "🍌",
            CropIcon::Carrot => "🥕",
            CropIcon::Grape => "🍇",
            CropIcon::Tomato => "🍅",
            CropIcon::Potato => "🥔",
            CropIcon::Onion => "🧅",
        }
    }
}

/// 作物1品目の保管基準
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CropReference {
    pub name: &'static str,
    pub icon: CropIcon,
    /// 温度 (°C)
    pub temperature: ValueRange,
    /// 湿度 (%)
    pub humidity: ValueRange,
    /// エチレン (ppm)
    pub ethylene: ValueRange,
}

impl CropReference {
    pub fn range(&self, kind: MetricKind) -> ValueRange {
        match kind {
            MetricKind::Temperature => self.temperature,
            MetricKind::Humidity => self.humidity,
            MetricKind::Ethylene => self.ethylene,
        }
    }
}

pub const CROP_CATALOG: [CropReference; 7] = [
    CropReference {
        name: "Apples",
        icon: CropIcon::Apple,
        temperature: ValueRange::new(0.0, 4.0),
        humidity: ValueRange::new(90.0, 95.0),
        ethylene: ValueRange::new(0.1, 1.0),
    },
    CropReference {
        name: "Bananas",
        icon: CropIcon::Banana,
        temperature: ValueRange::new(13.0, 15.0),
        humidity: ValueRange::new(85.0, 95.0),
        ethylene: ValueRange::new(0.1, 0.5),
    },
    CropReference {
        name: "Carrots",
        icon: CropIcon::Carrot,
        temperature: ValueRange::new(0.0, 2.0),
        humidity: ValueRange::new(95.0, 100.0),
        ethylene: ValueRange::new(0.0, 0.5),
    },
    CropReference {
        name: "Grapes",
        icon: CropIcon::Grape,
        temperature: ValueRange::new(-1.0, 0.0),
        humidity: ValueRange::new(90.0, 95.0),
        ethylene: ValueRange::new(0.0, 0.3),
    },
    CropReference {
        name: "Tomatoes",
        icon: CropIcon::Tomato,
        temperature: ValueRange::new(10.0, 13.0),
        humidity: ValueRange::new(85.0, 90.0),
        ethylene: ValueRange::new(0.1, 0.8),
    },
    CropReference {
        name: "Potatoes",
        icon: CropIcon::Potato,
        temperature: ValueRange::new(4.0, 8.0),
        humidity: ValueRange::new(90.0, 95.0),
        ethylene: ValueRange::new(0.0, 0.3),
    },
    CropReference {
        name: "Onions",
        icon: CropIcon::Onion,
        temperature: ValueRange::new(0.0, 4.0),
        humidity: ValueRange::new(65.0, 70.0),
        ethylene: ValueRange::new(0.0, 0.2),
    },
];

/// 名前で作物を検索（大文字小文字を区別しない）
pub fn find_crop(name: &str) -> Option<&'static CropReference> {
    CROP_CATALOG
        .iter()
        .find(|crop| crop.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_seven_unique_entries() {
        assert_eq!(CROP_CATALOG.len(), 7);
        let names: HashSet<_> = CROP_CATALOG.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), 7);
        let icons: HashSet<_> = CROP_CATALOG.iter().map(|c| c.icon).collect();
        assert_eq!(icons.len(), 7);
    }

    #[test]
    fn test_catalog_ranges_are_well_formed() {
        for crop in &CROP_CATALOG {
            for kind in MetricKind::ALL {
                let range = crop.range(kind);
                assert!(range.lo <= range.hi, "{} {:?}: lo > hi", crop.name, kind);
            }
        }
    }

    #[test]
    fn test_value_range_contains_is_closed() {
        let range = ValueRange::new(0.0, 4.0);
        assert!(range.contains(0.0));
        assert!(range.contains(4.0));
        assert!(range.contains(2.5));
        assert!(!range.contains(-0.1));
        assert!(!range.contains(4.01));
    }

    #[test]
    fn test_find_crop() {
        assert_eq!(find_crop("carrots").map(|c| c.icon), Some(CropIcon::Carrot));
        assert_eq!(find_crop(" Onions ").map(|c| c.name), Some("Onions"));
        assert!(find_crop("durian").is_none());
    }

    #[test]
    fn test_range_by_kind() {
        let apples = &CROP_CATALOG[0];
        assert_eq!(apples.range(MetricKind::Humidity), ValueRange::new(90.0, 95.0));
    }
}
