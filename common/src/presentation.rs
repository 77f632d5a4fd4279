//! 表示用モデル（バッジ・指標カード・アラートモーダル）
//!
//! ここにあるのは入力から表示内容を決める純粋関数だけ。

use serde::Serialize;

use crate::i18n::Language;
use crate::types::{DetectionResult, MetricKind, Status};

/// ステータスバッジの見た目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeStyle {
    pub bg_class: &'static str,
    pub text_class: &'static str,
    pub glow_class: &'static str,
    pub label: &'static str,
}

impl BadgeStyle {
    pub fn for_status(status: Status) -> Self {
        match status {
            Status::Safe => BadgeStyle {
                bg_class: "bg-safe",
                text_class: "text-safe-foreground",
                glow_class: "glow-safe",
                label: "Safe",
            },
            Status::Attention => BadgeStyle {
                bg_class: "bg-warning",
                text_class: "text-warning-foreground",
                glow_class: "glow-warning",
                label: "Attention",
            },
            Status::Danger => BadgeStyle {
                bg_class: "bg-destructive",
                text_class: "text-destructive-foreground",
                glow_class: "glow-danger pulse-glow",
                label: "Danger",
            },
        }
    }

    pub fn class_list(&self) -> String {
        format!("status-badge {} {} {}", self.bg_class, self.text_class, self.glow_class)
    }
}

/// 指標カードのアイコン
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardIcon {
    Thermometer,
    Droplets,
    Wind,
    Package,
}

impl CardIcon {
    pub fn for_metric(kind: MetricKind) -> Self {
        match kind {
            MetricKind::Temperature => CardIcon::Thermometer,
            MetricKind::Humidity => CardIcon::Droplets,
            MetricKind::Ethylene => CardIcon::Wind,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            CardIcon::Thermometer => "🌡️",
            CardIcon::Droplets => "💧",
            CardIcon::Wind => "🌬️",
            CardIcon::Package => "📦",
        }
    }
}

/// 指標カード
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCardModel {
    pub icon: CardIcon,
    pub title: String,
    pub value: String,
    pub unit: Option<&'static str>,
    pub status: Option<Status>,
    pub large: bool,
}

impl MetricCardModel {
    /// カード外枠のクラス（ステータスがあればグロー付き）
    pub fn class_list(&self) -> String {
        let mut classes = vec!["metric-card", "glass-card"];
        if self.large {
            classes.push("large");
        }
        if let Some(status) = self.status {
            classes.push(match status {
                Status::Safe => "glow-safe",
                Status::Attention => "glow-attention",
                Status::Danger => "glow-danger",
            });
        }
        classes.join(" ")
    }

    /// 単位込みの表示値
    pub fn display_value(&self) -> String {
        match self.unit {
            Some(unit) => format_with_unit(&self.value, unit),
            None => self.value.clone(),
        }
    }
}

/// 表示桁に合わせて数値を整形
pub fn format_value(kind: MetricKind, value: f64) -> String {
    let precision = kind.profile().precision as usize;
    let factor = 10f64.powi(precision as i32);
    let mut rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        // -0.0 を "0" に揃える
        rounded = 0.0;
    }
    let formatted = format!("{:.*}", precision, rounded);
    // 1.50 → 1.5, 2.0 → 2
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

/// 値と単位を連結（°C と % は詰め、ppm や kg は空白を挟む）
pub fn format_with_unit(value: &str, unit: &str) -> String {
    match unit {
        "°C" | "%" => format!("{}{}", value, unit),
        _ => format!("{} {}", value, unit),
    }
}

/// 検出結果1件分の指標カード（温度・湿度・エチレン）
pub fn detection_cards(result: &DetectionResult) -> Vec<MetricCardModel> {
    result
        .readings()
        .iter()
        .map(|(kind, reading)| MetricCardModel {
            icon: CardIcon::for_metric(*kind),
            title: kind.short_label().to_string(),
            value: format_value(*kind, reading.value),
            unit: Some(kind.unit()),
            status: Some(reading.status),
            large: false,
        })
        .collect()
}

/// 農家向けダッシュボードの固定センサー値
pub fn farmer_cards(language: Language) -> Vec<MetricCardModel> {
    let t = language.strings();
    vec![
        MetricCardModel {
            icon: CardIcon::Thermometer,
            title: t.temperature.to_string(),
            value: "4".to_string(),
            unit: Some("°C"),
            status: Some(Status::Safe),
            large: true,
        },
        MetricCardModel {
            icon: CardIcon::Droplets,
            title: t.humidity.to_string(),
            value: "88".to_string(),
            unit: Some("%"),
            status: Some(Status::Safe),
            large: true,
        },
        MetricCardModel {
            icon: CardIcon::Wind,
            title: t.ethylene.to_string(),
            value: "1.8".to_string(),
            unit: Some("ppm"),
            status: Some(Status::Attention),
            large: true,
        },
        MetricCardModel {
            icon: CardIcon::Package,
            title: t.quantity.to_string(),
            value: "77".to_string(),
            unit: Some("kg"),
            status: Some(Status::Safe),
            large: true,
        },
    ]
}

/// リスクアラートモーダルの文言
pub struct RiskAlertCopy {
    pub title: &'static str,
    pub body: &'static str,
    pub acknowledge: &'static str,
    pub show_instructions: &'static str,
}

pub const RISK_ALERT: RiskAlertCopy = RiskAlertCopy {
    title: "High Spoilage Risk Detected",
    body: "Immediate action required to prevent produce damage. Please review the current conditions and take corrective measures.",
    acknowledge: "Acknowledge",
    show_instructions: "Show Instructions",
};

pub const INSTRUCTIONS_NOTICE: &str = "Instructions would be shown here";

/// 検出ダッシュボードの文言
pub mod dashboard_copy {
    pub const TITLE: &str = "Produce Intelligence Dashboard";
    pub const SUBTITLE: &str =
        "Upload images for AI-powered crop detection and storage recommendations";
    pub const UPLOAD_TITLE: &str = "Upload Produce Image";
    pub const UPLOAD_HINT: &str = "Drag and drop your image here, or click to browse";
    pub const SELECT_BUTTON: &str = "Select Image";
    pub const PROCESSING_TITLE: &str = "Processing Image...";
    pub const PROCESSING_HINT: &str = "Running YOLOv8 detection model";
    pub const EMPTY_RESULTS: &str = "No results yet. Upload an image to begin.";
    pub const SUCCESS_NOTICE: &str = "Image processed successfully!";
    pub const CLEAR_BUTTON: &str = "Clear Results";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CropIcon;
    use crate::types::MetricReading;

    #[test]
    fn test_badge_styles() {
        assert_eq!(BadgeStyle::for_status(Status::Safe).label, "Safe");
        assert_eq!(BadgeStyle::for_status(Status::Attention).bg_class, "bg-warning");
        let danger = BadgeStyle::for_status(Status::Danger);
        assert!(danger.glow_class.contains("pulse-glow"));
        assert!(danger.class_list().contains("bg-destructive"));
    }

    #[test]
    fn test_badge_labels_distinct() {
        let labels: std::collections::HashSet<_> = Status::ALL
            .iter()
            .map(|s| BadgeStyle::for_status(*s).label)
            .collect();
        assert_eq!(labels.len(), 3);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(MetricKind::Temperature, 2.0), "2");
        assert_eq!(format_value(MetricKind::Temperature, -0.5), "-0.5");
        assert_eq!(format_value(MetricKind::Humidity, 88.0), "88");
        assert_eq!(format_value(MetricKind::Ethylene, 1.5), "1.5");
        assert_eq!(format_value(MetricKind::Ethylene, 0.456), "0.46");
        assert_eq!(format_value(MetricKind::Temperature, -0.04), "0");
    }

    #[test]
    fn test_format_with_unit() {
        assert_eq!(format_with_unit("4.2", "°C"), "4.2°C");
        assert_eq!(format_with_unit("90", "%"), "90%");
        assert_eq!(format_with_unit("1.2", "ppm"), "1.2 ppm");
        assert_eq!(format_with_unit("77", "kg"), "77 kg");
    }

    #[test]
    fn test_card_display_value() {
        let cards = farmer_cards(Language::En);
        let shown: Vec<_> = cards.iter().map(MetricCardModel::display_value).collect();
        assert_eq!(shown, vec!["4°C", "88%", "1.8 ppm", "77 kg"]);
    }

    #[test]
    fn test_farmer_cards_localized() {
        let en = farmer_cards(Language::En);
        let te = farmer_cards(Language::Te);
        assert_eq!(en.len(), 4);
        assert_eq!(en[0].title, "Temperature");
        assert_eq!(te[1].title, "తేమ");
        assert_eq!(en[2].status, Some(Status::Attention));
        assert!(en.iter().all(|card| card.large));
        // 値は言語に依存しない
        let values_en: Vec<_> = en.iter().map(|c| c.value.clone()).collect();
        let values_te: Vec<_> = te.iter().map(|c| c.value.clone()).collect();
        assert_eq!(values_en, values_te);
    }

    #[test]
    fn test_detection_cards() {
        let result = DetectionResult {
            crop: "Carrots".to_string(),
            icon: CropIcon::Carrot,
            temperature: MetricReading { value: 5.0, status: Status::Attention },
            humidity: MetricReading { value: 85.0, status: Status::Safe },
            ethylene: MetricReading { value: 1.2, status: Status::Danger },
            quantity_kg: 32,
            confidence: 90,
        };
        let cards = detection_cards(&result);
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].icon, CardIcon::Thermometer);
        assert_eq!(cards[2].value, "1.2");
        assert_eq!(cards[2].unit, Some("ppm"));
        assert!(cards[2].class_list().contains("glow-danger"));
    }

    #[test]
    fn test_card_class_without_status() {
        let card = MetricCardModel {
            icon: CardIcon::Package,
            title: "Quantity".into(),
            value: "10".into(),
            unit: None,
            status: None,
            large: false,
        };
        assert_eq!(card.class_list(), "metric-card glass-card");
    }
}
