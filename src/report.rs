//! 端末向けの表示（カード・マスタ一覧・ナビゲーション表）

use sookshma_common::presentation::{
    detection_cards, farmer_cards, format_value, MetricCardModel, RISK_ALERT,
};
use sookshma_common::routes::{Route, BRAND_NAME, NAV_ITEMS};
use sookshma_common::{BadgeStyle, DetectionResult, Language, MetricKind, CROP_CATALOG};
use std::fmt::Write;

use crate::simulate::DetectionReport;

fn badge(status: sookshma_common::Status) -> String {
    format!("[{}]", BadgeStyle::for_status(status).label)
}

fn card_line(card: &MetricCardModel) -> String {
    let mut line = format!("{} {:<12} {}", card.icon.glyph(), card.title, card.display_value());
    if let Some(status) = card.status {
        line.push(' ');
        line.push_str(&badge(status));
    }
    line
}

/// 検出結果リストを表示用テキストに
pub fn render_results(results: &[DetectionResult]) -> String {
    if results.is_empty() {
        return format!("{}\n", sookshma_common::presentation::dashboard_copy::EMPTY_RESULTS);
    }

    let mut out = String::new();
    for result in results {
        let _ = writeln!(
            out,
            "{} {}  {}",
            result.icon.glyph(),
            result.crop,
            badge(result.worst_status())
        );
        let _ = writeln!(
            out,
            "   Quantity: {} kg  Confidence: {}%",
            result.quantity_kg, result.confidence
        );
        for card in detection_cards(result) {
            let _ = writeln!(out, "   {}", card_line(&card));
        }
        out.push('\n');
    }
    out
}

pub fn render_report(report: &DetectionReport) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "📷 {} ({}, {} bytes",
        report.file_name, report.mime_type, report.size_bytes
    );
    if let Some((w, h)) = report.dimensions {
        let _ = write!(out, ", {}x{}", w, h);
    }
    let _ = writeln!(out, ", {} ms)\n", report.processing_ms);
    out.push_str(&render_results(&report.results));
    out
}

pub fn render_farmer(language: Language, show_alert: bool) -> String {
    let t = language.strings();
    let mut out = String::new();
    let _ = writeln!(out, "{}\n{}\n", t.title, t.subtitle);
    for card in farmer_cards(language) {
        let _ = writeln!(out, "  {}", card_line(&card));
    }
    let _ = writeln!(out, "\n({})", t.switch_language);

    if show_alert {
        let _ = writeln!(out, "\n⚠️  {}", RISK_ALERT.title);
        let _ = writeln!(out, "   {}", RISK_ALERT.body);
        let _ = writeln!(
            out,
            "   [{}] [{}]",
            RISK_ALERT.acknowledge, RISK_ALERT.show_instructions
        );
    }
    out
}

pub fn render_catalog() -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<4}{:<10} {:>14} {:>14} {:>16}",
        "", "Crop", "Temp (°C)", "Humidity (%)", "Ethylene (ppm)"
    );
    for crop in &CROP_CATALOG {
        let cell = |kind: MetricKind| {
            let range = crop.range(kind);
            format!("{} – {}", format_value(kind, range.lo), format_value(kind, range.hi))
        };
        let _ = writeln!(
            out,
            "{:<4}{:<10} {:>14} {:>14} {:>16}",
            crop.icon.glyph(),
            crop.name,
            cell(MetricKind::Temperature),
            cell(MetricKind::Humidity),
            cell(MetricKind::Ethylene),
        );
    }
    out
}

pub fn render_routes() -> String {
    let mut out = format!("🌱 {}\n", BRAND_NAME);
    for item in &NAV_ITEMS {
        let _ = writeln!(out, "  {} {:<12} {}", item.icon.glyph(), item.label, item.path);
    }
    let _ = writeln!(out, "  {:<14} {}", "(not found)", Route::NotFound("*".into()).path());
    out
}
