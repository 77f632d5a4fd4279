//! 静的ページの文言（ランディング・テント紹介・404）

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureTile {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// ページ内ボタン（遷移先パス付き）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub label: &'static str,
    pub target: &'static str,
    pub primary: bool,
}

pub mod landing {
    use super::{CallToAction, FeatureTile};

    pub const BADGE: &str = "AI-Powered Cold Storage Intelligence";
    pub const HEADLINE: &str = "Sookshma Smart Edge";
    pub const TAGLINE: &str = "Micro cold storage intelligence for Bharat farmers. Preserve freshness, prevent waste, empower communities.";

    pub const HERO_ACTIONS: [CallToAction; 2] = [
        CallToAction { label: "Try Dashboard", target: "/dashboard", primary: true },
        CallToAction { label: "View Tent Model", target: "/tent", primary: false },
    ];

    pub const FEATURES_TITLE: &str = "Two Components, One Solution";
    pub const FEATURES_SUBTITLE: &str = "Combining intelligent monitoring with portable cold storage";

    pub const FEATURES: [FeatureTile; 4] = [
        FeatureTile {
            glyph: "🧠",
            title: "Smart Edge AI",
            description: "YOLOv8-powered crop detection with real-time intelligence",
        },
        FeatureTile {
            glyph: "⛺",
            title: "Cold Storage Tent",
            description: "Portable micro cold storage optimized for rural farmers",
        },
        FeatureTile {
            glyph: "🛡️",
            title: "Risk Prevention",
            description: "24/7 monitoring with instant spoilage alerts",
        },
        FeatureTile {
            glyph: "⚡",
            title: "IoT Sensors",
            description: "Temperature, humidity, and ethylene tracking",
        },
    ];

    pub const CTA_TITLE: &str = "Ready to Transform Your Storage?";
    pub const CTA_BODY: &str = "Join thousands of farmers already using Sookshma Smart Edge to reduce waste and increase profits.";
    pub const CTA_ACTION: CallToAction = CallToAction {
        label: "Get Started Today",
        target: "/farmer-dashboard",
        primary: true,
    };

    /// 背景に浮かべる粒子の数
    pub const PARTICLE_COUNT: usize = 20;
}

pub mod tent {
    use super::{CallToAction, FeatureTile};

    pub const TITLE: &str = "Cold Storage Tent";
    pub const SUBTITLE: &str = "Portable micro cold storage solution designed for rural farmers";

    pub const FEATURES: [FeatureTile; 4] = [
        FeatureTile {
            glyph: "🌡️",
            title: "Advanced Cooling",
            description: "Maintains optimal temperature range for all produce types",
        },
        FeatureTile {
            glyph: "🌬️",
            title: "Smart Airflow",
            description: "Intelligent ventilation system for uniform cooling",
        },
        FeatureTile {
            glyph: "🛡️",
            title: "Insulation Layer",
            description: "Multi-layer insulation for maximum energy efficiency",
        },
        FeatureTile {
            glyph: "⚡",
            title: "IoT Integrated",
            description: "Real-time monitoring with Smart Edge AI brain",
        },
    ];

    pub const HOW_TITLE: &str = "How Smart Edge & Tent Work Together";
    pub const HOW_BODY: &str = "The Smart Edge AI brain continuously monitors conditions inside the Cold Storage Tent, automatically adjusting temperature and humidity while alerting you to any risks. This intelligent system ensures your produce stays fresh longer with minimal manual intervention.";

    pub const ACTIONS: [CallToAction; 2] = [
        CallToAction { label: "View Dashboard", target: "/dashboard", primary: true },
        CallToAction { label: "Back to Home", target: "/", primary: false },
    ];
}

pub mod not_found {
    pub const TITLE: &str = "404";
    pub const MESSAGE: &str = "Oops! Page not found";
    pub const HOME_LINK: &str = "Return to Home";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Route;

    #[test]
    fn test_every_action_targets_known_route() {
        let actions = landing::HERO_ACTIONS
            .iter()
            .chain(std::iter::once(&landing::CTA_ACTION))
            .chain(tent::ACTIONS.iter());
        for action in actions {
            assert!(
                !matches!(Route::from_path(action.target), Route::NotFound(_)),
                "{} → {}",
                action.label,
                action.target
            );
        }
    }

    #[test]
    fn test_feature_tiles_filled() {
        for tile in landing::FEATURES.iter().chain(tent::FEATURES.iter()) {
            assert!(!tile.title.is_empty());
            assert!(!tile.description.is_empty());
        }
    }
}
