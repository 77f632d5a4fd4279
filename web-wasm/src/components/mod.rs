//! UIコンポーネント

pub mod metric_card;
pub mod navigation;
pub mod risk_alert_modal;
pub mod status_badge;
pub mod toast;
pub mod upload_area;
