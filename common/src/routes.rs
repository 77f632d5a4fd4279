//! ルート定義とナビゲーション項目

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Route {
    Landing,
    Dashboard,
    FarmerDashboard,
    Tent,
    /// 未定義パス（元のパスを保持）
    NotFound(String),
}

impl Route {
    /// パスからルートを解決（末尾スラッシュ・クエリ・フラグメントは無視）
    pub fn from_path(path: &str) -> Self {
        let path = path
            .split(|c| c == '?' || c == '#')
            .next()
            .unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Landing,
            "/dashboard" => Route::Dashboard,
            "/farmer-dashboard" => Route::FarmerDashboard,
            "/tent" => Route::Tent,
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Landing => "/",
            Route::Dashboard => "/dashboard",
            Route::FarmerDashboard => "/farmer-dashboard",
            Route::Tent => "/tent",
            Route::NotFound(path) => path,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavIcon {
    Home,
    Dashboard,
    Users,
    Tent,
}

impl NavIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            NavIcon::Home => "🏠",
            NavIcon::Dashboard => "📊",
            NavIcon::Users => "👥",
            NavIcon::Tent => "⛺",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
}

impl NavItem {
    /// 完全一致のときだけアクティブ
    pub fn is_active(&self, current: &Route) -> bool {
        Route::from_path(self.path) == *current
    }
}

pub const BRAND_NAME: &str = "Sookshma";

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { path: "/", label: "Home", icon: NavIcon::Home },
    NavItem { path: "/dashboard", label: "Dashboard", icon: NavIcon::Dashboard },
    NavItem { path: "/farmer-dashboard", label: "Farmer View", icon: NavIcon::Users },
    NavItem { path: "/tent", label: "Tent", icon: NavIcon::Tent },
];
