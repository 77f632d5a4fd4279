//! メインアプリケーションコンポーネント
//!
//! 現在のルートをシグナルで持ち、History API で URL と同期する。

use leptos::prelude::*;
use sookshma_common::Route;

use crate::components::{navigation::Navigation, toast::{Notifier, Toast}};
use crate::pages::{
    dashboard::Dashboard,
    farmer_dashboard::FarmerDashboard,
    landing::Landing,
    not_found::NotFound,
    tent_showcase::TentShowcase,
};

/// ページ遷移ハンドル（コンテキストで配る）
#[derive(Clone, Copy)]
pub struct Navigator {
    route: RwSignal<Route>,
}

impl Navigator {
    pub fn route(&self) -> Signal<Route> {
        self.route.into()
    }

    /// URLを書き換えてルートを切り替える
    pub fn go(&self, path: &str) {
        let next = Route::from_path(path);
        if self.route.get_untracked() == next {
            return;
        }
        if let Ok(history) = window().history() {
            if let Err(err) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path)) {
                web_sys::console::error_2(&"pushState failed".into(), &err);
            }
        }
        window().scroll_to_with_x_and_y(0.0, 0.0);
        self.route.set(next);
    }
}

fn current_route() -> Route {
    let path = window().location().pathname().unwrap_or_else(|_| "/".to_string());
    Route::from_path(&path)
}

#[component]
pub fn App() -> impl IntoView {
    let route = RwSignal::new(current_route());
    let navigator = Navigator { route };
    provide_context(navigator);
    provide_context(Notifier::new());

    // ブラウザの戻る/進む
    let _popstate = window_event_listener(leptos::ev::popstate, move |_| {
        route.set(current_route());
    });

    view! {
        <Navigation />
        <Toast />
        <main class="page">
            {move || match route.get() {
                Route::Landing => view! { <Landing /> }.into_any(),
                Route::Dashboard => view! { <Dashboard /> }.into_any(),
                Route::FarmerDashboard => view! { <FarmerDashboard /> }.into_any(),
                Route::Tent => view! { <TentShowcase /> }.into_any(),
                Route::NotFound(path) => view! { <NotFound path=path /> }.into_any(),
            }}
        </main>
    }
}
