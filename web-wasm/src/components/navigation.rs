//! ナビゲーションバー

use leptos::prelude::*;
use sookshma_common::routes::{BRAND_NAME, NAV_ITEMS};

use crate::app::Navigator;

#[component]
pub fn Navigation() -> impl IntoView {
    let navigator = expect_context::<Navigator>();
    let route = navigator.route();

    view! {
        <nav class="navbar glass-card">
            <a
                href="/"
                class="brand"
                on:click=move |ev| {
                    ev.prevent_default();
                    navigator.go("/");
                }
            >
                <span class="brand-mark">"🌱"</span>
                <span class="brand-name">{BRAND_NAME}</span>
            </a>
            <div class="nav-links">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let item = *item;
                        view! {
                            <a
                                href=item.path
                                class="nav-link"
                                class:active=move || item.is_active(&route.get())
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    navigator.go(item.path);
                                }
                            >
                                <span class="nav-icon">{item.icon.glyph()}</span>
                                <span class="nav-label">{item.label}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
