//! ランディングページ

use leptos::prelude::*;
use sookshma_common::content::{landing, CallToAction, FeatureTile};

use crate::app::Navigator;

#[component]
pub fn Landing() -> impl IntoView {
    // 背景の粒子は見た目だけなので位置はその場の乱数で決める
    let particles = (0..landing::PARTICLE_COUNT)
        .map(|_| {
            let style = format!(
                "left: {:.1}%; top: {:.1}%; animation-duration: {:.1}s; animation-delay: {:.1}s",
                js_sys::Math::random() * 100.0,
                js_sys::Math::random() * 100.0,
                3.0 + js_sys::Math::random() * 2.0,
                js_sys::Math::random() * 2.0,
            );
            view! { <div class="particle" style=style /> }
        })
        .collect_view();

    view! {
        <div class="landing">
            <section class="hero">
                <div class="hero-background" />
                <div class="particles">{particles}</div>
                <div class="hero-content container centered">
                    <div class="hero-badge glass-card">
                        <span>"✨"</span>
                        <span>{landing::BADGE}</span>
                    </div>
                    <h1 class="hero-title gradient-text">{landing::HEADLINE}</h1>
                    <p class="hero-tagline text-muted">{landing::TAGLINE}</p>
                    <div class="hero-actions">
                        {landing::HERO_ACTIONS
                            .iter()
                            .map(|action| view! { <ActionButton action=*action /> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="features container">
                <div class="section-header centered">
                    <h2>{landing::FEATURES_TITLE}</h2>
                    <p class="text-muted">{landing::FEATURES_SUBTITLE}</p>
                </div>
                <div class="feature-grid four">
                    {landing::FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, tile)| view! { <FeatureCard tile=*tile index=index /> })
                        .collect_view()}
                </div>
            </section>

            <section class="cta container">
                <div class="glass-card glow-safe centered">
                    <div class="cta-icon">"📈"</div>
                    <h2>{landing::CTA_TITLE}</h2>
                    <p class="text-muted">{landing::CTA_BODY}</p>
                    <ActionButton action=landing::CTA_ACTION />
                </div>
            </section>
        </div>
    }
}

/// ページ内遷移ボタン
#[component]
pub fn ActionButton(action: CallToAction) -> impl IntoView {
    let navigator = expect_context::<Navigator>();
    let class = if action.primary { "btn btn-primary btn-large" } else { "btn btn-outline btn-large" };

    view! {
        <button class=class on:click=move |_| navigator.go(action.target)>
            {action.label}
        </button>
    }
}

#[component]
pub fn FeatureCard(tile: FeatureTile, index: usize) -> impl IntoView {
    view! {
        <div class="feature-card glass-card floating" style=format!("animation-delay: {}s", index as f32 * 0.5)>
            <div class="feature-icon">{tile.glyph}</div>
            <h3>{tile.title}</h3>
            <p class="text-muted">{tile.description}</p>
        </div>
    }
}
