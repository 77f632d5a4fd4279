//! テント紹介ページ

use leptos::prelude::*;
use sookshma_common::content::tent;

use super::landing::{ActionButton, FeatureCard};

#[component]
pub fn TentShowcase() -> impl IntoView {
    view! {
        <div class="tent container">
            <header class="page-header centered">
                <h1>{tent::TITLE}</h1>
                <p class="text-muted">{tent::SUBTITLE}</p>
            </header>

            <div class="showcase glass-card glow-safe floating">
                <img src="/assets/tent-showcase.jpg" alt=tent::TITLE />
            </div>

            <div class="feature-grid two">
                {tent::FEATURES
                    .iter()
                    .enumerate()
                    .map(|(index, tile)| view! { <FeatureCard tile=*tile index=index /> })
                    .collect_view()}
            </div>

            <section class="how-it-works glass-card centered">
                <h2>{tent::HOW_TITLE}</h2>
                <p class="text-muted">{tent::HOW_BODY}</p>
                <div class="hero-actions">
                    {tent::ACTIONS
                        .iter()
                        .map(|action| view! { <ActionButton action=*action /> })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
