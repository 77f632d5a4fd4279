//! 農家向けダッシュボード（英語 / テルグ語）

use leptos::prelude::*;
use sookshma_common::presentation::farmer_cards;
use sookshma_common::FarmerSession;

use crate::components::{
    metric_card::MetricCard,
    risk_alert_modal::RiskAlertModal,
    toast::Notifier,
};

#[component]
pub fn FarmerDashboard() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let farmer = RwSignal::new(FarmerSession::default());
    let strings = move || farmer.with(|f| f.language.strings());

    let on_close = Callback::new(move |_: ()| farmer.update(|f| f.acknowledge()));
    let on_show_instructions = Callback::new(move |_: ()| {
        let notice = farmer
            .try_update(|f| f.show_instructions())
            .unwrap_or_default();
        notifier.info(notice);
    });

    view! {
        <div class="farmer-dashboard container narrow">
            <header class="page-header centered">
                <h1>{move || strings().title}</h1>
                <p class="text-muted">{move || strings().subtitle}</p>
                <button
                    class="btn btn-outline"
                    on:click=move |_| farmer.update(|f| f.toggle_language())
                >
                    <span class="btn-icon">"🌐"</span>
                    {move || strings().switch_language}
                </button>
            </header>

            <div class="metric-grid">
                {move || {
                    farmer_cards(farmer.with(|f| f.language))
                        .into_iter()
                        .enumerate()
                        .map(|(index, card)| view! { <MetricCard card=card delay={index as f32 * 0.1} /> })
                        .collect_view()
                }}
            </div>

            <div class="centered">
                <button class="btn btn-outline" on:click=move |_| farmer.update(|f| f.open_alert())>
                    "Test Alert"
                </button>
            </div>

            <RiskAlertModal
                is_open=Signal::derive(move || farmer.with(|f| f.show_alert))
                on_close=on_close
                on_show_instructions=on_show_instructions
            />
        </div>
    }
}
