//! 指標カードコンポーネント

use leptos::prelude::*;
use sookshma_common::MetricCardModel;

use super::status_badge::StatusBadge;

#[component]
pub fn MetricCard(
    card: MetricCardModel,
    /// 表示アニメーションの遅延（秒）
    #[prop(optional)]
    delay: f32,
) -> impl IntoView {
    let class = card.class_list();
    let style = format!("animation-delay: {:.1}s", delay);

    view! {
        <div class=class style=style>
            <div class="metric-card-head">
                <span class="metric-icon">{card.icon.glyph()}</span>
                {card.status.map(|status| view! { <StatusBadge status=status /> })}
            </div>
            <h3 class="metric-title">{card.title.clone()}</h3>
            <div class="metric-value">
                <span class="value">{card.value.clone()}</span>
                {card.unit.map(|unit| view! { <span class="unit">{unit}</span> })}
            </div>
        </div>
    }
}
