//! リスクアラートモーダル
//!
//! 背景クリックと閉じるボタンは `on_close`。手順ボタンは `on_show_instructions`
//! が渡されたときだけ出す。

use leptos::prelude::*;
use sookshma_common::presentation::RISK_ALERT;

#[component]
pub fn RiskAlertModal(
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(optional)] on_show_instructions: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="modal glass-card glow-danger pulse-glow"
                    role="alertdialog"
                    on:click=|ev| ev.stop_propagation()
                >
                    <button class="modal-close" aria-label="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                    <div class="modal-icon">"⚠️"</div>
                    <h2>{RISK_ALERT.title}</h2>
                    <p class="text-muted">{RISK_ALERT.body}</p>
                    <div class="modal-actions">
                        <button class="btn btn-outline" on:click=move |_| on_close.run(())>
                            {RISK_ALERT.acknowledge}
                        </button>
                        {on_show_instructions.map(|show| view! {
                            <button class="btn btn-danger" on:click=move |_| show.run(())>
                                {RISK_ALERT.show_instructions}
                            </button>
                        })}
                    </div>
                </div>
            </div>
        </Show>
    }
}
