//! 検出ダッシュボード
//!
//! アップロード → 入力チェック → プレビュー読込 + 擬似処理ディレイ → 結果表示。
//! 状態は `DashboardSession` に集約し、表示側は読むだけ。

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use sookshma_common::presentation::{dashboard_copy as copy, detection_cards};
use sookshma_common::{DashboardSession, DetectionResult, DetectionSimulator, UploadFile};
use web_sys::File;

use crate::components::{
    metric_card::MetricCard,
    status_badge::StatusBadge,
    toast::Notifier,
    upload_area::{read_as_data_url, UploadArea},
};

#[component]
pub fn Dashboard() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let session = RwSignal::new(DashboardSession::new());
    let simulator = Rc::new(RefCell::new(DetectionSimulator::from_entropy()));

    let on_file = move |file: File| {
        let upload = UploadFile::new(file.name(), file.type_(), file.size() as u64);
        let delay = simulator.borrow_mut().processing_delay();

        let ticket = match session.try_update(|s| s.begin_upload(&upload, delay)) {
            Some(Ok(ticket)) => ticket,
            Some(Err(err)) => {
                notifier.error(err.to_string());
                return;
            }
            None => return,
        };

        read_as_data_url(&file, move |data_url| {
            session.update(|s| {
                s.attach_preview(&ticket, data_url);
            });
        });

        let simulator = simulator.clone();
        Timeout::new(ticket.delay.as_millis() as u32, move || {
            let results = simulator.borrow_mut().run();
            let published = session
                .try_update(|s| s.complete(&ticket, results))
                .unwrap_or(false);
            if published {
                notifier.success(copy::SUCCESS_NOTICE);
            }
        })
        .forget();
    };

    let on_drag_change = move |active: bool| {
        if session.with_untracked(|s| s.drag_active()) != active {
            session.update(|s| s.set_drag_active(active));
        }
    };

    let is_processing = Signal::derive(move || session.with(|s| s.is_processing()));
    let drag_active = Signal::derive(move || session.with(|s| s.drag_active()));
    let results = Memo::new(move |_| session.with(|s| s.results().to_vec()));
    let preview = Memo::new(move |_| session.with(|s| s.preview().map(str::to_string)));

    view! {
        <div class="dashboard container">
            <header class="page-header">
                <h1>{copy::TITLE}</h1>
                <p class="text-muted">{copy::SUBTITLE}</p>
            </header>

            <div class="dashboard-grid">
                <section class="upload-column">
                    <UploadArea
                        is_processing=is_processing
                        drag_active=drag_active
                        on_drag_change=on_drag_change
                        on_file=on_file
                    />
                    {move || preview.get().map(|src| view! {
                        <div class="preview glass-card">
                            <img src=src alt="Uploaded produce" />
                            <p class="text-muted">
                                {move || session.with(|s| s.file_name().unwrap_or_default().to_string())}
                            </p>
                        </div>
                    })}
                </section>

                <section class="results-column">
                    <Show
                        when=move || !results.with(Vec::is_empty)
                        fallback=|| view! {
                            <div class="glass-card empty-results">
                                <div class="empty-icon">"📦"</div>
                                <p>{copy::EMPTY_RESULTS}</p>
                            </div>
                        }
                    >
                        {move || {
                            results
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, result)| view! { <ResultCard result=result index=index /> })
                                .collect_view()
                        }}
                        <button class="btn btn-outline" on:click=move |_| session.update(|s| s.clear())>
                            {copy::CLEAR_BUTTON}
                        </button>
                    </Show>
                </section>
            </div>
        </div>
    }
}

#[component]
fn ResultCard(result: DetectionResult, index: usize) -> impl IntoView {
    let cards = detection_cards(&result);
    let delay = index as f32 * 0.1;

    view! {
        <div class="result-card glass-card" style=format!("animation-delay: {:.1}s", delay)>
            <div class="result-head">
                <div class="result-title">
                    <span class="crop-icon">{result.icon.glyph()}</span>
                    <div>
                        <h3>{result.crop.clone()}</h3>
                        <p class="text-muted">
                            {format!("Quantity: {} kg · Confidence: {}%", result.quantity_kg, result.confidence)}
                        </p>
                    </div>
                </div>
                <StatusBadge status=result.worst_status() />
            </div>
            <div class="result-metrics">
                {cards
                    .into_iter()
                    .enumerate()
                    .map(|(i, card)| view! { <MetricCard card=card delay={delay + i as f32 * 0.05} /> })
                    .collect_view()}
            </div>
        </div>
    }
}
