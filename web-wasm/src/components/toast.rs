//! 画面上部の一時通知（トースト）

use gloo::timers::callback::Timeout;
use leptos::prelude::*;

const DISMISS_AFTER_MS: u32 = 3500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::Info => "info",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Notice {
    id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// 通知の発行口（コンテキストで配る）
#[derive(Clone, Copy)]
pub struct Notifier {
    current: RwSignal<Option<Notice>>,
    next_id: StoredValue<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NoticeKind::Info, message.into());
    }

    fn push(&self, kind: NoticeKind, message: String) {
        let id = self.next_id.get_value() + 1;
        self.next_id.set_value(id);
        self.current.set(Some(Notice { id, kind, message }));

        // 後から出た通知を消さないよう id で確認
        let current = self.current;
        Timeout::new(DISMISS_AFTER_MS, move || {
            if current.get_untracked().is_some_and(|n| n.id == id) {
                current.set(None);
            }
        })
        .forget();
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

#[component]
pub fn Toast() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let current = notifier.current;

    view! {
        <Show when=move || current.with(Option::is_some)>
            {move || current.get().map(|notice| view! {
                <div
                    class=format!("toast toast-{}", notice.kind.as_str())
                    role="status"
                    on:click=move |_| notifier.dismiss()
                >
                    {notice.message}
                </div>
            })}
        </Show>
    }
}
