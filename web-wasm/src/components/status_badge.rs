//! ステータスバッジコンポーネント

use leptos::prelude::*;
use sookshma_common::{BadgeStyle, Status};

#[component]
pub fn StatusBadge(
    status: Status,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let style = BadgeStyle::for_status(status);
    let label = label.unwrap_or_else(|| style.label.to_string());

    view! {
        <span class=style.class_list() data-status=status.as_str()>
            <span class="status-dot" />
            {label}
        </span>
    }
}
