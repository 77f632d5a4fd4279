//! 404ページ

use leptos::prelude::*;
use sookshma_common::content::not_found;

use crate::app::Navigator;

#[component]
pub fn NotFound(path: String) -> impl IntoView {
    let navigator = expect_context::<Navigator>();
    web_sys::console::warn_2(&"404: no route for".into(), &path.clone().into());

    view! {
        <div class="not-found container centered">
            <h1>{not_found::TITLE}</h1>
            <p class="text-muted">{not_found::MESSAGE}</p>
            <p class="text-muted"><code>{path}</code></p>
            <a
                href="/"
                class="link"
                on:click=move |ev| {
                    ev.prevent_default();
                    navigator.go("/");
                }
            >
                {not_found::HOME_LINK}
            </a>
        </div>
    }
}
