//! Scroll Progress Bar Component
//!
//! Thin gradient bar across the top of the viewport, scaled horizontally to
//! the fraction of the page scrolled.

use leptos::prelude::*;
use leptos_pagefx::{bind_global_scroll, create_scroll_signals};

#[component]
pub fn ProgressBar() -> impl IntoView {
    let scroll = create_scroll_signals();
    bind_global_scroll(scroll);

    view! {
        <div
            class="scroll-progress"
            style:transform=move || format!("scaleX({})", scroll.progress_read.get() / 100.0)
        ></div>
    }
}
