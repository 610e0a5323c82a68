//! Site Header Component
//!
//! Fixed header in blend-difference: brand block with the Manila clock on
//! the left, menu button on the right.

use leptos::prelude::*;

use crate::context::MenuContext;

#[component]
pub fn SiteHeader(time: ReadSignal<String>) -> impl IntoView {
    let menu = use_context::<MenuContext>().expect("MenuContext should be provided");

    view! {
        <header class="site-header">
            <div class="brand">
                <span class="brand-name">"studio.main"</span>
                <span class="brand-meta">"Manila, PH — " {move || time.get()}</span>
            </div>

            <button class="menu-button" on:click=move |_| menu.toggle()>
                <span class="menu-button-label">"Menu"</span>
                <div class="menu-button-glyph">
                    <span></span>
                    <span></span>
                </div>
            </button>
        </header>
    }
}
