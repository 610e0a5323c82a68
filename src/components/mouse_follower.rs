//! Mouse Follower Component
//!
//! Decorative dot that trails the pointer in blend-difference white.
//! Hidden on touch-sized screens, and until the first pointer move.

use leptos::prelude::*;
use leptos_pagefx::{bind_global_pointermove, create_pointer_signals};

/// Fixed-position follower re-positioned on every pointer move
#[component]
pub fn MouseFollower() -> impl IntoView {
    let pointer = create_pointer_signals();
    bind_global_pointermove(pointer);

    view! {
        <div
            class="mouse-follower"
            class:visible=move || pointer.moved_read.get()
            style:left=move || format!("{}px", pointer.x_read.get())
            style:top=move || format!("{}px", pointer.y_read.get())
        ></div>
    }
}
