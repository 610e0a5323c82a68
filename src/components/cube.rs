//! Rotating Cube Component
//!
//! Decorative 3D CSS cube behind the hero headline. The scene floats and the
//! cube tumbles; both are stylesheet keyframes.

use leptos::prelude::*;

#[component]
pub fn Cube() -> impl IntoView {
    view! {
        <div class="scene animate-float">
            <div class="cube animate-rotate">
                <div class="face front">".main"</div>
                <div class="face back">"AI"</div>
                <div class="face right">"WEB"</div>
                <div class="face left">"3D"</div>
                <div class="face top"></div>
                <div class="face bottom"></div>
            </div>
        </div>
    }
}
