//! Hero Section
//!
//! Oversized headline, studio intro and the two calls to action, with the
//! rotating cube floating behind.

use leptos::prelude::*;

use crate::components::{ArrowRightIcon, Cube};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-scene">
                <Cube />
            </div>

            <div class="hero-inner">
                <div class="hero-headline-clip">
                    <h1 class="hero-headline reveal">
                        "Digital" <br />
                        <span class="hero-headline-dim">"Product"</span> <br />
                        "Studio"
                    </h1>
                </div>

                <div class="hero-bottom reveal">
                    <p class="hero-intro">
                        "// We design & build AI-powered apps, motion-rich interfaces, and secure platforms. Led by Adrian, Avril, & Mc."
                    </p>

                    <div class="hero-actions">
                        <a href="#contact" class="hero-cta">
                            <div class="hero-cta-circle">
                                <ArrowRightIcon />
                            </div>
                            <span class="hero-cta-label">"Start Project"</span>
                        </a>
                        <a href="#services" class="hero-hint">
                            <span class="hero-hint-dot"></span>
                            "Scroll to services"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
