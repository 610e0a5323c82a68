//! studio.main Frontend App
//!
//! Root application component: page chrome, menu state and the
//! scroll-reveal wiring shared by every section.

use leptos::prelude::*;

use leptos_pagefx::bind_scroll_reveal;

use crate::clock::use_studio_clock;
use crate::components::{
    About, Hero, Marquee, MenuOverlay, MouseFollower, ProgressBar, Services, SiteFooter,
    SiteHeader, Work,
};
use crate::content::MARQUEE_ITEMS;
use crate::context::{MenuContext, MenuState};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (menu, set_menu) = signal(MenuState::default());

    // Provide context to all children
    provide_context(MenuContext::new((menu, set_menu)));

    let time = use_studio_clock();

    // Observe every `.reveal` element once the page is in the DOM
    Effect::new(move |_| {
        web_sys::console::log_1(&"[APP] mounting scroll reveal".into());
        bind_scroll_reveal();
    });

    view! {
        <div class="page">
            <MouseFollower />
            <ProgressBar />
            <div class="grain-overlay"></div>

            <SiteHeader time=time />
            <MenuOverlay />

            <main class="page-main">
                <Hero />

                <section class="marquee-band">
                    <Marquee items=MARQUEE_ITEMS />
                </section>

                <About />
                <Services />
                <Work />
            </main>

            <SiteFooter />
        </div>
    }
}
