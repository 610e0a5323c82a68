//! Menu Overlay Component
//!
//! Full-screen navigation shown while the menu is open. Selecting a link or
//! the close button dismisses it.

use leptos::prelude::*;

use crate::components::CloseIcon;
use crate::content::NAV_SECTIONS;
use crate::context::MenuContext;

#[component]
pub fn MenuOverlay() -> impl IntoView {
    let menu = use_context::<MenuContext>().expect("MenuContext should be provided");

    view! {
        <Show when=move || menu.is_open()>
            <div class="menu-overlay">
                <button class="menu-close" on:click=move |_| menu.close()>
                    <CloseIcon />
                </button>
                <nav class="menu-nav">
                    {NAV_SECTIONS
                        .iter()
                        .map(|section| {
                            let href = format!("#{}", section.to_lowercase());
                            view! {
                                <a href=href class="menu-link" on:click=move |_| menu.close()>
                                    {*section}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </Show>
    }
}
