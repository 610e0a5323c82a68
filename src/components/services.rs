//! Services Section
//!
//! Four-cell grid: heading cell plus one card per service offering.

use leptos::prelude::*;

use crate::components::ServiceCard;
use crate::content::SERVICES;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services-section">
            <div class="services-grid">
                <div class="services-heading reveal">
                    <h2>"What " <br /> "We Do"</h2>
                </div>
                {SERVICES
                    .iter()
                    .map(|offering| view! { <ServiceCard offering=*offering /> })
                    .collect_view()}
            </div>
        </section>
    }
}
