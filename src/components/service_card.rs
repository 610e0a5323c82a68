//! Service Card Component
//!
//! One cell in the services grid: numbered marker, title, description and
//! tag chips.

use leptos::prelude::*;

use crate::models::{two_digit_label, ServiceOffering};

#[component]
pub fn ServiceCard(offering: ServiceOffering) -> impl IntoView {
    view! {
        <div class="service-card reveal">
            <div>
                <div class="service-marker">
                    <span>"(SERVICE)"</span>
                    <span>{two_digit_label(offering.number as usize)}</span>
                </div>
                <h3 class="service-title">{offering.title}</h3>
                <p class="service-description">{offering.description}</p>
            </div>
            <div class="service-tags">
                {offering
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="service-tag">{*tag}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
