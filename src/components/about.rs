//! About Section
//!
//! Studio positioning statement and the stat grid.

use leptos::prelude::*;

/// Headline stats shown under the about copy
const ABOUT_STATS: &[(&str, &str)] = &[
    ("3+", "Years Exp"),
    ("15+", "Projects"),
    ("100%", "Remote"),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about-section">
            <div class="about-grid">
                <div class="about-heading reveal">
                    <span class="section-eyebrow">"( About )"</span>
                    <h2 class="about-title">
                        "Not just another" <br /> "dev shop."
                    </h2>
                </div>
                <div class="about-body reveal">
                    <p class="about-lead">
                        "We bridge the gap between "
                        <span class="about-strong">"high-end motion design"</span>
                        " and "
                        <span class="about-strong">"engineering rigor"</span>
                        ". While others choose between performance and aesthetics, we deliver both."
                    </p>
                    <div class="about-stats">
                        {ABOUT_STATS
                            .iter()
                            .map(|(value, label)| {
                                view! {
                                    <div class="about-stat">
                                        <h4 class="about-stat-value">{*value}</h4>
                                        <span class="about-stat-label">{*label}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
