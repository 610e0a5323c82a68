//! Selected Work Section
//!
//! Project list rendered in array order, under the section heading and
//! above the view-all button.

use leptos::prelude::*;

use crate::components::ProjectRow;
use crate::content::PROJECTS;

#[component]
pub fn Work() -> impl IntoView {
    view! {
        <section id="work" class="work-section">
            <div class="work-heading reveal">
                <h2 class="work-title">"Selected Work"</h2>
                <span class="work-range">"( 2022 — 2024 )"</span>
            </div>

            <div class="project-list">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(index, project)| view! { <ProjectRow project=*project index=index /> })
                    .collect_view()}
            </div>

            <div class="work-more reveal">
                <button class="work-more-button">"View All Projects"</button>
            </div>
        </section>
    }
}
