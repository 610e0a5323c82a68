//! Project Row Component
//!
//! One entry in the selected-work list: index label, title, description
//! (shown on hover), category pill, year and arrow.

use leptos::prelude::*;

use crate::components::ArrowUpRightIcon;
use crate::models::{two_digit_label, Project};

/// Single project row; `index` is the zero-based list position
#[component]
pub fn ProjectRow(project: Project, index: usize) -> impl IntoView {
    view! {
        <div class="project-row reveal">
            <a class="project-link">
                <div class="project-heading">
                    <span class="project-index">{two_digit_label(index + 1)}</span>
                    <h3 class="project-title">{project.title}</h3>
                </div>
                <div class="project-meta">
                    <p class="project-description">{project.description}</p>
                    <div class="project-facts">
                        <span class="project-category">{project.category}</span>
                        <span class="project-year">{project.year}</span>
                        <span class="project-arrow">
                            <ArrowUpRightIcon />
                        </span>
                    </div>
                </div>
            </a>
        </div>
    }
}
