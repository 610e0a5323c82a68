//! Site Footer
//!
//! Contact section: pitch copy, mailto link, social links and the legal
//! bottom bar. Doubles as the `#contact` anchor target.

use leptos::prelude::*;

use crate::components::ArrowRightIcon;
use crate::content::{CONTACT_EMAIL, SOCIAL_LINKS};

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer id="contact" class="site-footer">
            <div class="contact-grid reveal">
                <div class="contact-pitch">
                    <span class="section-eyebrow">"( Contact )"</span>
                    <h2 class="contact-title">
                        "Let's build" <br /> "something."
                    </h2>
                    <p class="contact-copy">
                        "Send us your goal. We'll reply with a quick plan and timeline. No fluff."
                    </p>
                </div>

                <div class="contact-links">
                    <a href=format!("mailto:{CONTACT_EMAIL}") class="contact-email">
                        {CONTACT_EMAIL}
                    </a>
                    <div class="contact-socials">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|social| view! { <a href="#" class="social-link">{*social}</a> })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="footer-bottom reveal">
                <div class="footer-colophon">
                    <span>"Studio.Main © 2025"</span>
                    <span>"Based in Manila"</span>
                </div>
                <div class="footer-legal">
                    <a href="#">"Privacy"</a>
                    <a href="#">"Terms"</a>
                </div>
                <div class="footer-arrow">
                    <ArrowRightIcon />
                </div>
            </div>
        </footer>
    }
}
