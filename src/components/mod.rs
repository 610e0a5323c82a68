//! UI Components
//!
//! Reusable Leptos components.

mod icons;
mod mouse_follower;
mod progress_bar;
mod cube;
mod marquee;
mod site_header;
mod menu_overlay;
mod hero;
mod about;
mod service_card;
mod services;
mod project_row;
mod work;
mod site_footer;

pub use icons::{ArrowRightIcon, ArrowUpRightIcon, CloseIcon};
pub use mouse_follower::MouseFollower;
pub use progress_bar::ProgressBar;
pub use cube::Cube;
pub use marquee::Marquee;
pub use site_header::SiteHeader;
pub use menu_overlay::MenuOverlay;
pub use hero::Hero;
pub use about::About;
pub use service_card::ServiceCard;
pub use services::Services;
pub use project_row::ProjectRow;
pub use work::Work;
pub use site_footer::SiteFooter;
