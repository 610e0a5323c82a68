//! Site Content
//!
//! Every string the page shows, fixed at build time. Components render these
//! tables directly; there is no loading step and no mutation.

use crate::models::{Project, ServiceOffering};

/// Labels for the scrolling marquee strip
pub const MARQUEE_ITEMS: &[&str] = &[
    "Creative Development",
    "WebGL",
    "Three.js",
    "AI Integration",
    "Next.js",
    "React",
    "TypeScript",
    "UI/UX Design",
];

/// Overlay navigation targets; each maps to the `#section` anchor of its
/// lowercased name
pub const NAV_SECTIONS: &[&str] = &["Services", "Work", "About", "Contact"];

/// Placeholder social links in the footer
pub const SOCIAL_LINKS: &[&str] = &["Upwork", "LinkedIn", "GitHub"];

/// Contact address for the footer mailto link
pub const CONTACT_EMAIL: &str = "hello@studio.main";

/// Selected work, newest first
pub const PROJECTS: &[Project] = &[
    Project {
        title: "Ink AI",
        category: "Generative AI",
        year: "2024",
        description: "Vector ink smoothing & handwriting beautification engine.",
    },
    Project {
        title: "Fanatics",
        category: "Computer Vision",
        year: "2024",
        description: "Automated sports card grading and highlight detection.",
    },
    Project {
        title: "CodeSwipe",
        category: "Dev Tools",
        year: "2023",
        description: "Tinder-style interface for rapid Pull Request reviews.",
    },
    Project {
        title: "MicroView",
        category: "Edge IoT",
        year: "2023",
        description: "Real-time inference running on low-power Raspberry Pi devices.",
    },
    Project {
        title: "Kippap",
        category: "EdTech Platform",
        year: "2023",
        description: "Secure learning portal serving thousands of students.",
    },
    Project {
        title: "Prepfolio",
        category: "SaaS",
        year: "2022",
        description: "Analytics-driven review center preparation tool.",
    },
];

/// The three service offerings shown in the services grid
pub const SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        number: 1,
        title: "Product Engineering",
        description: "Full-stack React/Next.js apps built for scale. Secure, SEO-optimized, and type-safe.",
        tags: &["Next.js", "React", "Node.js"],
    },
    ServiceOffering {
        number: 2,
        title: "AI & Intelligence",
        description: "Chatbots, RAG systems, and computer vision tools that automate workflows.",
        tags: &["OpenAI", "RAG", "Python"],
    },
    ServiceOffering {
        number: 3,
        title: "Creative Web",
        description: "Immersive 3D experiences. High-performance motion design without the jank.",
        tags: &["Three.js", "WebGL", "GSAP"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::two_digit_label;

    #[test]
    fn test_project_list_order() {
        // The list renders in array order with 1-based zero-padded labels
        assert_eq!(PROJECTS[0].title, "Ink AI");
        assert_eq!(PROJECTS[0].category, "Generative AI");
        assert_eq!(PROJECTS[0].year, "2024");
        assert_eq!(two_digit_label(1), "01");
        assert_eq!(PROJECTS[1].title, "Fanatics");
        assert_eq!(two_digit_label(2), "02");
    }

    #[test]
    fn test_content_table_sizes() {
        assert_eq!(MARQUEE_ITEMS.len(), 8);
        assert_eq!(PROJECTS.len(), 6);
        assert_eq!(SERVICES.len(), 3);
        assert_eq!(NAV_SECTIONS.len(), 4);
    }

    #[test]
    fn test_services_are_numbered_in_order() {
        let numbers: Vec<u8> = SERVICES.iter().map(|offering| offering.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_nav_sections_have_anchor_names() {
        // Lowercased names double as in-page anchors
        for section in NAV_SECTIONS {
            assert!(section.chars().all(|c| c.is_ascii_alphabetic()));
        }
    }
}
