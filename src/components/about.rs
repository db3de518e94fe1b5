//! About Section Component

use dioxus::prelude::*;

use crate::components::nav_header::Section;
use crate::content;
use crate::context::use_nav_bridge;

#[component]
pub fn About() -> Element {
    let bridge = use_nav_bridge();

    rsx! {
        section {
            id: "about",
            class: "page-section about-section",
            onmounted: move |evt| bridge.register_section(Section::About, evt.data()),

            div { class: "section-inner",
                h2 { class: "section-title", "About" }

                div { class: "about-columns",
                    div { class: "about-text",
                        for paragraph in content::ABOUT_PARAGRAPHS {
                            p { "{paragraph}" }
                        }
                    }

                    aside { class: "about-skills",
                        h3 { class: "skills-title", "Toolbox" }
                        ul { class: "skills-list",
                            for skill in content::SKILLS {
                                li { class: "skill-chip", "{skill}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
