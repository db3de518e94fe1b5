//! Projects Section Component
//!
//! Card grid over the project list; clicking a card opens the showcase
//! modal with its image carousel.

use dioxus::prelude::*;
use folio_core::carousel::GalleryState;

use crate::components::nav_header::Section;
use crate::components::ProjectModal;
use crate::content;
use crate::context::use_nav_bridge;

#[component]
pub fn Projects() -> Element {
    let bridge = use_nav_bridge();
    let mut gallery = use_signal(GalleryState::new);

    rsx! {
        section {
            id: "projects",
            class: "page-section projects-section",
            onmounted: move |evt| bridge.register_section(Section::Projects, evt.data()),

            div { class: "section-inner",
                h2 { class: "section-title", "Projects" }

                div { class: "project-grid",
                    for (index, project) in content::PROJECTS.iter().enumerate() {
                        article {
                            key: "{project.id}",
                            class: "project-card",
                            onclick: move |_| gallery.with_mut(|g| g.open(index, content::PROJECTS)),

                            if let Some(cover) = project.images.first() {
                                div { class: "project-cover",
                                    img { src: "{cover}", alt: "{project.title}", loading: "lazy" }
                                }
                            }
                            div { class: "project-body",
                                h3 { class: "project-title", "{project.title}" }
                                p { class: "project-summary", "{project.summary}" }
                                ul { class: "project-tags",
                                    for tag in project.tech {
                                        li { class: "project-tag", "{tag}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        ProjectModal { gallery }
    }
}
