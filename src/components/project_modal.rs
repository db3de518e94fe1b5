//! Project Showcase Modal
//!
//! Attribute-driven popup over the project grid with a wrapping image
//! carousel. Closes on the close button or a backdrop click; clicks
//! inside the dialog don't propagate out.

use dioxus::prelude::*;
use folio_core::carousel::GalleryState;

use crate::content;

#[component]
pub fn ProjectModal(gallery: Signal<GalleryState>) -> Element {
    let state = *gallery.read();

    rsx! {
        if let Some(project) = state.project(content::PROJECTS) {
            div {
                class: "modal-backdrop",
                onclick: move |_| gallery.with_mut(|g| g.close()),

                div {
                    class: "modal project-modal",
                    onclick: move |evt| evt.stop_propagation(),

                    button {
                        r#type: "button",
                        class: "modal-close",
                        "aria-label": "Close",
                        onclick: move |_| gallery.with_mut(|g| g.close()),
                        "\u{00d7}"
                    }

                    if !project.images.is_empty() {
                        div { class: "carousel",
                            button {
                                r#type: "button",
                                class: "carousel-arrow prev",
                                "aria-label": "Previous image",
                                onclick: move |_| gallery.with_mut(|g| g.prev_image(content::PROJECTS)),
                                "\u{2039}"
                            }

                            if let Some(image) = state.current_image(content::PROJECTS) {
                                img { class: "carousel-image", src: "{image}", alt: "{project.title}" }
                            }

                            button {
                                r#type: "button",
                                class: "carousel-arrow next",
                                "aria-label": "Next image",
                                onclick: move |_| gallery.with_mut(|g| g.next_image(content::PROJECTS)),
                                "\u{203a}"
                            }

                            div { class: "carousel-dots",
                                for dot in 0..project.images.len() {
                                    span {
                                        class: if dot == state.image_index() { "carousel-dot active" } else { "carousel-dot" },
                                    }
                                }
                            }
                        }
                    }

                    div { class: "modal-body",
                        h3 { class: "modal-title", "{project.title}" }
                        p { class: "modal-summary", "{project.summary}" }
                        ul { class: "project-tags",
                            for tag in project.tech {
                                li { class: "project-tag", "{tag}" }
                            }
                        }
                        if let Some(repo) = project.repo_url {
                            a {
                                class: "modal-repo-link",
                                href: "{repo}",
                                target: "_blank",
                                "View source \u{2197}"
                            }
                        }
                    }
                }
            }
        }
    }
}
