//! Hero Section Component
//!
//! The landing view: staggered name reveal, the two-phase typewriter for
//! the headline and description, and the primary calls to action. The
//! typewriter itself lives in folio-core; this component just drives it
//! with sleeps and renders each frame's markup.

use dioxus::prelude::*;
use folio_core::typing::{stagger_delays, Typewriter, TypingTarget};

use crate::components::nav_header::Section;
use crate::content;
use crate::context::use_nav_bridge;

#[component]
pub fn Hero() -> Element {
    let bridge = use_nav_bridge();
    let mut headline = use_signal(String::new);
    let mut description = use_signal(String::new);

    // Drive the typewriter once, on mount.
    use_effect(move || {
        spawn(async move {
            let mut typewriter = Typewriter::new(content::HERO_SCRIPT);
            while let Some(step) = typewriter.tick() {
                match step.target {
                    TypingTarget::Headline => headline.set(step.html),
                    TypingTarget::Description => description.set(step.html),
                }
                tokio::time::sleep(std::time::Duration::from_millis(step.delay_ms)).await;
            }
        });
    });

    let name_words: Vec<(String, u64)> = {
        let words: Vec<&str> = content::OWNER_NAME.split_whitespace().collect();
        let delays = stagger_delays(words.len(), 150, 120);
        words
            .iter()
            .zip(delays)
            .map(|(w, d)| (w.to_string(), d))
            .collect()
    };

    rsx! {
        section {
            id: "home",
            class: "hero-section",
            onmounted: move |evt| bridge.register_section(Section::Home, evt.data()),

            div { class: "hero-inner",
                p { class: "hero-eyebrow", "Hi there, I'm" }
                h1 { class: "hero-name",
                    for (word, delay) in name_words {
                        span {
                            class: "reveal-word",
                            style: "animation-delay: {delay}ms;",
                            "{word} "
                        }
                    }
                }
                h2 { class: "hero-headline", dangerous_inner_html: "{headline}" }
                p { class: "hero-description", dangerous_inner_html: "{description}" }

                div { class: "hero-actions",
                    button {
                        r#type: "button",
                        class: "btn btn-primary",
                        onclick: move |_| bridge.scroll_to(Section::Projects),
                        "View My Work"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-ghost",
                        onclick: move |_| bridge.scroll_to(Section::Contact),
                        "Get in Touch"
                    }
                }
            }
        }
    }
}
