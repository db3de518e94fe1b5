//! Mobile Quick Navigation Component
//!
//! Bottom bar for narrow layouts (< 768px); hidden on desktop, where it
//! measures as zero-height chrome. Jumps route through the same
//! suppressed-scroll path as the header links.

use dioxus::prelude::*;

use crate::components::nav_header::Section;
use crate::context::use_nav_bridge;

/// Mobile bottom quick-nav bar
#[component]
pub fn MobileNav() -> Element {
    let bridge = use_nav_bridge();
    let view = bridge.view;

    rsx! {
        nav {
            class: "mobile-nav",
            onmounted: move |evt| bridge.register_overlay(evt.data()),

            for section in Section::ALL {
                button {
                    r#type: "button",
                    class: if view.read().active == Some(section) { "mobile-nav-item active" } else { "mobile-nav-item" },
                    "aria-label": "{section.label()}",
                    onclick: move |_| bridge.scroll_to(section),

                    span { class: "mobile-nav-icon", {nav_icon(section)} }
                    span { class: "mobile-nav-label", "{section.label()}" }
                }
            }
        }
    }
}

/// Render Lucide icon for a section
fn nav_icon(section: Section) -> Element {
    match section {
        Section::Home => rsx! {
            // Lucide house icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8" }
                path { d: "M3 10a2 2 0 0 1 .709-1.528l7-5.999a2 2 0 0 1 2.582 0l7 5.999A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
            }
        },
        Section::About => rsx! {
            // Lucide user icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                circle { cx: "12", cy: "8", r: "5" }
                path { d: "M20 21a8 8 0 0 0-16 0" }
            }
        },
        Section::Projects => rsx! {
            // Lucide folder icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z" }
            }
        },
        Section::Contact => rsx! {
            // Lucide mail icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                rect { width: "20", height: "16", x: "2", y: "4", rx: "2" }
                path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
            }
        },
    }
}
