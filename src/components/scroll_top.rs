//! Back-to-top Button
//!
//! Appears once the page has scrolled past the chrome threshold and
//! routes through the same suppressed smooth-scroll path as the nav
//! links.

use dioxus::prelude::*;

use crate::components::nav_header::Section;
use crate::context::use_nav_bridge;

#[component]
pub fn ScrollTopButton() -> Element {
    let bridge = use_nav_bridge();
    let visible = bridge.view.read().chrome.scrolled;

    rsx! {
        button {
            r#type: "button",
            class: if visible { "scroll-top visible" } else { "scroll-top" },
            "aria-label": "Back to top",
            tabindex: if visible { "0" } else { "-1" },
            onclick: move |_| bridge.scroll_to(Section::Home),

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
                path { d: "m18 15-6-6-6 6" }
            }
        }
    }
}
