//! Scrollable page container.
//!
//! Owns the one element whose scroll offset drives section tracking.
//! Scroll and resize events are forwarded to the nav bridge; an initial
//! sync shortly after mount highlights the section the page opens on.

use dioxus::prelude::*;

use crate::context::use_nav_bridge;

#[component]
pub fn PageScroll(children: Element) -> Element {
    let bridge = use_nav_bridge();

    use_effect(move || {
        bridge.initial_sync();
    });

    rsx! {
        main {
            class: "page-scroll",
            onmounted: move |evt| bridge.register_scroller(evt.data()),
            onscroll: move |_| bridge.on_scroll_event(),
            onresize: move |_| bridge.on_resize_event(),
            {children}
        }
    }
}
