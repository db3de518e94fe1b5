//! Site Footer Component

use dioxus::prelude::*;

use crate::content;

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { class: "site-footer",
            p { "\u{00a9} 2026 {content::OWNER_NAME}. Built with Rust and Dioxus." }
        }
    }
}
