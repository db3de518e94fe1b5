//! Navigation Header Component
//!
//! Fixed top bar with the brand mark, the section links, the animated
//! underline indicator, and the hamburger toggle for narrow layouts.
//! Link highlight state comes entirely from the nav bridge; this
//! component only renders directives and reports events back.

use dioxus::prelude::*;
use folio_core::nav::Emphasis;

use crate::content;
use crate::context::use_nav_bridge;
use crate::theme::colors;

/// Page sections tracked by the navigation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Section {
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    /// Document order; also the order links render in.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    /// The section element's id attribute, and the target nav links name.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Get the display name for this section
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.iter().copied().find(|s| s.id() == id)
    }
}

/// Navigation header component
///
/// Desktop: horizontal links with the sliding underline.
/// Mobile (< 768px): links collapse behind the hamburger toggle.
#[component]
pub fn NavHeader() -> Element {
    let bridge = use_nav_bridge();
    let view = bridge.view;
    let mut menu_open = use_signal(|| false);

    let chrome = view.read().chrome;
    let underline = view.read().underline;
    let underline_style = format!(
        "left: {}px; width: {}px; opacity: {};",
        underline.left, underline.width, underline.opacity
    );

    rsx! {
        header {
            class: if chrome.scrolled { "site-header scrolled" } else { "site-header" },
            onmounted: move |evt| bridge.register_navbar(evt.data()),

            nav { class: "site-nav",
                a {
                    class: "brand",
                    href: "#home",
                    onclick: move |evt| {
                        evt.prevent_default();
                        bridge.scroll_to(Section::Home);
                    },
                    "{content::OWNER_NAME}"
                }

                button {
                    r#type: "button",
                    class: if menu_open() { "menu-toggle active" } else { "menu-toggle" },
                    "aria-label": "Toggle navigation menu",
                    "aria-expanded": "{menu_open()}",
                    onclick: move |_| menu_open.toggle(),
                    span { class: "menu-bar" }
                    span { class: "menu-bar" }
                    span { class: "menu-bar" }
                }

                ul {
                    class: if menu_open() { "nav-links active" } else { "nav-links" },
                    onmounted: move |evt| bridge.register_link_rail(evt.data()),

                    for section in Section::ALL {
                        li {
                            a {
                                class: if view.read().active == Some(section) { "nav-link active" } else { "nav-link" },
                                style: link_style(&view.read(), section),
                                href: "#{section.id()}",
                                onmounted: move |evt| bridge.register_link(section, evt.data()),
                                onmouseenter: move |_| bridge.set_hovered(Some(section)),
                                onmouseleave: move |_| bridge.set_hovered(None),
                                onclick: move |evt| {
                                    evt.prevent_default();
                                    menu_open.set(false);
                                    bridge.scroll_to(section);
                                },
                                "{section.label()}"
                            }
                        }
                    }

                    span { class: "nav-underline", style: "{underline_style}" }
                }
            }
        }
    }
}

/// Inline emphasis for one link. An empty style leaves passive (hover)
/// styling alone.
fn link_style(view: &crate::context::NavView, section: Section) -> String {
    match view.directive_for(section).and_then(|d| d.emphasis) {
        Some(Emphasis::Accent) => {
            format!("color: {}; font-weight: 600;", colors::ACCENT)
        }
        Some(Emphasis::Plain) => {
            format!("color: {}; font-weight: 400;", colors::TEXT_SECONDARY)
        }
        None => String::new(),
    }
}
