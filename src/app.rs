use std::sync::Arc;

use dioxus::prelude::*;
use tokio::sync::RwLock;

use crate::components::{
    About, ContactSection, Hero, MobileNav, NavHeader, PageScroll, Projects, ScrollTopButton,
    SiteFooter,
};
use crate::context::{get_data_dir, use_nav_bridge_provider, SharedStore};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the nav bridge, and the submission store
/// context, then lays out the single page: fixed header, the scrollable
/// section stack, and the fixed chrome around it.
#[component]
pub fn App() -> Element {
    // Initialize shared submission store state
    let store: Signal<SharedStore> = use_signal(|| Arc::new(RwLock::new(None)));
    let mut store_ready: Signal<bool> = use_signal(|| false);

    // Provide contexts to all child components
    use_context_provider(|| store);
    use_context_provider(|| store_ready);
    use_nav_bridge_provider();

    // Open the store on mount
    use_effect(move || {
        spawn(async move {
            let path = get_data_dir().join("submissions.redb");
            match folio_core::SubmissionStore::new(&path) {
                Ok(opened) => {
                    let shared = store();
                    let mut guard = shared.write().await;
                    *guard = Some(opened);
                    drop(guard);
                    store_ready.set(true);
                    tracing::info!("submission store ready at {:?}", path);
                }
                Err(e) => {
                    tracing::error!("failed to open submission store: {}", e);
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        NavHeader {}
        PageScroll {
            Hero {}
            About {}
            Projects {}
            ContactSection {}
            SiteFooter {}
        }
        MobileNav {}
        ScrollTopButton {}
    }
}
