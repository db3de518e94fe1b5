//! Shared context for the Folio desktop app.
//!
//! Two things live here: the submission store handle (provided to the
//! contact form via use_context), and the [`NavBridge`], which wires
//! DOM-side measurements and events into the headless [`NavController`]
//! and publishes its decisions back out as signals the components render
//! from.

use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use dioxus::prelude::*;
use folio_core::nav::{LinkBox, NavController, PageLayout, Publication, SectionRect, Viewport};
use folio_core::{ChromeState, LinkDirective, SubmissionStore, Underline};
use tokio::sync::RwLock;
use tracing::debug;

use crate::components::nav_header::Section;

/// Shared submission store type for context.
///
/// Wrapped in Arc<RwLock<>> so the form can submit while initialization
/// may still be in flight on first launch.
pub type SharedStore = Arc<RwLock<Option<SubmissionStore>>>;

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Hook to access the submission store from context.
pub fn use_store() -> Signal<SharedStore> {
    use_context::<Signal<SharedStore>>()
}

/// Hook to check if the submission store is initialized.
pub fn use_store_ready() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

/// Milliseconds since the app started; the clock handed to the nav core.
pub fn now_ms() -> u64 {
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_millis() as u64
}

/// Mounted-element handles the measurement pass reads from.
///
/// Registered by the components that own each element; replaced wholesale
/// on remount. Absent entries degrade to "feature unavailable" (offset 0,
/// section skipped) rather than erroring.
#[derive(Clone, Default)]
pub struct LayoutHandles {
    /// The scrollable page container.
    pub scroller: Option<Rc<MountedData>>,
    /// Fixed header; its height carves the top off the usable viewport.
    pub navbar: Option<Rc<MountedData>>,
    /// The nav link list; link geometry is measured relative to it.
    pub link_rail: Option<Rc<MountedData>>,
    /// Fixed bottom chrome (mobile quick nav); height 0 on desktop.
    pub overlay: Option<Rc<MountedData>>,
    pub sections: HashMap<Section, Rc<MountedData>>,
    pub links: HashMap<Section, Rc<MountedData>>,
}

/// What the nav components render: the controller's latest word.
#[derive(Clone, Debug, Default)]
pub struct NavView {
    pub active: Option<Section>,
    pub directives: Vec<LinkDirective>,
    pub underline: Underline,
    pub chrome: ChromeState,
}

impl NavView {
    /// The styling directive for one link, if the publisher has spoken.
    pub fn directive_for(&self, section: Section) -> Option<&LinkDirective> {
        self.directives.iter().find(|d| d.target == section.id())
    }
}

/// Connects the DOM to the navigation state machine.
///
/// Every field is a `Signal`, so the bridge itself is `Copy` and can be
/// captured freely by event handlers. All controller mutation happens
/// synchronously between awaits; measurements are the only async part.
#[derive(Clone, Copy)]
pub struct NavBridge {
    nav: Signal<NavController>,
    handles: Signal<LayoutHandles>,
    hovered: Signal<Option<Section>>,
    pump_running: Signal<bool>,
    pub view: Signal<NavView>,
}

/// Create the bridge and provide it to the component tree. Called once
/// from the root component.
pub fn use_nav_bridge_provider() -> NavBridge {
    let nav = use_signal(NavController::new);
    let handles = use_signal(LayoutHandles::default);
    let hovered = use_signal(|| None);
    let pump_running = use_signal(|| false);
    let view = use_signal(NavView::default);
    use_context_provider(|| NavBridge {
        nav,
        handles,
        hovered,
        pump_running,
        view,
    })
}

/// Hook to access the nav bridge from any component.
pub fn use_nav_bridge() -> NavBridge {
    use_context::<NavBridge>()
}

impl NavBridge {
    // ── element registration ────────────────────────────────────────────

    pub fn register_scroller(self, element: Rc<MountedData>) {
        let mut handles = self.handles;
        handles.with_mut(|h| h.scroller = Some(element));
    }

    pub fn register_navbar(self, element: Rc<MountedData>) {
        let mut handles = self.handles;
        handles.with_mut(|h| h.navbar = Some(element));
    }

    pub fn register_link_rail(self, element: Rc<MountedData>) {
        let mut handles = self.handles;
        handles.with_mut(|h| h.link_rail = Some(element));
    }

    pub fn register_overlay(self, element: Rc<MountedData>) {
        let mut handles = self.handles;
        handles.with_mut(|h| h.overlay = Some(element));
    }

    pub fn register_section(self, section: Section, element: Rc<MountedData>) {
        let mut handles = self.handles;
        handles.with_mut(|h| {
            h.sections.insert(section, element);
        });
    }

    pub fn register_link(self, section: Section, element: Rc<MountedData>) {
        let mut handles = self.handles;
        handles.with_mut(|h| {
            h.links.insert(section, element);
        });
    }

    pub fn set_hovered(self, section: Option<Section>) {
        let mut hovered = self.hovered;
        hovered.set(section);
    }

    // ── event entry points ──────────────────────────────────────────────

    /// Scroll event from the page container. The controller decides
    /// whether a frame evaluation runs; redundant events are dropped.
    pub fn on_scroll_event(self) {
        let now = now_ms();
        let schedule = {
            let mut nav = self.nav;
            nav.with_mut(|c| c.on_scroll(now))
        };
        self.ensure_pump();
        if !schedule {
            return;
        }
        spawn(async move {
            match self.measure().await {
                Some(layout) => {
                    let publication = {
                        let mut nav = self.nav;
                        nav.with_mut(|c| c.on_frame(&layout))
                    };
                    self.apply(publication);
                }
                None => {
                    let mut nav = self.nav;
                    nav.with_mut(|c| c.abort_frame());
                }
            }
        });
    }

    /// Resize: underline geometry is pixel-absolute and must be
    /// recomputed against the reflowed active link.
    pub fn on_resize_event(self) {
        spawn(async move {
            if let Some(layout) = self.measure().await {
                let publication = {
                    let mut nav = self.nav;
                    nav.with_mut(|c| c.on_resize(&layout))
                };
                self.apply(Some(publication));
            }
        });
    }

    /// Jump to a section: optimistic highlight, suppressed tracking, and
    /// a smooth scroll on the section's element. Shared by nav links, the
    /// mobile quick nav, and the back-to-top button.
    pub fn scroll_to(self, section: Section) {
        spawn(async move {
            let Some(layout) = self.measure().await else {
                return;
            };
            let request = {
                let mut nav = self.nav;
                nav.with_mut(|c| c.on_section_request(section.id(), now_ms(), &layout))
            };
            let Some(request) = request else {
                return;
            };
            debug!(target = section.id(), y = request.target_y, "scrolling to section");
            self.apply(Some(request.publication));

            let element = self.handles.peek().sections.get(&section).cloned();
            if let Some(element) = element {
                // The navbar offset is handled by scroll-margin-top on the
                // section, so the element lands at target_y.
                let _ = element.scroll_to(ScrollBehavior::Smooth).await;
            }
            self.ensure_pump();
        });
    }

    /// One evaluation shortly after mount so the initial section is
    /// highlighted before the user ever scrolls.
    pub fn initial_sync(self) {
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(120)).await;
            let now = now_ms();
            let schedule = {
                let mut nav = self.nav;
                nav.with_mut(|c| c.on_scroll(now))
            };
            if schedule {
                match self.measure().await {
                    Some(layout) => {
                        let publication = {
                            let mut nav = self.nav;
                            nav.with_mut(|c| c.on_frame(&layout))
                        };
                        self.apply(publication);
                    }
                    None => {
                        let mut nav = self.nav;
                        nav.with_mut(|c| c.abort_frame());
                    }
                }
            }
            self.ensure_pump();
        });
    }

    // ── internals ───────────────────────────────────────────────────────

    async fn measure(self) -> Option<PageLayout> {
        let handles = self.handles.peek().clone();
        let hovered = *self.hovered.peek();
        measure_layout(handles, hovered).await
    }

    /// Push a controller decision into the render signals.
    fn apply(self, publication: Option<Publication>) {
        let (chrome, active) = {
            let nav = self.nav.peek();
            (
                nav.chrome(),
                nav.active_section().and_then(Section::from_id),
            )
        };
        let mut view = self.view;
        view.with_mut(|v| {
            v.chrome = chrome;
            v.active = active;
            if let Some(publication) = publication {
                v.underline = publication.underline;
                v.directives = publication.links;
            }
        });
    }

    /// Single timer pump: sleeps until the controller's next deadline and
    /// ticks it against fresh measurements. Exits when no deadline is
    /// armed; restarted by whichever event arms one next.
    fn ensure_pump(self) {
        let mut running = self.pump_running;
        if *running.peek() {
            return;
        }
        running.set(true);
        spawn(async move {
            loop {
                let Some(deadline) = self.nav.peek().next_deadline() else {
                    break;
                };
                let now = now_ms();
                if deadline > now {
                    tokio::time::sleep(Duration::from_millis(deadline - now + 5)).await;
                }
                let Some(layout) = self.measure().await else {
                    break;
                };
                let publication = {
                    let mut nav = self.nav;
                    nav.with_mut(|c| c.on_tick(now_ms(), &layout))
                };
                self.apply(publication);
            }
            let mut running = self.pump_running;
            running.set(false);
        });
    }
}

/// Measure everything the locator and publisher need, in one pass.
///
/// Client rects are viewport-relative; section tops are translated into
/// document coordinates against the scroll container's own rect and
/// scroll offset, and link boxes are made relative to the link rail.
async fn measure_layout(handles: LayoutHandles, hovered: Option<Section>) -> Option<PageLayout> {
    let scroller = handles.scroller.clone()?;
    let scroll = scroller.get_scroll_offset().await.ok()?;
    let frame = scroller.get_client_rect().await.ok()?;

    let navbar_height = match &handles.navbar {
        Some(navbar) => navbar
            .get_client_rect()
            .await
            .map(|r| r.size.height)
            .unwrap_or(0.0),
        None => 0.0,
    };
    let overlay_height = match &handles.overlay {
        Some(overlay) => overlay
            .get_client_rect()
            .await
            .map(|r| r.size.height)
            .unwrap_or(0.0),
        None => 0.0,
    };

    let mut sections = Vec::new();
    for section in Section::ALL {
        let Some(element) = handles.sections.get(&section) else {
            continue;
        };
        let Ok(rect) = element.get_client_rect().await else {
            continue;
        };
        sections.push(SectionRect::new(
            section.id(),
            rect.origin.y - frame.origin.y + scroll.y,
            rect.size.height,
        ));
    }

    let rail_rect = match &handles.link_rail {
        Some(rail) => rail.get_client_rect().await.ok(),
        None => None,
    };
    let mut links = Vec::new();
    if let Some(rail_rect) = rail_rect {
        for section in Section::ALL {
            let Some(element) = handles.links.get(&section) else {
                continue;
            };
            let Ok(rect) = element.get_client_rect().await else {
                continue;
            };
            links.push(LinkBox {
                target: section.id().to_string(),
                left: rect.origin.x - rail_rect.origin.x,
                width: rect.size.width,
                hovered: hovered == Some(section),
            });
        }
    }

    Some(PageLayout {
        viewport: Viewport {
            scroll_y: scroll.y,
            height: frame.size.height,
            navbar_height,
            overlay_height,
        },
        sections,
        links,
    })
}
