//! Section-tracking navigation.
//!
//! Three cooperating pieces over one shared idea of "the active section":
//!
//! - the **locator** ([`locate_active_section`]) picks the section whose
//!   top edge sits closest to the usable viewport top;
//! - the **publisher** ([`ActivePublisher`]) enforces the single-active-link
//!   rule and projects the underline indicator;
//! - the **controller** ([`NavController`]) mediates user-initiated smooth
//!   scrolls against passive tracking so the two never fight.
//!
//! The controller is headless and deterministic: the shell feeds it scroll
//! and click events, fresh layout measurements, and a millisecond clock,
//! and applies the [`Publication`]s it hands back. While a programmatic
//! scroll is in flight the locator is suppressed outright; a trailing
//! settle pass reconciles the highlight once everything comes to rest.

mod locator;
mod publisher;
mod timer;

pub use locator::{locate_active_section, SectionRect, Viewport};
pub use publisher::{ActivePublisher, Emphasis, LinkBox, LinkDirective, Publication, Underline};
pub use timer::DeadlineTimer;

use tracing::{debug, warn};

/// How long a click-initiated smooth scroll suppresses passive tracking.
/// Calibrated to cover the webview's smooth-scroll animation.
pub const SUPPRESS_SCROLL_MS: u64 = 400;

/// Trailing-edge debounce after scroll activity settles. Guarantees a
/// correction pass even when the per-frame evaluation was suppressed.
pub const SETTLE_DEBOUNCE_MS: u64 = 400;

/// Scroll depth past which the header/nav chrome switches to its
/// "scrolled" treatment.
pub const CHROME_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Fixed-chrome styling state derived from scroll depth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChromeState {
    pub scrolled: bool,
}

impl ChromeState {
    pub fn from_scroll_y(scroll_y: f64) -> Self {
        Self {
            scrolled: scroll_y > CHROME_SCROLL_THRESHOLD_PX,
        }
    }
}

/// One fresh measurement pass over the page: the scroll viewport, every
/// tracked section, and every nav link box.
#[derive(Clone, Debug, Default)]
pub struct PageLayout {
    pub viewport: Viewport,
    pub sections: Vec<SectionRect>,
    pub links: Vec<LinkBox>,
}

/// Response to a scroll-to-section request: the optimistic highlight to
/// apply now, and where the smooth scroll should land.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionScroll {
    /// `section_top - navbar_height`, clamped at the document top.
    pub target_y: f64,
    pub publication: Publication,
}

/// Owns the navigation state machine.
///
/// Constructed once at startup; the shell holds it for the lifetime of
/// the window and calls the event methods below from its (single-threaded)
/// event handlers.
#[derive(Debug, Default)]
pub struct NavController {
    publisher: ActivePublisher,
    suppressed: bool,
    suppress_timer: DeadlineTimer,
    settle_timer: DeadlineTimer,
    frame_pending: bool,
    chrome: ChromeState,
}

impl NavController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_section(&self) -> Option<&str> {
        self.publisher.current()
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    pub fn chrome(&self) -> ChromeState {
        self.chrome
    }

    /// Earliest pending deadline, for the shell's timer pump.
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.suppress_timer.deadline(), self.settle_timer.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// A scroll event arrived. Returns true when the caller should run a
    /// frame evaluation; while one is already pending, further scroll
    /// events are dropped, not queued.
    pub fn on_scroll(&mut self, now_ms: u64) -> bool {
        self.settle_timer.arm(now_ms, SETTLE_DEBOUNCE_MS);
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// Run the per-frame evaluation against fresh measurements.
    ///
    /// Chrome state always updates; the locator is a strict no-op while a
    /// programmatic scroll is in flight.
    pub fn on_frame(&mut self, layout: &PageLayout) -> Option<Publication> {
        self.frame_pending = false;
        self.chrome = ChromeState::from_scroll_y(layout.viewport.scroll_y);
        if self.suppressed {
            return None;
        }
        self.evaluate(layout)
    }

    /// The scheduled frame could not be measured; release the guard so the
    /// next scroll event can schedule again.
    pub fn abort_frame(&mut self) {
        self.frame_pending = false;
    }

    /// A nav link (or any other jump-to-section affordance) asked for
    /// `target`. Publishes the target optimistically, enters suppression,
    /// and reports where the smooth scroll should land. Unknown targets
    /// are a no-op.
    pub fn on_section_request(
        &mut self,
        target: &str,
        now_ms: u64,
        layout: &PageLayout,
    ) -> Option<SectionScroll> {
        let Some(section) = layout.sections.iter().find(|s| s.id == target) else {
            warn!(target, "ignoring scroll request for unknown section");
            return None;
        };

        debug!(target, "programmatic scroll begins, tracking suppressed");
        self.suppressed = true;
        // A second click re-arms rather than stacking a second expiry; the
        // settle pass is owned by the expiry reconciliation here.
        self.suppress_timer.arm(now_ms, SUPPRESS_SCROLL_MS);
        self.settle_timer.cancel();

        let publication = self.publisher.publish(Some(target), &layout.links);
        Some(SectionScroll {
            target_y: (section.top - layout.viewport.navbar_height).max(0.0),
            publication,
        })
    }

    /// Pump pending deadlines. Safe to call at any time with any clock
    /// reading; deadlines that were superseded simply do not fire.
    ///
    /// Suppression expiry clears the flag and reconciles actual-vs-intended
    /// position; a settle expiry reconciles after free scrolling dies down.
    pub fn on_tick(&mut self, now_ms: u64, layout: &PageLayout) -> Option<Publication> {
        self.chrome = ChromeState::from_scroll_y(layout.viewport.scroll_y);

        let mut reconcile = false;
        if self.suppress_timer.fire(now_ms) {
            debug!("programmatic scroll window expired, tracking resumes");
            self.suppressed = false;
            reconcile = true;
        }
        if self.settle_timer.fire(now_ms) && !self.suppressed {
            reconcile = true;
        }

        if reconcile {
            self.evaluate(layout)
        } else {
            None
        }
    }

    /// Viewport resized: re-derive the underline against the reflowed
    /// active link. Positions are pixel-absolute, so this cannot be
    /// skipped even when the active section is unchanged.
    pub fn on_resize(&mut self, layout: &PageLayout) -> Publication {
        self.chrome = ChromeState::from_scroll_y(layout.viewport.scroll_y);
        self.publisher.republish(&layout.links)
    }

    fn evaluate(&mut self, layout: &PageLayout) -> Option<Publication> {
        let located = locate_active_section(&layout.viewport, &layout.sections);
        if located == self.publisher.current() {
            return None;
        }
        debug!(from = ?self.publisher.current(), to = ?located, "active section changed");
        let located = located.map(str::to_owned);
        Some(self.publisher.publish(located.as_deref(), &layout.links))
    }
}
