//! End-to-end scenarios for the section-tracking navigation controller.
//!
//! These drive the controller the way the desktop shell does: scroll
//! events, frame evaluations against measured layouts, clicks, and timer
//! ticks, asserting on the publications that come back.

use folio_core::nav::{
    locate_active_section, LinkBox, NavController, PageLayout, Publication, SectionRect,
    Underline, Viewport, SETTLE_DEBOUNCE_MS, SUPPRESS_SCROLL_MS,
};

/// The canonical three-section page used throughout: "intro" 0-600,
/// "work" 600-1400, "contact" 1400-2000, an 80px navbar, an 800px tall
/// viewport.
fn page(scroll_y: f64) -> PageLayout {
    PageLayout {
        viewport: Viewport {
            scroll_y,
            height: 800.0,
            navbar_height: 80.0,
            overlay_height: 0.0,
        },
        sections: vec![
            SectionRect::new("intro", 0.0, 600.0),
            SectionRect::new("work", 600.0, 800.0),
            SectionRect::new("contact", 1400.0, 600.0),
        ],
        links: vec![
            LinkBox::new("intro", 0.0, 60.0),
            LinkBox::new("work", 100.0, 60.0),
            LinkBox::new("contact", 180.0, 90.0),
        ],
    }
}

fn active_count(publication: &Publication) -> usize {
    publication.links.iter().filter(|l| l.active).count()
}

/// Scroll to y=650: "work" has the closest top to the usable viewport top.
#[test]
fn scenario_closest_top_selection() {
    let mut nav = NavController::new();
    assert!(nav.on_scroll(0));
    let publication = nav.on_frame(&page(650.0)).expect("active section changes");

    assert_eq!(nav.active_section(), Some("work"));
    assert_eq!(active_count(&publication), 1);
    assert!(publication
        .links
        .iter()
        .find(|l| l.target == "work")
        .unwrap()
        .active);
}

/// Click "contact" at rest: optimistic highlight, suppression, smooth
/// scroll toward 1400 - 80 = 1320, and a clean reconciliation afterward.
#[test]
fn scenario_click_to_scroll() {
    let mut nav = NavController::new();
    nav.on_scroll(0);
    nav.on_frame(&page(0.0));
    assert_eq!(nav.active_section(), Some("intro"));

    let scroll = nav
        .on_section_request("contact", 10_000, &page(0.0))
        .expect("contact exists");

    // Optimistic update before the animation has moved anything.
    assert_eq!(nav.active_section(), Some("contact"));
    assert!(nav.is_suppressed());
    assert_eq!(scroll.target_y, 1320.0);
    assert_eq!(scroll.publication.underline.left, 180.0);
    assert_eq!(scroll.publication.underline.width, 90.0);

    // Suppression expires at the settled position; "contact" is confirmed
    // without a redundant publication.
    let reconciled = nav.on_tick(10_000 + SUPPRESS_SCROLL_MS, &page(1320.0));
    assert!(reconciled.is_none());
    assert!(!nav.is_suppressed());
    assert_eq!(nav.active_section(), Some("contact"));
}

/// Rapid-fire scroll events during a programmatic scroll publish nothing.
#[test]
fn scenario_suppressed_scrolling_is_silent() {
    let mut nav = NavController::new();
    nav.on_section_request("contact", 0, &page(0.0));

    let mut publications = 0;
    for i in 0..20u64 {
        let y = 66.0 * i as f64; // animation sweeping down the page
        if nav.on_scroll(i * 16) {
            if nav.on_frame(&page(y)).is_some() {
                publications += 1;
            }
        }
    }

    assert_eq!(publications, 0);
    assert_eq!(nav.active_section(), Some("contact"));
}

/// Resize without any scroll: the underline must chase the reflowed link.
#[test]
fn scenario_resize_reflows_underline() {
    let mut nav = NavController::new();
    nav.on_scroll(0);
    nav.on_frame(&page(650.0));

    let mut reflowed = page(650.0);
    reflowed.links = vec![
        LinkBox::new("intro", 0.0, 50.0),
        LinkBox::new("work", 40.0, 70.0),
        LinkBox::new("contact", 130.0, 80.0),
    ];

    let publication = nav.on_resize(&reflowed);
    assert_eq!(publication.underline.left, 40.0);
    assert_eq!(publication.underline.width, 70.0);
    assert_eq!(nav.active_section(), Some("work"));
}

/// Above the first section the navbar offset does not orphan the
/// highlight; only a genuine gap does.
#[test]
fn scenario_top_of_page_and_gaps() {
    let mut nav = NavController::new();
    nav.on_scroll(0);
    nav.on_frame(&page(0.0));
    assert_eq!(nav.active_section(), Some("intro"));

    let mut gapped = page(0.0);
    gapped.sections = vec![
        SectionRect::new("intro", 0.0, 300.0),
        SectionRect::new("contact", 4000.0, 600.0),
    ];
    gapped.viewport.scroll_y = 1500.0;

    nav.on_scroll(100);
    let publication = nav.on_frame(&gapped).expect("highlight cleared");
    assert_eq!(nav.active_section(), None);
    assert_eq!(active_count(&publication), 0);
    assert_eq!(publication.underline, Underline::HIDDEN);
}

/// After any suppressed window, the settled state must match what the
/// locator would compute from scratch.
#[test]
fn convergence_after_interrupted_programmatic_scroll() {
    let mut nav = NavController::new();
    nav.on_section_request("contact", 0, &page(0.0));

    // The user grabs the scrollbar mid-animation; the page ends up parked
    // inside "work" instead of at the intended target.
    let settled = page(700.0);
    let _ = nav.on_tick(SUPPRESS_SCROLL_MS, &settled);

    let from_scratch = locate_active_section(&settled.viewport, &settled.sections);
    assert_eq!(nav.active_section(), from_scratch);
    assert_eq!(nav.active_section(), Some("work"));
}

/// The settle debounce converges even when every per-frame evaluation was
/// suppressed and no further scroll events arrive.
#[test]
fn settle_pass_converges_without_further_events() {
    let mut nav = NavController::new();
    nav.on_scroll(0);
    nav.on_frame(&page(0.0));

    // Free scroll whose frames all landed during a suppression window.
    nav.on_section_request("work", 100, &page(0.0));
    nav.on_scroll(150);
    nav.on_frame(&page(1500.0));
    assert_eq!(nav.active_section(), Some("work"));

    // Suppression expiry reconciles to where the page actually is.
    let _ = nav.on_tick(100 + SUPPRESS_SCROLL_MS, &page(1500.0));
    assert_eq!(nav.active_section(), Some("contact"));

    // And the trailing settle pass has nothing left to correct.
    let leftover = nav.on_tick(150 + SETTLE_DEBOUNCE_MS, &page(1500.0));
    assert!(leftover.is_none());
}

/// Publishing the same section twice leaves identical link/underline
/// state; the controller suppresses the redundant publication entirely.
#[test]
fn redundant_updates_are_suppressed() {
    let mut nav = NavController::new();
    nav.on_scroll(0);
    let first = nav.on_frame(&page(650.0)).expect("first change");

    nav.on_scroll(20);
    assert!(nav.on_frame(&page(655.0)).is_none());

    nav.on_scroll(40);
    assert!(nav.on_frame(&page(700.0)).is_none());

    // Forcing a republish (resize path) yields the same projection.
    let again = nav.on_resize(&page(650.0));
    assert_eq!(first, again);
}

/// A click for a section that does not exist must not scroll, suppress,
/// or disturb the current highlight.
#[test]
fn unknown_section_click_is_ignored() {
    let mut nav = NavController::new();
    nav.on_scroll(0);
    nav.on_frame(&page(650.0));

    assert!(nav.on_section_request("blog", 500, &page(650.0)).is_none());
    assert!(!nav.is_suppressed());
    assert_eq!(nav.active_section(), Some("work"));

    // Tracking continues unimpeded.
    nav.on_scroll(600);
    assert!(nav.on_frame(&page(1500.0)).is_some());
    assert_eq!(nav.active_section(), Some("contact"));
}

/// A second click mid-flight supersedes the first: one pending expiry,
/// aimed at the newer target.
#[test]
fn second_click_supersedes_first() {
    let mut nav = NavController::new();
    nav.on_section_request("contact", 0, &page(0.0));
    nav.on_section_request("intro", 200, &page(1800.0));

    assert_eq!(nav.active_section(), Some("intro"));
    assert_eq!(nav.next_deadline(), Some(200 + SUPPRESS_SCROLL_MS));

    // The first click's expiry time passes without effect.
    assert!(nav.on_tick(SUPPRESS_SCROLL_MS, &page(900.0)).is_none());
    assert!(nav.is_suppressed());

    // The second click's expiry reconciles at the settled position.
    let _ = nav.on_tick(200 + SUPPRESS_SCROLL_MS, &page(0.0));
    assert!(!nav.is_suppressed());
    assert_eq!(nav.active_section(), Some("intro"));
}

/// The bottom overlay shrinks the usable viewport from below.
#[test]
fn bottom_overlay_narrows_candidates() {
    // visible_top = 1330: "work" trails by 730, "contact" leads by 70.
    let mut layout = page(1250.0);
    let mut nav = NavController::new();
    nav.on_scroll(0);
    nav.on_frame(&layout);
    assert_eq!(nav.active_section(), Some("contact"));

    // A 660px bottom bar pulls the usable bottom up to 1390, pushing
    // "contact" (top 1400) out of the running entirely.
    layout.viewport.overlay_height = 660.0;
    let mut nav = NavController::new();
    nav.on_scroll(0);
    nav.on_frame(&layout);
    assert_eq!(nav.active_section(), Some("work"));
}
