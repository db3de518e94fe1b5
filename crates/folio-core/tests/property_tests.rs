//! Property-based tests for the navigation core
//!
//! Uses proptest to verify the locator's selection rule and the
//! publisher's single-active-link invariant over arbitrary layouts and
//! event interleavings.

use proptest::prelude::*;

use folio_core::nav::{
    locate_active_section, LinkBox, NavController, PageLayout, SectionRect, Viewport,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// A stack of sections laid out top to bottom, with occasional gaps.
fn sections_strategy() -> impl Strategy<Value = Vec<SectionRect>> {
    prop::collection::vec((100.0..1200.0f64, 0.0..400.0f64), 1..7).prop_map(|spans| {
        let mut top = 0.0;
        spans
            .into_iter()
            .enumerate()
            .map(|(i, (height, gap))| {
                let section = SectionRect::new(format!("s{i}"), top + gap, height);
                top += gap + height;
                section
            })
            .collect()
    })
}

fn viewport_strategy() -> impl Strategy<Value = Viewport> {
    (0.0..6000.0f64, 300.0..1000.0f64, 0.0..120.0f64, 0.0..120.0f64).prop_map(
        |(scroll_y, height, navbar_height, overlay_height)| Viewport {
            scroll_y,
            height,
            navbar_height,
            overlay_height,
        },
    )
}

/// Events the shell can feed the controller, with a monotone clock.
#[derive(Debug, Clone)]
enum NavOp {
    Scroll(f64),
    Click(usize),
    Tick,
    Resize,
}

fn nav_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<NavOp>> {
    prop::collection::vec(
        prop_oneof![
            4 => (0.0..3000.0f64).prop_map(NavOp::Scroll),
            2 => (0..8usize).prop_map(NavOp::Click),
            2 => Just(NavOp::Tick),
            1 => Just(NavOp::Resize),
        ],
        1..max_ops,
    )
}

fn links_for(sections: &[SectionRect]) -> Vec<LinkBox> {
    sections
        .iter()
        .enumerate()
        .map(|(i, s)| LinkBox::new(s.id.clone(), i as f64 * 90.0, 70.0))
        .collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The located section always overlaps the usable viewport, and no
    /// other overlapping section has a strictly closer top edge.
    #[test]
    fn locator_picks_a_minimal_distance_candidate(
        sections in sections_strategy(),
        viewport in viewport_strategy(),
    ) {
        let located = locate_active_section(&viewport, &sections);
        let top = viewport.usable_top();
        let bottom = viewport.usable_bottom();
        let overlaps = |s: &SectionRect| s.bottom() > top && s.top < bottom;

        match located {
            Some(id) => {
                let winner = sections.iter().find(|s| s.id == id).unwrap();
                prop_assert!(overlaps(winner));
                let winner_distance = (winner.top - top).abs();
                for s in sections.iter().filter(|s| overlaps(s)) {
                    prop_assert!((s.top - top).abs() >= winner_distance);
                }
            }
            None => {
                prop_assert!(!sections.iter().any(overlaps));
            }
        }
    }

    /// Whatever the shell throws at the controller, every publication
    /// marks at most one link active, and the underline is either hidden
    /// or exactly over the active link.
    #[test]
    fn controller_never_activates_two_links(
        sections in sections_strategy(),
        height in 300.0..1000.0f64,
        ops in nav_ops_strategy(30),
    ) {
        let links = links_for(&sections);
        let mut nav = NavController::new();
        let mut now = 0u64;

        for op in ops {
            now += 37;
            let layout = |scroll_y: f64| PageLayout {
                viewport: Viewport { scroll_y, height, navbar_height: 80.0, overlay_height: 0.0 },
                sections: sections.clone(),
                links: links.clone(),
            };

            let publication = match op {
                NavOp::Scroll(y) => {
                    if nav.on_scroll(now) { nav.on_frame(&layout(y)) } else { None }
                }
                NavOp::Click(i) => {
                    let target = format!("s{i}");
                    nav.on_section_request(&target, now, &layout(0.0))
                        .map(|s| s.publication)
                }
                NavOp::Tick => {
                    now += 600;
                    nav.on_tick(now, &layout(0.0))
                }
                NavOp::Resize => Some(nav.on_resize(&layout(0.0))),
            };

            if let Some(publication) = publication {
                let active: Vec<_> =
                    publication.links.iter().filter(|l| l.active).collect();
                prop_assert!(active.len() <= 1);
                if let Some(link) = active.first() {
                    let link_box = links.iter().find(|b| b.target == link.target).unwrap();
                    prop_assert_eq!(publication.underline.left, link_box.left);
                    prop_assert_eq!(publication.underline.width, link_box.width);
                    prop_assert_eq!(publication.underline.opacity, 1.0);
                } else {
                    prop_assert_eq!(publication.underline.width, 0.0);
                    prop_assert_eq!(publication.underline.opacity, 0.0);
                }
            }
        }
    }

    /// Once every timer has drained, the controller's answer matches a
    /// from-scratch locate at the settled position.
    #[test]
    fn controller_converges_to_from_scratch_locate(
        sections in sections_strategy(),
        scroll_y in 0.0..4000.0f64,
        click in 0..8usize,
    ) {
        let links = links_for(&sections);
        let layout = |scroll_y: f64| PageLayout {
            viewport: Viewport { scroll_y, height: 800.0, navbar_height: 80.0, overlay_height: 0.0 },
            sections: sections.clone(),
            links: links.clone(),
        };

        let mut nav = NavController::new();
        let _ = nav.on_section_request(&format!("s{click}"), 0, &layout(0.0));
        nav.on_scroll(50);
        nav.on_frame(&layout(scroll_y));

        // Drain both deadlines well past their windows.
        let settled = layout(scroll_y);
        let _ = nav.on_tick(10_000, &settled);
        let _ = nav.on_tick(20_000, &settled);

        prop_assert!(!nav.is_suppressed());
        prop_assert_eq!(
            nav.active_section(),
            locate_active_section(&settled.viewport, &settled.sections)
        );
    }
}
