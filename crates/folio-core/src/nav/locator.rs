//! Section location from live layout measurements.
//!
//! Nothing here is cached: sections are measured fresh on every evaluation
//! because layout can shift under us (resize, fonts loading, dynamic
//! content). The selection heuristic is closest-top-alignment rather than
//! simple overlap, so among several partially visible sections the one
//! whose top edge sits nearest the usable viewport top wins.

/// The usable viewport for section tracking.
///
/// `navbar_height` carves off the fixed header at the top and
/// `overlay_height` carves off any fixed bottom chrome (the mobile quick
/// nav). Either measures as 0 when the element is absent or hidden.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
    pub navbar_height: f64,
    pub overlay_height: f64,
}

impl Viewport {
    /// Top edge of the usable viewport in document coordinates.
    pub fn usable_top(&self) -> f64 {
        self.scroll_y + self.navbar_height
    }

    /// Bottom edge of the usable viewport in document coordinates.
    pub fn usable_bottom(&self) -> f64 {
        self.scroll_y + self.height - self.overlay_height
    }
}

/// A page section as measured this instant, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionRect {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionRect {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Pick the section that should be considered "in view".
///
/// A section is a candidate iff it overlaps the usable viewport at all;
/// among candidates the one minimizing `|top - usable_top|` wins. Ties go
/// to the earlier section in document order. Returns `None` when nothing
/// overlaps (a genuine gap between sections).
pub fn locate_active_section<'a>(
    viewport: &Viewport,
    sections: &'a [SectionRect],
) -> Option<&'a str> {
    let visible_top = viewport.usable_top();
    let visible_bottom = viewport.usable_bottom();

    let mut best: Option<(&str, f64)> = None;
    for section in sections {
        if section.bottom() <= visible_top || section.top >= visible_bottom {
            continue;
        }
        let distance = (section.top - visible_top).abs();
        match best {
            // Strict comparison keeps the first candidate on a tie.
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((section.id.as_str(), distance)),
        }
    }
    best.map(|(id, _)| id)
}
