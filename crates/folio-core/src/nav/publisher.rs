//! Active-link publishing: the single-active-link rule and the underline
//! projection.
//!
//! The publisher owns `current` (the active section id). Everything it
//! emits is a [`Publication`]: a per-link styling directive plus the
//! underline geometry, computed purely from the link boxes it was handed.
//! Calling it twice with the same target produces the same publication.

/// A navigation link as measured this instant, relative to its container.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkBox {
    /// Section id this link targets.
    pub target: String,
    /// Left edge relative to the nav container.
    pub left: f64,
    /// Rendered width.
    pub width: f64,
    /// Whether the pointer is currently over this link.
    pub hovered: bool,
}

impl LinkBox {
    pub fn new(target: impl Into<String>, left: f64, width: f64) -> Self {
        Self {
            target: target.into(),
            left,
            width,
            hovered: false,
        }
    }
}

/// Inline emphasis to apply to a link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    /// Bold weight plus accent color.
    Accent,
    /// Normal weight plus default color.
    Plain,
}

/// What the shell should do to one link.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkDirective {
    pub target: String,
    /// Drives the `active` class.
    pub active: bool,
    /// `None` means leave the link's passive styling alone (it is under
    /// pointer hover and we must not fight the hover style).
    pub emphasis: Option<Emphasis>,
}

/// Underline indicator geometry. Always a pure function of the active
/// link's box; hidden geometry is explicit (width 0, opacity 0) so the
/// shell never shows stale bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Underline {
    pub left: f64,
    pub width: f64,
    pub opacity: f64,
}

impl Underline {
    pub const HIDDEN: Underline = Underline {
        left: 0.0,
        width: 0.0,
        opacity: 0.0,
    };

    fn over(link: &LinkBox) -> Self {
        Self {
            left: link.left,
            width: link.width,
            opacity: 1.0,
        }
    }
}

/// One atomic update of link highlight state.
#[derive(Clone, Debug, PartialEq)]
pub struct Publication {
    pub links: Vec<LinkDirective>,
    pub underline: Underline,
}

/// Owns the active-section id and enforces the at-most-one-active rule.
#[derive(Debug, Default)]
pub struct ActivePublisher {
    current: Option<String>,
}

impl ActivePublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently published section id, if any.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Publish `target` as the active section.
    ///
    /// `None` clears the stored id outright. The accreted original left a
    /// stale id behind on this path, which could swallow a later
    /// re-entry into the same section; clearing closes that gap.
    pub fn publish(&mut self, target: Option<&str>, links: &[LinkBox]) -> Publication {
        self.current = target.map(str::to_owned);
        self.project(links)
    }

    /// Re-derive the publication for the stored id against fresh link
    /// boxes. Used on resize, where geometry moved but the active section
    /// did not.
    pub fn republish(&self, links: &[LinkBox]) -> Publication {
        self.project(links)
    }

    fn project(&self, links: &[LinkBox]) -> Publication {
        let mut directives = Vec::with_capacity(links.len());
        let mut underline = Underline::HIDDEN;

        for link in links {
            let active = self
                .current
                .as_deref()
                .is_some_and(|current| current == link.target);
            if active && underline == Underline::HIDDEN {
                underline = Underline::over(link);
            }
            let emphasis = if active {
                Some(Emphasis::Accent)
            } else if link.hovered {
                None
            } else {
                Some(Emphasis::Plain)
            };
            directives.push(LinkDirective {
                target: link.target.clone(),
                active,
                emphasis,
            });
        }

        Publication {
            links: directives,
            underline,
        }
    }
}
