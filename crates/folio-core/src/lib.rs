//! Folio Core Library
//!
//! Headless state machines behind the Folio portfolio app: section-tracking
//! navigation, the hero typewriter, the project gallery modal, and the
//! contact form with its local submission store.
//!
//! ## Overview
//!
//! Everything in this crate is UI-framework-free and deterministic. The
//! desktop shell feeds events, fresh layout measurements, and a
//! millisecond clock into these types and renders whatever they hand
//! back; time only ever enters as a `now_ms` argument, so every state
//! machine here is exercisable in plain unit tests.
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::nav::{NavController, PageLayout, SectionRect, Viewport};
//!
//! let mut nav = NavController::new();
//! let layout = PageLayout {
//!     viewport: Viewport { scroll_y: 0.0, height: 800.0, navbar_height: 80.0, overlay_height: 0.0 },
//!     sections: vec![SectionRect::new("home", 0.0, 900.0)],
//!     links: vec![],
//! };
//!
//! if nav.on_scroll(0) {
//!     nav.on_frame(&layout);
//! }
//! assert_eq!(nav.active_section(), Some("home"));
//! ```

pub mod carousel;
pub mod contact;
pub mod error;
pub mod nav;
pub mod store;
pub mod typing;

// Re-exports
pub use carousel::{GalleryState, ProjectInfo};
pub use contact::{ContactRecord, Country, Field, FieldError, COUNTRIES};
pub use error::{FolioError, FolioResult};
pub use nav::{
    ChromeState, LinkBox, LinkDirective, NavController, PageLayout, Publication, SectionRect,
    SectionScroll, Underline, Viewport,
};
pub use store::{StoredSubmission, SubmissionStore};
pub use typing::{Typewriter, TypewriterScript, TypingStep, TypingTarget};
