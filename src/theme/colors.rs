//! Color constants for the Folio design language.
//!
//! Dark glass aesthetic: deep ink backgrounds, a single warm accent.

#![allow(dead_code)]

// === INK (Backgrounds) ===
pub const INK_BLACK: &str = "#0b0d10";
pub const INK_RAISED: &str = "#12151a";
pub const INK_BORDER: &str = "#1e232b";

// === ACCENT (Links, Highlights, Underline) ===
pub const ACCENT: &str = "#e8a33d";
pub const ACCENT_GLOW: &str = "rgba(232, 163, 61, 0.35)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f2f3f5";
pub const TEXT_SECONDARY: &str = "rgba(242, 243, 245, 0.72)";
pub const TEXT_MUTED: &str = "rgba(242, 243, 245, 0.45)";

// === SEMANTIC ===
pub const DANGER: &str = "#ff4d5e";
pub const SUCCESS: &str = "#53c27a";
