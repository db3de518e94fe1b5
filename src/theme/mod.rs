//! Theme: global styles and color constants.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
