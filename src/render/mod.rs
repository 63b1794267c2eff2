//! Clock rendering.
//!
//! Pure geometry and layout for both clock styles, plus the offscreen
//! canvas they draw on:
//! - `canvas`: cell surface, snapshots, line drawing
//! - `glyph`: 3x3 digital glyph tables
//! - `analog`: tick, label and hand positions
//! - `digital`: time formatting and glyph layout
//! - `face`: cached analog background
//! - `theme`: styles

pub mod analog;
pub mod canvas;
pub mod digital;
pub mod face;
pub mod glyph;
pub mod theme;

pub use canvas::{Canvas, Point, Snapshot, StyledChar};
pub use face::ClockFace;
pub use glyph::GlyphKind;
pub use theme::{current_theme, Theme};
