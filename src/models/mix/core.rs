//! Apportioning production into whole percentages and rendering them as glyphs.
//!
//! Both stages are pure functions over owned snapshots: nothing is cached or
//! shared between calls, so they can run concurrently without coordination.

mod apportion;
mod glyph;
mod production;
mod render;
mod shares;

#[cfg(test)]
pub(super) mod test_support;

pub use apportion::{
    ApportionError, InvalidInput, Method, TOTAL_PERCENT, apportion, apportion_with,
};
pub use glyph::{FILLER, Glyph, GlyphError, GlyphTable, GlyphWidth, UNITS_PER_GLYPH};
pub use production::{Grouping, Production};
pub use render::{RenderConfig, RenderError, render};
pub use shares::Shares;
