//! Rendering shares as wrapped lines of glyphs.

mod config;
mod error;

pub use config::RenderConfig;
pub use error::RenderError;

use tracing::debug;

use super::{
    Shares,
    glyph::{FILLER, GlyphTable, UNITS_PER_GLYPH},
};

/// Renders shares as lines of glyphs, one glyph per percentage point.
///
/// Glyphs appear in share order and wrap every
/// [`line_width`](RenderConfig::line_width) glyphs. Lines are joined with
/// `\n` with no trailing newline; empty shares render as an empty string.
///
/// # Errors
///
/// Returns [`RenderError::UnknownSource`] if a source in `shares` has no glyph
/// in `glyphs`, even when its share is zero.
///
/// # Example
///
/// ```
/// use energy_mix::models::mix::{GlyphTable, RenderConfig, Shares, render};
///
/// let shares: Shares = [("uhli", 3), ("slunce", 2)].into_iter().collect();
/// let config = RenderConfig::with_line_width(4).unwrap();
///
/// let tweet = render(&shares, &GlyphTable::default(), config).unwrap();
/// assert_eq!(tweet, "\u{1f3ed}\u{1f3ed}\u{1f3ed}\u{2600}\u{fe0f}\n\u{2600}\u{fe0f}");
/// ```
pub fn render(
    shares: &Shares,
    glyphs: &GlyphTable,
    config: RenderConfig,
) -> Result<String, RenderError> {
    let mut units = Vec::new();

    for (source, count) in shares.iter() {
        let glyph = glyphs
            .get(source)
            .ok_or_else(|| RenderError::UnknownSource(source.to_owned()))?;

        let cell: Vec<char> = glyph.padded_units().collect();
        for _ in 0..count {
            units.extend_from_slice(&cell);
        }
    }

    let units_per_line = config.line_width().saturating_mul(UNITS_PER_GLYPH);
    let lines: Vec<String> = units
        .chunks(units_per_line)
        .map(|line| line.iter().filter(|&&unit| unit != FILLER).collect())
        .collect();

    debug!(
        glyphs = units.len() / UNITS_PER_GLYPH,
        lines = lines.len(),
        "rendered shares"
    );

    Ok(lines.join("\n"))
}
