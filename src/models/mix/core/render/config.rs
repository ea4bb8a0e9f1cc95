use crate::support::constraint::{ConstraintResult, StrictlyPositive};

/// Layout configuration for rendering shares into lines.
///
/// The line width is always at least one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    line_width: usize,
}

impl RenderConfig {
    /// Default glyphs per line, giving ten lines for 100 shares.
    pub const DEFAULT_LINE_WIDTH: usize = 10;

    /// Creates a configuration with `line_width` glyphs per line.
    ///
    /// # Errors
    ///
    /// Returns an error if `line_width` is zero.
    pub fn with_line_width(line_width: usize) -> ConstraintResult<Self> {
        Ok(Self {
            line_width: StrictlyPositive::new(line_width)?.into_inner(),
        })
    }

    /// Glyphs per line.
    #[must_use]
    pub fn line_width(&self) -> usize {
        self.line_width
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_width: Self::DEFAULT_LINE_WIDTH,
        }
    }
}
