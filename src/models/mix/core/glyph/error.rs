use thiserror::Error;

/// Errors that can occur while defining a glyph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlyphError {
    /// The symbol is empty.
    #[error("glyph symbol is empty")]
    Empty,

    /// The symbol contains the filler unit used to pad narrow glyphs.
    #[error("glyph symbol {symbol:?} contains the filler unit")]
    ContainsFiller { symbol: String },

    /// The declared width does not match the symbol's length.
    #[error("glyph symbol {symbol:?} has {actual} units but is declared with {declared}")]
    WidthMismatch {
        symbol: String,
        declared: usize,
        actual: usize,
    },

    /// A width other than one or two units was requested.
    #[error("glyph width must be 1 or 2 units, got {0}")]
    UnsupportedWidth(u8),
}
