//! Display glyphs and the table assigning them to sources.
//!
//! The target platform counts every glyph as two characters no matter how it
//! is encoded, but some glyphs are a single Unicode scalar while others carry
//! a trailing variation selector. Each glyph therefore declares its width in
//! storage units, and rendering pads narrow glyphs with a [`FILLER`] unit so
//! every glyph occupies exactly [`UNITS_PER_GLYPH`] units while lines are cut.

mod error;
mod table;

pub use error::GlyphError;
pub use table::GlyphTable;

use serde::Deserialize;

/// Unit used to pad single-width glyphs; stripped from rendered lines.
pub const FILLER: char = ' ';

/// Storage units every glyph occupies once normalized.
pub const UNITS_PER_GLYPH: usize = 2;

/// Number of storage units (Unicode scalar values) a glyph is encoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
pub enum GlyphWidth {
    /// One scalar, e.g. `🏭`.
    Single,
    /// A scalar plus a variation selector, e.g. `☢️`.
    Double,
}

impl GlyphWidth {
    /// Number of storage units for this width.
    #[must_use]
    pub fn units(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Double => 2,
        }
    }
}

impl TryFrom<u8> for GlyphWidth {
    type Error = GlyphError;

    fn try_from(units: u8) -> Result<Self, Self::Error> {
        match units {
            1 => Ok(Self::Single),
            2 => Ok(Self::Double),
            other => Err(GlyphError::UnsupportedWidth(other)),
        }
    }
}

/// A symbol repeated once per percentage point of a source.
///
/// # Example
///
/// ```
/// use energy_mix::models::mix::{Glyph, GlyphWidth};
///
/// let nuclear = Glyph::new("\u{2622}\u{fe0f}", GlyphWidth::Double).unwrap();
/// assert_eq!(nuclear.symbol().chars().count(), 2);
///
/// assert!(Glyph::new("\u{2622}\u{fe0f}", GlyphWidth::Single).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "GlyphSpec")]
pub struct Glyph {
    symbol: String,
    width: GlyphWidth,
}

#[derive(Deserialize)]
struct GlyphSpec {
    symbol: String,
    width: GlyphWidth,
}

impl Glyph {
    /// Creates a glyph, checking the symbol against its declared width.
    ///
    /// # Errors
    ///
    /// Returns a [`GlyphError`] if the symbol is empty, contains [`FILLER`],
    /// or its length in storage units differs from `width`.
    pub fn new(symbol: impl Into<String>, width: GlyphWidth) -> Result<Self, GlyphError> {
        let symbol = symbol.into();

        if symbol.is_empty() {
            return Err(GlyphError::Empty);
        }
        if symbol.contains(FILLER) {
            return Err(GlyphError::ContainsFiller { symbol });
        }

        let actual = symbol.chars().count();
        if actual != width.units() {
            return Err(GlyphError::WidthMismatch {
                symbol,
                declared: width.units(),
                actual,
            });
        }

        Ok(Self { symbol, width })
    }

    /// Creates a glyph without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure the symbol has exactly `width` storage units and
    /// does not contain [`FILLER`]. Otherwise rendered lines will be cut in the
    /// wrong places.
    #[must_use]
    pub fn new_unchecked(symbol: impl Into<String>, width: GlyphWidth) -> Self {
        Self {
            symbol: symbol.into(),
            width,
        }
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub fn width(&self) -> GlyphWidth {
        self.width
    }

    /// Storage units of the symbol, right-padded with [`FILLER`] to
    /// [`UNITS_PER_GLYPH`].
    pub(crate) fn padded_units(&self) -> impl Iterator<Item = char> {
        let padding = UNITS_PER_GLYPH - self.width.units();
        self.symbol
            .chars()
            .chain(std::iter::repeat_n(FILLER, padding))
    }
}

impl TryFrom<GlyphSpec> for Glyph {
    type Error = GlyphError;

    fn try_from(spec: GlyphSpec) -> Result<Self, Self::Error> {
        Self::new(spec.symbol, spec.width)
    }
}
