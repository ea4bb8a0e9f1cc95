use indexmap::IndexMap;
use serde::Deserialize;

use super::{Glyph, GlyphWidth};

/// Glyph assigned to each source id.
///
/// The default table covers the grouped Czech source ids:
///
/// | Source        | Glyph | Width  |
/// |---------------|-------|--------|
/// | `uhli`        | 🏭    | single |
/// | `plyn`        | 🔥    | single |
/// | `jadro`       | ☢️    | double |
/// | `ropa`        | 🛢️    | double |
/// | `biomasa`     | 🌿    | single |
/// | `voda`        | 💧    | single |
/// | `slunce`      | ☀️    | double |
/// | `vitr`        | 💨    | single |
/// | `odpad`       | 🗑️    | double |
/// | `ostatni_oze` | ♻️    | double |
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct GlyphTable {
    glyphs: IndexMap<String, Glyph>,
}

impl GlyphTable {
    /// Creates an empty table.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            glyphs: IndexMap::new(),
        }
    }

    /// Assigns `glyph` to `source`, returning the glyph it replaces.
    pub fn insert(&mut self, source: impl Into<String>, glyph: Glyph) -> Option<Glyph> {
        self.glyphs.insert(source.into(), glyph)
    }

    /// Returns the glyph for `source`, if assigned.
    #[must_use]
    pub fn get(&self, source: &str) -> Option<&Glyph> {
        self.glyphs.get(source)
    }

    /// Returns a table with every assignment in `overrides` applied on top of
    /// this one.
    #[must_use]
    pub fn merged(mut self, overrides: GlyphTable) -> Self {
        self.glyphs.extend(overrides.glyphs);
        self
    }

    /// Iterates over `(source, glyph)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Glyph)> {
        self.glyphs
            .iter()
            .map(|(source, glyph)| (source.as_str(), glyph))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        use GlyphWidth::{Double, Single};

        let glyphs = [
            ("uhli", "\u{1f3ed}", Single),
            ("plyn", "\u{1f525}", Single),
            ("jadro", "\u{2622}\u{fe0f}", Double),
            ("ropa", "\u{1f6e2}\u{fe0f}", Double),
            ("biomasa", "\u{1f33f}", Single),
            ("voda", "\u{1f4a7}", Single),
            ("slunce", "\u{2600}\u{fe0f}", Double),
            ("vitr", "\u{1f4a8}", Single),
            ("odpad", "\u{1f5d1}\u{fe0f}", Double),
            ("ostatni_oze", "\u{267b}\u{fe0f}", Double),
        ];

        Self {
            glyphs: glyphs
                .into_iter()
                .map(|(source, symbol, width)| {
                    (source.to_owned(), Glyph::new_unchecked(symbol, width))
                })
                .collect(),
        }
    }
}
