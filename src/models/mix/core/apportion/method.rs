use serde::Deserialize;

/// How exact percentages are turned into whole numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Largest-remainder apportionment.
    ///
    /// Floors every percentage, then hands the missing points one by one to
    /// the sources with the largest fractional remainders. Shares always
    /// total exactly 100. Equal remainders are served in snapshot order.
    #[default]
    LargestRemainder,

    /// Rounds every percentage on its own, half to even.
    ///
    /// Shares may total a few points more or less than 100, so the rendered
    /// picture may have 98 or 101 glyphs. Kept for comparison only.
    NaiveRounding,
}
