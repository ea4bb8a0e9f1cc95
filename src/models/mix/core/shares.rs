use indexmap::IndexMap;

/// Whole-percentage share of each source, in production snapshot order.
///
/// Shares produced by [`apportion`](fn@super::apportion) always total 100.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shares {
    percentages: IndexMap<String, u32>,
}

impl Shares {
    /// Creates an empty set of shares.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the share of `source`, returning the previous one.
    pub fn insert(&mut self, source: impl Into<String>, percent: u32) -> Option<u32> {
        self.percentages.insert(source.into(), percent)
    }

    /// Returns the share of `source`, if present.
    #[must_use]
    pub fn get(&self, source: &str) -> Option<u32> {
        self.percentages.get(source).copied()
    }

    /// Iterates over `(source, percent)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.percentages
            .iter()
            .map(|(source, percent)| (source.as_str(), *percent))
    }

    /// Iterates over source ids in order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.percentages.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.percentages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.percentages.is_empty()
    }

    /// Sum of all shares.
    ///
    /// Widened to `u64` so caller-built shares cannot overflow.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.percentages.values().copied().map(u64::from).sum()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for Shares {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self {
            percentages: iter
                .into_iter()
                .map(|(source, percent)| (source.into(), percent))
                .collect(),
        }
    }
}
