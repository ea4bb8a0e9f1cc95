//! Ordered per-source production snapshots.

mod grouping;

pub use grouping::Grouping;

use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;
use uom::si::{f64::Power, power::megawatt};

use crate::support::{
    constraint::{Constrained, ConstraintError, ConstraintResult, NonNegative},
    entsoe::PsrType,
};

/// Generation output of each source during one hour.
///
/// Entries keep their insertion order, which later decides the order glyphs
/// appear in the rendered picture. Every power is guaranteed to be
/// non-negative and not `NaN`.
///
/// Deserializes from an object of source id to megawatts, keeping the
/// document order:
///
/// ```
/// use energy_mix::models::mix::Production;
///
/// let production: Production =
///     serde_json::from_str(r#"{"uhli": 3345.0, "ropa": 0.0, "jadro": 2829.0}"#).unwrap();
/// assert_eq!(production.sources().collect::<Vec<_>>(), ["uhli", "ropa", "jadro"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "IndexMap<String, f64>")]
pub struct Production {
    sources: IndexMap<String, Constrained<Power, NonNegative>>,
}

impl Production {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot from `(source, megawatts)` pairs, in iteration order.
    ///
    /// A repeated source replaces the earlier value but keeps its position.
    ///
    /// Powers are stored in watts, so a value above roughly `1.8e302` MW is
    /// accepted here but makes the snapshot total infinite; apportioning it
    /// then fails with [`InvalidInput::NonFiniteTotal`](super::InvalidInput::NonFiniteTotal).
    ///
    /// # Errors
    ///
    /// Returns an error if any value is negative or `NaN`.
    pub fn from_megawatts<I, S>(entries: I) -> ConstraintResult<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut production = Self::new();
        for (source, megawatts) in entries {
            production.insert(source, Power::new::<megawatt>(megawatts))?;
        }
        Ok(production)
    }

    /// Builds a snapshot from ENTSO-E production type codes and quantities.
    ///
    /// Codes missing from the [`PsrType`] catalog are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a quantity for a known code is negative or `NaN`.
    pub fn from_psr_quantities<I, C>(quantities: I) -> ConstraintResult<Self>
    where
        I: IntoIterator<Item = (C, f64)>,
        C: AsRef<str>,
    {
        let mut production = Self::new();
        for (code, megawatts) in quantities {
            let code = code.as_ref();
            match PsrType::from_code(code) {
                Some(psr_type) => {
                    production.insert(psr_type.source(), Power::new::<megawatt>(megawatts))?;
                }
                None => debug!(code, "skipping unmapped production type"),
            }
        }
        Ok(production)
    }

    /// Inserts or replaces the output of `source`.
    ///
    /// Returns the previous value if the source was already present; its
    /// position in the snapshot is unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if `power` is negative or `NaN`.
    pub fn insert(
        &mut self,
        source: impl Into<String>,
        power: Power,
    ) -> ConstraintResult<Option<Power>> {
        let power = NonNegative::new(power)?;
        Ok(self
            .sources
            .insert(source.into(), power)
            .map(Constrained::into_inner))
    }

    /// Returns the output of `source`, if present.
    #[must_use]
    pub fn get(&self, source: &str) -> Option<Power> {
        self.sources.get(source).map(|power| *power.as_ref())
    }

    /// Iterates over `(source, power)` pairs in snapshot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Power)> {
        self.sources
            .iter()
            .map(|(source, power)| (source.as_str(), *power.as_ref()))
    }

    /// Iterates over source ids in snapshot order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    /// Number of sources in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns `true` if the snapshot has no sources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Total output across all sources.
    #[must_use]
    pub fn total(&self) -> Constrained<Power, NonNegative> {
        self.sources.values().copied().sum()
    }

    /// Merges sources into the buckets defined by `grouping`.
    ///
    /// Each bucket takes the position of its first member; sources that match
    /// no rule are kept as they are.
    #[must_use]
    pub fn grouped(&self, grouping: &Grouping) -> Self {
        let mut sources: IndexMap<String, Constrained<Power, NonNegative>> =
            IndexMap::with_capacity(self.sources.len());

        for (source, power) in &self.sources {
            let bucket = grouping.bucket_for(source);
            let merged = sources
                .entry(bucket.to_owned())
                .or_insert_with(NonNegative::zero);
            *merged = *merged + *power;
        }

        Self { sources }
    }

    /// Returns a copy ordered by output, largest first.
    ///
    /// The sort is stable: sources with equal output keep their relative order.
    #[must_use]
    pub fn sorted_descending(&self) -> Self {
        let mut sources = self.sources.clone();
        sources.sort_by(|_, a, _, b| {
            b.as_ref()
                .partial_cmp(a.as_ref())
                .unwrap_or(Ordering::Equal)
        });
        Self { sources }
    }
}

impl TryFrom<IndexMap<String, f64>> for Production {
    type Error = ConstraintError;

    fn try_from(megawatts: IndexMap<String, f64>) -> Result<Self, Self::Error> {
        Self::from_megawatts(megawatts)
    }
}
