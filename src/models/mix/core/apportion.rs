//! Whole-percentage apportionment of a production snapshot.
//!
//! Exact shares rarely land on whole numbers, and rounding each one on its
//! own can leave the picture a few glyphs short of or over 100. The
//! largest-remainder method floors every share and then awards the missing
//! points to the largest fractional remainders, so the result always totals
//! exactly 100.

mod error;
mod method;

pub use error::{ApportionError, InvalidInput};
pub use method::Method;

use std::cmp::Ordering;

use tracing::debug;
use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::constraint::StrictlyPositive;

use super::{Production, Shares};

/// The total every largest-remainder apportionment reaches.
pub const TOTAL_PERCENT: u32 = 100;

/// Apportions a production snapshot into whole percentages totalling 100.
///
/// Uses [`Method::LargestRemainder`]. The returned shares keep the
/// snapshot's source order.
///
/// # Errors
///
/// Returns [`ApportionError::InvalidInput`] if the snapshot is empty or its
/// total output is zero or infinite.
///
/// # Example
///
/// ```
/// use energy_mix::models::mix::{Production, apportion};
///
/// let production =
///     Production::from_megawatts([("vitr", 1.0), ("voda", 1.0), ("slunce", 1.0)]).unwrap();
/// let shares = apportion(&production).unwrap();
///
/// assert_eq!(shares.iter().collect::<Vec<_>>(), [("vitr", 34), ("voda", 33), ("slunce", 33)]);
/// ```
pub fn apportion(production: &Production) -> Result<Shares, ApportionError> {
    apportion_with(production, Method::LargestRemainder)
}

/// Apportions a production snapshot into whole percentages using `method`.
///
/// Only [`Method::LargestRemainder`] guarantees a total of 100.
///
/// # Errors
///
/// Returns [`ApportionError::InvalidInput`] if the snapshot is empty or its
/// total output is zero or infinite.
pub fn apportion_with(production: &Production, method: Method) -> Result<Shares, ApportionError> {
    let exact = exact_percentages(production)?;

    let shares = match method {
        Method::LargestRemainder => largest_remainder(&exact),
        Method::NaiveRounding => naive_rounding(&exact),
    };

    Ok(shares)
}

/// Computes each source's exact share of the total, in percent.
fn exact_percentages(production: &Production) -> Result<Vec<(&str, f64)>, InvalidInput> {
    if production.is_empty() {
        return Err(InvalidInput::NoSources);
    }

    let total = StrictlyPositive::new(production.total().into_inner())
        .map_err(|_| InvalidInput::ZeroTotal)?
        .into_inner();

    if !total.is_finite() {
        return Err(InvalidInput::NonFiniteTotal);
    }

    Ok(production
        .iter()
        .map(|(source, power)| {
            let share: Ratio = power / total;
            (source, share.get::<ratio>() * 100.0)
        })
        .collect())
}

fn largest_remainder(exact: &[(&str, f64)]) -> Shares {
    let mut counts: Vec<u32> = exact
        .iter()
        .map(|&(_, percent)| percent.floor() as u32)
        .collect();
    let deficit = TOTAL_PERCENT.saturating_sub(counts.iter().sum());

    // Stable sort: equal remainders keep snapshot order.
    let mut ranking: Vec<usize> = (0..exact.len()).collect();
    ranking.sort_by(|&a, &b| {
        remainder(exact[b].1)
            .partial_cmp(&remainder(exact[a].1))
            .unwrap_or(Ordering::Equal)
    });

    for &index in ranking.iter().take(deficit as usize) {
        counts[index] += 1;
    }

    debug!(
        sources = exact.len(),
        deficit, "awarded largest remainders"
    );

    exact
        .iter()
        .zip(counts)
        .map(|(&(source, _), count)| (source, count))
        .collect()
}

fn naive_rounding(exact: &[(&str, f64)]) -> Shares {
    let shares: Shares = exact
        .iter()
        .map(|&(source, percent)| (source, percent.round_ties_even() as u32))
        .collect();

    let total = shares.total();
    if total != u64::from(TOTAL_PERCENT) {
        debug!(total, "naive shares do not total 100");
    }

    shares
}

fn remainder(percent: f64) -> f64 {
    percent - percent.floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{Rng, SeedableRng, rngs::StdRng};

    use crate::models::mix::core::test_support::{
        hour_7, hour_8, hour_12, hour_16, hour_18, shares,
    };

    #[test]
    fn hourly_snapshots() {
        let cases = [
            (hour_7(), [43, 15, 0, 32, 0, 2, 2, 3, 0, 3]),
            (hour_8(), [42, 15, 0, 31, 2, 2, 2, 3, 0, 3]),
            (hour_12(), [34, 12, 0, 29, 16, 1, 2, 3, 0, 3]),
            (hour_16(), [35, 10, 0, 31, 14, 2, 2, 3, 0, 3]),
            (hour_18(), [40, 14, 0, 33, 3, 2, 2, 3, 0, 3]),
        ];

        for (production, expected) in cases {
            let result = apportion(&production).unwrap();
            assert_eq!(result, shares(expected));
            assert_eq!(result.total(), u64::from(TOTAL_PERCENT));
        }
    }

    #[test]
    fn naive_rounding_may_miss_one_hundred() {
        let cases = [
            (hour_8(), [42, 15, 0, 31, 3, 2, 2, 3, 0, 3], 101),
            (hour_12(), [34, 12, 0, 29, 15, 1, 2, 3, 0, 3], 99),
            (hour_16(), [35, 10, 0, 31, 14, 2, 2, 3, 0, 3], 100),
            (hour_18(), [39, 14, 0, 32, 3, 2, 2, 3, 0, 3], 98),
        ];

        for (production, expected, total) in cases {
            let result = apportion_with(&production, Method::NaiveRounding).unwrap();
            assert_eq!(result, shares(expected));
            assert_eq!(result.total(), total);
        }
    }

    #[test]
    fn largest_remainder_fixes_naive_shortfall() {
        let naive = apportion_with(&hour_12(), Method::NaiveRounding).unwrap();
        let fixed = apportion(&hour_12()).unwrap();

        // Only the sun differs: naive rounding drops its 0.397 remainder, but
        // it is the fifth largest and the floors are five points short.
        for (source, percent) in fixed.iter() {
            let expected = naive.get(source).unwrap() + u32::from(source == "slunce");
            assert_eq!(percent, expected, "{source}");
        }
    }

    #[test]
    fn keeps_snapshot_order() {
        let production = Production::from_megawatts([
            ("vitr", 131.0),
            ("uhli", 3345.0),
            ("ropa", 0.0),
            ("jadro", 2829.0),
        ])
        .unwrap();

        let result = apportion(&production).unwrap();
        assert_eq!(
            result.sources().collect::<Vec<_>>(),
            ["vitr", "uhli", "ropa", "jadro"]
        );
    }

    #[test]
    fn single_source_takes_everything() {
        let alone = Production::from_megawatts([("jadro", 2829.0)]).unwrap();
        assert_eq!(apportion(&alone).unwrap(), shares_of([("jadro", 100)]));

        let with_idle = Production::from_megawatts([("ropa", 0.0), ("jadro", 0.5)]).unwrap();
        assert_eq!(
            apportion(&with_idle).unwrap(),
            shares_of([("ropa", 0), ("jadro", 100)])
        );
    }

    #[test]
    fn ties_follow_snapshot_order() {
        let three = Production::from_megawatts([("voda", 5.0), ("vitr", 5.0), ("slunce", 5.0)])
            .unwrap();
        assert_eq!(
            apportion(&three).unwrap(),
            shares_of([("voda", 34), ("vitr", 33), ("slunce", 33)])
        );

        let reversed =
            Production::from_megawatts([("slunce", 5.0), ("vitr", 5.0), ("voda", 5.0)]).unwrap();
        assert_eq!(
            apportion(&reversed).unwrap(),
            shares_of([("slunce", 34), ("vitr", 33), ("voda", 33)])
        );

        let seven = Production::from_megawatts((0..7).map(|i| (format!("s{i}"), 1.0))).unwrap();
        let result = apportion(&seven).unwrap();
        assert_eq!(
            result.iter().map(|(_, percent)| percent).collect::<Vec<_>>(),
            [15, 15, 14, 14, 14, 14, 14]
        );
    }

    #[test]
    fn equal_tenths_need_no_correction() {
        let ten = Production::from_megawatts((0..10).map(|i| (format!("s{i}"), 42.0))).unwrap();
        let result = apportion(&ten).unwrap();
        assert!(result.iter().all(|(_, percent)| percent == 10));
    }

    #[test]
    fn idle_sources_stay_at_zero() {
        let production = Production::from_megawatts([
            ("ropa", 0.0),
            ("uhli", 1.0),
            ("odpad", 0.0),
            ("jadro", 1.0),
            ("vitr", 1.0),
        ])
        .unwrap();

        let result = apportion(&production).unwrap();
        assert_eq!(
            result,
            shares_of([
                ("ropa", 0),
                ("uhli", 34),
                ("odpad", 0),
                ("jadro", 33),
                ("vitr", 33),
            ])
        );
    }

    #[test]
    fn always_totals_one_hundred() {
        let mut rng = StdRng::seed_from_u64(0x9E37_79B9_7F4A_7C15);

        for _ in 0..500 {
            let len = rng.random_range(1..=12_usize);
            let production = Production::from_megawatts((0..len).map(|i| {
                let megawatts = if rng.random_bool(0.2) {
                    0.0
                } else {
                    rng.random_range(0.0..10_000.0)
                };
                (format!("s{i}"), megawatts)
            }))
            .unwrap();

            match apportion(&production) {
                Ok(result) => {
                    assert_eq!(result.total(), u64::from(TOTAL_PERCENT), "{production:?}");
                    assert!(result.sources().eq(production.sources()));
                }
                Err(err) => {
                    assert_eq!(err, ApportionError::InvalidInput(InvalidInput::ZeroTotal));
                }
            }
        }
    }

    #[test]
    fn rejects_empty_and_zero_total() {
        assert_eq!(
            apportion(&Production::new()),
            Err(ApportionError::InvalidInput(InvalidInput::NoSources))
        );

        let idle = Production::from_megawatts([("ropa", 0.0), ("odpad", 0.0)]).unwrap();
        assert_eq!(
            apportion(&idle),
            Err(ApportionError::InvalidInput(InvalidInput::ZeroTotal))
        );
        assert_eq!(
            apportion_with(&idle, Method::NaiveRounding),
            Err(ApportionError::InvalidInput(InvalidInput::ZeroTotal))
        );

        let unbounded =
            Production::from_megawatts([("uhli", f64::INFINITY), ("jadro", 1.0)]).unwrap();
        assert_eq!(
            apportion(&unbounded),
            Err(ApportionError::InvalidInput(InvalidInput::NonFiniteTotal))
        );
    }

    #[test]
    fn rejects_totals_beyond_f64_range() {
        // Each value is finite in megawatts but overflows once stored in watts.
        let huge = f64::MAX / 4.0;
        let production =
            Production::from_megawatts([("uhli", huge), ("jadro", huge), ("vitr", 1.0)]).unwrap();

        let err = apportion(&production).unwrap_err();
        assert_eq!(
            err,
            ApportionError::InvalidInput(InvalidInput::NonFiniteTotal)
        );
        assert!(err.to_string().contains("too large"));
    }

    fn shares_of<const N: usize>(entries: [(&str, u32); N]) -> Shares {
        entries.into_iter().collect()
    }
}
