//! Hourly Czech production snapshots with known shares.

use super::{Production, Shares};

const SOURCES: [&str; 10] = [
    "uhli",
    "plyn",
    "ropa",
    "jadro",
    "slunce",
    "vitr",
    "voda",
    "biomasa",
    "odpad",
    "ostatni_oze",
];

fn production(megawatts: [f64; 10]) -> Production {
    Production::from_megawatts(SOURCES.into_iter().zip(megawatts)).unwrap()
}

pub(crate) fn shares(percentages: [u32; 10]) -> Shares {
    SOURCES.into_iter().zip(percentages).collect()
}

/// 07:00, floored shares fall three short of 100.
pub(crate) fn hour_7() -> Production {
    production([
        3807.0, 1326.0, 0.0, 2801.0, 17.0, 146.0, 182.0, 279.0, 17.0, 275.0,
    ])
}

/// 08:00, naive rounding overshoots to 101.
pub(crate) fn hour_8() -> Production {
    production([
        3832.0, 1337.0, 0.0, 2823.0, 229.0, 149.0, 177.0, 282.0, 18.0, 266.0,
    ])
}

/// 12:00, naive rounding falls short at 99.
pub(crate) fn hour_12() -> Production {
    production([
        3345.0, 1166.0, 0.0, 2829.0, 1498.0, 131.0, 186.0, 288.0, 18.0, 268.0,
    ])
}

/// 16:00, naive rounding happens to land on 100.
pub(crate) fn hour_16() -> Production {
    production([
        3185.0, 873.0, 0.0, 2839.0, 1224.0, 159.0, 184.0, 289.0, 18.0, 269.0,
    ])
}

/// 18:00, naive rounding falls short at 98.
pub(crate) fn hour_18() -> Production {
    production([
        3465.0, 1263.0, 0.0, 2853.0, 295.0, 134.0, 185.0, 293.0, 18.0, 279.0,
    ])
}
