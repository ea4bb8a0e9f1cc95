//! # Energy Mix
//!
//! Turns an hourly electricity generation snapshot into a 100-glyph picture
//! of the generation mix: one glyph per whole percentage point of each
//! source, wrapped into fixed-width lines for a length-limited social feed.
//!
//! ## Crate layout
//!
//! - [`models`]: The [`twine_core::Model`] implementations for apportioning
//!   and rendering, plus the free functions they delegate to.
//! - [`support`]: Supporting utilities (numeric constraints, ENTSO-E source
//!   catalog and query parameters).
//!
//! ## Example
//!
//! ```
//! use energy_mix::models::mix::{GlyphTable, Production, RenderConfig, apportion, render};
//!
//! let production = Production::from_megawatts([
//!     ("uhli", 3465.0),
//!     ("jadro", 2853.0),
//!     ("slunce", 295.0),
//! ])
//! .unwrap();
//!
//! let shares = apportion(&production).unwrap();
//! assert_eq!(shares.total(), 100);
//!
//! let tweet = render(&shares, &GlyphTable::default(), RenderConfig::default()).unwrap();
//! assert_eq!(tweet.lines().count(), 10);
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
