//! ENTSO-E Transparency Platform vocabulary.
//!
//! Production data for the Czech grid comes from the ENTSO-E "Actual
//! Generation per Production Type" document. This module names the production
//! types that document reports and builds the parameters of a request for
//! it. Performing the request and parsing its XML are left to the caller.

mod interval;
mod psr_type;
mod query;

pub use interval::TimeInterval;
pub use psr_type::PsrType;
pub use query::{API_URL, EntsoeQuery};
