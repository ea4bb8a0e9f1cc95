use thiserror::Error;

/// Errors that can occur while apportioning a production snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApportionError {
    /// The snapshot cannot be turned into percentages.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Why a production snapshot was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// The snapshot has no sources.
    #[error("production snapshot has no sources")]
    NoSources,

    /// Every source reported zero output.
    #[error("total production is zero")]
    ZeroTotal,

    /// The total output is infinite or too large to represent in watts, so
    /// shares are undefined.
    #[error("total production is infinite or too large to represent")]
    NonFiniteTotal,
}
