use thiserror::Error;

/// Errors that can occur while rendering shares.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A share refers to a source with no glyph in the table.
    #[error("no glyph for source `{0}`")]
    UnknownSource(String),
}
