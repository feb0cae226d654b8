//! Error types for hoi4gen-core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while projecting roster data.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A cell's text cannot convert to the bound field's type.
    #[error("cannot convert '{text}' to {expected} for {field}")]
    Convert {
        field: &'static str,
        expected: &'static str,
        text: String,
    },
}

impl CoreError {
    /// Create a conversion error.
    pub fn convert(field: &'static str, expected: &'static str, text: &str) -> Self {
        Self::Convert {
            field,
            expected,
            text: text.to_string(),
        }
    }
}
