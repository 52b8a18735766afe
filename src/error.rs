use thiserror::Error;

/// Errors raised while resolving colors or assembling chart
/// configuration.  They are all input validation failures: nothing is
/// produced when one is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BrandError {
    /// No palette entry has this name or 1-based position.
    #[error("no palette entry for key “{0}”")]
    KeyNotFound(String),

    /// The input cannot be resolved to an RGB color.
    #[error("invalid color “{input}”: {reason}")]
    InvalidColor { input: String, reason: String },

    /// Tint factors must lie in \[0, 1\].
    #[error("tint factor {0} is outside [0, 1]")]
    InvalidFactor(f64),

    /// A scale sequence refers to a position outside the palette.
    #[error("palette index {index} is outside [1, {len}]")]
    InvalidIndex { index: usize, len: usize },

    /// A continuous scale endpoint is not the name of a palette entry.
    #[error("“{0}” is not the name of a palette color")]
    InvalidColorName(String),

    /// Unknown continuous scale type.
    #[error("unknown scale type “{0}” (expected “sequential” or “diverging”)")]
    InvalidType(String),
}

pub type Result<T> = std::result::Result<T, BrandError>;
