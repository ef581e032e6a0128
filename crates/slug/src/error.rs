//! Error types for slug generation.

use thiserror::Error;

/// Errors that can occur when configuring slug generation.
///
/// Slug generation itself is infallible; the only failure point is resolving
/// a mode preset from an untyped name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    /// A mode name did not match any built-in preset.
    #[error("unknown slug mode: {name}")]
    UnknownMode {
        /// The unrecognized mode name.
        name: String,
    },
}
