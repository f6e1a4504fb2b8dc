//! Error types for runtime-supplied tokens and theme documents.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// A string did not name any member of a closed token set.
pub enum TokenError {
    /// The value is not a known token of the given kind.
    #[error("unknown {kind} token `{value}`")]
    Unknown {
        /// Token family name, for example `variant` or `size`.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

#[derive(Debug, Error)]
/// Failures while loading a [`PhotonTheme`](crate::PhotonTheme) document.
pub enum ThemeError {
    /// The document is not valid theme JSON.
    #[error("theme document is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value would break out of its CSS custom property declaration.
    #[error("theme value `{value}` for `{slot}` is not a safe CSS value")]
    UnsafeValue {
        /// Dotted path of the offending field.
        slot: &'static str,
        /// The rejected value.
        value: String,
    },
}
