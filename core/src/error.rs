//! Error types for argument binding.
//!
//! Every variant ends the parse immediately. Fields bound before the failing
//! token keep their new values; there is no rollback.

use thiserror::Error;

use crate::{DeclarationError, ValueKind};

/// Errors raised while binding a token list onto a target.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The target declares no options at all.
    #[error("no options declared on the target")]
    NoOptionsDeclared,

    /// An option-shaped token matched no declared alias.
    #[error("unknown option: {token}")]
    UnknownOption { token: String },

    /// A positional token was seen but no positional list is declared.
    #[error("unexpected positional parameter: {token}")]
    UnexpectedPositionalParameter { token: String },

    #[error("invalid boolean value for option {option}: {value:?}")]
    InvalidBooleanValue { option: String, value: String },

    #[error("invalid integer value for option {option}: {value:?}")]
    InvalidIntegerValue { option: String, value: String },

    /// A value-taking option was the last token.
    #[error("missing value for option {option}")]
    MissingValueParameter { option: String },

    #[error("missing required option: {option}")]
    MissingRequiredOption { option: String, field: String },

    /// A required positional list captured nothing.
    #[error("missing required positional parameters for {field}")]
    MissingPositionalParameters { field: String },

    /// A value was committed to a field of another kind.
    #[error("field {field} holds {expected} values, got {found}")]
    KindMismatch {
        field: String,
        expected: ValueKind,
        found: ValueKind,
    },

    /// The usage field is printed, never assigned.
    #[error("field {field} is read-only")]
    ReadOnlyField { field: String },

    #[error("invalid declaration: {0}")]
    InvalidDeclaration(#[from] DeclarationError),

    #[error("failed to write usage text: {0}")]
    UsageOutput(#[from] std::io::Error),
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;
