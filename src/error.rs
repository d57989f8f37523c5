use thiserror::Error;

/// Errors raised by the fallible addition variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddError {
    /// The mathematical sum does not fit in an `i32`.
    #[error("integer overflow: {a} + {b} is outside the i32 range")]
    Overflow { a: i32, b: i32 },
}

/// An overflow policy name that is not `wrap`, `saturate` or `fail`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown overflow policy `{0}` (expected `wrap`, `saturate` or `fail`)")]
pub struct ParsePolicyError(pub String);
