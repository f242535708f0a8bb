//! Decode failure type shared by every decoder in the pipeline.

use thiserror::Error;

/// A decoder could not match at the current position.
///
/// Carries the byte offset into the input and a short description of what the
/// failing decoder expected there. The message is diagnostics for humans;
/// callers treat it as opaque and only rely on the fact of failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("decode failed at byte {at}: expected {expected}")]
pub struct DecodeError {
    /// Byte offset into the input where matching failed.
    pub at: usize,
    /// What the failing decoder was looking for.
    pub expected: String,
}

impl DecodeError {
    pub(crate) fn new(at: usize, expected: impl Into<String>) -> Self {
        Self {
            at,
            expected: expected.into(),
        }
    }
}
