// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

/// The terminal failure raised at the bottom of every chain.
///
/// Created once, at the deepest call frame, and never mutated; every outer
/// frame consumes it either verbatim or wrapped.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DomainError {
    message: String,
}

impl DomainError {
    /// Creates a domain error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
