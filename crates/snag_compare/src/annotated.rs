// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Chain that rebuilds the error at each frame as flat text.
//!
//! Every frame formats its own annotation together with the rendered text of
//! the inner error and returns a fresh [`AnnotatedError`]. The inner error's
//! identity and structure are discarded; the relationship survives only as a
//! text fragment. That loss is the point of this chain — do not "fix" it by
//! retaining a source link.

use thiserror::Error;

use crate::domain::DomainError;

/// A frame annotation fused with the rendered text of the inner error.
///
/// Carries no source link back to the error it was built from.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AnnotatedError {
    message: String,
}

impl AnnotatedError {
    /// Creates an annotated error with the given flat message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Outermost frame; annotates the rendered text of [`call_b`]'s error.
pub fn call_a() -> Result<(), AnnotatedError> {
    call_b().map_err(|e| AnnotatedError::new(format!("Error from CallA: {e}")))
}

/// Middle frame; annotates the rendered text of [`call_c`]'s error.
pub fn call_b() -> Result<(), AnnotatedError> {
    call_c().map_err(|e| AnnotatedError::new(format!("Error from CallB: {e}")))
}

/// Deepest frame; always fails.
pub fn call_c() -> Result<(), DomainError> {
    Err(DomainError::new("Error from CallC"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenates_annotations_innermost_last() {
        let err = call_a().unwrap_err();
        assert_eq!(err.to_string(), "Error from CallA: Error from CallB: Error from CallC");
    }

    #[test]
    fn middle_frame_annotates_once() {
        let err = call_b().unwrap_err();
        assert_eq!(err.to_string(), "Error from CallB: Error from CallC");
    }

    #[test]
    fn keeps_no_source_link() {
        let err = call_a().unwrap_err();
        assert!(std::error::Error::source(&err).is_none());
    }
}
