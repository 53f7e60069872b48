// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Chain that propagates the deepest error unchanged through each frame.
//!
//! The error observed by the caller of [`call_a`] is the very value produced
//! by [`call_c`], moved outward without transformation. Nothing records which
//! frames it passed through.

use crate::domain::DomainError;

/// Outermost frame; surfaces whatever [`call_b`] produced, untouched.
pub fn call_a() -> Result<(), DomainError> {
    call_b()
}

/// Middle frame; propagates without transformation.
pub fn call_b() -> Result<(), DomainError> {
    call_c()
}

/// Deepest frame; always fails.
pub fn call_c() -> Result<(), DomainError> {
    Err(DomainError::new("Error from CallC"))
}
