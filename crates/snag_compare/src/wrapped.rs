// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Chain that wraps the error at each frame, keeping the original reachable.
//!
//! Every frame wraps the inner error in a [`Snag`] holding its annotation and
//! a stack snapshot captured at the point of wrapping. Rendering the final
//! error yields the same concatenated text as the annotated chain, but the
//! original [`DomainError`] can still be recovered by following source links,
//! and each wrapping step reports its own snapshot independently.

use snag::{Snag, Wrap};

use crate::domain::DomainError;

/// Outermost frame; wraps [`call_b`]'s error with its own annotation.
pub fn call_a() -> Result<(), Snag> {
    call_b().wrap_err("Error from CallA")
}

/// Middle frame; wraps [`call_c`]'s error with its own annotation.
pub fn call_b() -> Result<(), Snag> {
    call_c().wrap_err("Error from CallB")
}

/// Deepest frame; always fails.
pub fn call_c() -> Result<(), DomainError> {
    Err(DomainError::new("Error from CallC"))
}
