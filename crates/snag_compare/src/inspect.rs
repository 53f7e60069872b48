// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Read-only queries over an arbitrary error value.
//!
//! The inspector never assumes which chain produced a value. It probes for
//! each capability — inner-error access, stack-snapshot access — one at a
//! time and adapts to what the value actually offers.

use std::error::Error as StdError;
use std::fmt;

use snag::{Snag, Stack};

use crate::annotated::AnnotatedError;
use crate::domain::DomainError;

/// The concrete kind of an inspected error value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The terminal [`DomainError`].
    Domain,
    /// A flat [`AnnotatedError`] with no structure behind it.
    Annotated,
    /// A [`Snag`] wrapping an inner error.
    Wrapped,
    /// Anything the inspector does not recognize.
    Unknown,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Domain => "DomainError",
            Self::Annotated => "AnnotatedError",
            Self::Wrapped => "Snag",
            Self::Unknown => "unknown",
        })
    }
}

/// Returns the fully rendered message of `error`.
#[must_use]
pub fn message(error: &(dyn StdError + 'static)) -> String {
    error.to_string()
}

/// Identifies the concrete kind of `error` by downcast probing.
#[must_use]
pub fn kind(error: &(dyn StdError + 'static)) -> Kind {
    if error.is::<DomainError>() {
        Kind::Domain
    } else if error.is::<AnnotatedError>() {
        Kind::Annotated
    } else if error.is::<Snag>() {
        Kind::Wrapped
    } else {
        Kind::Unknown
    }
}

/// Walks inner-error links to the deepest error reachable from `error`.
///
/// Returns `error` itself when it exposes no inner error — notably for
/// annotated-chain results, whose "deeper" error exists only as text.
#[must_use]
pub fn root_cause<'a>(error: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    snag::root_cause(error)
}

/// Returns the stack snapshot closest to `error`, probing every link of its
/// chain. `None` means no stack trace is available.
#[must_use]
pub fn stack_trace<'a>(error: &'a (dyn StdError + 'static)) -> Option<&'a Stack> {
    snag::stack_of(error)
}
