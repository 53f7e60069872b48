// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Error wrapping with annotations and call-stack snapshots.
//!
//! Snag augments an error with a static annotation and a [`Stack`] captured at
//! the moment of wrapping, while keeping the original error reachable through
//! [`source`](std::error::Error::source). Wrapping repeatedly builds a singly
//! linked chain of [`Snag`] nodes that terminates at whatever error started it,
//! so the root cause survives any number of intermediate frames.
//!
//! # Key Features
//!
//! - [**`Snag`**](Snag): an error node owning an annotation, the inner error,
//!   and a stack snapshot taken at construction time
//! - [**`Wrap`**](Wrap): extension trait that turns `result.wrap_err("...")`
//!   into a wrapped error
//! - [**`Traced`**](Traced): optional capability for error types that expose a
//!   stack snapshot, probed via [`stack_of`]
//! - [**`Chain`**](Chain), [**`root_cause`**](root_cause),
//!   [**`find_source`**](find_source): traversal over an error and its
//!   transitive sources
//!
//! # Quick Start
//!
//! ```rust
//! use snag::{Wrap, root_cause};
//!
//! fn load() -> Result<(), std::io::Error> {
//!     Err(std::io::Error::other("disk full"))
//! }
//!
//! let err = load().wrap_err("failed to load index").unwrap_err();
//! assert_eq!(err.to_string(), "failed to load index: disk full");
//! assert_eq!(root_cause(&err).to_string(), "disk full");
//! ```

mod chain;
mod stack;
mod traced;
mod wrap;

pub use chain::{Chain, find_source, root_cause};
pub use stack::{Frame, Stack};
pub use traced::{Traced, stack_of};
pub use wrap::{Snag, Wrap};
