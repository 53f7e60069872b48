// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Side-by-side comparison of three error-propagation strategies.
//!
//! Three structurally identical call chains (`call_a` → `call_b` → `call_c`)
//! surface the same terminal failure, differing only in what each frame does
//! to the error on the way out:
//!
//! - [`bare`] passes the error through untouched.
//! - [`annotated`] rebuilds it as flat text at every frame, discarding the
//!   inner error's structure.
//! - [`wrapped`] wraps it with an annotation and a stack snapshot, keeping
//!   the original reachable.
//!
//! The [`inspect`] module answers the questions that tell the three apart:
//! the rendered message, the concrete kind, the root cause, and the stack
//! trace of an arbitrary error value. The [`report`] module renders those
//! answers as a console report; run the `compare` example to see the three
//! chains next to each other.

pub mod annotated;
pub mod bare;
pub mod domain;
pub mod inspect;
pub mod report;
pub mod wrapped;
