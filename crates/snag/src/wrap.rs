// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use crate::Stack;
use crate::traced::Traced;

/// Internal error data that is boxed to keep `Snag` lightweight.
#[derive(Debug)]
struct Inner {
    annotation: Cow<'static, str>,
    source: Box<dyn StdError + Send + Sync>,
    stack: Stack,
}

/// An error that wraps another error with an annotation and a call-stack
/// snapshot.
///
/// Each `Snag` exclusively owns its inner error, so repeated wrapping forms a
/// singly linked chain that terminates at the error that started it. The
/// original error stays reachable through [`source`](StdError::source), and
/// every node keeps the [`Stack`] captured at the point where it wrapped.
///
/// The internal data is boxed so the `Err` variant of `Result<T, Snag>` stays
/// the size of a raw pointer.
///
/// # Examples
///
/// ```rust
/// use snag::Snag;
///
/// let io_error = std::io::Error::other("connection reset");
/// let wrapped = Snag::wrap(io_error, "failed to fetch manifest");
/// assert_eq!(wrapped.to_string(), "failed to fetch manifest: connection reset");
/// ```
pub struct Snag {
    data: Box<Inner>,
}

impl Snag {
    /// Wraps `error` with `annotation`, capturing the current call stack.
    pub fn wrap<E>(error: E, annotation: impl Into<Cow<'static, str>>) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        Self {
            data: Box::new(Inner {
                annotation: annotation.into(),
                source: error.into(),
                stack: Stack::capture(),
            }),
        }
    }

    /// Returns the annotation attached at this wrapping step.
    #[must_use]
    pub fn annotation(&self) -> &str {
        &self.data.annotation
    }

    /// Returns the stack snapshot captured when this error was created.
    #[must_use]
    pub fn stack(&self) -> &Stack {
        &self.data.stack
    }
}

impl fmt::Display for Snag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.data.annotation, self.data.source)
    }
}

impl fmt::Debug for Snag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snag")
            .field("annotation", &self.data.annotation)
            .field("source", &self.data.source)
            .field("stack", &self.data.stack)
            .finish()
    }
}

impl StdError for Snag {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.data.source.as_ref())
    }
}

impl Traced for Snag {
    fn stack(&self) -> &Stack {
        &self.data.stack
    }
}

/// Extension trait for wrapping the error of a `Result`.
///
/// # Examples
///
/// ```rust
/// use snag::Wrap;
///
/// fn parse() -> Result<u32, std::num::ParseIntError> {
///     "xyz".parse()
/// }
///
/// let err = parse().wrap_err("failed to read quota").unwrap_err();
/// assert!(err.to_string().starts_with("failed to read quota: "));
/// ```
pub trait Wrap<T> {
    /// Wraps the error value, if any, annotating it and capturing the current
    /// call stack at the point of wrapping.
    fn wrap_err(self, annotation: impl Into<Cow<'static, str>>) -> Result<T, Snag>;
}

impl<T, E> Wrap<T> for Result<T, E>
where
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    fn wrap_err(self, annotation: impl Into<Cow<'static, str>>) -> Result<T, Snag> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(Snag::wrap(error, annotation)),
        }
    }
}
