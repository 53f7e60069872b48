// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::error::Error as StdError;

/// Iterator over an error and its transitive sources, outermost first.
///
/// The first item is the error itself; each following item is the
/// [`source`](StdError::source) of the previous one.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Chain<'a> {
    /// Creates an iterator starting at `head` itself.
    #[must_use]
    pub fn new(head: &'a (dyn StdError + 'static)) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Walks source links to the deepest error in the chain.
///
/// Returns `error` itself when it has no source.
#[must_use]
pub fn root_cause<'a>(error: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    let mut current = error;
    while let Some(source) = current.source() {
        current = source;
    }
    current
}

/// Finds the first source error of type `T` in the chain.
///
/// Only searches the source chain, not `error` itself.
pub fn find_source<'a, T: StdError + 'static>(error: &'a (dyn StdError + 'static)) -> Option<&'a T> {
    Chain::new(error).skip(1).find_map(|link| link.downcast_ref::<T>())
}
