// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::error::Error as StdError;

use crate::Stack;
use crate::chain::Chain;
use crate::wrap::Snag;

/// Optional capability for error types that carry a call-stack snapshot.
///
/// Any error kind may implement this to expose the [`Stack`] captured when it
/// was created. Callers that receive an arbitrary error should not assume the
/// capability exists; use [`stack_of`] to probe for it.
pub trait Traced {
    /// Returns the stack snapshot captured when this error was created.
    fn stack(&self) -> &Stack;
}

/// Probes `error` and each link of its source chain for a stack snapshot,
/// returning the first one found, outermost link first.
///
/// Stable Rust offers no generic member access on `dyn Error` trait objects,
/// so the probe downcasts each link to the stack-carrying type and reads the
/// snapshot through [`Traced`]. Returns `None` when no link in the chain
/// carries one.
#[must_use]
pub fn stack_of<'a>(error: &'a (dyn StdError + 'static)) -> Option<&'a Stack> {
    Chain::new(error).find_map(|link| link.downcast_ref::<Snag>().map(<Snag as Traced>::stack))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probes_the_error_itself() {
        let err = Snag::wrap(std::io::Error::other("disk full"), "failed to sync");
        assert!(stack_of(&err).is_some());
    }

    /// An error without a snapshot of its own whose source is a [`Snag`].
    #[derive(Debug)]
    struct UntracedHead {
        source: Snag,
    }

    impl std::fmt::Display for UntracedHead {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("commit failed")
        }
    }

    impl StdError for UntracedHead {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.source)
        }
    }

    #[test]
    fn probes_links_behind_an_untraced_head() {
        let err = UntracedHead {
            source: Snag::wrap(std::io::Error::other("disk full"), "failed to sync"),
        };
        let stack = stack_of(&err).expect("snapshot reachable through the chain");
        assert!(!stack.is_empty());
    }

    #[test]
    fn reports_absence_for_plain_errors() {
        let err = std::io::Error::other("disk full");
        assert!(stack_of(&err).is_none());
    }
}
