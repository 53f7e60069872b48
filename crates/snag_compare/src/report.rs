// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Console rendering of an inspection report.

use std::error::Error as StdError;
use std::fmt::{self, Write};

use crate::inspect;

/// Renders the full inspection report for one chain's error value.
///
/// The report names the chain, then answers the four inspector queries in
/// order: message, kind, root cause, and stack trace. Stack frames print one
/// per line, innermost first; values without a snapshot print
/// `No stack trace...` instead.
#[must_use]
pub fn render(label: &str, error: &(dyn StdError + 'static)) -> String {
    let mut out = String::new();
    write_report(&mut out, label, error).expect("writing to a String cannot fail");
    out
}

fn write_report(out: &mut impl Write, label: &str, error: &(dyn StdError + 'static)) -> fmt::Result {
    let root = inspect::root_cause(error);

    writeln!(out, "== {label} ==")?;
    writeln!(out, "Message: {}", inspect::message(error))?;
    writeln!(out, "Type: {}", inspect::kind(error))?;
    writeln!(out, "Original error? {}", inspect::message(root))?;
    writeln!(out, "Original type? {}", inspect::kind(root))?;

    match inspect::stack_trace(error) {
        Some(stack) => {
            for frame in stack.frames() {
                writeln!(out, "{frame}")?;
            }
        }
        None => writeln!(out, "No stack trace...")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{annotated, bare, wrapped};

    #[test]
    fn bare_report_answers_all_queries() {
        let err = bare::call_a().unwrap_err();
        let report = render("Chain-Bare", &err);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines,
            vec![
                "== Chain-Bare ==",
                "Message: Error from CallC",
                "Type: DomainError",
                "Original error? Error from CallC",
                "Original type? DomainError",
                "No stack trace...",
            ]
        );
    }

    #[test]
    fn annotated_report_loses_the_original() {
        let err = annotated::call_a().unwrap_err();
        let report = render("Chain-Annotated", &err);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[1], "Message: Error from CallA: Error from CallB: Error from CallC");
        assert_eq!(lines[2], "Type: AnnotatedError");
        // No unwrapping is possible; the "original" is the value itself.
        assert_eq!(lines[3], "Original error? Error from CallA: Error from CallB: Error from CallC");
        assert_eq!(lines[4], "Original type? AnnotatedError");
        assert_eq!(lines[5], "No stack trace...");
    }

    #[test]
    fn wrapped_report_recovers_the_original_and_prints_frames() {
        let err = wrapped::call_a().unwrap_err();
        let report = render("Chain-Wrapped", &err);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[1], "Message: Error from CallA: Error from CallB: Error from CallC");
        assert_eq!(lines[2], "Type: Snag");
        assert_eq!(lines[3], "Original error? Error from CallC");
        assert_eq!(lines[4], "Original type? DomainError");
        assert!(lines.len() > 5, "expected stack frames after the queries");
        assert!(lines[5].contains("wrapped::call_a"), "unexpected first frame: {}", lines[5]);
    }
}
