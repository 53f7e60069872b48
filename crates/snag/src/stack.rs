// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Call-stack snapshots attached to wrapped errors.

use std::fmt;
use std::sync::Arc;

/// An immutable stack-frame descriptor.
///
/// Holds the demangled function identifier plus the source location it was
/// resolved to. Location information requires debug info; frames without it
/// still carry the function identifier.
#[derive(Debug, Clone)]
pub struct Frame {
    function: String,
    file: Option<String>,
    line: Option<u32>,
}

impl Frame {
    /// Returns the demangled function identifier for this frame.
    #[must_use]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Returns the source file this frame was resolved to, if any.
    #[must_use]
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Returns the source line this frame was resolved to, if any.
    #[must_use]
    pub fn line(&self) -> Option<u32> {
        self.line
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, "{} {file}:{line}", self.function),
            (Some(file), None) => write!(f, "{} {file}", self.function),
            _ => write!(f, "{}", self.function),
        }
    }
}

/// An ordered snapshot of the call stack, innermost frame first.
///
/// Captured eagerly when a [`Snag`](crate::Snag) is constructed. Cloning is
/// cheap because the frames are shared behind an [`Arc`].
#[derive(Debug, Clone)]
pub struct Stack {
    frames: Arc<[Frame]>,
}

impl Stack {
    /// Captures the current call stack.
    ///
    /// Symbols are resolved eagerly. The leading frames that belong to the
    /// capture machinery itself are dropped, so the first frame is the caller
    /// that triggered the capture. Frames whose symbols cannot be resolved
    /// are omitted.
    #[must_use]
    pub fn capture() -> Self {
        let trace = backtrace::Backtrace::new();
        let mut frames = Vec::new();
        for frame in trace.frames() {
            for symbol in frame.symbols() {
                let Some(name) = symbol.name() else { continue };
                frames.push(Frame {
                    function: trim_hash(&name.to_string()),
                    file: symbol.filename().map(|p| p.display().to_string()),
                    line: symbol.lineno(),
                });
            }
        }
        let first = frames
            .iter()
            .position(|f| !is_machinery(&f.function))
            .unwrap_or(frames.len());
        Self {
            frames: frames.split_off(first).into(),
        }
    }

    /// Returns the frames of this snapshot, innermost first.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Returns `true` if no frames could be captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for frame in self.frames.iter() {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{frame}")?;
            first = false;
        }
        Ok(())
    }
}

/// Frames belonging to the capture and wrapping machinery. These always sit
/// at the top of a freshly captured trace and carry no information about the
/// failure site.
fn is_machinery(function: &str) -> bool {
    const MACHINERY: &[&str] = &[
        "backtrace::",
        "snag::stack::Stack::capture",
        "snag::wrap::Snag::wrap",
        "snag::wrap::Wrap",
    ];
    MACHINERY.iter().any(|prefix| function.contains(prefix))
}

/// Strips the trailing `::h0123456789abcdef` disambiguator that rustc appends
/// to mangled symbol names.
fn trim_hash(name: &str) -> String {
    if let Some(pos) = name.rfind("::h") {
        let hash = &name[pos + 3..];
        if !hash.is_empty() && hash.chars().all(|c| c.is_ascii_hexdigit()) {
            return name[..pos].to_string();
        }
    }
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_starts_at_caller() {
        let stack = Stack::capture();
        assert!(!stack.is_empty());
        assert!(
            stack.frames()[0].function().contains("capture_starts_at_caller"),
            "unexpected first frame: {}",
            stack.frames()[0]
        );
    }

    #[test]
    fn capture_drops_machinery_frames() {
        let stack = Stack::capture();
        for frame in stack.frames() {
            assert!(!frame.function().starts_with("backtrace::"), "leaked: {frame}");
        }
    }

    #[test]
    fn cloning_shares_frames() {
        let stack = Stack::capture();
        let clone = stack.clone();
        assert_eq!(stack.frames().len(), clone.frames().len());
    }

    #[test]
    fn trim_hash_strips_disambiguator() {
        assert_eq!(trim_hash("a::b::h0123456789abcdef"), "a::b");
        assert_eq!(trim_hash("a::b"), "a::b");
        assert_eq!(trim_hash("a::high"), "a::high");
    }

    #[test]
    fn frame_display_without_location() {
        let frame = Frame {
            function: String::from("demo::run"),
            file: None,
            line: None,
        };
        assert_eq!(frame.to_string(), "demo::run");
    }

    #[test]
    fn frame_display_with_location() {
        let frame = Frame {
            function: String::from("demo::run"),
            file: Some(String::from("src/run.rs")),
            line: Some(7),
        };
        assert_eq!(frame.to_string(), "demo::run src/run.rs:7");
    }
}
