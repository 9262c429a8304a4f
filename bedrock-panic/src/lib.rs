#![deny(
    missing_docs,
    unsafe_code,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]

//! Fatal diagnostic reporter for unrecoverable errors.
//!
//! This crate provides [`panic_with_code`]: print a message and a call-stack
//! trace to standard error, then terminate the process with a given exit
//! code. [`panic()`] is the convenience variant fixing the exit code to 1.
//!
//! # Quick Start
//!
//! ```no_run
//! fn load_config(path: &str) -> String {
//!     match std::fs::read_to_string(path) {
//!         Ok(config) => config,
//!         Err(_) => bedrock_panic::panic("config file is unreadable"),
//!     }
//! }
//! ```
//!
//! This will print a report similar to the following before exiting:
//!
//! ```text
//! panic: config file is unreadable
//! 1: myapp::load_config +0x3c
//!     ip = 0x55e4c0a1b2fc, sp = 0x7ffd8a4c1d60
//! 2: myapp::main +0x11
//!     ip = 0x55e4c0a1b4a1, sp = 0x7ffd8a4c1da0
//! ```
//!
//! # Trace Content
//!
//! The trace starts at the reporter's immediate caller; the reporter's own
//! frames are excluded. Each frame carries a 1-based sequence number, the
//! demangled symbol name (`???` when resolution fails), the byte offset of
//! the instruction pointer from the symbol start, and the instruction- and
//! stack-pointer values. Exact spacing of the rendition is not a contract;
//! the fields are.
//!
//! Callers that want the snapshot without terminating can use
//! [`Trace::capture`] and the [`Display`](core::fmt::Display) rendition
//! directly.
//!
//! # Failure Behavior
//!
//! Symbol-resolution failure for an individual frame is non-fatal: the frame
//! is printed with a placeholder and the walk continues. If the unwinder
//! yields nothing at all, the message alone is printed and the process still
//! exits with the requested code.
//!
//! Output goes through one locked stderr handle per report, so concurrent
//! reports from other threads interleave at worst at line granularity; no
//! stronger synchronization is provided, and with several threads reporting
//! at once the first to reach `exit` wins.
//!
//! # Debugging Symbols in Release Builds
//!
//! To keep symbol names and offsets useful in release builds, enable debug
//! info in your `Cargo.toml`:
//!
//! ```toml
//! [profile.release]
//! strip = false
//! debug = "line-tables-only"
//! ```

mod unwind;

use std::{
    fmt,
    io::{self, Write as _},
    process,
};

/// A single frame of a call-stack snapshot.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The demangled symbol name, or `None` when resolution failed.
    pub symbol: Option<String>,
    /// Byte offset of the instruction pointer from the symbol start.
    /// Meaningful only when [`symbol`](Frame::symbol) resolved.
    pub offset: usize,
    /// The instruction-pointer value for this frame.
    pub ip: usize,
    /// The stack-pointer value for this frame.
    pub sp: usize,
}

/// A call-stack snapshot, ordered from innermost frame to outermost.
///
/// The snapshot is transient: it borrows nothing and persists nothing, it is
/// just the frames that were live when [`capture`](Trace::capture) ran.
///
/// # Examples
///
/// ```
/// use bedrock_panic::Trace;
///
/// let trace = Trace::capture();
/// println!("captured {} frames", trace.frames.len());
/// ```
#[derive(Debug, Clone)]
pub struct Trace {
    /// The captured frames, innermost first.
    pub frames: Vec<Frame>,
}

impl Trace {
    /// Captures the call stack of the current thread.
    ///
    /// The snapshot begins at this function's caller; frames belonging to
    /// this crate and to the unwinder itself are excluded.
    #[must_use]
    pub fn capture() -> Self {
        Self {
            frames: unwind::snapshot(),
        }
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, frame) in self.frames.iter().enumerate() {
            let sequence = index + 1;
            match &frame.symbol {
                Some(symbol) => writeln!(f, "{sequence}: {symbol} +0x{:x}", frame.offset)?,
                None => writeln!(f, "{sequence}: ??? +0x0")?,
            }
            writeln!(f, "    ip = 0x{:x}, sp = 0x{:x}", frame.ip, frame.sp)?;
        }
        Ok(())
    }
}

/// Prints `message` and a call-stack trace to standard error, then
/// terminates the process with exit code 1.
///
/// See [`panic_with_code`] for the full contract.
///
/// # Examples
///
/// ```no_run
/// bedrock_panic::panic("unreachable state");
/// ```
pub fn panic(message: &str) -> ! {
    panic_with_code(message, 1)
}

/// Prints `message` and a call-stack trace to standard error, then
/// terminates the process with `code`.
///
/// The report consists of a `panic: <message>` header followed by one entry
/// per frame, innermost first, as described at the [crate level](crate). The
/// process exits via [`process::exit`] immediately after the last frame;
/// `code` is the only externally observable contract of the termination.
///
/// Writing the report is best-effort: a failing stderr never prevents the
/// exit.
///
/// # Examples
///
/// ```no_run
/// bedrock_panic::panic_with_code("worker pool exhausted", 3);
/// ```
pub fn panic_with_code(message: &str, code: i32) -> ! {
    let trace = Trace::capture();
    let stderr = io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "panic: {message}");
    let _ = write!(out, "{trace}");
    let _ = out.flush();
    process::exit(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_excludes_reporter_frames() {
        let trace = Trace::capture();
        assert!(!trace.frames.is_empty());
        for frame in &trace.frames {
            if let Some(symbol) = &frame.symbol {
                assert!(
                    !symbol.starts_with("bedrock_panic::Trace"),
                    "reporter frame leaked into the snapshot: {symbol}"
                );
            }
        }
    }

    #[test]
    fn test_display_numbers_frames_from_one() {
        let trace = Trace {
            frames: vec![
                Frame {
                    symbol: Some("alpha::beta".to_string()),
                    offset: 0x2a,
                    ip: 0x1000,
                    sp: 0x2000,
                },
                Frame {
                    symbol: None,
                    offset: 0,
                    ip: 0x3000,
                    sp: 0x4000,
                },
            ],
        };

        let rendered = trace.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "1: alpha::beta +0x2a");
        assert_eq!(lines[1], "    ip = 0x1000, sp = 0x2000");
        assert_eq!(lines[2], "2: ??? +0x0");
        assert_eq!(lines[3], "    ip = 0x3000, sp = 0x4000");
    }

    #[test]
    fn test_display_empty_trace_is_empty() {
        let trace = Trace { frames: Vec::new() };
        assert_eq!(trace.to_string(), "");
    }
}
