//! Narrow wrapper around the platform stack-unwinding capability.
//!
//! This module is the only place in the crate that names the [`backtrace`]
//! crate. It exposes exactly two things the reporter needs: walking the live
//! frames and resolving an instruction pointer to a symbol, combined into
//! [`snapshot`].

use crate::Frame;

/// Demangled-name prefixes whose frames are skipped at the start of a
/// snapshot, so that traces begin at the reporter's caller rather than
/// inside the reporter or the unwinder.
const SKIPPED_INITIAL_SYMBOLS: &[&str] = &["bedrock_panic::", "backtrace::"];

/// Walks the current call stack and resolves each frame, innermost first.
///
/// A frame whose symbol cannot be resolved is still recorded, with
/// `symbol: None` and a zero offset; resolution failure is not an error.
pub(crate) fn snapshot() -> Vec<Frame> {
    let mut frames = Vec::new();
    let mut initial_filtering = true;

    backtrace::trace(|frame| {
        let ip = frame.ip() as usize;
        let sp = frame.sp() as usize;

        let mut symbol_name: Option<String> = None;
        let mut symbol_addr: Option<usize> = None;
        backtrace::resolve_frame(frame, |symbol| {
            // An address can resolve to several symbols when functions were
            // inlined; keep the first, which is the innermost.
            if symbol_name.is_none()
                && let Some(name) = symbol.name()
            {
                symbol_name = Some(format!("{name:#}"));
                symbol_addr = symbol.addr().map(|addr| addr as usize);
            }
        });

        if initial_filtering {
            if let Some(name) = &symbol_name
                && SKIPPED_INITIAL_SYMBOLS
                    .iter()
                    .any(|prefix| name.starts_with(prefix))
            {
                return true;
            }
            initial_filtering = false;
        }

        let offset = match symbol_addr {
            Some(addr) => ip.saturating_sub(addr),
            None => 0,
        };

        frames.push(Frame {
            symbol: symbol_name,
            offset,
            ip,
            sp,
        });
        true
    });

    frames
}
