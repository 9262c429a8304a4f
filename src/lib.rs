#![no_std]
#![deny(
    missing_docs,
    unsafe_code,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]

//! Generic utility primitives with explicit ownership semantics.
//!
//! ## Overview
//!
//! This crate provides a small set of independent building blocks:
//!
//! - **[`result::Result`]**: a discriminated success/failure container.
//! - **[`option::Option`]**: a discriminated presence/absence container.
//! - **[`sequence`]**: in-place slice operators ([`map`](sequence::map),
//!   [`filter`](sequence::filter), [`reduce`](sequence::reduce)).
//!
//! The components have no dependencies on each other and compose only in
//! calling code. The crate is `no_std` and allocation-free: every payload and
//! buffer is owned by the caller, and the operators borrow them for the
//! duration of a single call.
//!
//! The containers deliberately mirror the shape of the standard library's
//! `Result` and `Option` while remaining separate types: the discriminant
//! alone decides what the payload means, the two containers never convert
//! into one another, and release of the payload can be made explicit at the
//! call site with [`destroy`](result::Result::destroy).
//!
//! A companion crate, `bedrock-panic`, provides the fatal diagnostic
//! reporter; it is independent of this crate and carries the only
//! platform-specific code in the project.
//!
//! ## Quick Example
//!
//! ```
//! use bedrock::prelude::*;
//!
//! fn lookup(values: &[i32], wanted: i32) -> Option<i32> {
//!     for value in values {
//!         if *value == wanted {
//!             return Some(*value);
//!         }
//!     }
//!     None
//! }
//!
//! let found = lookup(&[1, 2, 3], 2);
//! assert!(found.is_some());
//! ```

pub mod option;
pub mod prelude;
pub mod result;
pub mod sequence;
