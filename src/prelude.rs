//! Commonly used items for convenient importing.
//!
//! Glob-importing the prelude brings the two containers, their constructors,
//! and the sequence operators into scope with a single use statement. Note
//! that the constructors deliberately shadow the standard prelude's `Ok`,
//! `Err`, `Some`, and `None`; import items individually from [`result`] and
//! [`option`] instead if a module mixes both families.
//!
//! # Usage
//!
//! ```
//! use bedrock::prelude::*;
//!
//! fn checked_halve(value: u32) -> Result<u32, u32> {
//!     if value % 2 == 0 { Ok(value / 2) } else { Err(value) }
//! }
//!
//! let mut values = [2, 4, 6];
//! map(&mut values, |v| *v += 1);
//! assert!(checked_halve(values[0]).is_err());
//! ```
//!
//! [`result`]: crate::result
//! [`option`]: crate::option

pub use crate::{
    option::Option::{self, None, Some},
    result::Result::{self, Err, Ok},
    sequence::{filter, map, reduce},
};
