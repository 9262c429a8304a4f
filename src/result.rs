//! A discriminated container for the outcome of an operation that may fail.
//!
//! [`Result`] carries either a success payload (`Ok`) or a failure payload
//! (`Err`). Which of the two the payload means is decided by the discriminant
//! alone: the predicates [`is_ok`](Result::is_ok) and [`is_err`](Result::is_err)
//! read nothing but the discriminant, and for every well-formed value exactly
//! one of them answers `true`.
//!
//! The container owns its payload. Release happens automatically when the
//! value goes out of scope; [`destroy`](Result::destroy) consumes the value to
//! make the release point explicit where a caller wants one. Because the
//! container moves on destruction, releasing twice is impossible.
//!
//! `Result` and [`Option`](crate::option::Option) are structurally parallel
//! but semantically distinct; neither converts into the other.
//!
//! # Examples
//!
//! ```
//! use bedrock::result::Result::{self, Err, Ok};
//!
//! fn parse_digit(byte: u8) -> Result<u8, u8> {
//!     if byte.is_ascii_digit() {
//!         Ok(byte - b'0')
//!     } else {
//!         Err(byte)
//!     }
//! }
//!
//! let outcome = parse_digit(b'7');
//! assert!(outcome.is_ok());
//! match outcome {
//!     Ok(digit) => assert_eq!(digit, 7),
//!     Err(_) => unreachable!(),
//! }
//! ```

pub use self::Result::{Err, Ok};

/// The outcome of an operation that may fail.
///
/// A `Result` is either [`Ok`], carrying a success payload of type `T`, or
/// [`Err`], carrying a failure payload of type `E`. There is no third state.
///
/// An `Err` is not an error in itself: it is the intended mechanism for
/// handing a failure to calling code, which branches on the discriminant
/// before using the payload. Pattern matching is the access path to the
/// payload.
///
/// # Examples
///
/// ```
/// use bedrock::result::Result::{self, Err, Ok};
///
/// let success: Result<i32, &str> = Ok(42);
/// let failure: Result<i32, &str> = Err("out of range");
///
/// assert!(success.is_ok());
/// assert!(failure.is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Result<T, E> {
    /// The operation succeeded; the payload is the produced value.
    Ok(T),
    /// The operation failed; the payload describes the failure.
    Err(E),
}

impl<T, E> Result<T, E> {
    /// Returns `true` iff this value is the [`Ok`] variant.
    ///
    /// Only the discriminant is read; the payload is never touched, so this
    /// is safe to call on a `Result` wrapping any payload whatsoever.
    ///
    /// # Examples
    ///
    /// ```
    /// use bedrock::result::Result::{self, Err, Ok};
    ///
    /// let good: Result<(), &str> = Ok(());
    /// let bad: Result<(), &str> = Err("nope");
    /// assert!(good.is_ok());
    /// assert!(!bad.is_ok());
    /// ```
    #[must_use]
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Result::Ok(_))
    }

    /// Returns `true` iff this value is the [`Err`] variant.
    ///
    /// Complementary to [`is_ok`](Result::is_ok): for any `Result`, exactly
    /// one of the two predicates answers `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bedrock::result::Result::{self, Err, Ok};
    ///
    /// let good: Result<(), &str> = Ok(());
    /// let bad: Result<(), &str> = Err("nope");
    /// assert!(bad.is_err());
    /// assert!(!good.is_err());
    /// ```
    #[must_use]
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Result::Err(_))
    }

    /// Consumes the `Result` and releases ownership of its payload.
    ///
    /// This is equivalent to letting the value fall out of scope; it exists
    /// so that call sites can mark the release point explicitly. Because the
    /// value is moved, calling `destroy` twice on the same container does not
    /// compile.
    ///
    /// # Examples
    ///
    /// ```
    /// use bedrock::result::Result::{self, Err, Ok};
    ///
    /// let report: Result<(), String> = Err(String::from("allocation failed"));
    /// assert!(report.is_err());
    /// report.destroy();
    /// ```
    #[inline]
    pub fn destroy(self) {}
}
