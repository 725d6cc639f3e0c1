//! Generic Either type
//!
//! An [Either] holds exactly one of two values, called "left" and "right".
//! The enum makes a value with both sides or with neither side
//! unrepresentable; [Either::from_options] is the only constructor that has
//! to check for them.
//!
//! Accessors for the absent side return [EitherError::MissingElement], so the
//! usual pattern is to check first:
//!
//! ```
//! use dairy_monads::Either;
//!
//! let e = Either::<i64, String>::of_left(7);
//!
//! if e.has_left() {
//!     assert_eq!(e.left(), Ok(&7));
//! }
//! ```

use std::fmt;

use super::error::{EitherError, Side};


/// Generic "either one or the other" type.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Create a container storing the Left type.
    pub fn of_left(value: L) -> Self {
        Either::Left(value)
    }

    /// Create a container storing the Right type.
    pub fn of_right(value: R) -> Self {
        Either::Right(value)
    }

    /// Build a container from a pair of optional values.
    ///
    /// Exactly one of `left` and `right` must be `Some`; otherwise returns
    /// [EitherError::BothProvided] or [EitherError::NoneProvided].
    ///
    /// ```
    /// use dairy_monads::{Either, EitherError};
    ///
    /// assert_eq!(Either::<i32, i32>::from_options(None, Some(2)),
    ///     Ok(Either::Right(2)));
    /// assert_eq!(Either::<i32, i32>::from_options(Some(1), Some(2)),
    ///     Err(EitherError::BothProvided));
    /// ```
    pub fn from_options(left: Option<L>, right: Option<R>)
    -> Result<Self, EitherError> {
        match (left, right) {
            (Some(l), None) => Ok(Either::Left(l)),
            (None, Some(r)) => Ok(Either::Right(r)),
            (Some(_), Some(_)) => Err(EitherError::BothProvided),
            (None, None) => Err(EitherError::NoneProvided),
        }
    }

    /// Split the container into a pair of optional values, exactly one of
    /// which is `Some`.
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Either::Left(l) => (Some(l), None),
            Either::Right(r) => (None, Some(r)),
        }
    }

    /// Check whether this container stores the Left type.
    pub fn has_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Check whether this container stores the Right type.
    pub fn has_right(&self) -> bool {
        ! self.has_left()
    }

    /// Return the stored item if it is in Left.
    pub fn left(&self) -> Result<&L, EitherError> {
        match self {
            Either::Left(ref v) => Ok(v),
            Either::Right(_) => Err(EitherError::MissingElement(Side::Left)),
        }
    }

    /// Return the stored item if it is in Right.
    pub fn right(&self) -> Result<&R, EitherError> {
        match self {
            Either::Right(ref v) => Ok(v),
            Either::Left(_) => Err(EitherError::MissingElement(Side::Right)),
        }
    }

    /// Consume the container, returning the Left item.
    pub fn into_left(self) -> Result<L, EitherError> {
        match self {
            Either::Left(v) => Ok(v),
            Either::Right(_) => Err(EitherError::MissingElement(Side::Left)),
        }
    }

    /// Consume the container, returning the Right item.
    pub fn into_right(self) -> Result<R, EitherError> {
        match self {
            Either::Right(v) => Ok(v),
            Either::Left(_) => Err(EitherError::MissingElement(Side::Right)),
        }
    }

    /// Borrow the stored item without consuming the container.
    ///
    /// Combine with the map methods to transform a shared instance:
    /// `e.as_ref().map_left(|v| v.len())`.
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(ref v) => Either::Left(v),
            Either::Right(ref v) => Either::Right(v),
        }
    }

    /// Apply `f` to a Left item; a Right item is carried over unchanged.
    ///
    /// `f` is called at most once.
    pub fn map_left<NL, F>(self, f: F) -> Either<NL, R>
        where F: FnOnce(L) -> NL,
    {
        match self {
            Either::Left(v) => Either::Left(f(v)),
            Either::Right(v) => Either::Right(v),
        }
    }

    /// Apply `f` to a Right item; a Left item is carried over unchanged.
    ///
    /// `f` is called at most once.
    pub fn map_right<NR, F>(self, f: F) -> Either<L, NR>
        where F: FnOnce(R) -> NR,
    {
        match self {
            Either::Left(v) => Either::Left(v),
            Either::Right(v) => Either::Right(f(v)),
        }
    }

    /// Convert to a [Result], treating Right as the success value.
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(v) => Err(v),
            Either::Right(v) => Ok(v),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(res: Result<R, L>) -> Self {
        match res {
            Ok(v) => Either::Right(v),
            Err(e) => Either::Left(e),
        }
    }
}

impl<L, R> fmt::Display for Either<L, R>
    where L: fmt::Display,
          R: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Either::Left(ref v) => write!(f, "Left({})", v),
            Either::Right(ref v) => write!(f, "Right({})", v),
        }
    }
}
