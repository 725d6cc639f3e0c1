//! Error types for the dairy-monads containers.

use std::{
    error::Error,
    fmt,
};


/// One side of an [Either](crate::Either).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Side::Left => write!(f, "Left"),
            Side::Right => write!(f, "Right"),
        }
    }
}

/// The broad class of an [EitherError].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An attempt was made to build an instance with both or neither side.
    InvalidState,
    /// A value was requested from the side that is not present.
    MissingElement,
}

/// Error for construction and access failures on an [Either](crate::Either).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EitherError {
    /// Both a left and a right value were supplied to a constructor.
    BothProvided,
    /// Neither a left nor a right value was supplied to a constructor.
    NoneProvided,
    /// The requested side is not the one stored.
    MissingElement(Side),
}

impl EitherError {
    pub fn kind(&self) -> ErrorKind {
        match *self {
            EitherError::BothProvided | EitherError::NoneProvided =>
                ErrorKind::InvalidState,
            EitherError::MissingElement(_) => ErrorKind::MissingElement,
        }
    }
}

impl fmt::Display for EitherError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            EitherError::BothProvided =>
                write!(f, "Both left and right are both provided"),
            EitherError::NoneProvided =>
                write!(f, "Both left and right are both not provided"),
            EitherError::MissingElement(side) =>
                write!(f, "{} value not present", side),
        }
    }
}

impl Error for EitherError {}
