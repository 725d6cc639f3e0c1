//! Small functional containers.
//!
//! [Either] holds exactly one of two independently-typed values. Failed
//! construction and wrong-side access are reported as [EitherError].

pub mod either;
pub mod error;

pub use either::*;
pub use error::*;
