//! Failure kinds for list operations.
//!
//! Only two things can go wrong: asking for a part of the empty list, or
//! indexing past the end of a list. Both carry the name of the operation
//! that failed.

use thiserror::Error;

/// Error returned by the partial list operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `head`, `tail`, `last`, `init` or `cycle` was applied to the empty list.
    #[error("*** Exception: {op}: empty list")]
    EmptyList { op: &'static str },
    /// `index` ran off the end of the list.
    #[error("*** Exception: {op}: range error")]
    OutOfRange { op: &'static str, index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn empty(op: &'static str) -> Error {
        return Error::EmptyList { op };
    }

    pub(crate) fn out_of_range(op: &'static str, index: usize) -> Error {
        return Error::OutOfRange { op, index };
    }

    /// Name of the operation that raised this error.
    pub fn op(&self) -> &'static str {
        match self {
            Error::EmptyList { op } => op,
            Error::OutOfRange { op, .. } => op,
        }
    }
}
