use thiserror::Error;

use crate::erased::ElementType;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("negative size: {0}")]
    NegativeSize(i64),
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: i64, len: usize },
    #[error("invalid indices [{start}, {end}] for length {len}")]
    InvalidIndices { start: i64, end: i64, len: usize },
    #[error("sequence is empty")]
    EmptySequence,
    #[error("cannot concatenate {left} sequence with {right} sequence")]
    ConcatTypeMismatch {
        left: ElementType,
        right: ElementType,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;

fn signed(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl Error {
    pub(crate) fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            index: signed(index),
            len,
        }
    }

    pub(crate) fn invalid_indices(start: usize, end: usize, len: usize) -> Self {
        Self::InvalidIndices {
            start: signed(start),
            end: signed(end),
            len,
        }
    }
}

/// Inclusive range check shared by every sub-range extraction.
pub(crate) fn check_range(start: usize, end: usize, len: usize) -> Result<()> {
    if start > end || end >= len {
        return Err(Error::invalid_indices(start, end, len));
    }
    Ok(())
}
