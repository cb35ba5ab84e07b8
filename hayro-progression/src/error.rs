//! Error types for selecting a progression iterator.

use crate::order::ProgressionOrder;
use core::fmt;

/// Errors that can occur while selecting a progression iterator for a tile.
///
/// Note that calling [`next`](crate::ProgressionIterator::next) on an
/// exhausted iterator is not represented here. It is a bug in the caller
/// and always panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressionError {
    /// The progression order byte of a COD or POC marker is not one of the
    /// values defined in Table A.16.
    InvalidProgressionOrder(u8),
    /// The progression order is valid, but no iterator exists for it.
    UnsupportedProgressionOrder(ProgressionOrder),
}

impl fmt::Display for ProgressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidProgressionOrder(value) => {
                write!(f, "invalid progression order {value}")
            }
            Self::UnsupportedProgressionOrder(order) => {
                write!(f, "unsupported progression order {order}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ProgressionError {}

/// Result type for progression iterator selection.
pub type Result<T> = core::result::Result<T, ProgressionError>;

macro_rules! bail {
    ($err:expr) => {
        return Err($err.into())
    };
}

pub(crate) use bail;
