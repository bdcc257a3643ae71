use thiserror::Error;

/// Errors raised by [`DoublingList`] and its cursors.
///
/// Every operation validates its preconditions before touching the list, so
/// an `Err` never leaves a partial mutation behind.
///
/// [`DoublingList`]: crate::DoublingList
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An empty (`None`) element was offered for insertion.
    #[error("empty elements are not permitted")]
    InvalidArgument,
    /// The index lies outside the range accepted by the operation.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// A cursor mutation was attempted without a qualifying move.
    #[error("{0}")]
    IllegalState(&'static str),
    /// A cursor was advanced past either end of the list.
    #[error("no {0} element exists")]
    NoSuchElement(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
