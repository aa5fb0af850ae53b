use thiserror::Error;

/// Returned by [`crate::MedianTracker::median`] when no values have been inserted
///
/// Hosts should treat this as "no data yet" and not display a median.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no values have been inserted yet")]
pub struct EmptyStateError;
