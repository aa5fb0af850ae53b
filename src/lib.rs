#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod error;
mod halves;

pub use error::EmptyStateError;

use halves::{LowerHalf, UpperHalf};
use ordered_float::OrderedFloat;

/// Exact running median of a numeric stream
///
/// Values are split between two heaps: a max-heap holding the lower half of everything inserted so far,
/// and a min-heap holding the upper half.
/// After every [`Self::insert`], the lower half holds either the same number of values as the upper half, or exactly one more,
/// and no value in the lower half is greater than any value in the upper half.
/// This makes insertion `O(log n)` and [`Self::median`] `O(1)`.
///
/// Every inserted value is also appended to a history log, which can be read back with [`Self::history`].
/// The log is never consulted when calculating the median.
///
/// The tracker is not internally synchronized.
/// Wrap it in a mutex if it needs to be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct MedianTracker {
    /// Lower half of the stream, with its maximum at the root
    lower: LowerHalf,
    /// Upper half of the stream, with its minimum at the root
    upper: UpperHalf,

    /// Every value inserted since construction or the last [`Self::reset`], in insertion order
    history: Vec<f64>,

    /// Flag for whether a NaN insertion has already been warned about
    ///
    /// Only the first NaN after construction or [`Self::reset`] is reported.
    nan_warned: bool,
}

/// Non-destructive copy of both halves of a [`MedianTracker`]
///
/// Produced by [`MedianTracker::snapshot`] for display purposes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Lower half, largest value first
    pub lower: Vec<f64>,
    /// Upper half, smallest value first
    pub upper: Vec<f64>,
}

impl Snapshot {
    /// Total number of values across both halves
    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    /// Whether both halves are empty
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty() && self.upper.is_empty()
    }
}

impl MedianTracker {
    /// Constructs an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs an empty tracker with room for `capacity` values before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lower: LowerHalf::with_capacity(capacity / 2 + 1),
            upper: UpperHalf::with_capacity(capacity / 2),
            history: Vec::with_capacity(capacity),
            nan_warned: false,
        }
    }

    /// Number of values inserted so far
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether no values have been inserted yet
    ///
    /// [`Self::median`] fails exactly when this is `true`.
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    /// Every inserted value, in insertion order
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Largest value in the lower half, if any
    pub fn lower_max(&self) -> Option<f64> {
        self.lower.peek_max()
    }

    /// Smallest value in the upper half, if any
    pub fn upper_min(&self) -> Option<f64> {
        self.upper.peek_min()
    }

    /// Adds a value to the stream, updating the median
    ///
    /// Any value is accepted, including duplicates, negatives and NaN.
    /// NaN is ordered above every other value.
    pub fn insert<V: Into<f64>>(&mut self, value: V) {
        let value = value.into();

        if value.is_nan() && !self.nan_warned {
            self.nan_warned = true;

            #[cfg(feature = "logging")]
            log::warn!("Inserting NaN into running median. The median may become NaN.");

            #[cfg(not(feature = "logging"))]
            eprintln!("Inserting NaN into running median. The median may become NaN.");
        }

        self.history.push(value);

        // Ties with the current boundary go to the lower half
        match self.lower.peek_max() {
            Some(max) if OrderedFloat(value) > OrderedFloat(max) => {
                #[cfg(feature = "logging")]
                log::trace!("Routing {value} to upper half (lower max {max})");

                self.upper.push(value);
            }
            _ => {
                #[cfg(feature = "logging")]
                log::trace!("Routing {value} to lower half");

                self.lower.push(value);
            }
        }

        self.rebalance();
    }

    /// Moves at most one value between the halves to restore the size invariant
    ///
    /// Lower overflow must be checked before upper overflow.
    fn rebalance(&mut self) {
        if self.lower.len() > self.upper.len() + 1 {
            if let Some(moved) = self.lower.pop_max() {
                #[cfg(feature = "logging")]
                log::trace!("Rebalancing: moving {moved} from lower to upper half");

                self.upper.push(moved);
            }
        } else if self.upper.len() > self.lower.len() {
            if let Some(moved) = self.upper.pop_min() {
                #[cfg(feature = "logging")]
                log::trace!("Rebalancing: moving {moved} from upper to lower half");

                self.lower.push(moved);
            }
        }
    }

    /// Gets the median of every value inserted so far
    ///
    /// With an odd count this is exactly the middle value.
    /// With an even count it is the mean of the two middle values.
    /// Neither heap is modified.
    pub fn median(&self) -> Result<f64, EmptyStateError> {
        match (self.lower.peek_max(), self.upper.peek_min()) {
            (Some(lo), Some(hi)) if self.lower.len() == self.upper.len() => Ok(midpoint(lo, hi)),
            (Some(lo), _) => Ok(lo),
            (None, _) => Err(EmptyStateError),
        }
    }

    /// Gets the median, or zero if nothing has been inserted
    ///
    /// Meant for benches and demos. Hosts displaying a median should use [`Self::median`],
    /// since an empty tracker has no median to show.
    pub fn median_or_default(&self) -> f64 {
        self.median().unwrap_or_default()
    }

    /// Copies out both halves in sorted order, without disturbing either heap
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            lower: self.lower.sorted_desc(),
            upper: self.upper.sorted_asc(),
        }
    }

    /// Clears both halves and the history, returning the tracker to its initial state
    pub fn reset(&mut self) {
        #[cfg(feature = "logging")]
        log::debug!("Resetting running median after {} values", self.history.len());

        self.lower.clear();
        self.upper.clear();
        self.history.clear();
        self.nan_warned = false;
    }
}

/// Mean of two values, without overflowing when both are near `f64::MAX`
fn midpoint(lo: f64, hi: f64) -> f64 {
    let sum = lo + hi;
    if sum.is_finite() {
        sum / 2.
    } else {
        lo / 2. + hi / 2.
    }
}

impl<V: Into<f64>> Extend<V> for MedianTracker {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<V: Into<f64>> FromIterator<V> for MedianTracker {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut tracker = Self::new();
        tracker.extend(iter);
        tracker
    }
}
