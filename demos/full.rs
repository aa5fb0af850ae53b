//! A more fully-fledged example, showcasing every method on [`MedianTracker`]

use running_median::{EmptyStateError, MedianTracker};

const DATA: [i32; 8] = [5, 3, 8, 1, 9, 2, 2, 7];

fn main() {
    // Pre-size the tracker, since we know how much data is coming
    let mut tracker = MedianTracker::with_capacity(DATA.len());

    // Nothing has been inserted yet, so there is no median
    match tracker.median() {
        Ok(median) => println!("Median: {median}"),
        Err(EmptyStateError) => println!("No data yet"),
    }

    for data_point in DATA {
        tracker.insert(data_point);

        // The median is available after every insertion
        if let Ok(median) = tracker.median() {
            println!("Inserted {data_point}, median is now {median:.2}");
        }

        // Both halves can be inspected without disturbing them
        let snapshot = tracker.snapshot();
        println!("  lower: {:?}", snapshot.lower);
        println!("  upper: {:?}", snapshot.upper);
    }

    println!("Processed {} data points: {:?}", tracker.len(), tracker.history());

    // Clearing puts us back where we started
    tracker.reset();
    if let Err(e) = tracker.median() {
        println!("After reset: {e}");
    }
}
