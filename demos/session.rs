//! An interactive session driving a [`MedianTracker`] from standard input
//!
//! Each line is either a whole number to insert, or `reset` to start over.
//! After every line, the numbers entered so far, the current median and both halves are printed.

use std::io::{self, BufRead, Write};

use running_median::MedianTracker;

fn join(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn render(tracker: &MedianTracker, out: &mut impl Write) -> io::Result<()> {
    if tracker.is_empty() {
        writeln!(out, "Numbers entered: None")?;
    } else {
        writeln!(out, "Numbers entered: {}", join(tracker.history()))?;
    }

    // No median is shown until there is some data
    if let Ok(median) = tracker.median() {
        let snapshot = tracker.snapshot();
        writeln!(out, "Current median: {median:.2}")?;
        writeln!(out, "Max heap: {}", join(&snapshot.lower))?;
        writeln!(out, "Min heap: {}", join(&snapshot.upper))?;
    }

    Ok(())
}

fn main() -> io::Result<()> {
    let mut tracker = MedianTracker::new();
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    writeln!(out, "Enter a number to insert, or `reset`:")?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("reset") {
            tracker.reset();
            writeln!(out, "State has been reset.")?;
        } else {
            // Only whole numbers are accepted, so validate before inserting
            match input.parse::<i32>() {
                Ok(number) => {
                    tracker.insert(number);
                    writeln!(out, "Inserted {number}!")?;
                }
                Err(_) => {
                    writeln!(out, "Not a whole number: {input}")?;
                    continue;
                }
            }
        }

        render(&tracker, &mut out)?;
    }

    Ok(())
}
