//! Helpers for backends that drive the Hive command-line client.

use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

static TIME_TAKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Time taken: ([0-9]+)\.([0-9]+) seconds").expect("valid time-taken regex")
});

/// Extracts the query duration Hive prints after a statement.
///
/// Hive reports e.g. `Time taken: 12.345 seconds`; the last such line wins
/// when the output contains several statements.
pub fn parse_hive_time_taken(output: &str) -> Option<Duration> {
    let caps = TIME_TAKEN.captures_iter(output).last()?;
    let secs: u64 = caps[1].parse().ok()?;
    let frac = &caps[2];
    // Scale the fractional digits to nanoseconds, ignoring anything past 9 digits.
    let digits = &frac[..frac.len().min(9)];
    let nanos: u32 = digits.parse().ok()?;
    let nanos = nanos * 10u32.pow(9 - digits.len() as u32);
    Some(Duration::new(secs, nanos))
}
