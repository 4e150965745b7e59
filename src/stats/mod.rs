//! Aggregate views over the filtered employment table
//!
//! Each view is computed independently from the filtered or employed
//! table; none depend on each other. All functions are pure and re-run
//! fresh against the loaded table.

mod breakdown;
mod overall;
mod yearly;

pub use breakdown::{CategoryStats, breakdown, regional};
pub use overall::{OverallStats, overall};
pub use yearly::{YearlyStats, yearly};

/// Round a percentage to one decimal for display parity
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::round1;

    #[test]
    fn test_round1() {
        assert_eq!(round1(66.666_666), 66.7);
        assert_eq!(round1(50.0), 50.0);
        assert_eq!(round1(0.04), 0.0);
    }
}
