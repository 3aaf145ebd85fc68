//! Vote tallies for polls and disputes.
//!
//! A share is `count / total * 100`. When nobody has voted yet every share is
//! 0%, never a division by zero.

use serde::Serialize;

/// One tallied option: its raw count and its share of all votes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Share {
    pub count: u64,
    /// Share of the total in percent, `0.0..=100.0`.
    pub percent: f64,
}

impl Share {
    /// Percentage rounded half away from zero, as shown next to a bar.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rounded(&self) -> u8 {
        self.percent.round().clamp(0.0, 100.0) as u8
    }

    /// `"42%"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}%", self.rounded())
    }
}

/// Compute each count's share of the sum of all counts.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn shares(counts: &[u64]) -> Vec<Share> {
    let total: u64 = counts.iter().sum();
    counts
        .iter()
        .map(|&count| Share {
            count,
            percent: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            },
        })
        .collect()
}
