use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-way grading of a win rate (in percent), used for badge colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinRateTier {
    High,
    Mid,
    Low,
}

impl WinRateTier {
    /// `High` above 60, `Mid` above 40, `Low` otherwise. Both bounds are exclusive,
    /// and NaN grades as `Low`.
    pub fn classify(win_rate: f64) -> Self {
        if win_rate > 60.0 {
            WinRateTier::High
        } else if win_rate > 40.0 {
            WinRateTier::Mid
        } else {
            WinRateTier::Low
        }
    }
}

impl fmt::Display for WinRateTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WinRateTier::High => "high",
            WinRateTier::Mid => "mid",
            WinRateTier::Low => "low",
        };
        f.write_str(s)
    }
}
