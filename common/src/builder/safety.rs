//! Dosage safety banding relative to an ingredient's catalog maximum.

use serde::{Deserialize, Serialize};

/// Fraction of the maximum up to which a dosage is considered safe.
pub const SAFE_FRACTION: f64 = 0.7;

/// Severity of a dosage, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DosageBand {
    Safe,
    High,
    TooHigh,
}

impl DosageBand {
    /// `dosage <= 0.7 * max` is Safe, `<= max` is High, anything above is TooHigh.
    ///
    /// `max_dosage` is positive by catalog invariant.
    pub fn classify(dosage: f64, max_dosage: f64) -> Self {
        if dosage <= max_dosage * SAFE_FRACTION {
            DosageBand::Safe
        } else if dosage <= max_dosage {
            DosageBand::High
        } else {
            DosageBand::TooHigh
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DosageBand::Safe => "Safe",
            DosageBand::High => "High",
            DosageBand::TooHigh => "Too High",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            DosageBand::Safe => "bg-green-100 text-green-700",
            DosageBand::High => "bg-yellow-100 text-yellow-700",
            DosageBand::TooHigh => "bg-red-100 text-red-700",
        }
    }
}
