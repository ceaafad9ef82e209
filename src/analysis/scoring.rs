// src/analysis/scoring.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Weights combining the three category scores into a total.
///
/// Defaults to 40% seller motivation, 30% transaction complexity and 30%
/// property characteristics, matching what the model is asked to compute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub seller: f64,
    pub transaction: f64,
    pub property: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            seller: 0.4,
            transaction: 0.3,
            property: 0.3,
        }
    }
}

impl fmt::Display for ScoreWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0}/{:.0}/{:.0}",
            self.seller * 100.0,
            self.transaction * 100.0,
            self.property * 100.0
        )
    }
}

impl ScoreWeights {
    /// Parses `"0.4,0.3,0.3"` (seller, transaction, property). Weights must be
    /// non-negative and sum to 1 within rounding.
    pub fn parse(raw: &str) -> Option<Self> {
        let parts: Vec<f64> = raw
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .ok()?;

        let [seller, transaction, property] = parts.as_slice() else {
            return None;
        };

        let weights = Self {
            seller: *seller,
            transaction: *transaction,
            property: *property,
        };

        let all_valid = [weights.seller, weights.transaction, weights.property]
            .iter()
            .all(|w| w.is_finite() && *w >= 0.0);
        let sum = weights.seller + weights.transaction + weights.property;

        if all_valid && (sum - 1.0).abs() < 1e-6 {
            Some(weights)
        } else {
            None
        }
    }

    /// Weighted total, rounded to one decimal place.
    pub fn total(&self, seller: f64, transaction: f64, property: f64) -> f64 {
        round1(seller * self.seller + transaction * self.transaction + property * self.property)
    }
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
