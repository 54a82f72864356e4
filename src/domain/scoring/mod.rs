//! Weighted-average scoring.
//!
//! Pure arithmetic over `(rating, weight)` pairs. Callers resolve weights from
//! the catalog first; nothing here performs I/O.
//!
//! Rounding is two-stage: the quotient is rounded half-up to 2 decimal places,
//! then that value is rounded half-up to an integer. `3.495` therefore becomes
//! `3.50` and then `4`, where a single-stage round would give `3`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::foundation::Rating;

/// A rating paired with the weight of its dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedRating {
    pub rating: Rating,
    pub weight: Decimal,
}

impl WeightedRating {
    pub fn new(rating: Rating, weight: Decimal) -> Self {
        Self { rating, weight }
    }
}

/// Running sums for a weighted average.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreAccumulator {
    weighted_sum: Decimal,
    total_weight: Decimal,
}

impl ScoreAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one rating to the sums.
    pub fn add(&mut self, item: WeightedRating) {
        self.weighted_sum += Decimal::from(item.rating.value()) * item.weight;
        self.total_weight += item.weight;
    }

    pub fn weighted_sum(&self) -> Decimal {
        self.weighted_sum
    }

    pub fn total_weight(&self) -> Decimal {
        self.total_weight
    }

    /// Final integer score. Zero total weight scores 0.
    pub fn finish(&self) -> i32 {
        if self.total_weight.is_zero() {
            return 0;
        }
        let Some(quotient) = self.weighted_sum.checked_div(self.total_weight) else {
            return 0;
        };

        quotient
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i32()
            .unwrap_or(0)
    }
}

/// Computes the weighted-average score of a set of ratings.
pub fn weighted_average<I>(items: I) -> i32
where
    I: IntoIterator<Item = WeightedRating>,
{
    let mut acc = ScoreAccumulator::new();
    for item in items {
        acc.add(item);
    }
    acc.finish()
}
