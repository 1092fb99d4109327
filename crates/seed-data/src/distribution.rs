//! Proportional scaling of per-entity record counts.
//!
//! A ten-article corpus should not carry the same per-article comment and
//! view density as a five-hundred-article one. [`scale_range`] shrinks the
//! nominal per-parent range for small corpora, and [`split_weighted`]
//! distributes a total across named buckets without dropping records to
//! rounding.

use rand::Rng;
use rand::seq::SliceRandom;

/// Inclusive per-parent count range after proportional scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaledRange {
    pub min: usize,
    pub max: usize,
}

impl ScaledRange {
    /// Samples a count from the range.
    pub fn sample(&self, rng: &mut impl Rng) -> usize {
        if self.min >= self.max {
            self.min
        } else {
            rng.gen_range(self.min..=self.max)
        }
    }
}

/// Scales a nominal `[min, max]` per-parent range by corpus size.
///
/// The result is floored at 1; see [`scale_range_with_floor`] when a zero
/// floor is meaningful (ranges that may legitimately produce nothing).
pub fn scale_range(total: usize, min: usize, max: usize) -> ScaledRange {
    scale_range_with_floor(total, min, max, 1)
}

/// Scales a nominal `[min, max]` per-parent range by corpus size, flooring
/// both ends at `floor`.
pub fn scale_range_with_floor(total: usize, min: usize, max: usize, floor: usize) -> ScaledRange {
    let factor = scale_factor(total);
    let scaled_min = ((min as f64 * factor).round() as usize).max(floor);
    let scaled_max = ((max as f64 * factor).round() as usize).max(scaled_min);

    ScaledRange {
        min: scaled_min,
        max: scaled_max,
    }
}

/// Piecewise-linear scale factor.
///
/// Totals up to 5 use 30-50% of the nominal range, totals up to 20 use
/// 50-80%, larger corpora use the nominal range unchanged.
fn scale_factor(total: usize) -> f64 {
    let t = total as f64;
    if total <= 5 {
        0.3 + 0.2 * (t / 5.0)
    } else if total <= 20 {
        0.5 + 0.3 * ((t - 5.0) / 15.0)
    } else {
        1.0
    }
}

/// Distributes `total` across weighted buckets, returning one bucket value
/// per item in random order.
///
/// Weights must sum to 1. Each share is floored and the first bucket absorbs
/// the rounding remainder, so the returned vector always has exactly `total`
/// entries. The shuffle removes positional bias: callers assign buckets by
/// index without the early items skewing toward the first bucket.
pub fn split_weighted<T: Copy>(total: usize, buckets: &[(T, f64)], rng: &mut impl Rng) -> Vec<T> {
    let mut counts: Vec<usize> = buckets
        .iter()
        .map(|(_, weight)| (total as f64 * weight).floor() as usize)
        .collect();

    let assigned: usize = counts.iter().sum();
    if let Some(first) = counts.first_mut() {
        *first += total.saturating_sub(assigned);
    }

    let mut assignments = Vec::with_capacity(total);
    for ((value, _), count) in buckets.iter().zip(&counts) {
        assignments.extend(std::iter::repeat(*value).take(*count));
    }

    assignments.shuffle(rng);
    assignments
}
