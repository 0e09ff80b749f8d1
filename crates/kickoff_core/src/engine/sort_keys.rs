//! Stable sort keys
//!
//! Float scores can tie. Ties break on an immutable index (candidate order or
//! player slot), never on hash or platform-dependent ordering.

use std::cmp::Ordering;

/// Score descending, then index ascending. NaN-safe via `total_cmp`.
#[inline]
pub fn compare_score_desc_stable(a_score: f32, a_idx: usize, b_score: f32, b_idx: usize) -> Ordering {
    match b_score.total_cmp(&a_score) {
        Ordering::Equal => a_idx.cmp(&b_idx),
        other => other,
    }
}

/// Distance ascending, then index ascending.
#[inline]
pub fn compare_distance_asc_stable(a_dist: f32, a_idx: usize, b_dist: f32, b_idx: usize) -> Ordering {
    match a_dist.total_cmp(&b_dist) {
        Ordering::Equal => a_idx.cmp(&b_idx),
        other => other,
    }
}
