//! Greedy resource allocation over scored areas.
//!
//! Model
//! - One resource unit funds one area. With `r` units, fund the `r` highest
//!   values; ties keep input order (stable sort). No backtracking and no
//!   optimality claim.
//! - `r <= 0` funds nothing; `r >= n` funds everything.
//! - `-0.0` ties with `0.0`. NaN values rank after every number and are never
//!   funded; `allocate` cannot produce them because `score` clamps.

use std::cmp::Ordering;

use serde::Serialize;

use crate::area::{Area, ScoredArea};
use crate::round2;

/// Funding decision for a list of areas.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Allocation {
    /// `flags[i] == 1` iff input area `i` is funded.
    pub flags: Vec<u8>,
    /// Input indices by value, highest first.
    pub order: Vec<usize>,
    /// Sum of funded values, rounded to two decimals.
    pub total_value: f64,
}

impl Allocation {
    /// Flags aligned to `order`: a run of ones followed by zeros.
    pub fn ranked_flags(&self) -> Vec<u8> {
        self.order.iter().map(|&i| self.flags[i]).collect()
    }

    pub fn funded_count(&self) -> usize {
        self.flags.iter().filter(|&&f| f == 1).count()
    }

    /// Funded input indices in ranking order.
    pub fn funded(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied().filter(|&i| self.flags[i] == 1)
    }
}

/// Score every area, then fund the top `total_resources` of them.
pub fn allocate(areas: &[Area], total_resources: i64) -> (Vec<ScoredArea>, Allocation) {
    let scored: Vec<ScoredArea> = areas.iter().map(|a| a.scored()).collect();
    let values: Vec<f64> = scored.iter().map(|s| s.value).collect();
    let allocation = allocate_by_value(&values, total_resources);
    (scored, allocation)
}

/// Descending by value; NaN after every number, `-0.0 == 0.0`.
fn by_value_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

/// Fund the top `total_resources` entries of `values`; NaN entries stay unfunded.
pub fn allocate_by_value(values: &[f64], total_resources: i64) -> Allocation {
    let n = values.len();
    let fundable = values.iter().filter(|v| !v.is_nan()).count();
    if fundable < n {
        tracing::warn!(nan = n - fundable, "NaN values are ranked last and not funded");
    }
    let capacity = if total_resources <= 0 {
        0
    } else {
        usize::try_from(total_resources).map_or(fundable, |r| r.min(fundable))
    };

    let mut order: Vec<usize> = (0..n).collect();
    // `sort_by` is stable: equal values keep input order.
    order.sort_by(|&a, &b| by_value_desc(values[a], values[b]));

    let mut flags = vec![0u8; n];
    let mut total = 0.0;
    for &i in &order[..capacity] {
        flags[i] = 1;
        total += values[i];
    }
    tracing::debug!(areas = n, capacity, total, "allocated");
    Allocation {
        flags,
        order,
        total_value: round2(total),
    }
}
