//! Marine area records and the quantities derived from them.

use serde::Serialize;

use crate::geom::area_from_counts;
use crate::round2;
use crate::score::score;

/// Value gained per unit of remediation resource.
pub const VALUE_PER_RESOURCE: f64 = 0.1;

/// Raw area record as produced by a data source.
///
/// Indices are expected on [0, 1]; see `score::score` for out-of-range handling.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Area {
    pub internal_points: u32,
    pub boundary_points: u32,
    pub biodiversity: f64,
    pub vulnerabilities: f64,
    pub connectivity: f64,
}

impl Area {
    /// Composite index of this area.
    #[inline]
    pub fn value(&self) -> f64 {
        score(self.biodiversity, self.vulnerabilities, self.connectivity)
    }

    /// Pick area from the stored lattice-point counts.
    #[inline]
    pub fn area_sea(&self) -> f64 {
        area_from_counts(self.internal_points.into(), self.boundary_points.into())
    }

    /// Attach the derived score and area.
    pub fn scored(self) -> ScoredArea {
        ScoredArea {
            value: self.value(),
            area_sea: self.area_sea(),
            area: self,
        }
    }
}

/// An `Area` with its score and Pick area computed once.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScoredArea {
    #[serde(flatten)]
    pub area: Area,
    pub value: f64,
    pub area_sea: f64,
}

impl ScoredArea {
    /// Resources needed to lift this area to `health_threshold`.
    #[inline]
    pub fn resources_for_health(&self, health_threshold: f64) -> f64 {
        resources_for_health(self.value, health_threshold)
    }
}

/// Resource units needed to raise `value` to `health_threshold`.
///
/// Zero for areas already at or above the threshold, otherwise
/// `(threshold - value) / VALUE_PER_RESOURCE`, rounded to two decimals.
pub fn resources_for_health(value: f64, health_threshold: f64) -> f64 {
    if value >= health_threshold {
        0.0
    } else {
        round2((health_threshold - value) / VALUE_PER_RESOURCE)
    }
}
