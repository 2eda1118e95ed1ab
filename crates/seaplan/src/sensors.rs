//! Sensor placement and coverage ranking.
//!
//! Model
//! - Sensors are drawn uniformly over the field (positions rounded to two
//!   decimals) from an injected `PlacementSource`.
//! - An area counts toward a sensor when a reference position for that area
//!   lies strictly within `COVERAGE_RADIUS` of the sensor.
//! - Areas carry no coordinates, so reference positions are drawn from the
//!   same source. `AreaSampling::PerPair` draws a fresh position for every
//!   (sensor, area) pair; `AreaSampling::PerArea` draws one position per area
//!   and shares it across sensors.
//! - Ranking orders sensor indices by coverage, highest first, ties by index.
//!
//! With `PerPair`, coverage depends on the draw order and is not comparable
//! between sensors in the geometric sense; only a fixed seed reproduces it.

use nalgebra::Vector2;
use serde::Serialize;

use crate::area::ScoredArea;
use crate::cfg::FieldSize;
use crate::geom::distance;
use crate::round2;

/// Coverage radius, in field units.
pub const COVERAGE_RADIUS: f64 = 5.0;

/// Source of positions in `[0, width] × [0, height]`.
pub trait PlacementSource {
    fn sample(&mut self, field: FieldSize) -> Vector2<f64>;
}

impl<F> PlacementSource for F
where
    F: FnMut(FieldSize) -> Vector2<f64>,
{
    #[inline]
    fn sample(&mut self, field: FieldSize) -> Vector2<f64> {
        self(field)
    }
}

/// How area reference positions are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AreaSampling {
    /// Fresh position per (sensor, area) pair.
    #[default]
    PerPair,
    /// One position per area, shared by all sensors.
    PerArea,
}

/// Placed sensors with their coverage and ranking.
#[derive(Clone, Debug, PartialEq)]
pub struct SensorLayout {
    pub sensors: Vec<Vector2<f64>>,
    /// `coverage[i] <= number of areas`.
    pub coverage: Vec<usize>,
    /// Sensor indices, best coverage first.
    pub ranking: Vec<usize>,
}

#[inline]
fn covers(sensor: Vector2<f64>, position: Vector2<f64>) -> bool {
    distance(sensor, position) < COVERAGE_RADIUS
}

/// Coverage of each sensor against fixed area positions.
pub fn coverage_counts(sensors: &[Vector2<f64>], positions: &[Vector2<f64>]) -> Vec<usize> {
    sensors
        .iter()
        .map(|&s| positions.iter().filter(|&&p| covers(s, p)).count())
        .collect()
}

/// Sensor indices ordered by coverage, highest first; equal coverage keeps index order.
pub fn rank_by_coverage(coverage: &[usize]) -> Vec<usize> {
    let mut ranking: Vec<usize> = (0..coverage.len()).collect();
    ranking.sort_by(|&a, &b| coverage[b].cmp(&coverage[a]));
    ranking
}

/// Place `num_sensors` sensors over `field` and rank them by area coverage.
pub fn place_and_rank<S: PlacementSource>(
    num_sensors: usize,
    field: FieldSize,
    areas: &[ScoredArea],
    source: &mut S,
    sampling: AreaSampling,
) -> SensorLayout {
    let sensors: Vec<Vector2<f64>> = (0..num_sensors)
        .map(|_| {
            let p = source.sample(field);
            Vector2::new(round2(p.x), round2(p.y))
        })
        .collect();

    let coverage = match sampling {
        AreaSampling::PerArea => {
            let positions: Vec<Vector2<f64>> = areas.iter().map(|_| source.sample(field)).collect();
            coverage_counts(&sensors, &positions)
        }
        AreaSampling::PerPair => {
            let mut coverage = vec![0usize; sensors.len()];
            for (i, &s) in sensors.iter().enumerate() {
                for _ in areas {
                    if covers(s, source.sample(field)) {
                        coverage[i] += 1;
                    }
                }
            }
            coverage
        }
    };

    let ranking = rank_by_coverage(&coverage);
    tracing::debug!(sensors = num_sensors, areas = areas.len(), ?sampling, ?coverage, "ranked sensors");
    SensorLayout {
        sensors,
        coverage,
        ranking,
    }
}
