//! Marine area planning: scoring, greedy allocation, Pick areas, sensor coverage.
//!
//! Layout
//! - `geom`: Euclidean distance and lattice-polygon area via Pick's theorem.
//! - `score`, `area`: weighted area index and derived per-area quantities.
//! - `alloc`: greedy top-k funding under a resource cap.
//! - `sensors`: random sensor placement and coverage ranking.
//! - `gen`, `cfg`, `sim`: synthetic data source, run parameters, orchestration.
//!
//! Randomness is always injected (a seeded `StdRng` or a `PlacementSource`);
//! nothing in this crate reads a global generator.

pub mod alloc;
pub mod area;
pub mod cfg;
mod error;
pub mod gen;
pub mod geom;
pub mod score;
pub mod sensors;
pub mod sim;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::SeaError;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::alloc::{allocate, allocate_by_value, Allocation};
    pub use crate::area::{resources_for_health, Area, ScoredArea};
    pub use crate::cfg::{FieldSize, SimCfg};
    pub use crate::gen::{AreaGenerator, UniformPlacement};
    pub use crate::geom::{
        area_from_counts, boundary_points, distance, interior_points, polygon_area_pick,
        LatticePolygon,
    };
    pub use crate::score::score;
    pub use crate::sensors::{
        coverage_counts, place_and_rank, rank_by_coverage, AreaSampling, PlacementSource,
        SensorLayout, COVERAGE_RADIUS,
    };
    pub use crate::sim::{run, Report};
    pub use crate::SeaError;
    pub use nalgebra::Vector2 as Vec2;
}

/// Round to two decimals, the precision every reported quantity uses.
#[inline]
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
