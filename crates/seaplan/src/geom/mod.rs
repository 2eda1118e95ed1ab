//! Planar geometry for area records and sensor fields.
//!
//! Purpose
//! - Euclidean distance between field positions (`Vec2`).
//! - Lattice-polygon area via Pick's theorem, with the boundary and interior
//!   lattice-point counts it is built from.
//!
//! Preconditions
//! - Pick's theorem holds for simple lattice polygons only. `LatticePolygon`
//!   enforces integer vertices within `MAX_COORD`, at least three of them,
//!   and non-zero area;
//!   self-intersection is not detected and yields a meaningless area.
//!
//! Code cross-refs: `LatticePolygon`, `polygon_area_pick`, `area_from_counts`

mod lattice;

pub use lattice::{
    area_from_counts, boundary_points, interior_points, polygon_area_pick, LatticePolygon,
    MAX_COORD,
};

use nalgebra::Vector2;

/// Euclidean distance `|p2 - p1|`.
#[inline]
pub fn distance(p1: Vector2<f64>, p2: Vector2<f64>) -> f64 {
    (p2 - p1).norm()
}
