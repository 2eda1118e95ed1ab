//! Lattice polygons and Pick's theorem `A = I + B/2 - 1`.

use nalgebra::Vector2;

use crate::SeaError;

/// Largest accepted coordinate magnitude, `2^31`.
///
/// Edge deltas then fit in 33 bits, and the shoelace sum is accumulated in
/// `i128` and must come back within `i64`.
pub const MAX_COORD: i64 = 1 << 31;

/// Closed polygon with integer vertices (last vertex connects to the first).
///
/// Orientation is free: the shoelace sum changes sign only, and every area
/// below takes its absolute value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LatticePolygon {
    verts: Vec<Vector2<i64>>,
    /// Signed shoelace sum, i.e. twice the signed area.
    twice_area: i64,
}

impl LatticePolygon {
    /// Accepts at least three vertices with coordinates in `[-MAX_COORD, MAX_COORD]`
    /// spanning a non-zero area.
    pub fn new(verts: Vec<Vector2<i64>>) -> Result<Self, SeaError> {
        if verts.len() < 3 {
            return Err(SeaError::polygon(format!(
                "need at least 3 vertices, got {}",
                verts.len()
            )));
        }
        if let Some((k, p)) = verts
            .iter()
            .enumerate()
            .find(|(_, p)| {
                p.x.unsigned_abs() > MAX_COORD as u64 || p.y.unsigned_abs() > MAX_COORD as u64
            })
        {
            return Err(SeaError::polygon(format!(
                "vertex {k} = ({}, {}) exceeds |coord| <= {MAX_COORD}",
                p.x, p.y
            )));
        }
        let twice = shoelace_twice(&verts);
        if twice == 0 {
            return Err(SeaError::polygon("vertices are collinear (zero area)"));
        }
        let twice_area = i64::try_from(twice)
            .map_err(|_| SeaError::polygon(format!("twice the area ({twice}) overflows i64")))?;
        Ok(Self { verts, twice_area })
    }

    /// Build from floating-point positions; every coordinate must be an exact integer.
    pub fn from_points(points: &[Vector2<f64>]) -> Result<Self, SeaError> {
        let mut verts = Vec::with_capacity(points.len());
        for (k, p) in points.iter().enumerate() {
            let x = lattice_coord(p.x).ok_or_else(|| {
                SeaError::polygon(format!("vertex {k} has non-lattice x = {}", p.x))
            })?;
            let y = lattice_coord(p.y).ok_or_else(|| {
                SeaError::polygon(format!("vertex {k} has non-lattice y = {}", p.y))
            })?;
            verts.push(Vector2::new(x, y));
        }
        Self::new(verts)
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<i64>] {
        &self.verts
    }

    /// Edge offsets `p_{i+1} - p_i`, including the wrap-around edge.
    fn edge_deltas(&self) -> impl Iterator<Item = Vector2<i64>> + '_ {
        let n = self.verts.len();
        (0..n).map(move |i| self.verts[(i + 1) % n] - self.verts[i])
    }
}

/// `Σ (x_i y_{i+1} - y_i x_{i+1})` over the closed loop, in `i128`.
fn shoelace_twice(verts: &[Vector2<i64>]) -> i128 {
    let n = verts.len();
    (0..n)
        .map(|i| {
            let (p, q) = (verts[i], verts[(i + 1) % n]);
            i128::from(p.x) * i128::from(q.y) - i128::from(p.y) * i128::from(q.x)
        })
        .sum()
}

fn lattice_coord(v: f64) -> Option<i64> {
    if v.is_finite() && v.fract() == 0.0 && v.abs() <= MAX_COORD as f64 {
        Some(v as i64)
    } else {
        None
    }
}

fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Number of lattice points on the boundary, vertices included.
///
/// An edge with offset `(dx, dy)` passes through `gcd(|dx|, |dy|)` lattice
/// steps; summing the steps over the closed edge loop counts every boundary
/// point exactly once.
pub fn boundary_points(poly: &LatticePolygon) -> i64 {
    poly.edge_deltas()
        .map(|d| gcd(d.x.unsigned_abs(), d.y.unsigned_abs()) as i64)
        .sum()
}

/// Number of lattice points strictly inside, from Pick's theorem rearranged:
/// `I = A - B/2 + 1`, with `A = |2A| / 2` and `B / 2` both in integer division.
///
/// The two floors cancel: for a simple lattice polygon `2A` and `B` have the
/// same parity.
pub fn interior_points(poly: &LatticePolygon) -> i64 {
    let area = (poly.twice_area.unsigned_abs() / 2) as i64;
    let b = boundary_points(poly);
    area - b / 2 + 1
}

/// Polygon area `I + B/2 - 1`.
///
/// Pre: `poly` is simple (no self-intersections). Not checked.
pub fn polygon_area_pick(poly: &LatticePolygon) -> f64 {
    let i = interior_points(poly);
    let b = boundary_points(poly);
    area_from_counts(i, b)
}

/// Pick's theorem on counts that are already known.
#[inline]
pub fn area_from_counts(internal_points: i64, boundary_points: i64) -> f64 {
    internal_points as f64 + boundary_points as f64 / 2.0 - 1.0
}
