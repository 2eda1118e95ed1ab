//! Synthetic marine areas and uniform field positions.
//!
//! Model
//! - Lattice counts on a `grid_size` grid: `I ∈ [1, grid_size - 2]`,
//!   `B ∈ [3, 2 (grid_size - 1)]`, both uniform integers.
//! - Indices uniform on [0, 1], rounded to two decimals.
//! - A run uses one `StdRng` seeded from a `u64`; generators borrow it, so the
//!   seed alone replays the whole run.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::area::Area;
use crate::cfg::FieldSize;
use crate::round2;
use crate::sensors::PlacementSource;
use crate::SeaError;

/// The single generator behind a seeded run.
#[inline]
pub fn run_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Largest grid side for which `2 (grid_size - 1)` still fits in `u32`.
pub const MAX_GRID_SIZE: i64 = (u32::MAX / 2) as i64 + 1;

/// Draws synthetic `Area` records on a square lattice grid.
#[derive(Clone, Copy, Debug)]
pub struct AreaGenerator {
    grid_size: u32,
}

impl AreaGenerator {
    pub fn new(grid_size: i64) -> Result<Self, SeaError> {
        if grid_size < 3 {
            return Err(SeaError::config(format!(
                "grid_size must be >= 3, got {grid_size}"
            )));
        }
        if grid_size > MAX_GRID_SIZE {
            return Err(SeaError::config(format!(
                "grid_size must be <= {MAX_GRID_SIZE}, got {grid_size}"
            )));
        }
        let grid_size = u32::try_from(grid_size)
            .map_err(|_| SeaError::config(format!("grid_size {grid_size} is too large")))?;
        Ok(Self { grid_size })
    }

    #[inline]
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn draw<R: Rng>(&self, rng: &mut R) -> Area {
        let g = self.grid_size;
        let internal_points = rng.gen_range(1..=g - 2);
        let boundary_points = rng.gen_range(3..=2 * (g - 1));
        Area {
            internal_points,
            boundary_points,
            biodiversity: round2(rng.gen_range(0.0..=1.0)),
            vulnerabilities: round2(rng.gen_range(0.0..=1.0)),
            connectivity: round2(rng.gen_range(0.0..=1.0)),
        }
    }

    pub fn draw_many<R: Rng>(&self, rng: &mut R, n: usize) -> Vec<Area> {
        (0..n).map(|_| self.draw(rng)).collect()
    }
}

/// Uniform positions over the field, backed by any `Rng`.
#[derive(Debug)]
pub struct UniformPlacement<R> {
    rng: R,
}

impl<R: Rng> UniformPlacement<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PlacementSource for UniformPlacement<R> {
    fn sample(&mut self, field: FieldSize) -> Vector2<f64> {
        Vector2::new(
            self.rng.gen_range(0.0..=field.width),
            self.rng.gen_range(0.0..=field.height),
        )
    }
}
