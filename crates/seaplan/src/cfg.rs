//! Run parameters for a simulation and their validation.
//!
//! Counts are signed so that a negative value coming from the command line is
//! reported as a configuration error instead of failing to parse.

use serde::Serialize;

use crate::gen::AreaGenerator;
use crate::sensors::AreaSampling;
use crate::SeaError;

/// Extent of the sensor field: positions live in `[0, width] × [0, height]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FieldSize {
    pub width: f64,
    pub height: f64,
}

impl FieldSize {
    pub fn new(width: f64, height: f64) -> Result<Self, SeaError> {
        let f = Self { width, height };
        f.validate()?;
        Ok(f)
    }

    fn validate(&self) -> Result<(), SeaError> {
        if !(self.width.is_finite() && self.height.is_finite()) {
            return Err(SeaError::config("field size must be finite"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(SeaError::config(format!(
                "field size must be positive, got {} x {}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Parameters of one simulation run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimCfg {
    pub num_areas: i64,
    pub total_resources: i64,
    pub num_sensors: i64,
    pub field: FieldSize,
    pub health_threshold: f64,
    /// Lattice grid side used to draw synthetic point counts, in `[3, MAX_GRID_SIZE]`.
    pub grid_size: i64,
    pub sampling: AreaSampling,
}

impl Default for SimCfg {
    fn default() -> Self {
        Self {
            num_areas: 10,
            total_resources: 5,
            num_sensors: 5,
            field: FieldSize {
                width: 10.0,
                height: 10.0,
            },
            health_threshold: 0.7,
            grid_size: 10,
            sampling: AreaSampling::PerPair,
        }
    }
}

impl SimCfg {
    pub fn validate(&self) -> Result<(), SeaError> {
        if self.num_areas < 0 {
            return Err(SeaError::config("num_areas must be >= 0"));
        }
        if self.num_sensors < 0 {
            return Err(SeaError::config("num_sensors must be >= 0"));
        }
        if self.total_resources < 0 {
            return Err(SeaError::config("total_resources must be >= 0"));
        }
        AreaGenerator::new(self.grid_size)?;
        if !self.health_threshold.is_finite() {
            return Err(SeaError::config("health_threshold must be finite"));
        }
        if !(0.0..=1.0).contains(&self.health_threshold) {
            tracing::warn!(
                health_threshold = self.health_threshold,
                "health threshold outside [0, 1]; every area will compare the same way"
            );
        }
        self.field.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SimCfg::default().validate().is_ok());
    }

    #[test]
    fn rejects_negative_counts() {
        for cfg in [
            SimCfg {
                num_areas: -1,
                ..SimCfg::default()
            },
            SimCfg {
                num_sensors: -2,
                ..SimCfg::default()
            },
            SimCfg {
                total_resources: -3,
                ..SimCfg::default()
            },
        ] {
            assert!(matches!(
                cfg.validate(),
                Err(SeaError::InvalidConfiguration { .. })
            ));
        }
    }

    #[test]
    fn rejects_small_grid_and_bad_field() {
        let small = SimCfg {
            grid_size: 2,
            ..SimCfg::default()
        };
        assert!(small.validate().is_err());
        let huge = SimCfg {
            grid_size: 3_000_000_000,
            num_areas: 1,
            ..SimCfg::default()
        };
        assert!(matches!(
            huge.validate(),
            Err(SeaError::InvalidConfiguration { .. })
        ));
        assert!(FieldSize::new(0.0, 10.0).is_err());
        assert!(FieldSize::new(10.0, -1.0).is_err());
        assert!(FieldSize::new(f64::INFINITY, 1.0).is_err());
        let flat = SimCfg {
            field: FieldSize {
                width: 10.0,
                height: 0.0,
            },
            ..SimCfg::default()
        };
        assert!(flat.validate().is_err());
        let nan = SimCfg {
            health_threshold: f64::NAN,
            ..SimCfg::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn zero_counts_are_allowed() {
        let cfg = SimCfg {
            num_areas: 0,
            num_sensors: 0,
            total_resources: 0,
            grid_size: 3,
            ..SimCfg::default()
        };
        assert!(cfg.validate().is_ok());
    }
}
