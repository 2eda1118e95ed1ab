//! One simulation run: generate, allocate, estimate, place sensors, rank.

use std::fmt::Write as _;

use serde::Serialize;

use crate::alloc::{allocate, Allocation};
use crate::area::ScoredArea;
use crate::cfg::SimCfg;
use crate::gen::{run_rng, AreaGenerator, UniformPlacement};
use crate::sensors::place_and_rank;
use crate::SeaError;

/// Per-area line of a report.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AreaRow {
    pub index: usize,
    #[serde(flatten)]
    pub area: ScoredArea,
    pub funded: bool,
    pub resources_needed: f64,
}

/// Per-sensor line of a report.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SensorRow {
    pub index: usize,
    pub position: [f64; 2],
    pub coverage: usize,
}

/// Everything a run produces, in presentation order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub seed: u64,
    pub cfg: SimCfg,
    pub allocation: Allocation,
    pub areas: Vec<AreaRow>,
    pub sensors: Vec<SensorRow>,
    /// Sensor indices, best coverage first.
    pub ranking: Vec<usize>,
}

/// Run the full pipeline with a single generator seeded by `seed`.
pub fn run(cfg: &SimCfg, seed: u64) -> Result<Report, SeaError> {
    cfg.validate()?;
    let num_areas = usize::try_from(cfg.num_areas)
        .map_err(|_| SeaError::config("num_areas out of range"))?;
    let num_sensors = usize::try_from(cfg.num_sensors)
        .map_err(|_| SeaError::config("num_sensors out of range"))?;

    let mut rng = run_rng(seed);
    let generator = AreaGenerator::new(cfg.grid_size)?;
    let raw = generator.draw_many(&mut rng, num_areas);
    tracing::info!(seed, areas = raw.len(), grid_size = cfg.grid_size, "generated areas");

    let (scored, allocation) = allocate(&raw, cfg.total_resources);
    tracing::info!(
        funded = allocation.funded_count(),
        total_value = allocation.total_value,
        "allocation"
    );

    let areas: Vec<AreaRow> = scored
        .iter()
        .enumerate()
        .map(|(index, s)| AreaRow {
            index,
            area: *s,
            funded: allocation.flags[index] == 1,
            resources_needed: s.resources_for_health(cfg.health_threshold),
        })
        .collect();

    let mut placement = UniformPlacement::new(&mut rng);
    let layout = place_and_rank(num_sensors, cfg.field, &scored, &mut placement, cfg.sampling);
    let sensors = layout
        .sensors
        .iter()
        .zip(&layout.coverage)
        .enumerate()
        .map(|(index, (p, &coverage))| SensorRow {
            index,
            position: [p.x, p.y],
            coverage,
        })
        .collect();
    tracing::info!(sensors = num_sensors, best = ?layout.ranking.first(), "sensor ranking");

    Ok(Report {
        seed,
        cfg: cfg.clone(),
        allocation,
        areas,
        sensors,
        ranking: layout.ranking,
    })
}

impl Report {
    /// Human-readable listing; areas and sensors are numbered from 1.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "Resource allocation (by rank): {:?}", self.allocation.ranked_flags())?;
        writeln!(out, "Resource allocation (by area): {:?}", self.allocation.flags)?;
        writeln!(out, "Total value of funded areas: {}", self.allocation.total_value)?;
        writeln!(out)?;
        writeln!(out, "Marine area details:")?;
        for row in &self.areas {
            let a = &row.area;
            writeln!(
                out,
                "Area {}: biodiversity = {}, vulnerabilities = {}, connectivity = {}, value = {}, \
                 sea area (units) = {}, resources needed for health (t) = {}{}",
                row.index + 1,
                a.area.biodiversity,
                a.area.vulnerabilities,
                a.area.connectivity,
                a.value,
                a.area_sea,
                row.resources_needed,
                if row.funded { ", funded" } else { "" },
            )?;
        }
        writeln!(out)?;
        writeln!(out, "Sensor placement:")?;
        for s in &self.sensors {
            writeln!(
                out,
                "Sensor {}: position = ({}, {}), coverage = {}",
                s.index + 1,
                s.position[0],
                s.position[1],
                s.coverage
            )?;
        }
        writeln!(out)?;
        writeln!(out, "Sensors by coverage:")?;
        for &i in &self.ranking {
            let s = &self.sensors[i];
            writeln!(
                out,
                "Sensor {}: position = ({}, {})",
                i + 1,
                s.position[0],
                s.position[1]
            )?;
        }
        Ok(())
    }
}
