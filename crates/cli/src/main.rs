mod provenance;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use seaplan::cfg::{FieldSize, SimCfg};
use seaplan::geom::{boundary_points, interior_points, polygon_area_pick, LatticePolygon};
use seaplan::sensors::AreaSampling;
use seaplan::Vec2;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "seaplan")]
#[command(about = "Marine area planning: greedy allocation, Pick areas, sensor coverage")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate synthetic areas, allocate resources, and rank sensor positions
    Run(RunArgs),
    /// Area of a lattice polygon via Pick's theorem
    Pick {
        /// Polygon vertex as `X,Y` (integers); repeat for each vertex in order
        #[arg(long = "vertex", value_parser = parse_vertex, allow_hyphen_values = true)]
        vertices: Vec<(i64, i64)>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Debug)]
struct RunArgs {
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    num_areas: i64,
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    total_resources: i64,
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    num_sensors: i64,
    /// Sensor field width
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    width: f64,
    /// Sensor field height
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    height: f64,
    /// Minimum value for an area to count as healthy
    #[arg(long, default_value_t = 0.7, allow_negative_numbers = true)]
    health_threshold: f64,
    /// Lattice grid side for synthetic point counts (>= 3)
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    grid_size: i64,
    /// Seed for the run; drawn at random and logged when absent
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = Sampling::PerPair)]
    sampling: Sampling,
    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
    /// Also write the JSON report here, with a provenance sidecar next to it
    #[arg(long)]
    out: Option<PathBuf>,
}

/// How area reference positions are drawn for sensor coverage.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Sampling {
    /// Fresh position per (sensor, area) pair
    PerPair,
    /// One position per area, shared by all sensors
    PerArea,
}

impl From<Sampling> for AreaSampling {
    fn from(s: Sampling) -> Self {
        match s {
            Sampling::PerPair => AreaSampling::PerPair,
            Sampling::PerArea => AreaSampling::PerArea,
        }
    }
}

impl RunArgs {
    fn to_cfg(&self) -> SimCfg {
        SimCfg {
            num_areas: self.num_areas,
            total_resources: self.total_resources,
            num_sensors: self.num_sensors,
            field: FieldSize {
                width: self.width,
                height: self.height,
            },
            health_threshold: self.health_threshold,
            grid_size: self.grid_size,
            sampling: self.sampling.into(),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run(args) => run(args),
        Action::Pick { vertices } => pick(vertices),
        Action::Report => report(),
    }
}

fn run(args: RunArgs) -> Result<()> {
    let cfg = args.to_cfg();
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, seeded = args.seed.is_some(), ?cfg, "run");
    let report = seaplan::sim::run(&cfg, seed).context("simulation failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }

    if let Some(out) = &args.out {
        write_report(out, &report)?;
    }
    Ok(())
}

fn write_report(out: &Path, report: &seaplan::sim::Report) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(out = %out.display(), "wrote report");

    provenance::Provenance::of(report, out).save(out)?;
    Ok(())
}

/// Sample polygon used when `pick` gets no vertices.
const SAMPLE_POLYGON: [(i64, i64); 4] = [(0, 0), (6, 0), (7, 3), (0, 9)];

fn pick(vertices: Vec<(i64, i64)>) -> Result<()> {
    let vertices = if vertices.is_empty() {
        SAMPLE_POLYGON.to_vec()
    } else {
        vertices
    };
    let verts = vertices.iter().map(|&(x, y)| Vec2::new(x, y)).collect();
    let poly = LatticePolygon::new(verts).context("invalid polygon")?;
    let b = boundary_points(&poly);
    let i = interior_points(&poly);
    let area = polygon_area_pick(&poly);
    tracing::info!(vertices = vertices.len(), b, i, area, "pick");
    println!("Vertices: {vertices:?}");
    println!("Boundary points (B): {b}");
    println!("Interior points (I): {i}");
    println!("Area (I + B/2 - 1): {area}");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::code_rev(),
        "seaplan_version": seaplan::VERSION,
        "defaults": SimCfg::default(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn parse_vertex(s: &str) -> Result<(i64, i64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_vertex_accepts_pairs() {
        assert_eq!(parse_vertex("3,4").unwrap(), (3, 4));
        assert_eq!(parse_vertex(" -2 , 7").unwrap(), (-2, 7));
        assert!(parse_vertex("3").is_err());
        assert!(parse_vertex("3.5,1").is_err());
    }

    #[test]
    fn run_args_map_onto_cfg() {
        let cmd = Cmd::try_parse_from([
            "seaplan",
            "run",
            "--num-areas",
            "4",
            "--total-resources",
            "-1",
            "--sampling",
            "per-area",
            "--width",
            "20",
        ])
        .unwrap();
        let Action::Run(args) = cmd.action else {
            panic!("expected run");
        };
        let cfg = args.to_cfg();
        assert_eq!(cfg.num_areas, 4);
        assert_eq!(cfg.total_resources, -1);
        assert_eq!(cfg.sampling, AreaSampling::PerArea);
        assert_eq!(cfg.field.width, 20.0);
        assert_eq!(cfg.field.height, 10.0);
        // Negative resources parse, then fail validation.
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn pick_collects_repeated_vertices() {
        let cmd = Cmd::try_parse_from([
            "seaplan", "pick", "--vertex", "0,0", "--vertex", "-4,0", "--vertex", "0,4",
        ])
        .unwrap();
        let Action::Pick { vertices } = cmd.action else {
            panic!("expected pick");
        };
        assert_eq!(vertices, vec![(0, 0), (-4, 0), (0, 4)]);
        assert!(pick(vertices).is_ok());
        assert!(pick(vec![(0, 0), (1, 1)]).is_err());
        let far = 1i64 << 40;
        assert!(pick(vec![(0, 0), (far, 0), (0, far)]).is_err());
    }

    #[test]
    fn write_report_emits_json_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("run.json");
        let report = seaplan::sim::run(&SimCfg::default(), 3).unwrap();
        write_report(&out, &report).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["seed"], 3);
        assert_eq!(parsed["areas"].as_array().unwrap().len(), 10);
        let sidecar: serde_json::Value = serde_json::from_slice(
            &std::fs::read(dir.path().join("nested").join("run.provenance.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(sidecar["seed"], 3);
        assert!(sidecar["written_by"].as_str().unwrap().contains("main.rs"));
    }
}
