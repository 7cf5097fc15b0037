use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::thread;

use anyhow::Context;
use clap::{Parser, Subcommand};
use lazy_static::lazy_static;
use log::info;
use measurements::Length;
use vessel::{sweep, Fluid, Tank, TankShape};

mod table;
use self::table::{write_table, Format};

lazy_static! {
  static ref REFERENCE_RADIUS: Length = Length::from_meters(0.0744);
  static ref REFERENCE_HEIGHT: Length = Length::from_meters(0.8068);
}

/// Tabulates volume, center of mass and inertia of a tank's liquid over its fill level.
#[derive(Parser, Debug)]
#[command(name = "tank-table", version, about)]
struct Cli {
  #[command(subcommand)]
  shape: ShapeCommand,

  /// Number of equally spaced levels from bottom to top.
  #[arg(long, global = true, default_value_t = 25)]
  samples: usize,

  /// Worker threads, defaults to the available parallelism.
  #[arg(long, global = true)]
  threads: Option<usize>,

  #[arg(long, global = true, value_enum, default_value_t = Format::Csv)]
  format: Format,

  /// Write the table to a file instead of stdout.
  #[arg(long, global = true)]
  output: Option<PathBuf>,

  /// Fluid density in kg/m³, logs the mass of a full tank.
  #[arg(long, global = true)]
  fluid_density: Option<f64>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum ShapeCommand {
  /// Spherical tank.
  Sphere {
    #[arg(long)]
    radius: f64,
  },
  /// Cylinder with hemispherical caps, `height` including the caps.
  Cylinder {
    #[arg(long)]
    radius: f64,
    #[arg(long)]
    height: f64,
    /// Shorten the cylinder instead of failing when the caps do not fit.
    #[arg(long)]
    adjust_caps: bool,
  },
  /// Cylinder with spherical caps of arbitrary radius.
  Capped {
    #[arg(long)]
    radius: f64,
    #[arg(long)]
    length: f64,
    #[arg(long)]
    cap_radius: f64,
  },
  /// The 0.0744 m × 0.8068 m reference tank.
  Reference,
}

impl ShapeCommand {
  fn build(&self) -> vessel::Result<TankShape> {
    match *self {
      Self::Sphere { radius } => TankShape::sphere(Length::from_meters(radius)),
      Self::Cylinder { radius, height, adjust_caps: false } => {
        TankShape::hemispherical_cylinder(Length::from_meters(radius), Length::from_meters(height))
      },
      Self::Cylinder { radius, height, adjust_caps: true } => {
        TankShape::hemispherical_cylinder_adjusted(Length::from_meters(radius), Length::from_meters(height))
      },
      Self::Capped { radius, length, cap_radius } => TankShape::capped_cylinder(
        Length::from_meters(radius), Length::from_meters(length), Length::from_meters(cap_radius),
      ),
      Self::Reference => TankShape::hemispherical_cylinder(*REFERENCE_RADIUS, *REFERENCE_HEIGHT),
    }
  }
}

fn default_threads() -> usize {
  thread::available_parallelism().map_or(1, |n| n.get())
}

fn main() -> anyhow::Result<()> {
  env_logger::init();

  let cli = Cli::parse();

  let shape = cli.shape.build().context("invalid tank")?;
  info!(
    "Tank is {} m high and holds {} m³.",
    shape.total_height().as_meters(), shape.volume().as_cubic_meters(),
  );

  if let Some(density) = cli.fluid_density {
    let fluid = Fluid::new("fluid", density).context("invalid fluid")?;
    let full = shape.level(shape.top()).with_fluid(&fluid);
    info!("Full tank holds {} kg with an inertia of {} kg·m².", full.mass().as_kilograms(), full.inertia());
  }

  let threads = cli.threads.unwrap_or_else(default_threads);
  let rows = sweep::sweep(&shape, cli.samples, threads);

  let writer: Box<dyn Write> = match &cli.output {
    Some(path) => {
      let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
      Box::new(BufWriter::new(file))
    },
    None => Box::new(io::stdout().lock()),
  };

  write_table(&rows, cli.format, writer)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults() {
    let cli = Cli::try_parse_from(["tank-table", "sphere", "--radius", "0.05"]).unwrap();

    assert_eq!(cli.shape, ShapeCommand::Sphere { radius: 0.05 });
    assert_eq!(cli.samples, 25);
    assert_eq!(cli.format, Format::Csv);
    assert_eq!(cli.threads, None);
    assert_eq!(cli.output, None);
  }

  #[test]
  fn global_options_after_subcommand() {
    let cli = Cli::try_parse_from([
      "tank-table", "cylinder", "--radius", "0.0744", "--height", "0.8068", "--samples", "10", "--format", "json",
    ]).unwrap();

    assert_eq!(cli.samples, 10);
    assert_eq!(cli.format, Format::Json);
    assert!(matches!(cli.shape, ShapeCommand::Cylinder { adjust_caps: false, .. }));
  }

  #[test]
  fn reference_tank() {
    let shape = ShapeCommand::Reference.build().unwrap();

    assert!((shape.total_height().as_meters() - 0.8068).abs() < 1e-12);
  }

  #[test]
  fn caps_that_do_not_fit() {
    let strict = ShapeCommand::Cylinder { radius: 0.5, height: 0.8, adjust_caps: false };
    assert!(strict.build().is_err());

    let adjusted = ShapeCommand::Cylinder { radius: 0.5, height: 0.8, adjust_caps: true };
    assert!((adjusted.build().unwrap().total_height().as_meters() - 1.0).abs() < 1e-12);
  }

  #[test]
  fn missing_dimension() {
    assert!(Cli::try_parse_from(["tank-table", "capped", "--radius", "0.1", "--length", "1"]).is_err());
  }
}
