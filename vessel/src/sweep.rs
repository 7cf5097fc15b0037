use std::panic;
use std::thread;

use log::info;
use measurements::Length;
use serde::Serialize;

use crate::mass_properties::MassProperties;
use crate::tank::Tank;

/// One row of a level table, in SI units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableRow {
  pub level_height: f64,
  pub volume: f64,
  pub center_of_mass: f64,
  pub inertia: f64,
}

impl From<MassProperties> for TableRow {
  fn from(properties: MassProperties) -> Self {
    Self {
      level_height: properties.level().as_meters(),
      volume: properties.volume().as_cubic_meters(),
      center_of_mass: properties.center_of_mass().as_meters(),
      inertia: properties.inertia(),
    }
  }
}

/// `samples` equally spaced levels from the bottom to the top of `tank`, both included.
pub fn levels<T: Tank + ?Sized>(tank: &T, samples: usize) -> Vec<Length> {
  let bottom = tank.bottom();

  match samples {
    0 => Vec::new(),
    1 => vec![bottom],
    _ => {
      let top = tank.top();
      let step = (top.as_meters() - bottom.as_meters()) / (samples - 1) as f64;

      (0..samples)
        .map(|i| if i == samples - 1 { top } else { Length::from_meters(bottom.as_meters() + step * i as f64) })
        .collect()
    },
  }
}

/// Evaluates `tank` at `samples` levels using up to `threads` threads. Rows
/// are returned in level order regardless of the thread count.
pub fn sweep<T: Tank + Sync + ?Sized>(tank: &T, samples: usize, threads: usize) -> Vec<TableRow> {
  let levels = levels(tank, samples);

  if levels.is_empty() {
    return Vec::new()
  }

  let threads = threads.clamp(1, levels.len());
  let chunk_size = (levels.len() + threads - 1) / threads;

  info!("Evaluating {} levels on {} threads.", levels.len(), threads);

  thread::scope(|scope| {
    let handles: Vec<_> = levels.chunks(chunk_size)
      .map(|chunk| scope.spawn(move || {
        chunk.iter().map(|&h| TableRow::from(tank.level(h))).collect::<Vec<_>>()
      }))
      .collect();

    handles.into_iter()
      .flat_map(|handle| handle.join().unwrap_or_else(|err| panic::resume_unwind(err)))
      .collect()
  })
}
