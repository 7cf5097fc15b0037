use measurements::{Length, Mass, Volume};

use crate::fluid::Fluid;
use crate::section::Moments;

/// Volume, center of mass and transverse moment of inertia of the liquid
/// below a level. The inertia is volume-weighted (m⁵) and taken about the
/// tank origin, not about the liquid's own centroid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassProperties {
  pub(crate) level: Length,
  pub(crate) volume: Volume,
  pub(crate) center_of_mass: Length,
  pub(crate) inertia: f64,
  pub(crate) central_inertia: f64,
  pub(crate) fill_fraction: f64,
}

impl MassProperties {
  /// `moments` are taken about `bottom`. An empty region has no volume and no
  /// inertia; its center of mass is the limit point `bottom`. The center of
  /// mass is kept between `bottom` and `level`.
  pub(crate) fn new(level: Length, moments: Moments, full_volume: f64, bottom: Length) -> Self {
    if moments.volume <= 0.0 {
      return Self {
        level,
        volume: Volume::from_cubic_meters(0.0),
        center_of_mass: bottom,
        inertia: 0.0,
        central_inertia: 0.0,
        fill_fraction: 0.0,
      }
    }

    let volume = moments.volume;
    let depth = (level - bottom).as_meters();
    let offset = (moments.first / volume).max(0.0).min(depth);
    let central_inertia = (moments.second - volume * offset * offset).max(0.0);
    let center = (bottom.as_meters() + offset).min(level.as_meters());

    Self {
      level,
      volume: Volume::from_cubic_meters(volume),
      center_of_mass: Length::from_meters(center),
      inertia: central_inertia + volume * center * center,
      central_inertia,
      fill_fraction: (volume / full_volume).min(1.0),
    }
  }

  /// The clamped level these properties were evaluated at.
  pub fn level(&self) -> Length {
    self.level
  }

  pub fn volume(&self) -> Volume {
    self.volume
  }

  pub fn center_of_mass(&self) -> Length {
    self.center_of_mass
  }

  pub fn inertia(&self) -> f64 {
    self.inertia
  }

  /// Inertia about the liquid's own centroid.
  pub fn central_inertia(&self) -> f64 {
    self.central_inertia
  }

  pub fn fill_fraction(&self) -> f64 {
    self.fill_fraction
  }

  pub fn with_fluid(&self, fluid: &Fluid) -> FluidMass {
    let density = fluid.density();

    FluidMass {
      mass: Mass::from_kilograms(self.volume.as_cubic_meters() * density),
      center_of_mass: self.center_of_mass,
      inertia: self.inertia * density,
    }
  }
}

impl From<MassProperties> for Volume {
  fn from(properties: MassProperties) -> Self {
    properties.volume
  }
}

impl From<MassProperties> for f64 {
  fn from(properties: MassProperties) -> Self {
    properties.fill_fraction
  }
}

/// Mass properties of a fluid filling a tank up to some level. Inertia is in kg·m².
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidMass {
  mass: Mass,
  center_of_mass: Length,
  inertia: f64,
}

impl FluidMass {
  pub fn mass(&self) -> Mass {
    self.mass
  }

  pub fn center_of_mass(&self) -> Length {
    self.center_of_mass
  }

  pub fn inertia(&self) -> f64 {
    self.inertia
  }
}
