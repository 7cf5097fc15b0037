use measurements::{Length, Volume};

use crate::level::LevelQuery;
use crate::mass_properties::MassProperties;
use crate::section::{Moments, Section};

const BISECTION_STEPS: usize = 128;

/// A tank built from sections stacked along its axis, centered on the origin.
pub trait Tank {
  /// Non-overlapping sections ordered from bottom to top.
  fn sections(&self) -> &[Section];

  fn bottom(&self) -> Length {
    Length::from_meters(self.sections().first().map_or(0.0, Section::bottom))
  }

  fn top(&self) -> Length {
    Length::from_meters(self.sections().last().map_or(0.0, Section::top))
  }

  fn total_height(&self) -> Length {
    self.top() - self.bottom()
  }

  /// Inner radius at height `z`, zero outside the tank.
  fn radius_at(&self, z: Length) -> Length {
    let z = z.as_meters();

    let radius = self.sections().iter()
      .find(|section| section.contains(z))
      .map_or(0.0, |section| section.radius_at(z));

    Length::from_meters(radius)
  }

  /// Moments of the tank below `level`, taken about the tank's bottom.
  fn moments_below(&self, level: Length) -> Moments {
    let z = level.as_meters();
    let reference = self.bottom().as_meters();

    self.sections().iter().map(|section| section.moments_below(z, reference)).sum()
  }

  fn volume(&self) -> Volume {
    Volume::from_cubic_meters(self.moments_below(self.top()).volume)
  }

  /// Mass properties of the liquid below `filling_height`.
  fn level(&self, filling_height: Length) -> MassProperties {
    let top = self.top();
    let height = LevelQuery::new(filling_height).clamp(self.bottom(), top);

    let full = self.moments_below(top).volume;
    let moments = self.moments_below(height);

    MassProperties::new(height, moments, full, self.bottom())
  }

  /// The level at which the tank holds `volume`.
  fn level_for_volume(&self, volume: Volume) -> Length {
    let target = volume.as_cubic_meters();

    if target.is_nan() || target <= 0.0 {
      return self.bottom()
    }

    if target >= self.moments_below(self.top()).volume {
      return self.top()
    }

    let mut low = self.bottom().as_meters();
    let mut high = self.top().as_meters();

    for _ in 0..BISECTION_STEPS {
      let mid = low + (high - low) / 2.0;

      if mid <= low || mid >= high {
        break
      }

      if self.moments_below(Length::from_meters(mid)).volume < target {
        low = mid;
      } else {
        high = mid;
      }
    }

    Length::from_meters(low + (high - low) / 2.0)
  }
}
