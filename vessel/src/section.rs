use std::f64::consts::PI;
use std::iter::Sum;
use std::ops::{Add, Sub};

/// Volume, first and second moment of a solid of revolution about a
/// transverse axis, all in SI units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Moments {
  pub volume: f64,
  pub first: f64,
  pub second: f64,
}

impl Add for Moments {
  type Output = Self;

  fn add(self, other: Self) -> Self {
    Self {
      volume: self.volume + other.volume,
      first: self.first + other.first,
      second: self.second + other.second,
    }
  }
}

impl Sub for Moments {
  type Output = Self;

  fn sub(self, other: Self) -> Self {
    Self {
      volume: self.volume - other.volume,
      first: self.first - other.first,
      second: self.second - other.second,
    }
  }
}

impl Sum for Moments {
  fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
    iter.fold(Self::default(), Add::add)
  }
}

/// Squared radius of a section as a quadratic in the height above the
/// section's bottom: `r²(t) = a0 + a1 t + a2 t²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
  a0: f64,
  a1: f64,
  a2: f64,
}

impl Profile {
  pub fn cylinder(radius: f64) -> Self {
    Self { a0: radius * radius, a1: 0.0, a2: 0.0 }
  }

  /// Slice of a sphere whose section bottom lies `offset` above the sphere's
  /// center. An offset of `-radius` starts the section at the lower pole.
  pub fn sphere(radius: f64, offset: f64) -> Self {
    Self { a0: (radius - offset) * (radius + offset), a1: -2.0 * offset, a2: -1.0 }
  }

  fn radius_squared(&self, t: f64) -> f64 {
    self.a0 + (self.a1 + self.a2 * t) * t
  }

  /// Integrals of `π r²`, `t π r²` and `π r⁴ / 4 + t² π r²` from 0 to `t`.
  /// Every term vanishes at `t = 0`.
  fn integrate(&self, t: f64) -> Moments {
    let Self { a0, a1, a2 } = *self;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t2 * t2;
    let t5 = t4 * t;

    let volume = PI * (a0 * t + a1 * t2 / 2.0 + a2 * t3 / 3.0);
    let first = PI * (a0 * t2 / 2.0 + a1 * t3 / 3.0 + a2 * t4 / 4.0);
    let offsets = PI * (a0 * t3 / 3.0 + a1 * t4 / 4.0 + a2 * t5 / 5.0);
    let disks = PI / 4.0 * (
      a0 * a0 * t + a0 * a1 * t2 + (a1 * a1 + 2.0 * a0 * a2) * t3 / 3.0 + a1 * a2 * t4 / 2.0 + a2 * a2 * t5 / 5.0
    );

    Moments { volume, first, second: disks + offsets }
  }
}

/// A slab of a tank between two heights with a single radius profile.
/// Sections of one tank never overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
  pub(crate) bottom: f64,
  pub(crate) top: f64,
  pub(crate) profile: Profile,
}

impl Section {
  pub fn new(bottom: f64, top: f64, profile: Profile) -> Self {
    Self { bottom, top, profile }
  }

  pub fn bottom(&self) -> f64 {
    self.bottom
  }

  pub fn top(&self) -> f64 {
    self.top
  }

  pub fn contains(&self, z: f64) -> bool {
    self.bottom <= z && z <= self.top
  }

  pub fn radius_at(&self, z: f64) -> f64 {
    if self.contains(z) { self.profile.radius_squared(z - self.bottom).max(0.0).sqrt() } else { 0.0 }
  }

  /// Moments of the part of this section lying at or below `z`, taken about
  /// the plane `z = reference`.
  pub fn moments_below(&self, z: f64, reference: f64) -> Moments {
    if z <= self.bottom {
      return Moments::default()
    }

    let top = if z < self.top { z } else { self.top };
    let local = self.profile.integrate(top - self.bottom);
    let offset = self.bottom - reference;

    Moments {
      volume: local.volume,
      first: local.first + offset * local.volume,
      second: local.second + 2.0 * offset * local.first + offset * offset * local.volume,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
  }

  #[test]
  fn cylinder() {
    let section = Section::new(-1.0, 1.0, Profile::cylinder(0.5));
    let moments = section.moments_below(1.0, 0.0);

    let volume = PI * 0.25 * 2.0;
    assert!(close(moments.volume, volume));
    assert!(close(moments.first, 0.0));
    // m (3 r² + h²) / 12 for a solid cylinder.
    assert!(close(moments.second, volume * (3.0 * 0.25 + 4.0) / 12.0));
  }

  #[test]
  fn full_sphere() {
    let section = Section::new(-2.0, 2.0, Profile::sphere(2.0, -2.0));
    let moments = section.moments_below(2.0, 0.0);

    let volume = 4.0 / 3.0 * PI * 8.0;
    assert!(close(moments.volume, volume));
    assert!(close(moments.first, 0.0));
    assert!(close(moments.second, 0.4 * volume * 4.0));
  }

  #[test]
  fn offset_sphere_uses_parallel_axis() {
    let section = Section::new(2.0, 4.0, Profile::sphere(1.0, -1.0));
    let moments = section.moments_below(10.0, 0.0);

    let volume = 4.0 / 3.0 * PI;
    assert!(close(moments.volume, volume));
    assert!(close(moments.first, 3.0 * volume));
    assert!(close(moments.second, 0.4 * volume + 9.0 * volume));
  }

  #[test]
  fn upper_hemisphere() {
    let section = Section::new(0.0, 1.0, Profile::sphere(1.0, 0.0));
    let moments = section.moments_below(1.0, 0.0);

    let volume = 2.0 / 3.0 * PI;
    assert!(close(moments.volume, volume));
    assert!(close(moments.first / moments.volume, 3.0 / 8.0));
    assert!(close(moments.second, 0.4 * volume));
  }

  #[test]
  fn thin_cap_at_pole() {
    let radius = 0.05;
    let section = Section::new(-radius, radius, Profile::sphere(radius, -radius));

    for height in [1e-3, 1e-6, 1e-9, 1e-12] {
      let level = -radius + height;
      let height = level - -radius;
      let moments = section.moments_below(level, -radius);
      let expected = PI * height * height * (3.0 * radius - height) / 3.0;

      assert!((moments.volume - expected).abs() <= 1e-12 * expected);
      let center = moments.first / moments.volume;
      assert!(center > 0.0 && center < height);
      assert!(moments.second - moments.volume * center * center > 0.0);
    }
  }

  #[test]
  fn below_section_is_empty() {
    let section = Section::new(0.0, 1.0, Profile::cylinder(1.0));
    assert_eq!(section.moments_below(-0.5, 0.0), Moments::default());
    assert_eq!(section.moments_below(0.0, 0.0), Moments::default());
  }

  #[test]
  fn radius() {
    let section = Section::new(-1.0, 0.0, Profile::sphere(1.0, -1.0));
    assert!(close(section.radius_at(-0.6), 0.8));
    assert!(close(section.radius_at(0.0), 1.0));
    assert_eq!(section.radius_at(0.5), 0.0);
  }

  #[test]
  fn sum() {
    let a = Moments { volume: 1.0, first: 2.0, second: 3.0 };
    let total: Moments = vec![a, a, a].into_iter().sum();
    assert_eq!(total, Moments { volume: 3.0, first: 6.0, second: 9.0 });
  }
}
