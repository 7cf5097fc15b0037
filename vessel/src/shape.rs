use measurements::Length;

use crate::capped_cylinder_tank::CappedCylinderTank;
use crate::error::Result;
use crate::section::Section;
use crate::spherical_tank::SphericalTank;
use crate::tank::Tank;

/// Any supported tank geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum TankShape {
  Sphere(SphericalTank),
  CappedCylinder(CappedCylinderTank),
}

impl TankShape {
  pub fn sphere(radius: Length) -> Result<Self> {
    SphericalTank::new(radius).map(Self::Sphere)
  }

  pub fn capped_cylinder(cylinder_radius: Length, cylinder_length: Length, cap_radius: Length) -> Result<Self> {
    CappedCylinderTank::new(cylinder_radius, cylinder_length, cap_radius).map(Self::CappedCylinder)
  }

  pub fn hemispherical_cylinder(radius: Length, total_height: Length) -> Result<Self> {
    CappedCylinderTank::hemispherical(radius, total_height).map(Self::CappedCylinder)
  }

  pub fn hemispherical_cylinder_adjusted(radius: Length, total_height: Length) -> Result<Self> {
    CappedCylinderTank::hemispherical_adjusted(radius, total_height).map(Self::CappedCylinder)
  }
}

impl Tank for TankShape {
  fn sections(&self) -> &[Section] {
    match self {
      Self::Sphere(tank) => tank.sections(),
      Self::CappedCylinder(tank) => tank.sections(),
    }
  }
}

impl From<SphericalTank> for TankShape {
  fn from(tank: SphericalTank) -> Self {
    Self::Sphere(tank)
  }
}

impl From<CappedCylinderTank> for TankShape {
  fn from(tank: CappedCylinderTank) -> Self {
    Self::CappedCylinder(tank)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::ConfigurationError;

  #[test]
  fn dispatches_to_variant() {
    let radius = Length::from_meters(0.05);
    let shape = TankShape::sphere(radius).unwrap();
    let tank = SphericalTank::new(radius).unwrap();

    let h = Length::from_meters(0.01);
    assert_eq!(shape.level(h), tank.level(h));
    assert_eq!(shape.total_height(), tank.total_height());
  }

  #[test]
  fn construction_errors_are_reported() {
    assert_eq!(
      TankShape::hemispherical_cylinder(Length::from_meters(0.1), Length::from_meters(0.0)),
      Err(ConfigurationError::NonPositive { name: "total height", value: 0.0 }),
    );
  }

  #[test]
  fn adjusted_cylinder_matches_sphere() {
    let radius = Length::from_meters(0.1);
    let shape = TankShape::hemispherical_cylinder_adjusted(radius, Length::from_meters(0.05)).unwrap();
    let sphere = TankShape::sphere(radius).unwrap();

    let v = shape.volume().as_cubic_meters();
    let expected = sphere.volume().as_cubic_meters();
    assert!((v - expected).abs() <= 1e-12 * expected);
  }
}
