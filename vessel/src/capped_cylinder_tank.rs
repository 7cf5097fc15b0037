use log::warn;
use measurements::Length;

use crate::error::{non_negative, positive, ConfigurationError, Result};
use crate::section::{Profile, Section};
use crate::tank::Tank;

/// A cylinder closed by two spherical caps, centered on the origin.
///
/// Caps with `cap_radius == cylinder_radius` are hemispheres; larger cap radii
/// give shallower domes.
#[derive(Debug, Clone, PartialEq)]
pub struct CappedCylinderTank {
  cylinder_radius: Length,
  cylinder_length: Length,
  cap_radius: Length,
  sections: [Section; 3],
}

impl CappedCylinderTank {
  pub fn new(cylinder_radius: Length, cylinder_length: Length, cap_radius: Length) -> Result<Self> {
    let r = positive("cylinder radius", cylinder_radius)?;
    let length = non_negative("cylinder length", cylinder_length)?;
    let cap_r = positive("cap radius", cap_radius)?;

    if cap_r < r {
      return Err(ConfigurationError::CapNarrowerThanCylinder { cap_radius: cap_r, cylinder_radius: r })
    }

    // Distance from the cap sphere's center to the plane where the cap meets the cylinder.
    let rise = (cap_r * cap_r - r * r).sqrt();
    let cap_height = cap_r - rise;
    let half = length / 2.0;

    let sections = [
      Section::new(-half - cap_height, -half, Profile::sphere(cap_r, -cap_r)),
      Section::new(-half, half, Profile::cylinder(r)),
      Section::new(half, half + cap_height, Profile::sphere(cap_r, rise)),
    ];

    Ok(Self { cylinder_radius, cylinder_length, cap_radius, sections })
  }

  /// Cylinder with hemispherical caps whose overall height, caps included, is `total_height`.
  pub fn hemispherical(radius: Length, total_height: Length) -> Result<Self> {
    let r = positive("radius", radius)?;
    let total = positive("total height", total_height)?;

    let length = total - 2.0 * r;
    if length < 0.0 {
      return Err(ConfigurationError::CapsExceedHeight { caps_height: 2.0 * r, total_height: total })
    }

    Self::new(radius, Length::from_meters(length), radius)
  }

  /// Like [`hemispherical`](Self::hemispherical), but caps that do not fit
  /// shrink the cylindrical section to zero length instead of failing. The
  /// resulting tank is taller than `total_height`.
  pub fn hemispherical_adjusted(radius: Length, total_height: Length) -> Result<Self> {
    let r = positive("radius", radius)?;
    let total = positive("total height", total_height)?;

    let mut length = total - 2.0 * r;
    if length < 0.0 {
      warn!(
        "Spherical caps of radius {} m do not fit into a height of {} m, using a height of {} m instead.",
        r, total, 2.0 * r,
      );
      length = 0.0;
    }

    Self::new(radius, Length::from_meters(length), radius)
  }

  pub fn cylinder_radius(&self) -> Length {
    self.cylinder_radius
  }

  pub fn cylinder_length(&self) -> Length {
    self.cylinder_length
  }

  pub fn cap_radius(&self) -> Length {
    self.cap_radius
  }

  pub fn cap_height(&self) -> Length {
    Length::from_meters(self.sections[0].top() - self.sections[0].bottom())
  }
}

impl Tank for CappedCylinderTank {
  fn sections(&self) -> &[Section] {
    &self.sections
  }
}
