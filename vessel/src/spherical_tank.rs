use measurements::Length;

use crate::error::{positive, Result};
use crate::section::{Profile, Section};
use crate::tank::Tank;

#[derive(Debug, Clone, PartialEq)]
pub struct SphericalTank {
  radius: Length,
  sections: [Section; 1],
}

impl SphericalTank {
  pub fn new(radius: Length) -> Result<Self> {
    let r = positive("radius", radius)?;

    Ok(Self {
      radius,
      sections: [Section::new(-r, r, Profile::sphere(r, -r))],
    })
  }

  pub fn radius(&self) -> Length {
    self.radius
  }
}

impl Tank for SphericalTank {
  fn sections(&self) -> &[Section] {
    &self.sections
  }
}
