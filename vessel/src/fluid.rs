use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Result};

/// A named fluid with a density in kg/m³.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fluid {
  name: String,
  density: f64,
}

impl Fluid {
  pub fn new(name: impl Into<String>, density: f64) -> Result<Self> {
    if !density.is_finite() || density < 0.0 {
      return Err(ConfigurationError::InvalidDensity(density))
    }

    Ok(Self { name: name.into(), density })
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn density(&self) -> f64 {
    self.density
  }
}

impl fmt::Display for Fluid {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Fluid: {}", self.name)
  }
}
