use measurements::Length;
use thiserror::Error;

/// Rejected tank or fluid configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
  #[error("{name} must be a finite number")]
  NonFinite { name: &'static str },
  #[error("{name} must be positive, got {value} m")]
  NonPositive { name: &'static str, value: f64 },
  #[error("{name} must not be negative, got {value} m")]
  Negative { name: &'static str, value: f64 },
  #[error("cap radius {cap_radius} m is smaller than the cylinder radius {cylinder_radius} m")]
  CapNarrowerThanCylinder { cap_radius: f64, cylinder_radius: f64 },
  #[error("caps with a combined height of {caps_height} m do not fit into a total height of {total_height} m")]
  CapsExceedHeight { caps_height: f64, total_height: f64 },
  #[error("fluid density must be finite and non-negative, got {0} kg/m³")]
  InvalidDensity(f64),
}

pub type Result<T, E = ConfigurationError> = std::result::Result<T, E>;

pub(crate) fn positive(name: &'static str, value: Length) -> Result<f64> {
  let value = finite(name, value)?;

  if value <= 0.0 {
    return Err(ConfigurationError::NonPositive { name, value })
  }

  Ok(value)
}

pub(crate) fn non_negative(name: &'static str, value: Length) -> Result<f64> {
  let value = finite(name, value)?;

  if value < 0.0 {
    return Err(ConfigurationError::Negative { name, value })
  }

  Ok(value)
}

fn finite(name: &'static str, value: Length) -> Result<f64> {
  let value = value.as_meters();

  if !value.is_finite() {
    return Err(ConfigurationError::NonFinite { name })
  }

  Ok(value)
}
