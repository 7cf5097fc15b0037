use log::debug;
use measurements::Length;

/// Height of the free liquid surface in the tank's centered frame.
///
/// Heights outside the tank are not an error: anything below the bottom is
/// an empty tank, anything above the top a full one. `NaN` is treated as empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelQuery {
  height: Length,
}

impl LevelQuery {
  pub fn new(height: Length) -> Self {
    Self { height }
  }

  pub fn height(&self) -> Length {
    self.height
  }

  pub fn clamp(self, bottom: Length, top: Length) -> Length {
    let height = self.height.as_meters();

    if height.is_nan() {
      debug!("Level is NaN, treating tank as empty.");
      return bottom
    }

    if height < bottom.as_meters() {
      debug!("Clamping level {} m to tank bottom at {} m.", height, bottom.as_meters());
      bottom
    } else if height > top.as_meters() {
      debug!("Clamping level {} m to tank top at {} m.", height, top.as_meters());
      top
    } else {
      self.height
    }
  }
}

impl From<Length> for LevelQuery {
  fn from(height: Length) -> Self {
    Self::new(height)
  }
}
