//! Volume, center of mass and moment of inertia of the liquid in a tank
//! filled up to a given level.
//!
//! All tanks are solids of revolution centered on the origin with their axis
//! along z. Levels are heights of the free surface in that frame.

mod capped_cylinder_tank;
pub use capped_cylinder_tank::CappedCylinderTank;

mod error;
pub use error::{ConfigurationError, Result};

mod fluid;
pub use fluid::Fluid;

mod level;
pub use level::LevelQuery;

mod mass_properties;
pub use mass_properties::{FluidMass, MassProperties};

mod section;
pub use section::{Moments, Profile, Section};

mod shape;
pub use shape::TankShape;

mod spherical_tank;
pub use spherical_tank::SphericalTank;

pub mod sweep;
pub use sweep::TableRow;

mod tank;
pub use tank::Tank;
