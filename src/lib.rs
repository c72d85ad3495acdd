pub mod atmosphere;
pub mod constants;
pub mod errors;
pub mod gravity;
pub mod utils;

pub use constants::*;
pub use errors::ModelError;

// Re-export commonly used items from atmosphere
pub use atmosphere::{evaluate_atmosphere, AltitudeRegime, AtmosphericState, StandardAtmosphere};

// Re-export commonly used items from gravity
pub use gravity::{evaluate_gravity, GravityField, GravityVector, J2Gravity, PointMassGravity};

// Re-export commonly used utilities
pub use utils::vector3d::Vector3D;
