pub mod j2;

use crate::errors::ModelError;

pub use j2::{GravityField, GravityVector, J2Gravity, PointMassGravity};

/// Earth J2 gravity at an ECI position in metres.
pub fn evaluate_gravity(x: f64, y: f64, z: f64) -> Result<GravityVector, ModelError> {
    J2Gravity::default().evaluate(x, y, z)
}
