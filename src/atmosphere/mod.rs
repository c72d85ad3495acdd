pub mod regimes;
pub mod standard_atmosphere;

use crate::errors::ModelError;

pub use regimes::AltitudeRegime;
pub use standard_atmosphere::{AtmosphericState, StandardAtmosphere};

/// Earth standard atmosphere at a geometric altitude in km.
pub fn evaluate_atmosphere(altitude_km: f64) -> Result<AtmosphericState, ModelError> {
    StandardAtmosphere::default().evaluate(altitude_km)
}
