// Physical Constants
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67408e-11; // N⋅m²/kg²
pub const EARTH_MASS: f64 = 5.9722e24; // kg
pub const RADIUS_EQUATOR: f64 = 6_378_135.0; // meters
pub const RADIUS_POLE: f64 = 6_356_766.0; // meters, also the geopotential reference radius
pub const J2: f64 = 1.08263e-3;

// Atmospheric Constants
pub const STANDARD_GRAVITY: f64 = 9.80665; // m/s², G0 of the 1976 standard
pub const MOLAR_MASS_AIR: f64 = 0.0289644; // kg/mol
pub const GAS_CONSTANT: f64 = 8.31432; // J/(mol⋅K)
pub const GAMMA: f64 = 1.4; // ratio of specific heats for air

// Model Domain
pub const MIN_ALTITUDE_KM: f64 = 0.0;
pub const MAX_ALTITUDE_KM: f64 = 1000.0;

/// The constants table every evaluator is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    pub gravitational_constant: f64,
    pub body_mass: f64,
    pub radius_equator: f64,
    pub radius_pole: f64,
    pub molar_mass: f64,
    pub gas_constant: f64,
    pub gamma: f64,
    pub j2: f64,
    pub standard_gravity: f64,
}

impl PhysicalConstants {
    pub const EARTH: PhysicalConstants = PhysicalConstants {
        gravitational_constant: GRAVITATIONAL_CONSTANT,
        body_mass: EARTH_MASS,
        radius_equator: RADIUS_EQUATOR,
        radius_pole: RADIUS_POLE,
        molar_mass: MOLAR_MASS_AIR,
        gas_constant: GAS_CONSTANT,
        gamma: GAMMA,
        j2: J2,
        standard_gravity: STANDARD_GRAVITY,
    };

    /// Standard gravitational parameter G·M (m³/s²).
    pub fn mu(&self) -> f64 {
        self.gravitational_constant * self.body_mass
    }

    pub fn radius_pole_km(&self) -> f64 {
        self.radius_pole / 1000.0
    }

    pub fn point_mass_gravity(&self, distance: f64) -> f64 {
        self.mu() / distance.powi(2)
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        PhysicalConstants::EARTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_is_earth() {
        assert_eq!(PhysicalConstants::default(), PhysicalConstants::EARTH);
        assert_eq!(PhysicalConstants::EARTH.radius_pole, RADIUS_POLE);
    }

    #[test]
    fn test_derived_values() {
        let earth = PhysicalConstants::EARTH;

        assert_abs_diff_eq!(earth.mu(), 3.986e14, epsilon = 1e11);
        assert_abs_diff_eq!(earth.radius_pole_km(), 6356.766, epsilon = 1e-9);

        // Surface gravity at the equator sits a little under G0
        let surface = earth.point_mass_gravity(earth.radius_equator);
        assert_abs_diff_eq!(surface, 9.80, epsilon = 0.01);
        assert!(surface < earth.standard_gravity);
    }
}
