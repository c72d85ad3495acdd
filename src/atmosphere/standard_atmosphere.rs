use std::fmt;

use crate::atmosphere::regimes::{AltitudeRegime, RegimeInput};
use crate::constants::{PhysicalConstants, MAX_ALTITUDE_KM, MIN_ALTITUDE_KM};
use crate::errors::ModelError;

/// Evaluator for the 1976 U.S. Standard Atmosphere, 0 to 1000 km geometric altitude.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardAtmosphere {
    pub constants: PhysicalConstants,
}

impl StandardAtmosphere {
    pub fn new(constants: PhysicalConstants) -> Self {
        StandardAtmosphere { constants }
    }

    pub fn evaluate(&self, altitude_km: f64) -> Result<AtmosphericState, ModelError> {
        let regime = self.regime_for(altitude_km)?;
        let input = RegimeInput {
            geometric: altitude_km,
            geopotential: self.geopotential_height(altitude_km),
        };
        let (temperature, pressure) = regime.evaluate(&self.constants, input);

        log::debug!(
            "{:.3} km in {} regime: T = {:.4} K, P = {:.6e} Pa",
            altitude_km,
            regime.name(),
            temperature,
            pressure
        );

        Ok(AtmosphericState {
            altitude: altitude_km,
            temperature,
            pressure,
            density: pressure / (self.constants.gas_constant * temperature),
            speed_of_sound: self.speed_of_sound(temperature),
            constants: self.constants,
        })
    }

    /// Rejects altitudes outside the model domain, then picks the first matching band.
    pub fn regime_for(&self, altitude_km: f64) -> Result<AltitudeRegime, ModelError> {
        if !(MIN_ALTITUDE_KM..=MAX_ALTITUDE_KM).contains(&altitude_km) {
            return Err(ModelError::ValidationError(format!(
                "the 1976 standard atmosphere is defined from {} km to {} km, got {} km",
                MIN_ALTITUDE_KM, MAX_ALTITUDE_KM, altitude_km
            )));
        }

        AltitudeRegime::select(altitude_km).ok_or_else(|| {
            ModelError::ValidationError(format!("no altitude regime covers {} km", altitude_km))
        })
    }

    /// Geopotential height (km) for a geometric altitude (km).
    pub fn geopotential_height(&self, altitude_km: f64) -> f64 {
        let radius = self.constants.radius_pole_km();
        radius * altitude_km / (radius + altitude_km)
    }

    pub fn speed_of_sound(&self, temperature: f64) -> f64 {
        let c = &self.constants;
        (c.gamma * c.gas_constant * temperature / c.molar_mass).sqrt()
    }
}

/// Atmospheric conditions at one geometric altitude. All fields are derived together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericState {
    altitude: f64,       // km
    temperature: f64,    // K
    pressure: f64,       // Pa
    density: f64,        // P / (R·T)
    speed_of_sound: f64, // m/s
    constants: PhysicalConstants,
}

impl AtmosphericState {
    /// Earth conditions at `altitude_km`.
    pub fn new(altitude_km: f64) -> Result<Self, ModelError> {
        StandardAtmosphere::default().evaluate(altitude_km)
    }

    /// Moves the state to a new altitude with the constants it was built from.
    /// On error the state is left as it was.
    pub fn set_altitude(&mut self, altitude_km: f64) -> Result<(), ModelError> {
        *self = StandardAtmosphere::new(self.constants).evaluate(altitude_km)?;
        Ok(())
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn speed_of_sound(&self) -> f64 {
        self.speed_of_sound
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// Mass density in kg/m³, `density · M0`.
    pub fn mass_density(&self) -> f64 {
        self.density * self.constants.molar_mass
    }
}

impl fmt::Display for AtmosphericState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "At Height (km): {}", self.altitude)?;
        writeln!(f, "Density (mol/m³): {}", self.density)?;
        writeln!(f, "Mass Density (kg/m³): {}", self.mass_density())?;
        writeln!(f, "Pressure (Pa): {}", self.pressure)?;
        writeln!(f, "Temperature (K): {}", self.temperature)?;
        write!(f, "Speed of Sound (m/s): {}", self.speed_of_sound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_sea_level_reference() {
        let state = AtmosphericState::new(0.0).unwrap();

        assert_abs_diff_eq!(state.temperature(), 288.15, epsilon = 1e-9);
        assert_abs_diff_eq!(state.pressure(), 101_325.0, epsilon = 1e-6);
        assert_eq!(state.altitude(), 0.0);
    }

    #[test]
    fn test_tropopause() {
        let state = AtmosphericState::new(11.0).unwrap();

        // 11 km geometric sits just below 11 km geopotential
        assert_abs_diff_eq!(state.temperature(), 216.65, epsilon = 0.15);
        assert_abs_diff_eq!(state.pressure(), 22_632.0, epsilon = 150.0);
    }

    #[test]
    fn test_geopotential_height() {
        let atmosphere = StandardAtmosphere::default();

        assert_eq!(atmosphere.geopotential_height(0.0), 0.0);
        assert_abs_diff_eq!(atmosphere.geopotential_height(11.0), 10.981, epsilon = 1e-3);
        assert!(atmosphere.geopotential_height(91.0) < 91.0);
    }

    #[test]
    fn test_density_is_ideal_gas_relation() {
        let state = AtmosphericState::new(25.0).unwrap();
        let expected = state.pressure() / (PhysicalConstants::EARTH.gas_constant * state.temperature());

        assert_relative_eq!(state.density(), expected);
        assert_ne!(state.density(), state.altitude());
    }

    #[test]
    fn test_mass_density_at_sea_level() {
        let state = AtmosphericState::new(0.0).unwrap();
        assert_abs_diff_eq!(state.mass_density(), 1.225, epsilon = 1e-3);
    }

    #[test]
    fn test_speed_of_sound_at_sea_level() {
        let c = PhysicalConstants::EARTH;
        let state = AtmosphericState::new(0.0).unwrap();
        let expected = (c.gamma * c.gas_constant * 288.15 / c.molar_mass).sqrt();

        assert_relative_eq!(state.speed_of_sound(), expected, epsilon = 1e-9);
        assert_abs_diff_eq!(state.speed_of_sound(), 340.3, epsilon = 0.1);
    }

    #[test]
    fn test_out_of_domain_altitudes_are_rejected() {
        let atmosphere = StandardAtmosphere::default();

        for altitude in [-1.0, -1e-9, 1000.1, f64::NAN, f64::INFINITY] {
            match atmosphere.evaluate(altitude) {
                Err(ModelError::ValidationError(_)) => {}
                other => panic!("expected validation error for {}, got {:?}", altitude, other),
            }
        }
        assert!(atmosphere.evaluate(1000.0).is_ok());
    }

    #[test]
    fn test_set_altitude_recomputes_everything() {
        let mut state = AtmosphericState::new(0.0).unwrap();
        state.set_altitude(50.0).unwrap();

        assert_eq!(state, AtmosphericState::new(50.0).unwrap());
        assert_eq!(state.altitude(), 50.0);
    }

    #[test]
    fn test_set_altitude_keeps_custom_constants() {
        let heavy_gas = PhysicalConstants {
            molar_mass: 0.04334,
            gamma: 1.29,
            ..PhysicalConstants::EARTH
        };
        let atmosphere = StandardAtmosphere::new(heavy_gas);

        let mut state = atmosphere.evaluate(10.0).unwrap();
        state.set_altitude(20.0).unwrap();

        assert_eq!(state, atmosphere.evaluate(20.0).unwrap());
        assert_eq!(state.constants().molar_mass, 0.04334);
        assert_ne!(state, AtmosphericState::new(20.0).unwrap());
    }

    #[test]
    fn test_failed_set_altitude_leaves_state_untouched() {
        let mut state = AtmosphericState::new(30.0).unwrap();
        let before = state;

        assert!(state.set_altitude(1200.0).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_display_report() {
        let report = AtmosphericState::new(0.0).unwrap().to_string();

        assert!(report.starts_with("At Height (km): 0"));
        assert!(report.contains("Pressure (Pa): 101325"));
        assert!(report.contains("Temperature (K): 288.15"));
        assert!(report.contains("Density (mol/m³): "));
        assert!(report.contains("Mass Density (kg/m³): 1.22"));
        assert!(report.contains("Speed of Sound (m/s)"));
    }
}
