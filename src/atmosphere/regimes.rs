//! Altitude bands of the 1976 U.S. Standard Atmosphere.
//!
//! Each band knows its upper bound (inclusive) and how to produce temperature and
//! pressure. Bands are tried in [`AltitudeRegime::ORDERED`] order and the first one
//! whose bound covers the altitude wins.

use crate::constants::PhysicalConstants;
use crate::utils::interpolation::piecewise_linear;

/// A base layer of the lower atmosphere, keyed on geopotential height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseLayer {
    pub base_height: f64,      // geopotential km
    pub base_temperature: f64, // K
    pub base_pressure: f64,    // Pa
    pub lapse_rate: f64,       // K/km
}

impl BaseLayer {
    const fn new(
        base_height: f64,
        base_temperature: f64,
        base_pressure: f64,
        lapse_rate: f64,
    ) -> Self {
        BaseLayer {
            base_height,
            base_temperature,
            base_pressure,
            lapse_rate,
        }
    }

    pub fn temperature(&self, geopotential_height: f64) -> f64 {
        self.base_temperature + self.lapse_rate * (geopotential_height - self.base_height)
    }

    /// Barometric formula, isothermal or gradient form depending on the lapse rate.
    pub fn pressure(&self, constants: &PhysicalConstants, geopotential_height: f64) -> f64 {
        let g0_m0 = constants.standard_gravity * constants.molar_mass;
        let delta = geopotential_height - self.base_height;

        if self.lapse_rate == 0.0 {
            let exponent =
                -g0_m0 * delta * 1000.0 / (constants.gas_constant * self.base_temperature);
            self.base_pressure * exponent.exp()
        } else {
            let exponent = g0_m0 / (constants.gas_constant * (self.lapse_rate / 1000.0));
            let ratio = self.base_temperature / (self.base_temperature + self.lapse_rate * delta);
            self.base_pressure * ratio.powf(exponent)
        }
    }
}

pub const BASE_LAYERS: [BaseLayer; 7] = [
    BaseLayer::new(0.0, 288.15, 101_325.0, -6.5),
    BaseLayer::new(11.0, 216.65, 22_632.1, 0.0),
    BaseLayer::new(20.0, 216.65, 5_474.89, 1.0),
    BaseLayer::new(32.0, 228.65, 868.019, 2.8),
    BaseLayer::new(47.0, 270.65, 110.906, 0.0),
    BaseLayer::new(51.0, 270.65, 66.9389, -2.8),
    BaseLayer::new(71.0, 214.65, 3.95642, -2.0),
];

/// Upper geopotential bounds (in metres, as tabulated) and the molecular-weight
/// ratio M/M0 that applies below each one. Heights past the last bound use
/// [`FINAL_MOLECULAR_WEIGHT_RATIO`].
pub const MOLECULAR_WEIGHT_RATIOS: [(f64, f64); 12] = [
    (79_005.7, 1.0),
    (79_493.3, 0.999996),
    (79_980.8, 0.999989),
    (80_468.2, 0.999971),
    (80_955.7, 0.999941),
    (81_443.0, 0.999909),
    (81_930.2, 0.999870),
    (82_417.3, 0.999829),
    (82_904.4, 0.999786),
    (83_391.4, 0.999741),
    (83_878.4, 0.999694),
    (84_365.2, 0.999641),
];
pub const FINAL_MOLECULAR_WEIGHT_RATIO: f64 = 0.999579;

pub const ISOTHERMAL_TEMPERATURE: f64 = 186.8673; // K, 86 to 91 km
pub const ISOTHERMAL_PRESSURES: [(f64, f64); 2] = [(86.0, 0.37338), (91.0, 0.15381)];

// Elliptical temperature profile, 91 to 110 km
pub const ELLIPSE_TC: f64 = 263.1905;
pub const ELLIPSE_A: f64 = -76.3232;
pub const ELLIPSE_SMALL_A: f64 = -19.9429;
pub const ELLIPSE_BASE_HEIGHT: f64 = 91.0;
pub const ELLIPTICAL_PRESSURES: [(f64, f64); 4] = [
    (91.0, 0.15381),
    (96.0, 0.063765),
    (102.0, 0.023144),
    (110.0, 0.0071042),
];

pub const LINEAR_BASE_HEIGHT: f64 = 110.0;
pub const LINEAR_BASE_TEMPERATURE: f64 = 240.0;
pub const LINEAR_LAPSE_RATE: f64 = 12.0; // K/km
pub const LINEAR_PRESSURES: [(f64, f64); 2] = [(110.0, 0.0071042), (120.0, 0.0025382)];

pub const EXOSPHERIC_TEMPERATURE: f64 = 1000.0; // T∞
pub const EXOSPHERE_BASE_TEMPERATURE: f64 = 360.0;
pub const EXOSPHERE_BASE_HEIGHT: f64 = 120.0;
pub const EXOSPHERE_LAMBDA: f64 = 0.01875;
pub const EXOSPHERE_PRESSURES: [(f64, f64); 10] = [
    (120.0, 0.0025382),
    (200.0, 0.000084736),
    (300.0, 0.0000087704),
    (400.0, 0.0000014518),
    (500.0, 0.00000030236),
    (600.0, 0.000000082130),
    (700.0, 0.000000031908),
    (800.0, 0.000000017036),
    (900.0, 0.000000010873),
    (1000.0, 0.0000000075138),
];

/// Where an evaluation happens: geometric altitude and its geopotential equivalent, km.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegimeInput {
    pub geometric: f64,
    pub geopotential: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AltitudeRegime {
    /// 0 to 80 km, seven base layers keyed on geopotential height.
    LowerAtmosphere,
    /// 80 to 86 km, the 71 km layer scaled by the molecular-weight ratio.
    MolecularWeightTransition,
    /// 86 to 91 km.
    Isothermal,
    /// 91 to 110 km.
    Elliptical,
    /// 110 to 120 km.
    LinearThermosphere,
    /// 120 to 1000 km.
    Exosphere,
}

impl AltitudeRegime {
    pub const ORDERED: [AltitudeRegime; 6] = [
        AltitudeRegime::LowerAtmosphere,
        AltitudeRegime::MolecularWeightTransition,
        AltitudeRegime::Isothermal,
        AltitudeRegime::Elliptical,
        AltitudeRegime::LinearThermosphere,
        AltitudeRegime::Exosphere,
    ];

    /// First regime in ascending order covering the geometric altitude.
    pub fn select(altitude_km: f64) -> Option<AltitudeRegime> {
        AltitudeRegime::ORDERED
            .into_iter()
            .find(|regime| regime.contains(altitude_km))
    }

    pub fn upper_bound_km(&self) -> f64 {
        match self {
            AltitudeRegime::LowerAtmosphere => 80.0,
            AltitudeRegime::MolecularWeightTransition => 86.0,
            AltitudeRegime::Isothermal => 91.0,
            AltitudeRegime::Elliptical => 110.0,
            AltitudeRegime::LinearThermosphere => 120.0,
            AltitudeRegime::Exosphere => 1000.0,
        }
    }

    pub fn contains(&self, altitude_km: f64) -> bool {
        altitude_km <= self.upper_bound_km()
    }

    pub fn name(&self) -> &'static str {
        match self {
            AltitudeRegime::LowerAtmosphere => "lower atmosphere",
            AltitudeRegime::MolecularWeightTransition => "molecular weight transition",
            AltitudeRegime::Isothermal => "isothermal mesopause",
            AltitudeRegime::Elliptical => "elliptical thermosphere",
            AltitudeRegime::LinearThermosphere => "linear thermosphere",
            AltitudeRegime::Exosphere => "exosphere",
        }
    }

    /// Temperature (K) and pressure (Pa) inside this regime.
    ///
    /// The two lowest regimes work in geopotential height; everything from 86 km up
    /// uses geometric altitude directly, matching the official tables.
    pub fn evaluate(&self, constants: &PhysicalConstants, input: RegimeInput) -> (f64, f64) {
        match self {
            AltitudeRegime::LowerAtmosphere => {
                let layer = base_layer(input.geopotential);
                log::trace!(
                    "base layer {} km selected for h* = {:.4} km",
                    layer.base_height,
                    input.geopotential
                );
                (
                    layer.temperature(input.geopotential),
                    layer.pressure(constants, input.geopotential),
                )
            }
            AltitudeRegime::MolecularWeightTransition => {
                let layer = BASE_LAYERS[BASE_LAYERS.len() - 1];
                let ratio = molecular_weight_ratio(input.geopotential * 1000.0);
                (
                    ratio * layer.temperature(input.geopotential),
                    layer.pressure(constants, input.geopotential),
                )
            }
            AltitudeRegime::Isothermal => (
                ISOTHERMAL_TEMPERATURE,
                piecewise_linear(&ISOTHERMAL_PRESSURES, input.geometric),
            ),
            AltitudeRegime::Elliptical => {
                let x = (input.geometric - ELLIPSE_BASE_HEIGHT) / ELLIPSE_SMALL_A;
                let temperature = ELLIPSE_TC + ELLIPSE_A * (1.0 - x.powi(2)).sqrt();
                (
                    temperature,
                    piecewise_linear(&ELLIPTICAL_PRESSURES, input.geometric),
                )
            }
            AltitudeRegime::LinearThermosphere => (
                LINEAR_BASE_TEMPERATURE
                    + LINEAR_LAPSE_RATE * (input.geometric - LINEAR_BASE_HEIGHT),
                piecewise_linear(&LINEAR_PRESSURES, input.geometric),
            ),
            AltitudeRegime::Exosphere => (
                exospheric_temperature(constants, input.geometric),
                piecewise_linear(&EXOSPHERE_PRESSURES, input.geometric),
            ),
        }
    }
}

/// Last base layer whose base lies at or below the geopotential height.
pub fn base_layer(geopotential_height: f64) -> BaseLayer {
    BASE_LAYERS
        .iter()
        .rev()
        .find(|layer| geopotential_height >= layer.base_height)
        .copied()
        .unwrap_or(BASE_LAYERS[0])
}

/// M/M0 for a geopotential height given in metres.
pub fn molecular_weight_ratio(geopotential_height_m: f64) -> f64 {
    MOLECULAR_WEIGHT_RATIOS
        .iter()
        .find(|(bound, _)| geopotential_height_m < *bound)
        .map(|(_, ratio)| *ratio)
        .unwrap_or(FINAL_MOLECULAR_WEIGHT_RATIO)
}

fn exospheric_temperature(constants: &PhysicalConstants, altitude_km: f64) -> f64 {
    let radius = constants.radius_pole_km();
    let epsilon = (altitude_km - EXOSPHERE_BASE_HEIGHT) * (radius + EXOSPHERE_BASE_HEIGHT)
        / (radius + altitude_km);
    let decay = (-EXOSPHERE_LAMBDA * epsilon).exp();
    EXOSPHERIC_TEMPERATURE - (EXOSPHERIC_TEMPERATURE - EXOSPHERE_BASE_TEMPERATURE) * decay
}
