use std::fmt;

use crate::constants::PhysicalConstants;
use crate::errors::ModelError;
use crate::utils::vector3d::Vector3D;

/// Gravitational acceleration (m/s²) at an ECI position (m).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityVector {
    pub position: Vector3D,
    pub acceleration: Vector3D,
}

impl GravityVector {
    pub fn acc_x(&self) -> f64 {
        self.acceleration.x
    }

    pub fn acc_y(&self) -> f64 {
        self.acceleration.y
    }

    pub fn acc_z(&self) -> f64 {
        self.acceleration.z
    }

    pub fn magnitude(&self) -> f64 {
        self.acceleration.magnitude()
    }
}

impl fmt::Display for GravityVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "g = ({:.6}, {:.6}, {:.6}) m/s² at ({:.1}, {:.1}, {:.1}) m",
            self.acceleration.x,
            self.acceleration.y,
            self.acceleration.z,
            self.position.x,
            self.position.y,
            self.position.z
        )
    }
}

/// A gravity field that can be sampled in the ECI frame.
///
/// Higher zonal harmonics belong in new implementations of this trait.
pub trait GravityField {
    fn acceleration(&self, position: Vector3D) -> Result<GravityVector, ModelError>;
}

fn checked_radius(position: &Vector3D) -> Result<f64, ModelError> {
    if !position.is_finite() {
        return Err(ModelError::DomainError(format!(
            "position {:?} is not finite",
            position
        )));
    }

    let r = position.magnitude();
    if !r.is_finite() {
        return Err(ModelError::DomainError(format!(
            "distance of {:?} from the body is not finite",
            position
        )));
    }
    if r == 0.0 {
        return Err(ModelError::DomainError(
            "gravity is undefined at the centre of the body".to_string(),
        ));
    }
    Ok(r)
}

/// Point mass plus the J2 oblateness term.
#[derive(Debug, Clone, Copy, Default)]
pub struct J2Gravity {
    pub constants: PhysicalConstants,
}

impl J2Gravity {
    pub fn new(constants: PhysicalConstants) -> Self {
        J2Gravity { constants }
    }

    pub fn evaluate(&self, x: f64, y: f64, z: f64) -> Result<GravityVector, ModelError> {
        self.acceleration(Vector3D::new(x, y, z))
    }
}

impl GravityField for J2Gravity {
    fn acceleration(&self, position: Vector3D) -> Result<GravityVector, ModelError> {
        let r = checked_radius(&position)?;
        let c = &self.constants;

        // Scaled by the unit vector so r³ is never formed
        let unit = position * (1.0 / r);
        let s1 = 1.5 * c.j2 * (c.radius_equator / r).powi(2);
        let s2 = 5.0 * unit.z.powi(2);
        let s3 = -c.mu() / r / r;
        let s4 = s3 * (1.0 - s1 * (s2 - 1.0));

        let acceleration = Vector3D::new(
            unit.x * s4,
            unit.y * s4,
            unit.z * s3 * (1.0 - s1 * (s2 - 3.0)),
        );

        log::debug!("J2 gravity at r = {:.1} m: |g| = {:.6} m/s²", r, acceleration.magnitude());

        Ok(GravityVector {
            position,
            acceleration,
        })
    }
}

/// Spherical body, −GM·r/|r|³.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointMassGravity {
    pub constants: PhysicalConstants,
}

impl PointMassGravity {
    pub fn new(constants: PhysicalConstants) -> Self {
        PointMassGravity { constants }
    }
}

impl GravityField for PointMassGravity {
    fn acceleration(&self, position: Vector3D) -> Result<GravityVector, ModelError> {
        let r = checked_radius(&position)?;
        let acceleration = -position * (1.0 / r) * (self.constants.mu() / r / r);

        Ok(GravityVector {
            position,
            acceleration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{J2, RADIUS_EQUATOR, RADIUS_POLE};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_equator_is_stronger_than_point_mass() {
        let earth = PhysicalConstants::EARTH;
        let g = J2Gravity::default().evaluate(RADIUS_EQUATOR, 0.0, 0.0).unwrap();
        let point_mass = earth.point_mass_gravity(RADIUS_EQUATOR);

        // On the equator the bulge adds 1.5·J2 of the central term
        assert_relative_eq!(g.magnitude(), point_mass * (1.0 + 1.5 * J2), max_relative = 1e-12);
        assert!(g.magnitude() - point_mass > 0.01);
        assert!(g.acc_x() < 0.0);
        assert_eq!(g.acc_y(), 0.0);
        assert_eq!(g.acc_z(), 0.0);
    }

    #[test]
    fn test_pole_is_weaker_than_point_mass() {
        let earth = PhysicalConstants::EARTH;
        let g = J2Gravity::default().evaluate(0.0, 0.0, RADIUS_POLE).unwrap();
        let point_mass = earth.point_mass_gravity(RADIUS_POLE);

        let s1 = 1.5 * J2 * (RADIUS_EQUATOR / RADIUS_POLE).powi(2);
        assert_relative_eq!(g.magnitude(), point_mass * (1.0 - 2.0 * s1), max_relative = 1e-12);
        assert_abs_diff_eq!(g.acc_x(), 0.0);
        assert!(g.acc_z() < 0.0);
    }

    #[test]
    fn test_axial_symmetry() {
        let gravity = J2Gravity::default();
        let a = gravity.evaluate(7.0e6, 0.0, 1.0e6).unwrap();
        let b = gravity.evaluate(0.0, 7.0e6, 1.0e6).unwrap();

        assert_relative_eq!(a.acc_x(), b.acc_y());
        assert_relative_eq!(a.acc_z(), b.acc_z());
    }

    #[test]
    fn test_zero_j2_matches_point_mass() {
        let spherical = PhysicalConstants {
            j2: 0.0,
            ..PhysicalConstants::EARTH
        };
        let position = Vector3D::new(4.0e6, -3.0e6, 5.0e6);

        let j2 = J2Gravity::new(spherical).acceleration(position).unwrap();
        let point = PointMassGravity::new(spherical).acceleration(position).unwrap();

        assert_relative_eq!(j2.acc_x(), point.acc_x(), max_relative = 1e-12);
        assert_relative_eq!(j2.acc_y(), point.acc_y(), max_relative = 1e-12);
        assert_relative_eq!(j2.acc_z(), point.acc_z(), max_relative = 1e-12);
    }

    #[test]
    fn test_origin_is_a_domain_error() {
        for field in [
            &J2Gravity::default() as &dyn GravityField,
            &PointMassGravity::default(),
        ] {
            assert!(matches!(
                field.acceleration(Vector3D::zero()),
                Err(ModelError::DomainError(_))
            ));
        }
        assert!(matches!(
            J2Gravity::default().evaluate(f64::NAN, 0.0, 0.0),
            Err(ModelError::DomainError(_))
        ));
    }

    #[test]
    fn test_huge_positions_do_not_collapse_to_zero() {
        let earth = PhysicalConstants::EARTH;
        let position = Vector3D::new(1e150, 1e150, 0.0);

        let g = J2Gravity::default().acceleration(position).unwrap();
        let spherical = PointMassGravity::default().acceleration(position).unwrap();

        assert!(g.acc_x() < 0.0);
        assert!(g.acc_y() < 0.0);
        assert_relative_eq!(g.magnitude(), earth.mu() / 2e300, max_relative = 1e-9);
        assert_relative_eq!(spherical.magnitude(), g.magnitude(), max_relative = 1e-9);
    }

    #[test]
    fn test_display() {
        let g = J2Gravity::default().evaluate(RADIUS_EQUATOR, 0.0, 0.0).unwrap();
        let text = g.to_string();

        assert!(text.starts_with("g = (-9.8"));
        assert!(text.contains("6378135.0"));
    }
}
