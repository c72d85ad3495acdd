use earth_environment::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let atmosphere = StandardAtmosphere::default();
    let boundaries = AltitudeRegime::ORDERED.map(|regime| regime.upper_bound_km());

    let mut altitudes: Vec<f64> = (0..=20).map(|step| step as f64 * 50.0).collect();
    altitudes.extend_from_slice(&boundaries);
    altitudes.sort_by(|a, b| a.total_cmp(b));
    altitudes.dedup();

    println!(
        "{:>8} {:>10} {:>14} {:>14} {:>10}",
        "h (km)", "T (K)", "P (Pa)", "rho (kg/m3)", "a (m/s)"
    );
    for altitude in altitudes {
        let state = atmosphere.evaluate(altitude)?;
        println!(
            "{:>8.1} {:>10.3} {:>14.6e} {:>14.6e} {:>10.2}",
            state.altitude(),
            state.temperature(),
            state.pressure(),
            state.mass_density(),
            state.speed_of_sound()
        );
    }

    println!();
    let gravity = J2Gravity::default();
    let orbit = RADIUS_EQUATOR + 400_000.0;
    let positions = [
        Vector3D::new(RADIUS_EQUATOR, 0.0, 0.0),
        Vector3D::new(0.0, 0.0, RADIUS_POLE),
        Vector3D::new(orbit * 0.5, orbit * 0.5, orbit * std::f64::consts::FRAC_1_SQRT_2),
    ];
    for position in positions {
        let g = gravity.acceleration(position)?;
        println!("{} (|g| = {:.6})", g, g.magnitude());
    }

    Ok(())
}
