#![cfg(test)]

use glam::{DVec2, DVec3};

use crate::{
    advance, advance_precise, sample, sample_iter, wrap_two_pi, CompactOrbitalElements,
    ElementsError, KeplerSolveError, Matrix3x2, OrbitState, OrbitTrait, OrbitalElements,
    KEPLER_ITERATIONS, MAX_FAST_SOLVE_ECCENTRICITY,
};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

const ORBIT_POLL_ANGLES: usize = 4096;
const RANDOM_ITERS: usize = 256;


use assertions::*;
use polling::*;
use seeders::*;

fn unit_orbit() -> OrbitalElements {
    OrbitalElements::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0)
}

fn keplers_residual(mean_anomaly: f64, eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    eccentric_anomaly - eccentricity * eccentric_anomaly.sin() - mean_anomaly
}

#[test]
fn unit_orbit_angle() {
    let orbit = unit_orbit();

    assert_orbit_positions(
        &orbit,
        &[
            ("unit orbit 1", 0.0 * PI, DVec3::new(1.0, 0.0, 0.0)),
            ("unit orbit 2", 0.5 * PI, DVec3::new(0.0, 0.0, 1.0)),
            ("unit orbit 3", 1.0 * PI, DVec3::new(-1.0, 0.0, 0.0)),
            ("unit orbit 4", 1.5 * PI, DVec3::new(0.0, 0.0, -1.0)),
            ("unit orbit 5", 2.0 * PI, DVec3::new(1.0, 0.0, 0.0)),
        ],
    );
}

#[test]
fn unit_orbit_transformation() {
    // With every angle at zero the plane is laid flat: (x, y) -> (x, 0, y)
    let orbit = unit_orbit();

    let tests = [(1.0, 1.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0)];

    for point in tests {
        let transformed = orbit.transform_pqw_vector(DVec2::new(point.0, point.1));

        assert_eq!(transformed.x, point.0);
        assert_eq!(transformed.y, 0.0);
        assert_eq!(transformed.z, point.1);
    }
}

#[test]
fn tilted_90deg() {
    let orbit = OrbitalElements::new(1.0, 0.0, FRAC_PI_2, 0.0, 0.0, 0.0, 1.0);

    // Inclination tilts the quarter-orbit point up out of the XZ plane
    assert_orbit_positions(
        &orbit,
        &[
            ("tilted 1", 0.0 * PI, DVec3::new(1.0, 0.0, 0.0)),
            ("tilted 2", 0.5 * PI, DVec3::new(0.0, 1.0, 0.0)),
            ("tilted 3", 1.0 * PI, DVec3::new(-1.0, 0.0, 0.0)),
            ("tilted 4", 1.5 * PI, DVec3::new(0.0, -1.0, 0.0)),
        ],
    );
}

#[test]
fn arg_pe_and_long_asc_node_agree_when_flat() {
    // With no inclination, both angles are a turn about the scene Y axis
    for angle in [0.3, 1.0, FRAC_PI_2, 2.5, -1.2] {
        let by_arg_pe = OrbitalElements::new(2.0, 0.4, 0.0, angle, 0.0, 0.0, 1.0);
        let by_lan = OrbitalElements::new(2.0, 0.4, 0.0, 0.0, angle, 0.0, 1.0);

        for theta in [0.0, 1.0, PI, 4.0] {
            assert_almost_eq_vec3(
                by_arg_pe.get_position_at_true_anomaly(theta),
                by_lan.get_position_at_true_anomaly(theta),
                &format!("flat orbit turned by {angle} at true anomaly {theta}"),
            );
        }
    }

    let quarter_turn = OrbitalElements::new(1.0, 0.0, 0.0, 0.0, FRAC_PI_2, 0.0, 1.0);
    assert_almost_eq_vec3(
        quarter_turn.get_position_at_true_anomaly(0.0),
        DVec3::new(0.0, 0.0, 1.0),
        "periapsis after a quarter turn of the ascending node",
    );
}

/// Turns `v` about the Y axis so that +X heads towards +Z.
fn rotate_about_y(v: DVec3, angle: f64) -> DVec3 {
    let (sin, cos) = angle.sin_cos();
    DVec3::new(v.x * cos - v.z * sin, v.y, v.x * sin + v.z * cos)
}

/// Turns `v` about the X axis so that +Z heads towards +Y.
fn rotate_about_x(v: DVec3, angle: f64) -> DVec3 {
    let (sin, cos) = angle.sin_cos();
    DVec3::new(v.x, v.y * cos + v.z * sin, v.z * cos - v.y * sin)
}

#[test]
fn rotation_order() {
    for _ in 0..RANDOM_ITERS {
        let orbit = random_any();
        let what = format!("{orbit:?}");

        for theta in [0.0, 1.0, FRAC_PI_2, 2.4, PI, 4.5] {
            let radius = orbit.get_altitude_at_true_anomaly(theta);
            let flat = DVec3::new(radius * theta.cos(), 0.0, radius * theta.sin());

            let turned = rotate_about_y(flat, orbit.get_arg_pe());
            let tilted = rotate_about_x(turned, orbit.get_inclination());
            let expected = rotate_about_y(tilted, orbit.get_long_asc_node());

            assert_almost_eq_vec3_rescale(
                orbit.get_position_at_true_anomaly(theta),
                expected,
                &format!("true anomaly {theta} of {what}"),
            );
        }
    }

    // Same angles, different order, different place
    let orbit = OrbitalElements::new(1.0, 0.0, 0.7, 0.4, 1.9, 0.0, 1.0);
    let swapped = rotate_about_y(
        rotate_about_x(DVec3::X, orbit.get_inclination()),
        orbit.get_arg_pe() + orbit.get_long_asc_node(),
    );
    assert!(orbit.get_position_at_true_anomaly(0.0).distance(swapped) > 0.1);
}

#[test]
fn transformation_is_orthonormal() {
    for _ in 0..RANDOM_ITERS {
        let orbit = random_any();
        let p = orbit.transform_pqw_vector(DVec2::new(1.0, 0.0));
        let q = orbit.transform_pqw_vector(DVec2::new(0.0, 1.0));

        assert_almost_eq(p.length(), 1.0, &format!("|P| of {orbit:?}"));
        assert_almost_eq(q.length(), 1.0, &format!("|Q| of {orbit:?}"));
        assert_almost_eq(p.dot(q), 0.0, &format!("P.Q of {orbit:?}"));
    }
}

#[test]
fn matrix_from_angles_is_cached() {
    for _ in 0..RANDOM_ITERS {
        let compact = random_any();
        let cached = OrbitalElements::from(compact.clone());

        assert_eq!(
            cached.get_transformation_matrix(),
            Matrix3x2::from_angles(compact.inclination, compact.arg_pe, compact.long_asc_node),
        );
    }
}

#[test]
fn cached_and_compact_agree() {
    for _ in 0..RANDOM_ITERS {
        let compact = random_any();
        let cached = OrbitalElements::from(compact.clone());

        assert_almost_eq_orbit(&compact, &cached, &format!("{compact:?}"));

        let round_trip = CompactOrbitalElements::from(cached);
        assert_eq!(compact, round_trip);
    }
}

#[test]
fn extreme_distances() {
    for _ in 0..RANDOM_ITERS {
        let compact = random_any();
        let orbit = OrbitalElements::from(compact.clone());
        let what = format!("{compact:?}");

        for (mean_anomaly, expected) in [(0.0, orbit.get_periapsis()), (PI, orbit.get_apoapsis())]
        {
            let mut state = OrbitState::at_mean_anomaly(&orbit, mean_anomaly);
            let position = advance(&mut state, &orbit, 0.0, 1.0);

            assert_almost_eq(
                position.length().log2(),
                expected.log2(),
                &format!("distance at M = {mean_anomaly} for {what}"),
            );
        }

        // Periapsis lies along the rotated P axis
        let mut state = OrbitState::at_mean_anomaly(&orbit, 0.0);
        let periapsis = advance(&mut state, &orbit, 0.0, 1.0);
        assert_almost_eq_vec3(
            periapsis.normalize(),
            orbit.transform_pqw_vector(DVec2::new(1.0, 0.0)),
            &format!("periapsis direction for {what}"),
        );
    }
}

#[test]
fn advance_at_epoch() {
    let elements = OrbitalElements::new(1000.0, 0.2, 0.0, 0.0, 0.0, 0.0, 1.0);
    let mut state = OrbitState::new(&elements);

    let position = advance(&mut state, &elements, 0.0, 1.0);

    assert_eq_vec3(position, DVec3::new(800.0, 0.0, 0.0), "periapsis at epoch");
    assert_eq!(state.mean_anomaly(), 0.0);
    assert_eq!(state.true_anomaly(), 0.0);
}

#[test]
fn advance_matches_stateless_position() {
    for _ in 0..RANDOM_ITERS {
        let orbit = random_any();
        let what = format!("{orbit:?}");
        let mut state = OrbitState::new(&orbit);
        let mut time = 0.0;

        for _ in 0..8 {
            let dt = rand::random_range(0.0..orbit.get_orbital_period());
            time += dt;

            assert_almost_eq_vec3_rescale(
                advance(&mut state, &orbit, dt, 1.0),
                orbit.get_position_at_time(time),
                &format!("position at t = {time} for {what}"),
            );
        }
    }
}

#[test]
fn advance_full_period_returns_home() {
    for _ in 0..32 {
        let orbit = random_elliptic();
        let what = format!("{orbit:?}");
        let start = OrbitState::new(&orbit).position(&orbit);

        let positions = poll_advance(&orbit, rand::random_range(0.5..50.0));
        let end = positions[ORBIT_POLL_ANGLES - 1];

        assert_almost_eq_vec3_rescale(start, end, &format!("after one period for {what}"));

        let reference = poll_orbit(&orbit);
        for (i, (stepped, polled)) in positions.iter().zip(reference.iter().skip(1)).enumerate() {
            assert_almost_eq_vec3_rescale(
                *stepped,
                *polled,
                &format!("frame {i} of {what}"),
            );
        }
    }
}

#[test]
fn speed_multiplier_scales_elapsed_time() {
    for _ in 0..RANDOM_ITERS {
        let orbit = random_elliptic();
        let dt = rand::random_range(0.0..1.0);

        let mut fast = OrbitState::new(&orbit);
        let mut slow = OrbitState::new(&orbit);

        assert_eq_vec3(
            advance(&mut fast, &orbit, dt, 2.0),
            advance(&mut slow, &orbit, 2.0 * dt, 1.0),
            &format!("doubling speed vs doubling time for {orbit:?}"),
        );
    }
}

#[test]
fn mean_anomaly_stays_wrapped() {
    for _ in 0..RANDOM_ITERS {
        let orbit = random_any();
        let mut state = OrbitState::new(&orbit);

        for _ in 0..16 {
            let dt = rand::random_range(0.0..100.0);
            advance(&mut state, &orbit, dt, rand::random_range(0.1..1e4));

            let mean_anomaly = state.mean_anomaly();
            assert!(
                (0.0..TAU).contains(&mean_anomaly),
                "mean anomaly {mean_anomaly} escaped [0, 2π) for {orbit:?}"
            );
        }
    }
}

#[test]
fn wrap_two_pi_range() {
    for _ in 0..RANDOM_ITERS * 16 {
        let angle = rand::random_range(-1e6..1e6);
        let wrapped = wrap_two_pi(angle);

        assert!((0.0..TAU).contains(&wrapped), "{angle} wrapped to {wrapped}");
        assert_eq!(wrap_two_pi(wrapped), wrapped, "wrapping {angle} twice");
        assert_almost_eq(
            wrapped.sin(),
            angle.sin(),
            &format!("sine of {angle} after wrapping"),
        );
    }

    assert_eq!(wrap_two_pi(-1e-20), 0.0);
    assert_eq!(wrap_two_pi(0.0), 0.0);
    assert_eq!(wrap_two_pi(-TAU), 0.0);
}

#[test]
fn kepler_residual_fast_solver() {
    for _ in 0..RANDOM_ITERS {
        let orbit = if rand::random_bool(0.5) {
            random_elliptic()
        } else {
            random_circular()
        };
        let eccentricity = orbit.get_eccentricity();

        for (mean_anomaly, eccentric_anomaly) in poll_eccentric_anomaly(&orbit) {
            let residual = keplers_residual(mean_anomaly, eccentric_anomaly, eccentricity);

            assert!(
                residual.abs() < 1e-6,
                "residual {residual} at M = {mean_anomaly}, e = {eccentricity} after {KEPLER_ITERATIONS} iterations"
            );
        }
    }
}

#[test]
fn kepler_residual_fast_solver_upper_bound() {
    let orbit = OrbitalElements::new(1.0, MAX_FAST_SOLVE_ECCENTRICITY, 0.0, 0.0, 0.0, 0.0, 1.0);

    for (mean_anomaly, eccentric_anomaly) in poll_eccentric_anomaly(&orbit) {
        let residual =
            keplers_residual(mean_anomaly, eccentric_anomaly, MAX_FAST_SOLVE_ECCENTRICITY);
        assert!(residual.abs() < 1e-6, "residual {residual} at M = {mean_anomaly}");
    }
}

#[test]
fn kepler_residual_precise_solver() {
    for _ in 0..RANDOM_ITERS {
        let orbit = random_highly_eccentric();
        let eccentricity = orbit.get_eccentricity();

        for i in 0..ORBIT_POLL_ANGLES / 16 {
            let mean_anomaly = (i as f64) * TAU / (ORBIT_POLL_ANGLES / 16) as f64;
            let eccentric_anomaly = orbit
                .try_get_eccentric_anomaly_at_mean_anomaly(mean_anomaly, 1e-12, 100)
                .unwrap_or_else(|err| panic!("{err} for {orbit:?}"));

            let residual = keplers_residual(mean_anomaly, eccentric_anomaly, eccentricity);
            assert!(residual.abs() < 1e-12, "residual {residual} for {orbit:?}");
        }
    }
}

#[test]
fn precise_solver_reports_no_convergence() {
    let orbit = OrbitalElements::new(1.0, 0.5, 0.0, 0.0, 0.0, 0.0, 1.0);

    // A tolerance of zero can never be met
    let result = orbit.try_get_eccentric_anomaly_at_mean_anomaly(1.0, 0.0, 50);

    match result {
        Err(KeplerSolveError::NoConvergence {
            mean_anomaly,
            eccentricity,
            iterations,
            ..
        }) => {
            assert_eq!(mean_anomaly, 1.0);
            assert_eq!(eccentricity, 0.5);
            assert_eq!(iterations, 50);
        }
        Ok(e) => panic!("expected no convergence, got E = {e}"),
    }
}

#[test]
fn advance_precise_failure_keeps_true_anomaly() {
    let orbit = OrbitalElements::new(1.0, 0.5, 0.0, 0.0, 0.0, 0.3, 1.0);
    let mut state = OrbitState::new(&orbit);
    let true_anomaly = state.true_anomaly();

    let result = advance_precise(&mut state, &orbit, 0.25, 1.0, 0.0, 10);

    assert!(result.is_err());
    assert_almost_eq(state.mean_anomaly(), 0.55, "mean anomaly after a failed solve");
    assert_eq!(state.true_anomaly(), true_anomaly);
}

#[test]
fn advance_precise_matches_advance() {
    for _ in 0..RANDOM_ITERS {
        let orbit = random_elliptic();
        let mut fast = OrbitState::new(&orbit);
        let mut precise = OrbitState::new(&orbit);
        let dt = rand::random_range(0.0..10.0);

        let expected = advance(&mut fast, &orbit, dt, 1.0);
        let actual = advance_precise(&mut precise, &orbit, dt, 1.0, 1e-12, 50)
            .unwrap_or_else(|err| panic!("{err} for {orbit:?}"));

        assert_almost_eq_vec3_rescale(actual, expected, &format!("{orbit:?}"));
        assert_almost_eq(
            precise.true_anomaly(),
            fast.true_anomaly(),
            &format!("true anomaly of {orbit:?}"),
        );
    }
}

#[test]
fn advance_precise_stays_on_orbit() {
    for _ in 0..RANDOM_ITERS {
        let orbit = random_highly_eccentric();
        let mut state = OrbitState::new(&orbit);
        let frame = orbit.get_orbital_period() / 64.0;

        for _ in 0..64 {
            let position = advance_precise(&mut state, &orbit, frame, 1.0, 1e-12, 100)
                .unwrap_or_else(|err| panic!("{err} for {orbit:?}"));
            let distance = position.length();

            assert!(
                distance >= orbit.get_periapsis() * (1.0 - 1e-9)
                    && distance <= orbit.get_apoapsis() * (1.0 + 1e-9),
                "distance {distance} is off the orbit {orbit:?}"
            );
            assert_almost_eq(
                distance.log2(),
                orbit.get_altitude_at_true_anomaly(state.true_anomaly()).log2(),
                &format!("distance vs true anomaly for {orbit:?}"),
            );
        }
    }
}

#[test]
fn state_at_mean_anomaly_wraps() {
    let orbit = OrbitalElements::new(1.0, 0.3, 0.0, 0.0, 0.0, 0.0, 1.0);

    let state = OrbitState::at_mean_anomaly(&orbit, -FRAC_PI_2);
    assert_almost_eq(state.mean_anomaly(), 1.5 * PI, "wrapped mean anomaly");

    let state = OrbitState::at_mean_anomaly(&orbit, 5.0 * PI);
    assert_almost_eq(state.mean_anomaly(), PI, "wrapped mean anomaly");
    assert_almost_eq(state.true_anomaly(), PI, "true anomaly at apoapsis");
}

#[test]
fn state_position_matches_advance() {
    for _ in 0..RANDOM_ITERS {
        let orbit = random_any();
        let state = OrbitState::new(&orbit);
        let mut advanced = state;

        assert_almost_eq_vec3_rescale(
            state.position(&orbit),
            advance(&mut advanced, &orbit, 0.0, 1.0),
            &format!("{orbit:?}"),
        );
    }
}

#[test]
fn sample_closes_loop() {
    for _ in 0..RANDOM_ITERS {
        let orbit = random_any();
        let segment_count = rand::random_range(1..1024);
        let points = sample(&orbit, segment_count);

        assert_eq!(points.len(), segment_count + 1);
        assert_eq_vec3(
            points[0],
            points[segment_count],
            &format!("closing point of {orbit:?}"),
        );
    }
}

#[test]
fn sample_zero_segments() {
    let orbit = OrbitalElements::new(10.0, 0.5, 0.0, 0.0, 0.0, 0.0, 1.0);
    let points = sample(&orbit, 0);

    assert_eq!(points.len(), 1);
    assert_almost_eq_vec3(points[0], DVec3::new(5.0, 0.0, 0.0), "lone periapsis point");
}

#[test]
fn sample_follows_conic() {
    for _ in 0..RANDOM_ITERS {
        let orbit = random_any();
        let segment_count = 256;

        for (i, (point, theta)) in sample_iter(&orbit, segment_count)
            .zip(poll_true_anomaly_angles().step_by(ORBIT_POLL_ANGLES / segment_count))
            .enumerate()
        {
            let expected = orbit.get_semi_major_axis() * (1.0 - orbit.get_eccentricity().powi(2))
                / (1.0 + orbit.get_eccentricity() * theta.cos());

            assert_almost_eq(
                point.length().log2(),
                expected.log2(),
                &format!("distance of point {i} of {orbit:?}"),
            );
        }
    }
}

#[test]
fn sample_circle_matches_advance() {
    for _ in 0..RANDOM_ITERS {
        let orbit = CompactOrbitalElements {
            mean_anomaly: 0.0,
            ..random_circular()
        };
        let segment_count = 128;
        let frame = orbit.get_orbital_period() / segment_count as f64;

        let mut state = OrbitState::new(&orbit);
        let points = sample(&orbit, segment_count);

        assert_almost_eq_vec3_rescale(
            points[0],
            advance(&mut state, &orbit, 0.0, 1.0),
            &format!("first point of {orbit:?}"),
        );
        for (i, point) in points.iter().enumerate().skip(1) {
            assert_almost_eq_vec3_rescale(
                *point,
                advance(&mut state, &orbit, frame, 1.0),
                &format!("point {i} of {orbit:?}"),
            );
        }
    }
}

#[test]
fn sample_iter_both_ends() {
    let orbit = OrbitalElements::new(3.0, 0.6, 0.5, 1.0, 2.0, 0.0, 1.0);
    let forward: Vec<DVec3> = sample_iter(&orbit, 32).collect();
    let mut backward: Vec<DVec3> = sample_iter(&orbit, 32).rev().collect();
    backward.reverse();

    assert_eq!(forward, backward);

    let mut iter = sample_iter(&orbit, 32);
    assert_eq!(iter.len(), 33);
    iter.next();
    iter.next_back();
    assert_eq!(iter.len(), 31);
    assert_eq!(iter.count(), 31);
}

#[test]
fn validate_rejects_bad_elements() {
    let cases = [
        (
            CompactOrbitalElements::new(1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0),
            ElementsError::EccentricityOutOfRange(1.0),
        ),
        (
            CompactOrbitalElements::new(1.0, -0.1, 0.0, 0.0, 0.0, 0.0, 1.0),
            ElementsError::EccentricityOutOfRange(-0.1),
        ),
        (
            CompactOrbitalElements::new(0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 1.0),
            ElementsError::NonPositiveSemiMajorAxis(0.0),
        ),
        (
            CompactOrbitalElements::new(1.0, 0.5, 0.0, 0.0, 0.0, 0.0, -1.0),
            ElementsError::NonPositiveMeanMotion(-1.0),
        ),
        (
            CompactOrbitalElements::new(1.0, 0.5, f64::NAN, 0.0, 0.0, 0.0, 1.0),
            ElementsError::NonFinite,
        ),
        (
            CompactOrbitalElements::new(f64::INFINITY, 0.5, 0.0, 0.0, 0.0, 0.0, 1.0),
            ElementsError::NonFinite,
        ),
    ];

    for (elements, expected) in cases {
        assert_eq!(elements.validate(), Err(expected), "{elements:?}");
        assert_eq!(
            OrbitalElements::from(elements.clone()).validate(),
            Err(expected),
            "cached {elements:?}"
        );
    }

    for _ in 0..RANDOM_ITERS {
        let orbit = random_any();
        assert_eq!(orbit.validate(), Ok(()), "{orbit:?}");
    }
}

#[test]
fn element_constructors() {
    let by_period = OrbitalElements::with_period(2.0, 0.1, 0.0, 0.0, 0.0, 0.0, 4.0);
    assert_almost_eq(by_period.get_mean_motion(), FRAC_PI_2, "mean motion from period");
    assert_almost_eq(by_period.get_orbital_period(), 4.0, "period round trip");

    let by_degrees = OrbitalElements::from_degrees(2.0, 0.1, 45.0, 90.0, 180.0, 270.0, 4.0);
    assert_almost_eq(by_degrees.get_inclination(), PI / 4.0, "inclination");
    assert_almost_eq(by_degrees.get_arg_pe(), FRAC_PI_2, "argument of periapsis");
    assert_almost_eq(by_degrees.get_long_asc_node(), PI, "longitude of ascending node");
    assert_almost_eq(
        by_degrees.get_mean_anomaly_at_epoch(),
        1.5 * PI,
        "mean anomaly at epoch",
    );

    let scaled = by_degrees.scaled(10.0);
    assert_eq!(scaled.get_semi_major_axis(), 20.0);
    assert_eq!(
        scaled.get_transformation_matrix(),
        by_degrees.get_transformation_matrix()
    );
}
