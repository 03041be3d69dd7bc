//! Frame-by-frame orbit propagation.
//!
//! The render loop calls [`advance`] once per frame for every tracked body,
//! passing the time elapsed since the previous frame. The body's
//! [`OrbitState`] moves forward and the new position comes back.
//!
//! # Speed multiplier
//! Real orbits are slow. The Moon takes about 27 days to go around the
//! Earth, and nobody wants to watch that in real time. Every call takes an
//! explicit `speed_multiplier`, which scales the elapsed time before it is
//! applied to the orbit, so one second of wall-clock time can stand for a
//! day, a week or a year of orbital motion. There is no hidden default:
//! pick the one that suits your scene, and keep it the same for all bodies
//! that should move in step.

use glam::{DVec2, DVec3};

use crate::{wrap_two_pi, KeplerSolveError, OrbitState, OrbitTrait};

/// Advances `state` by `elapsed_time * speed_multiplier` and returns the
/// body's new position.
///
/// Steps:
/// 1. The mean anomaly moves forward by `mean_motion * elapsed_time * speed_multiplier`
///    and is wrapped back into `[0, 2π)`.
/// 2. Kepler's equation is solved for the eccentric anomaly, using
///    [`KEPLER_ITERATIONS`][crate::KEPLER_ITERATIONS] fixed Newton-Raphson
///    steps.
/// 3. The true anomaly and distance follow from the eccentric anomaly.
/// 4. The in-plane position is tilted into the scene frame.
///
/// The new true anomaly is stored in `state` as a side effect.
///
/// # Contract
/// `elapsed_time` must not be negative, `speed_multiplier` must be positive,
/// and the eccentricity must be in `[0, 1)`. These are checked with debug
/// assertions only. In release builds, an eccentricity of 1 or more produces
/// non-finite coordinates rather than a panic.
///
/// The fixed iteration count is accurate for eccentricities below
/// [`MAX_FAST_SOLVE_ECCENTRICITY`][crate::MAX_FAST_SOLVE_ECCENTRICITY]. For
/// anything more eccentric, use [`advance_precise`].
///
/// # Example
/// ```
/// use std::f64::consts::PI;
///
/// use orrery_sim::{advance, OrbitState, OrbitTrait, OrbitalElements};
///
/// // Half an orbit per unit time
/// let elements = OrbitalElements::new(10.0, 0.5, 0.0, 0.0, 0.0, 0.0, PI);
/// let mut state = OrbitState::new(&elements);
///
/// // Half a unit of real time, sped up four times
/// let position = advance(&mut state, &elements, 0.5, 4.0);
///
/// // A full period later, back at periapsis
/// assert!(state.mean_anomaly() < 1e-9 || state.mean_anomaly() > 2.0 * PI - 1e-9);
/// assert!((position.length() - elements.get_periapsis()).abs() < 1e-9);
/// ```
pub fn advance(
    state: &mut OrbitState,
    elements: &impl OrbitTrait,
    elapsed_time: f64,
    speed_multiplier: f64,
) -> DVec3 {
    debug_assert_contract(elements, elapsed_time, speed_multiplier);

    propagate_mean_anomaly(state, elements, elapsed_time, speed_multiplier);

    let eccentric_anomaly = elements.get_eccentric_anomaly_at_mean_anomaly(state.mean_anomaly);
    place_at_eccentric_anomaly(state, elements, eccentric_anomaly)
}

/// Advances `state` like [`advance`], but solves Kepler's equation until its
/// residual is below `tolerance`, giving up after `max_iterations` steps.
///
/// This is the path for bodies whose eccentricity is too high for the
/// fixed-iteration solver, like long-period comets.
///
/// # Errors
/// Returns [`KeplerSolveError::NoConvergence`] when the solve gives up. Time
/// still passes in that case: the mean anomaly has already been moved
/// forward, but the true anomaly keeps its previous value and no position is
/// produced.
///
/// # Example
/// ```
/// use orrery_sim::{advance_precise, OrbitState, OrbitTrait, OrbitalElements};
///
/// let comet = OrbitalElements::new(17.8, 0.967, 2.83, 1.95, 1.02, 0.0, 0.0813);
/// let mut state = OrbitState::new(&comet);
///
/// let position = advance_precise(&mut state, &comet, 1.0, 1.0, 1e-12, 50).unwrap();
///
/// assert!(position.length() >= comet.get_periapsis() - 1e-9);
/// assert!(position.length() <= comet.get_apoapsis() + 1e-9);
/// ```
pub fn advance_precise(
    state: &mut OrbitState,
    elements: &impl OrbitTrait,
    elapsed_time: f64,
    speed_multiplier: f64,
    tolerance: f64,
    max_iterations: u32,
) -> Result<DVec3, KeplerSolveError> {
    debug_assert_contract(elements, elapsed_time, speed_multiplier);

    propagate_mean_anomaly(state, elements, elapsed_time, speed_multiplier);

    let eccentric_anomaly = elements
        .try_get_eccentric_anomaly_at_mean_anomaly(state.mean_anomaly, tolerance, max_iterations)
        .inspect_err(|err| log::warn!("{err}"))?;

    Ok(place_at_eccentric_anomaly(state, elements, eccentric_anomaly))
}

fn propagate_mean_anomaly(
    state: &mut OrbitState,
    elements: &impl OrbitTrait,
    elapsed_time: f64,
    speed_multiplier: f64,
) {
    state.mean_anomaly = wrap_two_pi(
        state.mean_anomaly + elements.get_mean_motion() * elapsed_time * speed_multiplier,
    );
}

fn place_at_eccentric_anomaly(
    state: &mut OrbitState,
    elements: &impl OrbitTrait,
    eccentric_anomaly: f64,
) -> DVec3 {
    let true_anomaly = elements.get_true_anomaly_at_eccentric_anomaly(eccentric_anomaly);
    let altitude = elements.get_altitude_at_eccentric_anomaly(eccentric_anomaly);
    let (sin, cos) = true_anomaly.sin_cos();

    state.true_anomaly = true_anomaly;

    elements.transform_pqw_vector(DVec2::new(altitude * cos, altitude * sin))
}

#[inline]
fn debug_assert_contract(elements: &impl OrbitTrait, elapsed_time: f64, speed_multiplier: f64) {
    debug_assert!(
        elapsed_time >= 0.0,
        "elapsed time must not be negative, got {elapsed_time}"
    );
    debug_assert!(
        speed_multiplier > 0.0,
        "speed multiplier must be positive, got {speed_multiplier}"
    );
    debug_assert!(
        (0.0..1.0).contains(&elements.get_eccentricity()),
        "eccentricity {} is outside of [0, 1)",
        elements.get_eccentricity()
    );
}
