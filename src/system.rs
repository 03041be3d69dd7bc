use core::fmt;
use std::collections::HashMap;

use glam::DVec3;

use crate::{
    advance, advance_precise, sample, Body, OrbitState, OrbitTrait, OrbitalElements,
    MAX_FAST_SOLVE_ECCENTRICITY,
};

/// Identifies a body within a [`System`].
pub type Id = u64;

/// Residual tolerance for bodies too eccentric for the fixed-iteration solver.
const PRECISE_TOLERANCE: f64 = 1e-12;

/// Iteration cap for bodies too eccentric for the fixed-iteration solver.
const PRECISE_MAX_ITERATIONS: u32 = 50;

/// Struct that represents a simulated planetary system: a hierarchy of
/// bodies and the orbit state of each one.
///
/// The system is the only owner of each body's [`OrbitState`]. Rendering
/// code reads states and positions through shared references and never
/// mutates them.
#[derive(Clone, Debug, PartialEq)]
pub struct System {
    /// The celestial bodies in the system and their relations.
    bodies: HashMap<Id, BodyWrapper>,

    /// The next ID to assign to a body.
    next_id: Id,

    /// The simulated time elapsed since the system was created, after the
    /// speed multiplier has been applied.
    pub time: f64,

    /// How much faster than real time the orbits move.
    ///
    /// Applied to every body on every [`tick`][System::tick].
    pub speed_multiplier: f64,
}

/// The parent and satellites of a body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BodyRelation {
    /// The body this one orbits, if any.
    pub parent: Option<Id>,
    /// The bodies orbiting this one.
    pub satellites: Vec<Id>,
}

#[derive(Clone, Debug, PartialEq)]
struct BodyWrapper {
    body: Body,
    relations: BodyRelation,
    state: Option<OrbitState>,
    /// Position relative to the parent, as of the last tick.
    position: DVec3,
}

/// An error to describe why adding a body to a [`System`] failed.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BodyAddError {
    /// There was no body with the given parent ID.
    #[error("there was no body with the specified parent ID")]
    ParentNotFound,
}

impl System {
    /// Creates an empty system.
    pub fn new(speed_multiplier: f64) -> System {
        System {
            bodies: HashMap::new(),
            next_id: 0,
            time: 0.0,
            speed_multiplier,
        }
    }

    /// Adds a body to the system.
    /// `body`: The body to add into the system.
    /// `satellite_of`: The ID of the body that this body is orbiting.
    /// Returns: The ID of the newly-added body.
    ///
    /// If the body has an orbit, its orbit state is created here, placed at
    /// the orbit's epoch, and its position is solved right away.
    ///
    /// # Errors
    /// If the parent doesn't exist, the body is handed back alongside
    /// [`BodyAddError::ParentNotFound`].
    pub fn add_body(
        &mut self,
        body: Body,
        satellite_of: Option<Id>,
    ) -> Result<Id, (BodyAddError, Body)> {
        if let Some(parent_id) = satellite_of {
            if !self.bodies.contains_key(&parent_id) {
                return Err((BodyAddError::ParentNotFound, body));
            }
        }

        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        let mut state = body.orbit.as_ref().map(OrbitState::new);
        let position = match (&body.orbit, &mut state) {
            (Some(orbit), Some(state)) => step_body(state, orbit, 0.0, 1.0),
            _ => None,
        }
        .unwrap_or(DVec3::ZERO);

        log::debug!("adding body '{}' as #{id} (parent: {satellite_of:?})", body.name);

        self.bodies.insert(
            id,
            BodyWrapper {
                body,
                relations: BodyRelation {
                    parent: satellite_of,
                    satellites: Vec::new(),
                },
                state,
                position,
            },
        );
        if let Some(parent_id) = satellite_of {
            if let Some(wrapper) = self.bodies.get_mut(&parent_id) {
                wrapper.relations.satellites.push(id);
            }
        }

        Ok(id)
    }

    /// Removes a body from the system.
    ///
    /// `body_id`: The ID of the body to remove.
    ///
    /// Returns: A Vec of all bodies that were removed, including the one specified.
    /// Satellites go with their parent. Their orbit states are dropped.
    /// An empty Vec is returned if the body was not found.
    pub fn remove_body(&mut self, body_id: Id) -> Vec<Body> {
        let wrapper = match self.bodies.remove(&body_id) {
            Some(wrapper) => wrapper,
            None => return Vec::new(),
        };

        log::debug!("removing body '{}' (#{body_id})", wrapper.body.name);

        let (body, relations) = (wrapper.body, wrapper.relations);
        let mut bodies = vec![body];

        // Remove the body from its parent's satellites.
        if let Some(parent_id) = relations.parent {
            if let Some(parent_wrapper) = self.bodies.get_mut(&parent_id) {
                parent_wrapper
                    .relations
                    .satellites
                    .retain(|&satellite| satellite != body_id);
            }
        }

        // Remove children
        for &satellite_id in &relations.satellites {
            bodies.append(&mut self.remove_body(satellite_id));
        }

        bodies
    }

    /// Gets the number of bodies in the system.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the system has no bodies.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Gets a Vec of all bodies in the system.
    pub fn get_bodies(&self) -> Vec<&Body> {
        self.bodies.values().map(|wrapper| &wrapper.body).collect()
    }

    /// Gets a Vec of all body relations in the system.
    pub fn get_body_relations(&self) -> Vec<&BodyRelation> {
        self.bodies
            .values()
            .map(|wrapper| &wrapper.relations)
            .collect()
    }

    /// Gets the relations of one body.
    pub fn get_body_relation(&self, id: Id) -> Option<&BodyRelation> {
        self.bodies.get(&id).map(|wrapper| &wrapper.relations)
    }

    /// Gets an immutable reference to a body in the system.
    pub fn get_body(&self, id: Id) -> Option<&Body> {
        self.bodies.get(&id).map(|wrapper| &wrapper.body)
    }

    /// Gets the orbit state of a body, if it is orbiting.
    ///
    /// This is the read-only view for the rendering layer, e.g. for
    /// displaying orbital phase through [`OrbitState::true_anomaly`].
    pub fn get_body_state(&self, id: Id) -> Option<&OrbitState> {
        self.bodies.get(&id)?.state.as_ref()
    }

    /// Gets the ID of a body with a given name.
    pub fn get_body_index_with_name(&self, name: &str) -> Option<Id> {
        self.bodies
            .iter()
            .find(|(_, w)| w.body.name == name)
            .map(|(id, _)| *id)
    }

    /// Advances every orbiting body by `elapsed_time`, scaled by the
    /// system's speed multiplier.
    ///
    /// This is meant to be called once per frame, with the time since the
    /// previous frame.
    ///
    /// Bodies with an eccentricity above [`MAX_FAST_SOLVE_ECCENTRICITY`] go
    /// through [`advance_precise`]. If that fails to converge, the body keeps
    /// its previous position for this frame.
    pub fn tick(&mut self, elapsed_time: f64) {
        debug_assert!(
            elapsed_time >= 0.0,
            "elapsed time must not be negative, got {elapsed_time}"
        );

        let speed_multiplier = self.speed_multiplier;

        for wrapper in self.bodies.values_mut() {
            let BodyWrapper {
                body,
                state,
                position,
                ..
            } = wrapper;

            let (Some(orbit), Some(state)) = (&body.orbit, state) else {
                continue;
            };

            if let Some(new_position) = step_body(state, orbit, elapsed_time, speed_multiplier) {
                *position = new_position;
            }
        }

        self.time += elapsed_time * speed_multiplier;
        log::trace!("ticked {} bodies to t={}", self.bodies.len(), self.time);
    }

    /// Gets the position of a body relative to its parent, as of the last
    /// tick.
    pub fn get_relative_position(&self, id: Id) -> Option<DVec3> {
        self.bodies.get(&id).map(|wrapper| wrapper.position)
    }

    /// Gets the absolute position of a body in the system.
    ///
    /// `id`: The ID of the body to get the position of.
    ///
    /// Returns: the body's position relative to its parent, plus the parent's
    /// absolute position, and so on up the hierarchy.
    /// The top ancestor of the body (i.e, the body with no parent) is at the origin,
    /// unless it itself has an orbit.
    pub fn get_body_position(&self, id: Id) -> Option<DVec3> {
        let wrapper = self.bodies.get(&id)?;
        let mut position = wrapper.position;

        if let Some(parent) = wrapper.relations.parent {
            if let Some(parent_position) = self.get_body_position(parent) {
                position += parent_position;
            }
        }

        Some(position)
    }

    /// Samples the orbit path of a body for display, as absolute positions.
    ///
    /// The path is centred on the parent's current position, so a moon's
    /// orbit follows its planet around. Returns `None` if the body doesn't
    /// exist or isn't orbiting anything.
    ///
    /// See [`sample`][crate::sample] for the shape of the result.
    pub fn get_orbit_path(&self, id: Id, segment_count: usize) -> Option<Vec<DVec3>> {
        let wrapper = self.bodies.get(&id)?;
        let orbit = wrapper.body.orbit.as_ref()?;

        let center = wrapper
            .relations
            .parent
            .and_then(|parent| self.get_body_position(parent))
            .unwrap_or(DVec3::ZERO);

        Some(
            sample(orbit, segment_count)
                .into_iter()
                .map(|point| point + center)
                .collect(),
        )
    }
}

/// Advances one body, picking the solver by eccentricity.
///
/// Returns `None` if the precise solver gave up, in which case the caller
/// keeps the previous position.
fn step_body(
    state: &mut OrbitState,
    orbit: &OrbitalElements,
    elapsed_time: f64,
    speed_multiplier: f64,
) -> Option<DVec3> {
    if orbit.get_eccentricity() <= MAX_FAST_SOLVE_ECCENTRICITY {
        return Some(advance(state, orbit, elapsed_time, speed_multiplier));
    }

    advance_precise(
        state,
        orbit,
        elapsed_time,
        speed_multiplier,
        PRECISE_TOLERANCE,
        PRECISE_MAX_ITERATIONS,
    )
    .ok()
}

impl Default for System {
    /// Creates an empty system running at real time.
    fn default() -> Self {
        System::new(1.0)
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "System with {} bodies, t={}",
            self.bodies.len(),
            self.time
        )
    }
}
