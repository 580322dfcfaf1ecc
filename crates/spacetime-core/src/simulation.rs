use glam::Vec3;

use crate::body::Body;
use crate::config::SimulationConfig;
use crate::forces::gravity::apply_gravity;
use crate::lattice::Lattice;

/// Deep copy of a body set, used to rewind the simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    bodies: Vec<Body>,
}

impl Snapshot {
    pub fn capture(bodies: &[Body]) -> Self {
        Self {
            bodies: bodies.to_vec(),
        }
    }

    /// A fresh copy of the captured bodies; the snapshot itself is untouched.
    pub fn restore(&self) -> Vec<Body> {
        self.bodies.clone()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }
}

/// One physics step over a body set: gravity from a consistent read of all
/// positions, then integration (and boundary resolution) of every body.
pub fn step(bodies: &mut [Body], config: &SimulationConfig) {
    let mut scratch = Vec::with_capacity(bodies.len());
    step_with_scratch(bodies, config, &mut scratch);
}

fn step_with_scratch(bodies: &mut [Body], config: &SimulationConfig, scratch: &mut Vec<Vec3>) {
    apply_gravity(bodies, config, scratch);
    for (i, body) in bodies.iter_mut().enumerate() {
        body.integrate(config);
        if !config.in_depth_watch(body.position) {
            log::warn!("body {} out of bounds: z = {}", i, body.position.z);
        }
    }
}

/// Live body set plus everything needed to step and rewind it.
pub struct Simulation {
    pub bodies: Vec<Body>,
    pub config: SimulationConfig,
    initial: Snapshot,
    reset_requested: bool,
    accelerations: Vec<Vec3>,
}

impl Simulation {
    /// Start from `bodies`; a snapshot of them becomes the reset target.
    pub fn new(bodies: Vec<Body>, config: SimulationConfig) -> Self {
        let initial = Snapshot::capture(&bodies);
        let accelerations = Vec::with_capacity(bodies.len());
        Self {
            bodies,
            config,
            initial,
            reset_requested: false,
            accelerations,
        }
    }

    /// Ask for a reset. It takes effect at the start of the next [`Simulation::step`].
    pub fn request_reset(&mut self) {
        self.reset_requested = true;
    }

    pub fn reset_pending(&self) -> bool {
        self.reset_requested
    }

    /// Replace the live set with a copy of the initial snapshot right now.
    pub fn reset(&mut self) {
        self.bodies = self.initial.restore();
        self.reset_requested = false;
        log::debug!("simulation reset to {} bodies", self.bodies.len());
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.bodies)
    }

    /// Replace the live set wholesale with the contents of `snapshot`.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.bodies = snapshot.restore();
    }

    /// Make `snapshot` the target of future resets.
    pub fn set_initial(&mut self, snapshot: Snapshot) {
        self.initial = snapshot;
    }

    pub fn step(&mut self) {
        if self.reset_requested {
            self.reset();
        }
        step_with_scratch(&mut self.bodies, &self.config, &mut self.accelerations);
    }

    /// Lattice heights for the current (fully integrated) body set.
    pub fn resample(&self, lattice: &Lattice) -> Lattice {
        lattice.resampled(&self.bodies, &self.config)
    }

    /// Positions of light-emitting bodies, in body order.
    pub fn emitter_positions(&self) -> Vec<Vec3> {
        self.bodies
            .iter()
            .filter(|b| b.is_emitter)
            .map(Body::position)
            .collect()
    }
}
