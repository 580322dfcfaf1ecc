use glam::Vec3;

use crate::config::SimulationConfig;
use crate::constraints::boundary::resolve_boundary;
use crate::error::SimError;

/// A point mass with a visual radius.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub position: Vec3,
    pub velocity: Vec3,
    pub radius: f32,
    pub mass: f32,
    /// Marks the body as a light source for the renderer. Ignored by the physics.
    pub is_emitter: bool,
}

impl Body {
    /// Build a body, rejecting negative or non-finite mass and radius.
    pub fn new(position: Vec3, velocity: Vec3, radius: f32, mass: f32) -> Result<Self, SimError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(SimError::InvalidRadius(radius));
        }
        if !mass.is_finite() || mass < 0.0 {
            return Err(SimError::InvalidMass(mass));
        }
        Ok(Self {
            position,
            velocity,
            radius,
            mass,
            is_emitter: false,
        })
    }

    pub fn with_emitter(mut self, is_emitter: bool) -> Self {
        self.is_emitter = is_emitter;
        self
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Add `force / dampening` to the velocity.
    ///
    /// Callers pass an acceleration-like quantity; mass is not applied here.
    /// Non-finite input propagates into the velocity unchanged.
    #[inline]
    pub fn apply_force(&mut self, force: Vec3, config: &SimulationConfig) {
        self.velocity += force / config.dampening;
    }

    /// Advance the position by `velocity / dampening`, then resolve the
    /// boundary if collisions are enabled.
    pub fn integrate(&mut self, config: &SimulationConfig) {
        self.position += self.velocity / config.dampening;
        if config.collisions_enabled {
            resolve_boundary(self, &config.bounds);
        }
    }
}
