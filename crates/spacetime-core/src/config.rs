use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constraints::boundary::BoundingBox;

/// Gravitational constant (m^3 kg^-1 s^-2).
pub const G: f32 = 6.6743e-11;
/// Speed of light (m/s).
pub const C: f32 = 299_792_458.0;
/// Divisor applied to every force and velocity before it is integrated.
pub const DEFAULT_DAMPENING: f32 = 150.0;
/// Scene units are treated as kilometres by the force law and the field.
pub const METERS_PER_UNIT: f32 = 1000.0;

/// What the displacement sampler does with a point inside a Schwarzschild radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadicandPolicy {
    /// The whole point height becomes NaN.
    Propagate,
    /// The radicand is clamped to zero, so the body contributes nothing.
    Clamp,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub gravitational_constant: f32,
    pub speed_of_light: f32,
    /// Virtual per-step impulse scale. Wall-clock time never enters the update.
    pub dampening: f32,
    /// Pairs closer than `radius * min_distance_factor` exert no gravity.
    pub min_distance_factor: f32,
    pub meters_per_unit: f32,
    pub collisions_enabled: bool,
    pub bounds: BoundingBox,
    /// Multiplier on every body's embedding height before summing.
    pub height_gain: f32,
    /// Subtracted from the summed height to recenter the lattice.
    pub height_offset: f32,
    pub radicand_policy: RadicandPolicy,
    /// Depth band outside which a body is reported as lost.
    pub depth_watch: [f32; 2],
}

impl SimulationConfig {
    /// Schwarzschild radius in metres for `mass` under this config's constants.
    #[inline]
    pub fn schwarzschild_radius(&self, mass: f32) -> f32 {
        2.0 * self.gravitational_constant * mass / (self.speed_of_light * self.speed_of_light)
    }

    #[inline]
    pub fn to_meters(&self, distance: f32) -> f32 {
        distance * self.meters_per_unit
    }

    pub fn in_depth_watch(&self, position: Vec3) -> bool {
        position.z >= self.depth_watch[0] && position.z <= self.depth_watch[1]
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: G,
            speed_of_light: C,
            dampening: DEFAULT_DAMPENING,
            min_distance_factor: 4.0,
            meters_per_unit: METERS_PER_UNIT,
            collisions_enabled: false,
            bounds: BoundingBox::default(),
            height_gain: 2.0,
            height_offset: 300.0,
            radicand_policy: RadicandPolicy::Propagate,
            depth_watch: [-100_000.0, 10_000.0],
        }
    }
}
