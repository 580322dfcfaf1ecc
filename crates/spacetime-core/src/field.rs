//! Spacetime curvature field.
//!
//! Each body contributes a Flamm-paraboloid embedding height
//! `dz = 2 * sqrt(rs * (d - rs))` at distance `d` (metres) from its centre,
//! where `rs` is its Schwarzschild radius. The lattice height at a point is
//! the gained sum over all bodies, shifted down by a fixed offset.

use glam::Vec3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::body::Body;
use crate::config::{RadicandPolicy, SimulationConfig};

/// Embedding height of one body at one point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Displacement {
    Defined(f32),
    /// The point lies inside the body's Schwarzschild radius.
    Undefined,
}

impl Displacement {
    /// Resolve to a number under `policy`.
    #[inline]
    pub fn resolve(self, policy: RadicandPolicy) -> f32 {
        match (self, policy) {
            (Displacement::Defined(dz), _) => dz,
            (Displacement::Undefined, RadicandPolicy::Propagate) => f32::NAN,
            (Displacement::Undefined, RadicandPolicy::Clamp) => 0.0,
        }
    }
}

/// Embedding height of `body` at `point`, measured in full 3D.
///
/// [`GravityField`] flattens lattice points to `y = 0` before calling this.
pub fn displacement(point: Vec3, body: &Body, config: &SimulationConfig) -> Displacement {
    let rs = config.schwarzschild_radius(body.mass);
    let dist_m = config.to_meters((body.position - point).length());
    let radicand = rs * (dist_m - rs);
    if radicand < 0.0 {
        Displacement::Undefined
    } else {
        Displacement::Defined(2.0 * radicand.sqrt())
    }
}

/// Read-only view of the bodies that shape the lattice for one frame.
pub struct GravityField<'a> {
    bodies: &'a [Body],
    config: &'a SimulationConfig,
}

impl<'a> GravityField<'a> {
    pub fn new(bodies: &'a [Body], config: &'a SimulationConfig) -> Self {
        Self { bodies, config }
    }

    /// Lattice height at the x/z location of `point`.
    pub fn height_at(&self, point: Vec3) -> f32 {
        let flat = Vec3::new(point.x, 0.0, point.z);
        let policy = self.config.radicand_policy;
        let total: f32 = self
            .bodies
            .iter()
            .map(|body| displacement(flat, body, self.config).resolve(policy) * self.config.height_gain)
            .sum();
        total - self.config.height_offset
    }

    /// New points with recomputed heights; x and z are copied through.
    pub fn sample(&self, points: &[Vec3]) -> Vec<Vec3> {
        let warp = |p: &Vec3| Vec3::new(p.x, self.height_at(*p), p.z);

        #[cfg(feature = "parallel")]
        let out: Vec<Vec3> = points.par_iter().map(warp).collect();

        #[cfg(not(feature = "parallel"))]
        let out: Vec<Vec3> = points.iter().map(warp).collect();

        out
    }
}

/// Recompute lattice heights for the given bodies. Pure.
pub fn resample(points: &[Vec3], bodies: &[Body], config: &SimulationConfig) -> Vec<Vec3> {
    GravityField::new(bodies, config).sample(points)
}
