use glam::Vec3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::body::Body;
use crate::config::SimulationConfig;

/// Acceleration that `source` induces on `target`, or `None` when the pair is
/// inside the target's minimum interaction distance.
///
/// The distance is converted to metres before the inverse-square law is
/// applied, so `G * M / d^2` works on real masses. Coincident bodies have no
/// defined direction and are skipped as well.
#[inline]
pub fn pair_acceleration(target: &Body, source: &Body, config: &SimulationConfig) -> Option<Vec3> {
    let diff = source.position - target.position;
    let dist = diff.length();
    if dist < target.radius * config.min_distance_factor || dist <= 0.0 {
        return None;
    }
    let direction = diff / dist;
    let dist_m = config.to_meters(dist);
    let magnitude = config.gravitational_constant * source.mass / (dist_m * dist_m);
    Some(direction * magnitude)
}

/// Total acceleration on body `i` from every other body. O(N).
fn acceleration_on(i: usize, bodies: &[Body], config: &SimulationConfig) -> Vec3 {
    let target = &bodies[i];
    let mut acc = Vec3::ZERO;
    for (j, source) in bodies.iter().enumerate() {
        if i == j {
            continue;
        }
        if let Some(a) = pair_acceleration(target, source, config) {
            acc += a;
        }
    }
    acc
}

/// Direct O(N^2) gravity: `out[i]` is overwritten with the acceleration on body `i`.
///
/// Every ordered pair is evaluated, so each unordered pair is visited twice.
/// Only positions are read; nothing in `bodies` is modified.
pub fn accumulate_gravity(bodies: &[Body], config: &SimulationConfig, out: &mut [Vec3]) {
    debug_assert_eq!(bodies.len(), out.len());

    #[cfg(feature = "parallel")]
    {
        out.par_iter_mut()
            .enumerate()
            .for_each(|(i, acc)| *acc = acceleration_on(i, bodies, config));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (i, acc) in out.iter_mut().enumerate() {
            *acc = acceleration_on(i, bodies, config);
        }
    }
}

/// Accumulate gravity for the whole set, then apply it to every body.
///
/// All reads happen before the first write, so the result does not depend on
/// body order.
pub fn apply_gravity(bodies: &mut [Body], config: &SimulationConfig, scratch: &mut Vec<Vec3>) {
    scratch.clear();
    scratch.resize(bodies.len(), Vec3::ZERO);
    accumulate_gravity(bodies, config, scratch);
    for (body, acc) in bodies.iter_mut().zip(scratch.iter()) {
        body.apply_force(*acc, config);
    }
}
