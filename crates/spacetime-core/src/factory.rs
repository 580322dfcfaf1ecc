use std::ops::RangeInclusive;

use glam::Vec3;
use rand::Rng;

use crate::body::Body;
use crate::error::SimError;

/// Placement attempts per body before an overlapping candidate is accepted.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 50;
/// Extra gap required between two bodies' surfaces.
pub const PLACEMENT_MARGIN: f32 = 2.0;

/// Uniform random body generator with best-effort non-overlapping placement.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyFactory {
    pub position: [RangeInclusive<f32>; 3],
    pub velocity: [RangeInclusive<f32>; 3],
    pub radius: RangeInclusive<f32>,
    pub mass: f32,
    pub max_attempts: usize,
}

impl Default for BodyFactory {
    fn default() -> Self {
        Self {
            position: [0.0..=500.0, 0.0..=500.0, 0.0..=500.0],
            velocity: [0.0..=0.0, 0.0..=0.0, 0.0..=0.0],
            radius: 4.0..=10.0,
            mass: 6.0e22,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

fn check_range(name: &'static str, range: &RangeInclusive<f32>) -> Result<(), SimError> {
    let (min, max) = (*range.start(), *range.end());
    // The uniform sampler rescales the span, so it needs headroom below f32::MAX.
    if !min.is_finite() || !max.is_finite() || min > max || !((max - min) * 2.0).is_finite() {
        return Err(SimError::InvalidRange { name, min, max });
    }
    Ok(())
}

/// Uniform draw; a degenerate range yields its single value without touching the rng.
#[inline]
fn draw<R: Rng + ?Sized>(rng: &mut R, range: &RangeInclusive<f32>) -> f32 {
    if range.start() == range.end() {
        return *range.start();
    }
    rng.gen_range(range.clone())
}

fn sample_vec3<R: Rng + ?Sized>(rng: &mut R, ranges: &[RangeInclusive<f32>; 3]) -> Vec3 {
    Vec3::new(draw(rng, &ranges[0]), draw(rng, &ranges[1]), draw(rng, &ranges[2]))
}

impl BodyFactory {
    pub fn validate(&self) -> Result<(), SimError> {
        for (name, range) in ["position.x", "position.y", "position.z"].into_iter().zip(&self.position) {
            check_range(name, range)?;
        }
        for (name, range) in ["velocity.x", "velocity.y", "velocity.z"].into_iter().zip(&self.velocity) {
            check_range(name, range)?;
        }
        check_range("radius", &self.radius)?;
        if *self.radius.start() < 0.0 {
            return Err(SimError::InvalidRadius(*self.radius.start()));
        }
        if !self.mass.is_finite() || self.mass < 0.0 {
            return Err(SimError::InvalidMass(self.mass));
        }
        Ok(())
    }

    /// Generate `count` bodies.
    ///
    /// Per body the radius is drawn first, then up to `max_attempts` positions,
    /// then the velocity. A candidate is accepted once it clears every placed
    /// body by the sum of both radii plus [`PLACEMENT_MARGIN`]. When no attempt
    /// succeeds the last candidate is kept, so the result always has `count`
    /// bodies but may contain overlaps.
    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<Vec<Body>, SimError> {
        self.validate()?;

        let attempts = self.max_attempts.max(1);
        let mut bodies: Vec<Body> = Vec::with_capacity(count);
        for i in 0..count {
            let radius = draw(rng, &self.radius);

            let mut candidate = Vec3::ZERO;
            let mut placed = false;
            for _ in 0..attempts {
                candidate = sample_vec3(rng, &self.position);
                placed = bodies.iter().all(|other| {
                    other.position.distance(candidate) >= other.radius + radius + PLACEMENT_MARGIN
                });
                if placed {
                    break;
                }
            }
            if !placed {
                log::warn!(
                    "body {} placed after {} failed attempts; it may overlap a neighbour",
                    i,
                    attempts
                );
            }

            let velocity = sample_vec3(rng, &self.velocity);
            bodies.push(Body::new(candidate, velocity, radius, self.mass)?);
        }
        Ok(bodies)
    }
}
