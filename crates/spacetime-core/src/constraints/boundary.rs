use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::body::Body;

/// Axes on which the bounding box is enforced.
///
/// The default leaves depth (z) open, so bodies may drift forward and back
/// without ever touching a wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundedAxes {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl BoundedAxes {
    pub const ALL: Self = Self { x: true, y: true, z: true };
    pub const NONE: Self = Self { x: false, y: false, z: false };

    #[inline]
    pub fn contains(&self, axis: usize) -> bool {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => false,
        }
    }
}

impl Default for BoundedAxes {
    fn default() -> Self {
        Self { x: true, y: true, z: false }
    }
}

/// Box spanning `[0, extent]` on every enabled axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundingBox {
    pub extent: Vec3,
    pub axes: BoundedAxes,
    /// Velocity multiplier on contact. Negative flips the direction.
    pub restitution: f32,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            extent: Vec3::new(1000.0, 1000.0, 1000.0),
            axes: BoundedAxes::default(),
            restitution: -0.1,
        }
    }
}

/// Clamp `position` inside the box and bounce the matching velocity component.
///
/// Per axis the upper wall is checked before the lower one. A sphere wider
/// than the box therefore ends up resting on the lower wall.
pub fn resolve_axes(position: &mut Vec3, velocity: &mut Vec3, radius: f32, bounds: &BoundingBox) {
    for axis in 0..3 {
        if !bounds.axes.contains(axis) {
            continue;
        }
        let upper = bounds.extent[axis];
        if position[axis] + radius > upper {
            position[axis] = upper - radius;
            velocity[axis] *= bounds.restitution;
        }
        if position[axis] - radius < 0.0 {
            position[axis] = radius;
            velocity[axis] *= bounds.restitution;
        }
    }
}

#[inline]
pub fn resolve_boundary(body: &mut Body, bounds: &BoundingBox) {
    let radius = body.radius;
    resolve_axes(&mut body.position, &mut body.velocity, radius, bounds);
}
