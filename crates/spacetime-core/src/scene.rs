use glam::Vec3;

use crate::body::Body;
use crate::error::SimError;
use crate::lattice::Lattice;

pub const LATTICE_WIDTH: f32 = 5000.0;
pub const LATTICE_HEIGHT: f32 = 5000.0;
pub const LATTICE_CELL: f32 = 70.0;
pub const LATTICE_BASE_HEIGHT: f32 = -10.0;

/// A bright central mass with two lighter bodies launched in opposite
/// directions along z.
pub fn three_body_preset() -> Result<Vec<Body>, SimError> {
    Ok(vec![
        Body::new(Vec3::new(0.0, 1.0, 50.0), Vec3::ZERO, 20.0, 4.0e23)?.with_emitter(true),
        Body::new(Vec3::new(-200.0, 1.0, 50.0), Vec3::new(0.0, 0.0, -300.0), 5.0, 6.0e21)?,
        Body::new(Vec3::new(200.0, 1.0, 50.0), Vec3::new(0.0, 0.0, 300.0), 5.0, 6.0e22)?,
    ])
}

/// The wireframe lattice the preset scene is drawn over.
pub fn default_lattice() -> Result<Lattice, SimError> {
    Lattice::line_grid(LATTICE_WIDTH, LATTICE_HEIGHT, LATTICE_CELL, LATTICE_BASE_HEIGHT)
}
