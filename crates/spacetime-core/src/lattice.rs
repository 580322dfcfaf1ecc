use glam::Vec3;

use crate::body::Body;
use crate::config::SimulationConfig;
use crate::error::SimError;
use crate::field::resample;

/// Upper bound on vertices a generated grid may hold.
pub const MAX_LATTICE_VERTICES: usize = 1 << 24;

/// Sample points whose x/z layout is fixed at construction.
///
/// Only heights change afterwards, and only through [`Lattice::resampled`]
/// or [`Lattice::resample_in_place`].
#[derive(Clone, Debug, PartialEq)]
pub struct Lattice {
    points: Vec<Vec3>,
}

impl Lattice {
    pub fn from_points(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    /// Wireframe grid as consecutive line-segment vertex pairs, centred on the
    /// origin in x/z at height `base_height`.
    ///
    /// `cols = ceil(width / cell_size)`, `rows = ceil(height / cell_size)`.
    /// The first sweep draws segments along x for `cols + 2` z rows, the second
    /// draws segments along z for `rows + 2` x columns.
    pub fn line_grid(width: f32, height: f32, cell_size: f32, base_height: f32) -> Result<Self, SimError> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(SimError::InvalidCellSize(cell_size));
        }
        for (name, value) in [("width", width), ("height", height)] {
            if !value.is_finite() || value < 0.0 {
                return Err(SimError::InvalidExtent { name, value });
            }
        }
        let cols_f = (width / cell_size).ceil();
        let rows_f = (height / cell_size).ceil();
        let too_large = SimError::LatticeTooLarge {
            cols: cols_f,
            rows: rows_f,
            max: MAX_LATTICE_VERTICES,
        };
        // Either side alone past the cap already implies more vertices than allowed.
        let limit = MAX_LATTICE_VERTICES as f32;
        if !(cols_f <= limit && rows_f <= limit) {
            return Err(too_large);
        }
        let (cols, rows) = (cols_f as usize, rows_f as usize);
        let len = match Self::line_grid_len(cols, rows) {
            Some(len) if len <= MAX_LATTICE_VERTICES => len,
            _ => return Err(too_large),
        };
        let half = cols as f32 * cell_size / 2.0;

        let mut points = Vec::with_capacity(len);
        for z_step in 0..=cols + 1 {
            let z = z_step as f32 * cell_size - half;
            for x_step in 0..=rows {
                let x0 = x_step as f32 * cell_size - half;
                points.push(Vec3::new(x0, base_height, z));
                points.push(Vec3::new(x0 + cell_size, base_height, z));
            }
        }
        for x_step in 0..=rows + 1 {
            let x = x_step as f32 * cell_size - half;
            for z_step in 0..=cols {
                let z0 = z_step as f32 * cell_size - half;
                points.push(Vec3::new(x, base_height, z0));
                points.push(Vec3::new(x, base_height, z0 + cell_size));
            }
        }
        Ok(Self { points })
    }

    /// Vertex count produced by [`Lattice::line_grid`] for a `cols x rows` grid,
    /// or `None` if it does not fit in `usize`.
    pub fn line_grid_len(cols: usize, rows: usize) -> Option<usize> {
        let along_x = cols.checked_add(2)?.checked_mul(rows.checked_add(1)?)?;
        let along_z = rows.checked_add(2)?.checked_mul(cols.checked_add(1)?)?;
        along_x.checked_add(along_z)?.checked_mul(2)
    }

    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Raw vertex bytes (tightly packed `[f32; 3]`) for buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.points)
    }

    /// A copy of this lattice with heights recomputed for `bodies`.
    pub fn resampled(&self, bodies: &[Body], config: &SimulationConfig) -> Self {
        Self {
            points: resample(&self.points, bodies, config),
        }
    }

    pub fn resample_in_place(&mut self, bodies: &[Body], config: &SimulationConfig) {
        self.points = resample(&self.points, bodies, config);
    }
}
