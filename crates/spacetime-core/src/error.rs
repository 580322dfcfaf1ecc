use thiserror::Error;

/// Rejected inputs. Numeric edge cases inside a step are never errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("body mass must be finite and non-negative, got {0}")]
    InvalidMass(f32),
    #[error("body radius must be finite and non-negative, got {0}")]
    InvalidRadius(f32),
    #[error("invalid {name} range {min}..={max}")]
    InvalidRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("lattice cell size must be positive and finite, got {0}")]
    InvalidCellSize(f32),
    #[error("lattice {name} must be finite and non-negative, got {value}")]
    InvalidExtent { name: &'static str, value: f32 },
    #[error("lattice of {cols}x{rows} cells exceeds {max} vertices")]
    LatticeTooLarge { cols: f32, rows: f32, max: usize },
}
