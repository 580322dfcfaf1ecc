pub mod body;
pub mod config;
pub mod constraints;
pub mod error;
pub mod factory;
pub mod field;
pub mod forces;
pub mod lattice;
pub mod scene;
pub mod simulation;

pub use body::Body;
pub use config::{RadicandPolicy, SimulationConfig};
pub use constraints::boundary::{BoundedAxes, BoundingBox};
pub use error::SimError;
pub use factory::BodyFactory;
pub use field::{resample, Displacement, GravityField};
pub use lattice::Lattice;
pub use simulation::{step, Simulation, Snapshot};
