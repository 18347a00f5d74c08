pub mod state;
pub mod error;
pub mod drift;
pub mod diffusion;
pub mod noise;
pub mod integrators;
pub mod trajectory;

// Core types
pub type F = f64;
pub use state::{State, Time};
pub use error::SimulationError;
pub use noise::NoiseSource;

// SDE traits
pub use drift::Drift;
pub use diffusion::Diffusion;

// Integrators
pub use integrators::{EulerMaruyama, SdeIntegrator};

// Trajectory container
pub use trajectory::Trajectory;
