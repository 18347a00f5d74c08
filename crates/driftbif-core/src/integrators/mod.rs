pub mod euler_maruyama;

use crate::diffusion::Diffusion;
use crate::drift::Drift;
use crate::{State, Time};

pub use euler_maruyama::EulerMaruyama;

pub trait SdeIntegrator: Send + Sync {
    fn step(
        &self,
        t: Time,
        x: &State,
        dt: f64,
        dw: &State,
        drift: &impl Drift,
        diffusion: &impl Diffusion,
    ) -> State;
}
