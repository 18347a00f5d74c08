use super::SdeIntegrator;
use crate::diffusion::Diffusion;
use crate::drift::Drift;
use crate::{State, Time};

/// Explicit fixed-step Euler–Maruyama scheme.
///
/// Non-adaptive and non-failing: overflow for pathological parameters is
/// left visible in the trajectory rather than masked.
#[derive(Clone, Copy, Debug)]
pub struct EulerMaruyama;

impl SdeIntegrator for EulerMaruyama {
    fn step(
        &self,
        t: Time,
        x: &State,
        dt: f64,
        dw: &State,
        drift: &impl Drift,
        diffusion: &impl Diffusion,
    ) -> State {
        let mu = drift.mu(t, x);
        let sigma = diffusion.sigma(t, x);

        // X_{t+dt} = X_t + μ*dt + σ*dW
        State(&x.0 + &mu.0 * dt + sigma * &dw.0)
    }
}
