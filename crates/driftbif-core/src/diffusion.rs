use crate::{State, Time};
use nalgebra::DMatrix;

pub trait Diffusion: Send + Sync {
    /// σ(t,x) as a matrix mapping dW (R^m) -> state (R^n)
    fn sigma(&self, t: Time, x: &State) -> DMatrix<f64>;

    /// Number of noise dimensions (columns in σ matrix)
    fn noise_dim(&self, t: Time, x: &State) -> usize {
        self.sigma(t, x).ncols()
    }
}
