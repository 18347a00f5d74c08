use driftbif_core::error::{require_non_negative, require_positive, require_positive_count};
use driftbif_core::{
    Diffusion, Drift, EulerMaruyama, NoiseSource, SdeIntegrator, SimulationError, State, Time,
    Trajectory,
};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Physical parameters of one retardation/noise configuration.
///
/// Defaults follow the reference dissipative-soliton model; `delta_t` is
/// small enough that the explicit scheme tracks the closed-form relaxation
/// solution to 8 decimals over a 100-step horizon.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SolitonParams {
    /// Retardation/memory time, the bifurcation control parameter.
    pub tau: f64,
    /// Inverse critical retardation time; the bifurcation sits at `1/kappa_3`.
    pub kappa_3: f64,
    /// Noise-shape coefficient of the soliton.
    pub q: f64,
    /// Noise strength; zero selects the noise-free deterministic regime.
    pub r: f64,
    /// Fixed integration time step.
    pub delta_t: f64,
}

impl Default for SolitonParams {
    fn default() -> Self {
        Self {
            tau: 3.8,
            kappa_3: 0.3,
            q: 1950.0,
            r: 3e-4,
            delta_t: 1e-3,
        }
    }
}

/// Velocity model of a dissipative soliton near its drift bifurcation:
///
///   dv = v * (κ₃(κ₃τ - 1) - (Q/κ₃)|v|²) dt + R √Q dW
///
/// Below `τ = 1/κ₃` the origin is the only stable fixed point; above it the
/// soliton drifts with the equilibrium speed `deterministic`. Immutable
/// after construction; one instance backs exactly one trajectory run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DissipativeSoliton {
    tau: f64,
    kappa_3: f64,
    q: f64,
    r: f64,
    delta_t: f64,
    deterministic: f64,
    label: u8,
}

impl DissipativeSoliton {
    /// Default retardation time of the reference model.
    pub const DEFAULT_TAU: f64 = 3.8;
    /// Default inverse critical time.
    pub const DEFAULT_KAPPA_3: f64 = 0.3;
    /// Default noise-shape coefficient.
    pub const DEFAULT_Q: f64 = 1950.0;
    /// Default ambient noise strength.
    pub const DEFAULT_R: f64 = 3e-4;
    /// Default integration step.
    pub const DEFAULT_DELTA_T: f64 = 1e-3;

    /// Model with ambient noise strength.
    pub fn new(tau: f64) -> Result<Self, SimulationError> {
        Self::with_noise(tau, Self::DEFAULT_R)
    }

    /// Model keyed by `(tau, R)`; `r = 0` disables noise.
    pub fn with_noise(tau: f64, r: f64) -> Result<Self, SimulationError> {
        Self::from_params(&SolitonParams {
            tau,
            r,
            ..SolitonParams::default()
        })
    }

    pub fn from_params(params: &SolitonParams) -> Result<Self, SimulationError> {
        require_positive("tau", params.tau)?;
        require_positive("kappa_3", params.kappa_3)?;
        require_positive("q", params.q)?;
        require_non_negative("r", params.r)?;
        require_positive("delta_t", params.delta_t)?;

        let tau_c = 1.0 / params.kappa_3;
        let supercritical = params.tau > tau_c;
        // Supercritical branch amplitude: κ₃^1.5 √((τ - 1/κ₃)/Q), else 0.
        let deterministic = if supercritical {
            params.kappa_3.powf(1.5) * ((params.tau - tau_c) / params.q).sqrt()
        } else {
            0.0
        };

        Ok(Self {
            tau: params.tau,
            kappa_3: params.kappa_3,
            q: params.q,
            r: params.r,
            delta_t: params.delta_t,
            deterministic,
            label: supercritical as u8,
        })
    }

    pub fn tau(&self) -> f64 {
        self.tau
    }

    pub fn kappa_3(&self) -> f64 {
        self.kappa_3
    }

    pub fn q(&self) -> f64 {
        self.q
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Critical retardation time `1/κ₃`.
    pub fn critical_tau(&self) -> f64 {
        1.0 / self.kappa_3
    }

    /// Asymptotic drift speed of the unperturbed system. Exactly zero at
    /// and below the bifurcation point.
    pub fn deterministic(&self) -> f64 {
        self.deterministic
    }

    /// Regime label: 1 above the bifurcation, 0 at or below it.
    pub fn label(&self) -> u8 {
        self.label
    }

    /// Linear drift coefficient κ₃(κ₃τ - 1). Vanishes at the bifurcation,
    /// positive above it.
    pub fn growth_rate(&self) -> f64 {
        self.kappa_3 * (self.kappa_3 * self.tau - 1.0)
    }

    /// Cubic saturation coefficient Q/κ₃.
    pub fn saturation(&self) -> f64 {
        self.q / self.kappa_3
    }

    /// Per-step noise amplitude R √(Q Δt).
    pub fn noise_amplitude(&self) -> f64 {
        self.r * (self.q * self.delta_t).sqrt()
    }

    /// Integrates `nt` fixed steps from `v0`, the first trajectory state
    /// being `v0` itself at `t = 0`.
    ///
    /// With `r = 0` the run is fully deterministic and consumes no entropy
    /// from `noise`.
    pub fn simulate(
        &self,
        nt: usize,
        v0: State,
        noise: &mut NoiseSource,
    ) -> Result<Trajectory, SimulationError> {
        require_positive_count("nt", nt)?;
        if !v0.is_finite() {
            return Err(SimulationError::invalid_parameter(
                "v0",
                "initial state must be finite",
            ));
        }

        let integrator = EulerMaruyama;
        let sqrt_dt = self.delta_t.sqrt();
        let dim = v0.dim();
        let zero_dw = State::zeros(dim);

        let mut trajectory = Trajectory::with_capacity(nt);
        let mut x = v0;
        let mut t = 0.0;
        trajectory.push(t, x.clone());

        for _ in 1..nt {
            let dw = if self.r == 0.0 {
                zero_dw.clone()
            } else {
                noise.wiener_increments(dim, sqrt_dt)
            };
            x = integrator.step(t, &x, self.delta_t, &dw, self, self);
            t += self.delta_t;
            trajectory.push(t, x.clone());
        }

        Ok(trajectory)
    }

    /// `simulate` with a private noise stream seeded from `seed`.
    pub fn simulate_seeded(
        &self,
        nt: usize,
        v0: State,
        seed: u64,
    ) -> Result<Trajectory, SimulationError> {
        let mut noise = NoiseSource::from_seed(seed);
        self.simulate(nt, v0, &mut noise)
    }
}

impl Drift for DissipativeSoliton {
    fn mu(&self, _t: Time, x: &State) -> State {
        let speed_sq = x.0.dot(&x.0);
        let factor = self.growth_rate() - self.saturation() * speed_sq;
        State(&x.0 * factor)
    }
}

impl Diffusion for DissipativeSoliton {
    fn sigma(&self, _t: Time, x: &State) -> DMatrix<f64> {
        let n = x.dim();
        // Additive isotropic noise: R √Q * I
        DMatrix::from_diagonal_element(n, n, self.r * self.q.sqrt())
    }
}
