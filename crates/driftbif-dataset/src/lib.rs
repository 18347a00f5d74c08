//! Labeled benchmark datasets from independent drift-bifurcation runs.
//!
//! `load_driftbif` samples a retardation time per example, simulates one
//! stochastic trajectory, and stacks the first velocity component of each
//! run into an `Nsamples x Nt` matrix with a matching label vector.

use driftbif_core::error::{require_positive, require_positive_count};
use driftbif_core::{NoiseSource, SimulationError, State, F};
use driftbif_models::DissipativeSoliton;
use nalgebra::{DMatrix, DVector};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Sampling defaults for dataset generation.
///
/// The tau grid spans both sides of the critical point `1/κ₃ ≈ 3.333`, so
/// classification datasets contain both regimes once `nsamples >= 2` taus
/// straddle it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Lower end of the retardation-time grid.
    pub tau_min: F,
    /// Upper end of the retardation-time grid.
    pub tau_max: F,
    /// Noise strength passed to every model instance.
    pub noise_strength: F,
    /// Spatial dimensions of the simulated velocity vector.
    pub dimensions: usize,
    /// Global seed; per-sample streams are derived from it.
    pub seed: u64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            tau_min: 2.87,
            tau_max: 3.8,
            noise_strength: DissipativeSoliton::DEFAULT_R,
            dimensions: 2,
            seed: 42,
        }
    }
}

impl DatasetConfig {
    fn validate(&self) -> Result<(), SimulationError> {
        require_positive("tau_min", self.tau_min)?;
        require_positive("tau_max", self.tau_max)?;
        if self.tau_min >= self.tau_max {
            return Err(SimulationError::invalid_parameter(
                "tau_max",
                format!(
                    "tau range must be non-degenerate, got [{}, {}]",
                    self.tau_min, self.tau_max
                ),
            ));
        }
        require_positive_count("dimensions", self.dimensions)?;
        Ok(())
    }
}

/// `nsamples` evenly spaced retardation times over the configured range.
/// Strictly increasing, so regression targets are pairwise distinct.
fn tau_grid(config: &DatasetConfig, nsamples: usize) -> Vec<F> {
    if nsamples == 1 {
        return vec![config.tau_min];
    }
    let step = (config.tau_max - config.tau_min) / (nsamples - 1) as F;
    (0..nsamples)
        .map(|i| config.tau_min + i as F * step)
        .collect()
}

/// Generates `nsamples` labeled time series of length `nt` with the
/// default configuration.
///
/// Classification labels are 0 (subcritical, including the exact critical
/// value) or 1 (supercritical); regression labels are the sampled tau.
pub fn load_driftbif(
    nsamples: usize,
    nt: usize,
    classification: bool,
) -> Result<(DMatrix<F>, DVector<F>), SimulationError> {
    load_driftbif_with(&DatasetConfig::default(), nsamples, nt, classification)
}

/// `load_driftbif` with an explicit configuration.
///
/// Samples are independent and run in parallel; each one owns a disjoint
/// output row and a noise stream derived from `(seed, sample index)`, so
/// the result is reproducible and row/label correspondence never depends
/// on completion order.
pub fn load_driftbif_with(
    config: &DatasetConfig,
    nsamples: usize,
    nt: usize,
    classification: bool,
) -> Result<(DMatrix<F>, DVector<F>), SimulationError> {
    require_positive_count("nsamples", nsamples)?;
    require_positive_count("nt", nt)?;
    config.validate()?;

    debug!(
        nsamples,
        nt, classification, "generating drift-bifurcation dataset"
    );

    let taus = tau_grid(config, nsamples);

    let rows: Vec<(Vec<F>, F)> = taus
        .par_iter()
        .enumerate()
        .map(|(index, &tau)| -> Result<(Vec<F>, F), SimulationError> {
            let model = DissipativeSoliton::with_noise(tau, config.noise_strength)?;
            let mut noise = NoiseSource::for_stream(config.seed, index as u64);
            let trajectory = model.simulate(nt, State::zeros(config.dimensions), &mut noise)?;

            let label = if classification {
                F::from(model.label())
            } else {
                tau
            };
            Ok((trajectory.component(0), label))
        })
        .collect::<Result<_, _>>()?;

    let series = DMatrix::from_fn(nsamples, nt, |r, c| rows[r].0[c]);
    let labels = DVector::from_iterator(nsamples, rows.iter().map(|(_, label)| *label));

    Ok((series, labels))
}
