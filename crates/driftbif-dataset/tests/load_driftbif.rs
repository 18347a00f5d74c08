use driftbif_dataset::{load_driftbif, load_driftbif_with, DatasetConfig};
use driftbif_core::SimulationError;
use std::collections::BTreeSet;

#[test]
fn classification_covers_both_regimes() {
    let (_x, y) = load_driftbif(10, 100, true).unwrap();

    let labels: BTreeSet<u8> = y.iter().map(|&label| label as u8).collect();
    assert_eq!(labels, BTreeSet::from([0, 1]));
}

#[test]
fn regression_targets_are_pairwise_distinct() {
    let nsamples = 10;
    let (_x, y) = load_driftbif(nsamples, 100, false).unwrap();

    assert_eq!(y.len(), nsamples);
    for i in 0..nsamples {
        for j in (i + 1)..nsamples {
            assert_ne!(y[i], y[j], "duplicated regression target at rows {i}, {j}");
        }
    }
}

#[test]
fn series_matrix_and_labels_share_row_count() {
    for (nsamples, nt) in [(1, 1), (3, 25), (10, 100)] {
        let (x, y) = load_driftbif(nsamples, nt, true).unwrap();
        assert_eq!(x.nrows(), nsamples);
        assert_eq!(x.ncols(), nt);
        assert_eq!(y.len(), nsamples);
    }
}

#[test]
fn non_positive_counts_are_rejected() {
    assert!(matches!(
        load_driftbif(0, 100, true),
        Err(SimulationError::InvalidParameter { name: "nsamples", .. })
    ));
    assert!(matches!(
        load_driftbif(10, 0, true),
        Err(SimulationError::InvalidParameter { name: "nt", .. })
    ));
}

#[test]
fn degenerate_tau_range_is_rejected() {
    let config = DatasetConfig {
        tau_min: 3.5,
        tau_max: 3.5,
        ..DatasetConfig::default()
    };
    assert!(matches!(
        load_driftbif_with(&config, 10, 100, false),
        Err(SimulationError::InvalidParameter { name: "tau_max", .. })
    ));
}

#[test]
fn fixed_seed_reproduces_the_dataset() {
    let config = DatasetConfig::default();
    let (x1, y1) = load_driftbif_with(&config, 8, 64, false).unwrap();
    let (x2, y2) = load_driftbif_with(&config, 8, 64, false).unwrap();
    assert_eq!(x1, x2);
    assert_eq!(y1, y2);

    let reseeded = DatasetConfig {
        seed: 7,
        ..DatasetConfig::default()
    };
    let (x3, _y3) = load_driftbif_with(&reseeded, 8, 64, false).unwrap();
    assert_ne!(x1, x3);
}

#[test]
fn rows_follow_the_tau_grid_order() {
    // Regression targets come back strictly increasing: row order matches
    // the sampled grid independent of worker completion order.
    let (_x, y) = load_driftbif(16, 32, false).unwrap();
    for i in 1..y.len() {
        assert!(y[i] > y[i - 1]);
    }
}
