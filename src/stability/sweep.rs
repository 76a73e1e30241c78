//! 2D parameter sweep over a grid of perturbed configurations
//!
//! Every cell is a pure function of the base bodies and its two offsets, so
//! the grid parallelizes across rows with no shared mutable state.
//! Cancelling an in-progress sweep means dropping the computation; there is
//! no mid-cell preemption.

use rayon::prelude::*;

use crate::configuration::config::{ConfigError, SweepConfig};
use crate::simulation::states::Body;

use super::{evaluate_stability, Perturbation, PerturbationTarget, SweepSettings};

/// Grid geometry for a sweep: two named perturbation axes swept over a
/// square resolution. Column `col` carries the x offset, row `row` the y
/// offset, both linearly interpolated across their ranges.
#[derive(Debug, Clone)]
pub struct SweepGrid {
    pub x_target: PerturbationTarget,
    pub x_min: f64,
    pub x_max: f64,
    pub y_target: PerturbationTarget,
    pub y_min: f64,
    pub y_max: f64,
    pub resolution: usize,
}

impl SweepGrid {
    pub fn from_config(cfg: &SweepConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            x_target: cfg.x_param.parse()?,
            x_min: cfg.x_min,
            x_max: cfg.x_max,
            y_target: cfg.y_param.parse()?,
            y_min: cfg.y_min,
            y_max: cfg.y_max,
            resolution: cfg.resolution,
        })
    }

    /// Offset for grid index `i` along a [min, max] axis. Endpoints are
    /// included; a 1-cell axis sits at `min`.
    fn offset(min: f64, max: f64, i: usize, resolution: usize) -> f64 {
        if resolution <= 1 {
            min
        } else {
            min + (max - min) * i as f64 / (resolution - 1) as f64
        }
    }
}

/// Run the full grid in parallel; returns row-major scores,
/// `out[row][col]`, each in [0, 1].
pub fn run_sweep(base: &[Body], settings: &SweepSettings, grid: &SweepGrid) -> Vec<Vec<f64>> {
    (0..grid.resolution)
        .into_par_iter()
        .map(|row| sweep_row(base, settings, grid, row))
        .collect()
}

/// Single-threaded variant, used by the benchmark suite for comparison.
pub fn run_sweep_serial(
    base: &[Body],
    settings: &SweepSettings,
    grid: &SweepGrid,
) -> Vec<Vec<f64>> {
    (0..grid.resolution)
        .map(|row| sweep_row(base, settings, grid, row))
        .collect()
}

fn sweep_row(base: &[Body], settings: &SweepSettings, grid: &SweepGrid, row: usize) -> Vec<f64> {
    let y = Perturbation {
        target: grid.y_target,
        offset: SweepGrid::offset(grid.y_min, grid.y_max, row, grid.resolution),
    };
    (0..grid.resolution)
        .map(|col| {
            let x = Perturbation {
                target: grid.x_target,
                offset: SweepGrid::offset(grid.x_min, grid.x_max, col, grid.resolution),
            };
            evaluate_stability(base, settings, x, y)
        })
        .collect()
}
