//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`SweepConfig`]      – optional stability-sweep description
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   t_end: 60.0             # total simulation time
//!   h0: 0.01                # fixed physics sub-step
//!   eps2: 25.0              # softening epsilon^2 (epsilon = 5)
//!   G: 1000.0               # gravitational constant
//!
//! bodies:
//!   - x: [ -100.0, 0.0, 0.0 ]
//!     v: [ 0.0, 5.0, 0.5 ]
//!     m: 20.0
//!   - x: [ 100.0, 0.0, 0.0 ]
//!     v: [ 0.0, -5.0, -0.5 ]
//!     m: 20.0
//!   - x: [ 0.0, -150.0, 50.0 ]
//!     v: [ 4.0, 0.0, 0.0 ]
//!     m: 15.0
//!
//! sweep:                    # optional; only read in sweep mode
//!   x_param: "vel_x_1"      # mass_<n>, pos_<axis>_<n>, vel_<axis>_<n>
//!   x_min: -3.0
//!   x_max: 3.0
//!   y_param: "vel_y_1"
//!   y_min: -3.0
//!   y_max: 3.0
//!   resolution: 200         # grid cells per axis
//!   step_budget: 1000       # coarse steps per cell
//!   dt: 0.2                 # coarse step size
//!   escape_radius: 6000.0   # distance-from-origin escape threshold
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! scenario representation.

use serde::Deserialize;
use thiserror::Error;

/// Number of bodies a scenario must supply.
pub const BODY_COUNT: usize = 3;

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // time end
    pub h0: f64,    // fixed physics sub-step
    pub eps2: f64,  // softening - prevents singular forces at small separations
    pub G: f64,     // gravitational constant
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position vector `x` in simulation units
    pub v: Vec<f64>, // Initial velocity vector `v` in simulation units per time unit
    pub m: f64,      // Mass of the body
}

/// Stability-sweep description: two named perturbation axes over a square
/// grid, plus the coarse-run settings shared by every cell
#[derive(Deserialize, Debug, Clone)]
pub struct SweepConfig {
    pub x_param: String, // perturbation applied along grid columns
    pub x_min: f64,
    pub x_max: f64,
    pub y_param: String, // perturbation applied along grid rows
    pub y_min: f64,
    pub y_max: f64,
    #[serde(default = "default_resolution")]
    pub resolution: usize, // grid cells per axis
    #[serde(default = "default_step_budget")]
    pub step_budget: usize, // coarse steps per cell
    #[serde(default = "default_sweep_dt")]
    pub dt: f64, // coarse step size, larger than the visual sub-step
    #[serde(default = "default_escape_radius")]
    pub escape_radius: f64, // distance-from-origin escape threshold
}

fn default_resolution() -> usize {
    200
}

fn default_step_budget() -> usize {
    1000
}

fn default_sweep_dt() -> f64 {
    0.2
}

fn default_escape_radius() -> f64 {
    6000.0
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub bodies: Vec<BodyConfig>,      // List of bodies that define the initial state of the system
    #[serde(default)]
    pub sweep: Option<SweepConfig>, // Optional stability-sweep description
}

/// Rejected configurations, raised at load time before anything reaches
/// the integrator. The numeric core itself has no error paths.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("expected {expected} bodies, got {got}")]
    WrongBodyCount { expected: usize, got: usize },

    #[error("body {index}: mass {mass} must be strictly positive and finite")]
    NonPositiveMass { index: usize, mass: f64 },

    #[error("body {index}: position and velocity need 3 components each")]
    BadVector { index: usize },

    #[error("unrecognized perturbation parameter `{0}`")]
    BadParameter(String),

    #[error("scenario has no sweep section")]
    MissingSweep,
}
