//! Stability classification for perturbed three-body configurations
//!
//! A perturbation names one scalar field of one body (`mass_<n>`,
//! `pos_<axis>_<n>`, `vel_<axis>_<n>`, 1-based index). The evaluator applies
//! a pair of perturbations to a cloned copy of the base configuration and
//! integrates it on a private system at a coarse step size, far larger than
//! the visual sub-step, trading accuracy for sweep throughput. The live
//! scenario is never touched.
//!
//! The score is the fraction of the step budget survived before any body
//! leaves the escape radius; 1.0 means no escape within budget.

pub mod sweep;

use std::str::FromStr;

use crate::configuration::config::ConfigError;
use crate::simulation::forces::{AccelSet, SoftenedGravity};
use crate::simulation::integrator::rk4_integrator;
use crate::simulation::states::{Body, System};

/// Axis of a position or velocity perturbation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "x" => Some(Axis::X),
            "y" => Some(Axis::Y),
            "z" => Some(Axis::Z),
            _ => None,
        }
    }
}

/// One scalar field of one body. Parsed from the wire names `mass_<n>`,
/// `pos_<axis>_<n>`, `vel_<axis>_<n>` where `<n>` is the 1-based body index;
/// the stored index is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerturbationTarget {
    Mass { body: usize },
    Position { axis: Axis, body: usize },
    Velocity { axis: Axis, body: usize },
}

impl PerturbationTarget {
    /// Add `offset` to the named field of the given body list.
    pub fn apply(&self, bodies: &mut [Body], offset: f64) {
        match *self {
            PerturbationTarget::Mass { body } => bodies[body].m += offset,
            PerturbationTarget::Position { axis, body } => {
                bodies[body].x[axis.index()] += offset;
            }
            PerturbationTarget::Velocity { axis, body } => {
                bodies[body].v[axis.index()] += offset;
            }
        }
    }
}

impl FromStr for PerturbationTarget {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ConfigError::BadParameter(s.to_string());

        let parts: Vec<&str> = s.split('_').collect();
        let target = match parts.as_slice() {
            ["mass", n] => PerturbationTarget::Mass {
                body: parse_body_index(n).ok_or_else(bad)?,
            },
            ["pos", axis, n] => PerturbationTarget::Position {
                axis: Axis::parse(axis).ok_or_else(bad)?,
                body: parse_body_index(n).ok_or_else(bad)?,
            },
            ["vel", axis, n] => PerturbationTarget::Velocity {
                axis: Axis::parse(axis).ok_or_else(bad)?,
                body: parse_body_index(n).ok_or_else(bad)?,
            },
            _ => return Err(bad()),
        };
        Ok(target)
    }
}

/// 1-based wire index -> 0-based body index, `<n>` in 1..=3.
fn parse_body_index(s: &str) -> Option<usize> {
    match s.parse::<usize>() {
        Ok(n) if (1..=3).contains(&n) => Some(n - 1),
        _ => None,
    }
}

/// One perturbation: a target field plus the offset added to it.
#[derive(Debug, Clone, Copy)]
pub struct Perturbation {
    pub target: PerturbationTarget,
    pub offset: f64,
}

/// Coarse-run settings shared by every sweep cell.
#[derive(Debug, Clone)]
pub struct SweepSettings {
    pub step_budget: usize, // maximum coarse steps per cell
    pub dt: f64,            // coarse step size
    pub escape_radius: f64, // distance-from-origin escape threshold
    pub eps2: f64,          // softening epsilon^2
    pub G: f64,             // gravitational constant
}

impl SweepSettings {
    /// Sweep defaults with the given force constants.
    pub fn new(eps2: f64, g: f64) -> Self {
        Self {
            step_budget: 1000,
            dt: 0.2,
            escape_radius: 6000.0,
            eps2,
            G: g,
        }
    }
}

/// Score one perturbed configuration.
///
/// Clones the base bodies, applies both perturbations, and integrates a
/// private system under `settings`. If any body's squared distance from the
/// origin first exceeds the squared escape threshold after step `k`
/// (1-based), returns `k / step_budget`; a body exactly on the escape
/// sphere has not escaped. If the full budget completes without escape,
/// returns exactly 1.0.
///
/// A configuration that goes non-finite never satisfies the escape
/// comparison and therefore rides to budget exhaustion, scoring 1.0.
/// Callers wanting to screen out degenerate (coincident-body) cells must
/// do so themselves.
pub fn evaluate_stability(
    base: &[Body],
    settings: &SweepSettings,
    x: Perturbation,
    y: Perturbation,
) -> f64 {
    let mut bodies = base.to_vec();
    x.target.apply(&mut bodies, x.offset);
    y.target.apply(&mut bodies, y.offset);

    let mut sys = System {
        bodies,
        t: 0.0,
    };
    let forces = AccelSet::new().with(SoftenedGravity {
        G: settings.G,
        eps2: settings.eps2,
    });

    let escape_r2 = settings.escape_radius * settings.escape_radius;
    for step in 1..=settings.step_budget {
        rk4_integrator(&mut sys, &forces, settings.dt);
        if sys.bodies.iter().any(|b| b.x.norm_squared() > escape_r2) {
            return step as f64 / settings.step_budget as f64;
        }
    }
    1.0
}

/// String-facing wrapper: parse both parameter names, then evaluate.
/// This is the call a heatmap host makes once per grid cell.
pub fn evaluate_stability_named(
    base: &[Body],
    settings: &SweepSettings,
    x_param: &str,
    x_value: f64,
    y_param: &str,
    y_value: f64,
) -> Result<f64, ConfigError> {
    let x = Perturbation {
        target: x_param.parse()?,
        offset: x_value,
    };
    let y = Perturbation {
        target: y_param.parse()?,
        offset: y_value,
    };
    Ok(evaluate_stability(base, settings, x, y))
}
