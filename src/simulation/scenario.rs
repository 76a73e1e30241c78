//! Build and drive fully-initialized simulation scenarios
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! [`Scenario`] containing:
//! - numerical parameters (`Parameters`)
//! - live system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//! - the fixed-step clock (`FixedStepClock`)
//!
//! The bundle is what a rendering or UI host holds on to: it loads
//! configurations, advances visual time, and reads state and energy back
//! out. Stability sweeps never touch it; they run on their own cloned
//! bodies (see the `stability` module).

use crate::configuration::config::{BodyConfig, ConfigError, ScenarioConfig, BODY_COUNT};
use crate::simulation::clock::FixedStepClock;
use crate::simulation::energy;
use crate::simulation::forces::{AccelSet, SoftenedGravity};
use crate::simulation::integrator::rk4_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

/// Fully-initialized runtime scenario: parameters, live state, forces,
/// and the clock that meters fixed sub-steps out of visual time.
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub clock: FixedStepClock,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = bodies_from_config(&cfg.bodies)?;
        validate_bodies(&bodies)?;

        // Initial system state: bodies at t = 0
        let system = System {
            bodies,
            t: 0.0,
        };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
            eps2: p_cfg.eps2,
            G: p_cfg.G,
        };

        // Forces: construct an AccelSet and register softened gravity
        let forces = AccelSet::new().with(SoftenedGravity {
            G: parameters.G,
            eps2: parameters.eps2,
        });

        let clock = FixedStepClock::new(parameters.h0);

        Ok(Self {
            parameters,
            system,
            forces,
            clock,
        })
    }

    /// Replace the live system with a fresh set of bodies.
    ///
    /// The previous state is discarded whole, never partially reset:
    /// system time and the clock residual restart at zero.
    pub fn load_config(&mut self, bodies: Vec<Body>) -> Result<(), ConfigError> {
        validate_bodies(&bodies)?;
        self.system = System {
            bodies,
            t: 0.0,
        };
        self.clock.reset();
        Ok(())
    }

    /// Advance visual time by `dt_visual` seconds.
    ///
    /// The clock converts the increment into whole fixed sub-steps,
    /// possibly none; each runs one RK4 step at `h0`. Driving the same
    /// total elapsed time through different increment sizes executes the
    /// same number of sub-steps.
    pub fn advance(&mut self, dt_visual: f64) {
        let steps = self.clock.push(dt_visual);
        for _ in 0..steps {
            rk4_integrator(&mut self.system, &self.forces, self.parameters.h0);
        }
    }

    /// Read-only view of the live system for rendering collaborators.
    pub fn current_state(&self) -> &System {
        &self.system
    }

    /// Total mechanical energy of the live system, for diagnostics display.
    pub fn total_energy(&self) -> f64 {
        energy::total_energy(&self.system, &self.parameters)
    }
}

/// Map YAML body configs into runtime bodies.
/// Position and velocity must supply exactly three components each.
pub fn bodies_from_config(cfgs: &[BodyConfig]) -> Result<Vec<Body>, ConfigError> {
    cfgs.iter()
        .enumerate()
        .map(|(i, bc)| {
            if bc.x.len() != 3 || bc.v.len() != 3 {
                return Err(ConfigError::BadVector { index: i });
            }
            Ok(Body {
                x: NVec3::new(bc.x[0], bc.x[1], bc.x[2]),
                v: NVec3::new(bc.v[0], bc.v[1], bc.v[2]),
                m: bc.m,
            })
        })
        .collect()
}

/// Reject configurations the integrator must never see: the body count is
/// fixed and every mass is strictly positive and finite.
pub fn validate_bodies(bodies: &[Body]) -> Result<(), ConfigError> {
    if bodies.len() != BODY_COUNT {
        return Err(ConfigError::WrongBodyCount {
            expected: BODY_COUNT,
            got: bodies.len(),
        });
    }
    for (i, b) in bodies.iter().enumerate() {
        if !(b.m > 0.0 && b.m.is_finite()) {
            return Err(ConfigError::NonPositiveMass { index: i, mass: b.m });
        }
    }
    Ok(())
}
