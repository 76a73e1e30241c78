pub mod simulation;
pub mod configuration;
pub mod stability;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec3};
pub use simulation::forces::{Acceleration, AccelSet, SoftenedGravity, MIN_SEPARATION};
pub use simulation::integrator::rk4_integrator;
pub use simulation::clock::FixedStepClock;
pub use simulation::energy::{kinetic_energy, potential_energy, total_energy};
pub use simulation::scenario::{Scenario, bodies_from_config, validate_bodies};

pub use configuration::config::{
    ScenarioConfig, ParametersConfig, BodyConfig, SweepConfig, ConfigError, BODY_COUNT,
};

pub use stability::{
    evaluate_stability, evaluate_stability_named, Axis, Perturbation, PerturbationTarget,
    SweepSettings,
};
pub use stability::sweep::{run_sweep, run_sweep_serial, SweepGrid};

pub use benchmark::benchmark::{bench_accel, bench_rk4, bench_sweep};
