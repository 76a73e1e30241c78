use std::time::Instant;

use crate::simulation::forces::{AccelSet, SoftenedGravity};
use crate::simulation::integrator::rk4_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};
use crate::stability::sweep::{run_sweep, run_sweep_serial, SweepGrid};
use crate::stability::{Axis, PerturbationTarget, SweepSettings};

/// Helper to build the reference triad used by all benches
fn make_triad() -> Vec<Body> {
    vec![
        Body {
            x: NVec3::new(-100.0, 0.0, 0.0),
            v: NVec3::new(0.0, 5.0, 0.5),
            m: 20.0,
        },
        Body {
            x: NVec3::new(100.0, 0.0, 0.0),
            v: NVec3::new(0.0, -5.0, -0.5),
            m: 20.0,
        },
        Body {
            x: NVec3::new(0.0, -150.0, 50.0),
            v: NVec3::new(4.0, 0.0, 0.0),
            m: 15.0,
        },
    ]
}

/// Helper to build the matching parameters
fn make_params() -> Parameters {
    Parameters {
        t_end: 60.0,
        h0: 0.01,
        eps2: 25.0,
        G: 1000.0,
    }
}

/// Time raw accelerator evaluations on the three-body set
pub fn bench_accel() {
    let params = make_params();
    let sys = System {
        bodies: make_triad(),
        t: 0.0,
    };

    let gravity = AccelSet::new().with(SoftenedGravity {
        G: params.G,
        eps2: params.eps2,
    });

    let mut out = vec![NVec3::zeros(); sys.bodies.len()];

    // Warm up
    gravity.accumulate_accels(0.0, &sys, &mut out);

    let evals = 1_000_000;
    let t0 = Instant::now();
    for _ in 0..evals {
        gravity.accumulate_accels(0.0, &sys, &mut out);
    }
    let elapsed = t0.elapsed().as_secs_f64();

    println!(
        "accel: {evals} evals in {elapsed:.4} s ({:.0} evals/s)",
        evals as f64 / elapsed
    );
}

/// Time RK4 sub-steps at the visual step size
pub fn bench_rk4() {
    let params = make_params();
    let mut sys = System {
        bodies: make_triad(),
        t: 0.0,
    };

    let forces = AccelSet::new().with(SoftenedGravity {
        G: params.G,
        eps2: params.eps2,
    });

    // Warm up
    rk4_integrator(&mut sys, &forces, params.h0);

    let steps = 200_000;
    let t0 = Instant::now();
    for _ in 0..steps {
        rk4_integrator(&mut sys, &forces, params.h0);
    }
    let elapsed = t0.elapsed().as_secs_f64();

    println!(
        "rk4: {steps} steps in {elapsed:.4} s ({:.0} steps/s)",
        steps as f64 / elapsed
    );
}

/// Compare serial and parallel sweep throughput for a range of grid sizes
/// Paste output directly into a spreadsheet to graph
pub fn bench_sweep() {
    let params = make_params();
    let bodies = make_triad();
    let settings = SweepSettings::new(params.eps2, params.G);

    println!("resolution,serial_s,parallel_s");

    for resolution in [4, 8, 16, 32] {
        let grid = SweepGrid {
            x_target: PerturbationTarget::Velocity {
                axis: Axis::X,
                body: 0,
            },
            x_min: -3.0,
            x_max: 3.0,
            y_target: PerturbationTarget::Velocity {
                axis: Axis::Y,
                body: 0,
            },
            y_min: -3.0,
            y_max: 3.0,
            resolution,
        };

        // Warm up one row's worth of cells via the serial path
        let _ = run_sweep_serial(
            &bodies,
            &settings,
            &SweepGrid {
                resolution: 1,
                ..grid.clone()
            },
        );

        let t0 = Instant::now();
        let _ = run_sweep_serial(&bodies, &settings, &grid);
        let serial = t0.elapsed().as_secs_f64();

        let t1 = Instant::now();
        let _ = run_sweep(&bodies, &settings, &grid);
        let parallel = t1.elapsed().as_secs_f64();

        println!("{resolution},{serial:.6},{parallel:.6}");
    }
}
