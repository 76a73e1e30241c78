//! Fixed-step time integration for the three-body system
//!
//! Provides the classical 4th-order Runge-Kutta step over the coupled
//! position/velocity state, driven by `AccelSet`. The step duration is an
//! explicit argument: the live path runs at the fixed visual sub-step while
//! the stability sweep reuses the same routine at its coarser step.

use super::states::{System, NVec3};
use super::forces::AccelSet;

/// Advance the system by one RK4 step of length `dt`, in place.
///
/// Positions derive from velocity, velocities derive from the acceleration
/// set. Each stage evaluates the forces on a cloned offset copy of the base
/// state, so an external reader never observes a partially-applied stage:
/// the only mutation is the single combined commit at the end, plus
/// `sys.t += dt`.
///
/// There are no error paths. Non-finite values from extreme configurations
/// propagate silently; divergence is the caller's concern.
pub fn rk4_integrator(sys: &mut System, forces: &AccelSet, dt: f64) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let half_dt = 0.5 * dt; // half step dt/2

    // Stage 1: derivatives at the current state
    // a1 from x_n, v1 = v_n
    let mut a1 = vec![NVec3::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut a1);
    let v1: Vec<NVec3> = sys.bodies.iter().map(|b| b.v).collect();

    // Stage 2: derivatives half a step along (v1, a1)
    let stage2 = offset_system(sys, &v1, &a1, half_dt);
    let mut a2 = vec![NVec3::zeros(); n];
    forces.accumulate_accels(sys.t + half_dt, &stage2, &mut a2);
    let v2: Vec<NVec3> = stage2.bodies.iter().map(|b| b.v).collect();

    // Stage 3: derivatives half a step along (v2, a2)
    let stage3 = offset_system(sys, &v2, &a2, half_dt);
    let mut a3 = vec![NVec3::zeros(); n];
    forces.accumulate_accels(sys.t + half_dt, &stage3, &mut a3);
    let v3: Vec<NVec3> = stage3.bodies.iter().map(|b| b.v).collect();

    // Stage 4: derivatives a full step along (v3, a3)
    let stage4 = offset_system(sys, &v3, &a3, dt);
    let mut a4 = vec![NVec3::zeros(); n];
    forces.accumulate_accels(sys.t + dt, &stage4, &mut a4);
    let v4: Vec<NVec3> = stage4.bodies.iter().map(|b| b.v).collect();

    // Single commit against the original state:
    // dx = (v1 + 2 v2 + 2 v3 + v4) * dt/6
    // dv = (a1 + 2 a2 + 2 a3 + a4) * dt/6
    let sixth_dt = dt / 6.0;
    for (i, b) in sys.bodies.iter_mut().enumerate() {
        b.x += sixth_dt * (v1[i] + 2.0 * v2[i] + 2.0 * v3[i] + v4[i]);
        b.v += sixth_dt * (a1[i] + 2.0 * a2[i] + 2.0 * a3[i] + a4[i]);
    }

    // Increment the system time by one full step
    sys.t += dt;
}

/// Clone `base` with every body advanced `scale` along the given
/// position/velocity derivatives. Masses are copied, never aliased to the
/// live bodies, and body order is preserved.
fn offset_system(base: &System, dx: &[NVec3], dv: &[NVec3], scale: f64) -> System {
    let mut stage = base.clone();
    for (i, b) in stage.bodies.iter_mut().enumerate() {
        b.x += scale * dx[i];
        b.v += scale * dv[i];
    }
    stage
}
