//! Energy diagnostics for drift monitoring
//!
//! Pure reads of the system state; results never feed back into the
//! integration.

use crate::simulation::params::Parameters;
use crate::simulation::states::System;

/// Total kinetic energy: sum of 1/2 m |v|^2 over all bodies.
pub fn kinetic_energy(sys: &System) -> f64 {
    sys.bodies.iter().map(|b| 0.5 * b.m * b.v.norm_squared()).sum()
}

/// Total potential energy: sum over unordered pairs of -G m_i m_j / d(i,j).
///
/// Uses the raw pairwise distance. The force law softens its magnitude
/// denominator, the potential does not; the diagnostic mirrors the system
/// it monitors rather than a physically consistent pair.
pub fn potential_energy(sys: &System, g: f64) -> f64 {
    let n = sys.bodies.len();
    let mut pe = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            let d = (sys.bodies[j].x - sys.bodies[i].x).norm();
            pe -= g * sys.bodies[i].m * sys.bodies[j].m / d;
        }
    }
    pe
}

/// Total mechanical energy of the system.
pub fn total_energy(sys: &System, params: &Parameters) -> f64 {
    kinetic_energy(sys) + potential_energy(sys, params.G)
}
