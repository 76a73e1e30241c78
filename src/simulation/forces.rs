//! Force / acceleration contributors for the three-body engine
//!
//! Defines the acceleration trait and the softened Newtonian gravity term
//! whose contributions are summed into a single acceleration vector per body

use crate::simulation::states::{System, NVec3};

/// Minimum separation used when normalizing the force direction
/// Keeps exactly coincident bodies from minting NaN through 0/0;
/// the softening itself only bounds the magnitude, not the direction
pub const MIN_SEPARATION: f64 = 1e-9;

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec3]);
}

/// Newtonian gravity with a softened force magnitude (direct pairwise sum)
///
/// The softening enters the magnitude denominator only: the pair force is
/// `G * m_i * m_j / (d^2 + eps2)` directed along the raw separation vector
/// normalized by the unsoftened distance `d`. The asymmetry is intentional
/// and matches the trajectories this engine reproduces.
pub struct SoftenedGravity {
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening epsilon^2
}

impl Acceleration for SoftenedGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec3]) {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            // bi: body i (left side of the pair)
            let bi = &sys.bodies[i];
            let xi = bi.x;      // position of body i
            let mi = bi.m;      // mass of body i

            for j in (i + 1)..n {
                // bj: body j (right side of the pair)
                let bj = &sys.bodies[j];
                let xj = bj.x;  // position of body j
                let mj = bj.m;  // mass of body j

                // r is the displacement vector from i to j
                // If r points from i to j, then i feels a pull along +r,
                // j feels a pull along -r
                let r = xj - xi;

                // Unsoftened separation distance |r|
                let d = r.norm();

                // Softened squared distance for the magnitude:
                // d2s = |r|^2 + eps2
                let d2s = d * d + self.eps2;

                // Pair force magnitude: F = G * m_i * m_j / d2s
                let f = self.G * mi * mj / d2s;

                // Unit direction along the raw separation. The distance is
                // clamped before the divide so coincident bodies cannot
                // produce NaN here.
                let dir = r / d.max(MIN_SEPARATION);

                // -------------------------
                // Apply Newton's law:
                // a_i += (F / m_i) * dir
                // a_j -= (F / m_j) * dir
                // (equal and opposite)
                // -------------------------
                out[i] += (f / mi) * dir;
                out[j] -= (f / mj) * dir;
            }
        }
    }
}
