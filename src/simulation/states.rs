//! Core state types for the three-body simulation.
//!
//! Defines the body/system structs:
//! - `Body` holds position, velocity, and mass using `NVec3`
//! - `System` holds the ordered list of bodies and the current time `t`
//!
//! Body order is identity: body `i` names the same physical object across
//! clones and across all integrator stages.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass, strictly positive
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // ordered collection of bodies
    pub t: f64, // time
}
