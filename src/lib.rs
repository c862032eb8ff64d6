//! # nbody
//!
//! nbody is a brute-force N-body gravity integrator for the plane, keeping a short trail of the
//! recent positions of every particle for drawing motion traces.
//!
//! ## Goals
//!
//! The crate is a reference integrator: every tick computes the acceleration over all the ordered
//! pairs of particles, with the gravitational constant folded to 1 and no softening, then steps
//! the particles with semi-implicit Euler. It does not draw anything, handle input or decide how
//! particles are laid out on screen; it only evolves the particles and records where they were.
//!
//! nbody can compute the accelerations in parallel thanks to [rayon](https://github.com/rayon-rs/rayon).
//! Enable the "parallel" feature to access [`compute_method::parallel`].
//!
//! # Using nbody
//!
//! ## Creating the particles
//!
//! The particles are owned by the caller. Any vector type implementing [`Vector`](vector::Vector)
//! can be used; [`glam::DVec2`] is the default.
//!
//! ```
//! # use nbody::prelude::*;
//! # use glam::DVec2;
//! let mut particles = vec![
//!     Particle::new(1E6, DVec2::new(500.0, 400.0), DVec2::ZERO),
//!     Particle::new(2000.0, DVec2::new(500.0, 450.0), DVec2::new(140.0, 0.0)),
//! ];
//! scenario::normalize_momentum(&mut particles);
//! ```
//!
//! ## Running the simulation
//!
//! A [`Simulation`](simulation::Simulation) borrows the particles for its lifetime and updates
//! them in place on every [`tick`](simulation::Simulation::tick).
//!
//! ```
//! # use nbody::prelude::*;
//! # use glam::DVec2;
//! # let mut particles = scenario::eight_body(DVec2::new(500.0, 400.0));
//! const DT: f64 = 1.0 / 120.0;
//!
//! let mut simulation = Simulation::new(&mut particles);
//!
//! for _ in 0..240 {
//!     simulation.tick(DT);
//!
//!     for (particle, trail) in simulation.particles().iter().zip(simulation.trail().iter()) {
//!         // Draw `particle.position` and the positions in `trail`...
//! #       assert_eq!(trail.len(), simulation.trail_length());
//!     }
//! }
//! ```
//!
//! To reset, free the simulation, rebuild the particles and create a new simulation.

#![warn(missing_docs)]

/// Trait for accumulating the gravitational accelerations and types implementing it.
pub mod compute_method;

/// Parameters of a simulation.
pub mod config;

/// Square matrices holding one value per pair of particles.
pub mod matrix;

/// Point masses moved by the simulation.
pub mod particle;

/// Helpers to build and prepare sets of particles.
pub mod scenario;

/// The simulation engine.
pub mod simulation;

/// History of the recent positions of the particles.
pub mod trail;

/// Vector algebra used by the simulation.
pub mod vector;

/// Everything needed to use the crate.
pub mod prelude {
    pub use crate::compute_method::{self, *};
    pub use crate::config::{SimulationConfig, TAIL_GROW_INTERVAL, TRAIL_CAPACITY};
    pub use crate::matrix::PairMatrix;
    pub use crate::particle::Particle;
    pub use crate::scenario;
    pub use crate::simulation::Simulation;
    pub use crate::trail::Trail;
    pub use crate::vector::Vector;
}
