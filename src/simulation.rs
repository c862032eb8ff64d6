use crate::{
    compute_method::{sequential, ComputeMethod},
    config::{SimulationConfig, TRAIL_CAPACITY},
    matrix::PairMatrix,
    particle::Particle,
    trail::Trail,
    vector::Vector,
};

/// An N-body simulation over a borrowed slice of [`Particles`](Particle).
///
/// The simulation never owns the particles: it holds a mutable borrow of the caller's slice for
/// its whole lifetime and updates the particles in place on every [`tick`](Simulation::tick).
/// It owns the scratch storage of the force computation and the [`Trail`] of recent positions.
///
/// To start over with a different set of particles, [`free`](Simulation::free) (or drop) the
/// simulation and create a new one.
///
/// ```
/// # use nbody::prelude::*;
/// # use glam::DVec2;
/// let mut particles = vec![
///     Particle::new(100.0, DVec2::ZERO, DVec2::ZERO),
///     Particle::new(1.0, DVec2::new(10.0, 0.0), DVec2::new(0.0, 10.0)),
/// ];
///
/// let mut simulation = Simulation::with_trail(&mut particles, 10);
/// for _ in 0..60 {
///     simulation.tick(1.0 / 60.0);
/// }
///
/// assert_eq!(simulation.tick_count(), 60);
/// assert_eq!(simulation.trail_length(), simulation.trail_capacity());
/// simulation.free();
///
/// assert_ne!(particles[1].position, DVec2::new(10.0, 0.0));
/// ```
#[derive(Debug)]
pub struct Simulation<'p, V = glam::DVec2> {
    tick_count: u64,
    particles: &'p mut [Particle<V>],
    forces: PairMatrix<V>,
    distances: PairMatrix<f64>,
    trail: Trail<V>,
}

impl<'p, V: Vector> Simulation<'p, V> {
    /// Creates a simulation with a trail length of 1, which shows no trail until it grows.
    ///
    /// # Panics
    ///
    /// If `particles` is empty.
    pub fn new(particles: &'p mut [Particle<V>]) -> Self {
        Self::with_config(particles, SimulationConfig::default())
    }

    /// Creates a simulation whose trail starts with `trail_length` slots.
    ///
    /// # Panics
    ///
    /// If `particles` is empty or if `trail_length` is not in `2..=TRAIL_CAPACITY`.
    pub fn with_trail(particles: &'p mut [Particle<V>], trail_length: usize) -> Self {
        assert!(
            trail_length > 1 && trail_length <= TRAIL_CAPACITY,
            "trail length {trail_length} invalid"
        );

        Self::with_config(
            particles,
            SimulationConfig {
                trail_length,
                ..Default::default()
            },
        )
    }

    /// Creates a simulation with custom trail parameters.
    ///
    /// # Panics
    ///
    /// If `particles` is empty or if the configuration is invalid, see
    /// [`SimulationConfig::validate`].
    pub fn with_config(particles: &'p mut [Particle<V>], config: SimulationConfig) -> Self {
        assert!(!particles.is_empty(), "particles invalid");

        let n = particles.len();
        let trail = Trail::new(n, &config);

        log::debug!(
            "simulation created with {n} particles, trail {}/{} growing every {} ticks",
            trail.len(),
            trail.capacity(),
            trail.grow_interval()
        );

        Self {
            tick_count: 0,
            particles,
            forces: PairMatrix::new(n, V::ZERO),
            distances: PairMatrix::new(n, 0.0),
            trail,
        }
    }

    /// Advances the simulation by `delta_time` using [`sequential::BruteForce`].
    ///
    /// See [`tick_with`](Simulation::tick_with).
    #[inline]
    pub fn tick(&mut self, delta_time: f64) {
        self.tick_with(delta_time, sequential::BruteForce)
    }

    /// Advances the simulation by `delta_time` using the provided [`ComputeMethod`].
    ///
    /// A tick records the current positions in the trail, computes the gravitational acceleration
    /// of every particle, then integrates with semi-implicit Euler: the velocity is updated first
    /// and the position moves with the updated velocity.
    ///
    /// Nothing is checked: overlapping particles or a large `delta_time` yield non-finite values.
    pub fn tick_with<C>(&mut self, delta_time: f64, mut cm: C)
    where
        C: ComputeMethod<V>,
    {
        self.trail.record(self.tick_count, &*self.particles);
        cm.compute(self.particles, &mut self.forces, &mut self.distances);

        for particle in self.particles.iter_mut() {
            particle.velocity = particle.velocity.add(particle.acceleration.scale(delta_time));
            particle.position = particle.position.add(particle.velocity.scale(delta_time));
        }

        self.tick_count += 1;
    }

    /// Destroys the simulation, releasing its scratch and trail storage.
    ///
    /// The particles are left as they were after the last tick and the borrow is released.
    pub fn free(self) {
        log::debug!(
            "simulation of {} particles freed after {} ticks",
            self.particles.len(),
            self.tick_count
        );
    }
}

impl<V> Simulation<'_, V> {
    /// The simulated particles.
    #[inline]
    pub fn particles(&self) -> &[Particle<V>] {
        &*self.particles
    }

    /// Number of simulated particles, fixed for the lifetime of the simulation.
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Number of ticks elapsed since creation.
    #[inline]
    pub const fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Current number of active trail slots per particle.
    #[inline]
    pub const fn trail_length(&self) -> usize {
        self.trail.len()
    }

    /// Maximum number of trail slots per particle.
    #[inline]
    pub const fn trail_capacity(&self) -> usize {
        self.trail.capacity()
    }

    /// Recent positions of the particles.
    #[inline]
    pub const fn trail(&self) -> &Trail<V> {
        &self.trail
    }

    /// Vectors from each particle toward every other particle, as of the last tick.
    #[inline]
    pub const fn forces(&self) -> &PairMatrix<V> {
        &self.forces
    }

    /// Distances between every pair of particles, as of the last tick.
    #[inline]
    pub const fn distances(&self) -> &PairMatrix<f64> {
        &self.distances
    }
}
