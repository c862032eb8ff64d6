use crate::vector::Vector;

/// A point mass moving in the plane.
///
/// Particles are owned by the caller. A [`Simulation`](crate::simulation::Simulation) borrows a
/// slice of them and updates their [`velocity`](Particle::velocity),
/// [`position`](Particle::position) and [`acceleration`](Particle::acceleration) in place on
/// every tick. The [`mass`](Particle::mass) is never modified by the simulation.
///
/// ```
/// # use nbody::prelude::*;
/// # use glam::DVec2;
/// let particle = Particle::new(2.0, DVec2::ZERO, DVec2::new(0.0, 3.0));
///
/// assert_eq!(particle.acceleration, DVec2::ZERO);
/// assert_eq!(particle.momentum(), DVec2::new(0.0, 6.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Particle<V = glam::DVec2> {
    /// Mass of the particle, expected to be strictly positive.
    pub mass: f64,
    /// Position of the particle.
    pub position: V,
    /// Velocity of the particle.
    pub velocity: V,
    /// Acceleration computed during the last tick.
    pub acceleration: V,
}

impl<V: Vector> Particle<V> {
    /// Creates a particle with zero acceleration.
    #[inline]
    pub fn new(mass: f64, position: V, velocity: V) -> Self {
        Self {
            mass,
            position,
            velocity,
            acceleration: V::ZERO,
        }
    }

    /// Linear momentum of the particle, `mass * velocity`.
    #[inline]
    pub fn momentum(&self) -> V {
        self.velocity.scale(self.mass)
    }
}

impl<V: Vector> Default for Particle<V> {
    fn default() -> Self {
        Self::new(1.0, V::ZERO, V::ZERO)
    }
}
