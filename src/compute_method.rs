#[cfg(feature = "parallel")]
/// Compute methods that use multiple CPU threads.
pub mod parallel;

/// Compute methods that use one CPU thread.
pub mod sequential;

use crate::{matrix::PairMatrix, particle::Particle, vector::Vector};

/// Trait for algorithms accumulating the gravitational acceleration of every particle.
///
/// Implementors reset the [`acceleration`](Particle::acceleration) of each particle and replace it
/// with the sum of the accelerations exerted on it by all the other particles, with a
/// gravitational constant of 1. Along the way, they record the vector from particle `i` toward
/// particle `j` in `forces[(i, j)]` and its length in `distances[(i, j)]`. Diagonal entries are
/// left untouched.
///
/// # Example
///
/// ```
/// # use nbody::prelude::*;
/// # use nbody::matrix::PairMatrix;
/// struct Weightless;
///
/// impl<V: Vector> ComputeMethod<V> for Weightless {
///     fn compute(
///         &mut self,
///         particles: &mut [Particle<V>],
///         _forces: &mut PairMatrix<V>,
///         _distances: &mut PairMatrix<f64>,
///     ) {
///         for particle in particles {
///             particle.acceleration = V::ZERO;
///         }
///     }
/// }
/// ```
pub trait ComputeMethod<V> {
    /// Computes the acceleration of every particle and fills the pair matrices.
    fn compute(
        &mut self,
        particles: &mut [Particle<V>],
        forces: &mut PairMatrix<V>,
        distances: &mut PairMatrix<f64>,
    );
}

impl<C, V> ComputeMethod<V> for &mut C
where
    C: ComputeMethod<V>,
{
    #[inline]
    fn compute(
        &mut self,
        particles: &mut [Particle<V>],
        forces: &mut PairMatrix<V>,
        distances: &mut PairMatrix<f64>,
    ) {
        (**self).compute(particles, forces, distances)
    }
}

/// Returns the acceleration exerted on `particles[index]` by every other particle.
///
/// `force_row` and `distance_row` are the rows of the pair matrices for that particle. Pairs are
/// visited in ascending order of `j` so that every compute method sums in the same order.
#[inline]
pub(crate) fn accelerate_row<V: Vector>(
    index: usize,
    particles: &[Particle<V>],
    force_row: &mut [V],
    distance_row: &mut [f64],
) -> V {
    let position = particles[index].position;
    let mut acceleration = V::ZERO;

    for (j, other) in particles.iter().enumerate() {
        if j == index {
            continue;
        }

        let force = other.position.sub(position);
        let distance = force.magnitude();
        force_row[j] = force;
        distance_row[j] = distance;

        let coefficient = other.mass / (distance * distance * distance);
        acceleration = acceleration.add(force.scale(coefficient));
    }

    acceleration
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::prelude::*;
    use glam::DVec2;

    pub fn acceleration_computation<C>(mut cm: C)
    where
        C: ComputeMethod<DVec2>,
    {
        let mut particles = vec![
            Particle::new(2.0, DVec2::splat(0.0), DVec2::ZERO),
            Particle::new(3.0, DVec2::splat(1.0), DVec2::ZERO),
            Particle::new(0.5, DVec2::new(5.0, -2.0), DVec2::ZERO),
        ];
        // Stale values must be discarded.
        particles[0].acceleration = DVec2::splat(100.0);

        let n = particles.len();
        let mut forces = PairMatrix::new(n, DVec2::ZERO);
        let mut distances = PairMatrix::new(n, 0.0);
        cm.compute(&mut particles, &mut forces, &mut distances);

        for i in 0..n {
            let mut acceleration = DVec2::ZERO;

            for j in (0..n).filter(|&j| j != i) {
                let dir = particles[j].position - particles[i].position;
                let mag_2 = dir.length_squared();
                acceleration += dir * particles[j].mass / (mag_2 * mag_2.sqrt());

                assert_eq!(forces[(i, j)], dir);
                assert_eq!(distances[(i, j)], dir.length());
            }

            assert_eq!(forces[(i, i)], DVec2::ZERO);
            assert_eq!(distances[(i, i)], 0.0);
            assert!(acceleration.abs_diff_eq(particles[i].acceleration, 1e-12));
        }
    }
}
