use crate::{
    compute_method::{accelerate_row, ComputeMethod},
    matrix::PairMatrix,
    particle::Particle,
    vector::Vector,
};

/// A brute-force [`ComputeMethod`] using the CPU.
///
/// Every ordered pair of particles is visited, one particle after the other. No softening is
/// applied, coincident particles produce non-finite accelerations.
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteForce;

impl<V: Vector> ComputeMethod<V> for BruteForce {
    #[inline]
    fn compute(
        &mut self,
        particles: &mut [Particle<V>],
        forces: &mut PairMatrix<V>,
        distances: &mut PairMatrix<f64>,
    ) {
        for i in 0..particles.len() {
            let acceleration =
                accelerate_row(i, particles, forces.row_mut(i), distances.row_mut(i));
            particles[i].acceleration = acceleration;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests;
    use super::*;
    use glam::DVec2;

    #[test]
    fn brute_force() {
        tests::acceleration_computation(BruteForce);
    }

    #[test]
    fn coincident_particles_are_not_guarded() {
        let mut particles = [
            Particle::new(1.0, DVec2::ONE, DVec2::ZERO),
            Particle::new(1.0, DVec2::ONE, DVec2::ZERO),
        ];
        let mut forces = PairMatrix::new(2, DVec2::ZERO);
        let mut distances = PairMatrix::new(2, 0.0);

        BruteForce.compute(&mut particles, &mut forces, &mut distances);

        assert_eq!(distances[(0, 1)], 0.0);
        assert!(!particles[0].acceleration.is_finite());
    }
}
