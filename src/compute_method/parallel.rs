use crate::{
    compute_method::{accelerate_row, ComputeMethod},
    matrix::PairMatrix,
    particle::Particle,
    vector::Vector,
};
use rayon::prelude::*;

/// A brute-force [`ComputeMethod`] using the CPU in parallel with
/// [rayon](https://github.com/rayon-rs/rayon).
///
/// Each particle's row of the pair matrices is computed on its own task against a snapshot of the
/// particles. Rows sum in the same order as [`sequential::BruteForce`](super::sequential::BruteForce),
/// so both methods produce identical results.
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteForce;

impl<V> ComputeMethod<V> for BruteForce
where
    V: Vector + Send + Sync,
{
    #[inline]
    fn compute(
        &mut self,
        particles: &mut [Particle<V>],
        forces: &mut PairMatrix<V>,
        distances: &mut PairMatrix<f64>,
    ) {
        let n = particles.len();
        if n == 0 {
            return;
        }

        let snapshot = particles.to_vec();

        particles
            .par_iter_mut()
            .zip(forces.as_mut_slice().par_chunks_exact_mut(n))
            .zip(distances.as_mut_slice().par_chunks_exact_mut(n))
            .enumerate()
            .for_each(|(i, ((particle, force_row), distance_row))| {
                particle.acceleration = accelerate_row(i, &snapshot, force_row, distance_row);
            });
    }
}
