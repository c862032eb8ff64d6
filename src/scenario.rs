use crate::{particle::Particle, vector::Vector};

/// Display radii of the bodies returned by [`eight_body`], in the same order.
pub const DEMO_RADII: [f64; 8] = [10.0, 6.0, 4.0, 3.0, 4.0, 4.0, 1.0, 4.0];

/// Vertical gap between two consecutive bodies of [`eight_body`].
const DEMO_GAP: f64 = 50.0;

/// Total linear momentum of the particles, `Σ mass * velocity`.
pub fn total_momentum<V: Vector>(particles: &[Particle<V>]) -> V {
    particles
        .iter()
        .fold(V::ZERO, |momentum, particle| momentum.add(particle.momentum()))
}

/// Shifts every velocity so that the total momentum of the particles is zero.
///
/// The centre of mass of the system is then at rest and the system does not drift away.
/// Does nothing on an empty slice.
pub fn normalize_momentum<V: Vector>(particles: &mut [Particle<V>]) {
    let total_mass: f64 = particles.iter().map(|particle| particle.mass).sum();
    if total_mass == 0.0 {
        return;
    }

    let drift = total_momentum(particles).scale(1.0 / total_mass);
    for particle in particles {
        particle.velocity = particle.velocity.sub(drift);
    }
}

/// A heavy central body with seven lighter bodies orbiting it.
///
/// The bodies are stacked every 50 units along the y axis starting at `center` and launched
/// along the x axis, then their momentum is normalized.
///
/// ```
/// # use nbody::prelude::*;
/// # use glam::DVec2;
/// let particles = scenario::eight_body(DVec2::new(500.0, 400.0));
///
/// assert_eq!(particles.len(), scenario::DEMO_RADII.len());
/// assert!(scenario::total_momentum(&particles).length() < 1E-6);
/// ```
pub fn eight_body<V: Vector>(center: V) -> Vec<Particle<V>> {
    let bodies = [
        (1000.0 * 1000.0, 0.0),
        (2000.0, 140.0),
        (1000.0, 140.0 / 1.5_f64.sqrt()),
        (700.0, 140.0 / 2.0_f64.sqrt()),
        (1000.0, 140.0 / 3.0_f64.sqrt()),
        (1000.0, 140.0 / 2.0),
        (1.0, 150.0 / 2.0),
        (1000.0, 140.0 / (2.0 * 2.0_f64.sqrt())),
    ];

    let mut particles: Vec<_> = bodies
        .into_iter()
        .enumerate()
        .map(|(n, (mass, speed))| {
            let offset = V::new(0.0, n as f64 * DEMO_GAP);
            Particle::new(mass, center.add(offset), V::new(speed, 0.0))
        })
        .collect();

    normalize_momentum(&mut particles);
    particles
}

/// Two bodies on a circular orbit around each other.
///
/// The central body sits at rest at the origin and the orbiting one starts at `(distance, 0)`
/// with the relative circular velocity `sqrt((central_mass + orbiting_mass) / distance)` along y.
pub fn circular_orbit<V: Vector>(
    central_mass: f64,
    orbiting_mass: f64,
    distance: f64,
) -> [Particle<V>; 2] {
    let speed = ((central_mass + orbiting_mass) / distance).sqrt();

    [
        Particle::new(central_mass, V::ZERO, V::ZERO),
        Particle::new(orbiting_mass, V::new(distance, 0.0), V::new(0.0, speed)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn momentum_sums_particles() {
        let particles = [
            Particle::new(2.0, DVec2::ZERO, DVec2::new(1.0, 0.0)),
            Particle::new(3.0, DVec2::ONE, DVec2::new(0.0, -1.0)),
        ];

        assert_eq!(total_momentum(&particles), DVec2::new(2.0, -3.0));
        assert_eq!(total_momentum::<DVec2>(&[]), DVec2::ZERO);
    }

    #[test]
    fn normalized_momentum_is_zero() {
        let mut particles = vec![
            Particle::new(1.0, DVec2::ZERO, DVec2::new(4.0, 2.0)),
            Particle::new(3.0, DVec2::X, DVec2::new(0.0, 2.0)),
        ];
        normalize_momentum(&mut particles);

        // Total momentum (4, 8) over a total mass of 4.
        assert_eq!(particles[0].velocity, DVec2::new(3.0, 0.0));
        assert_eq!(particles[1].velocity, DVec2::new(-1.0, 0.0));
        assert_eq!(total_momentum(&particles), DVec2::ZERO);

        normalize_momentum::<DVec2>(&mut []);
    }

    #[test]
    fn eight_body_layout() {
        let center = DVec2::new(500.0, 400.0);
        let particles = eight_body(center);

        assert_eq!(particles.len(), 8);
        assert_eq!(particles[0].mass, 1E6);
        assert_eq!(particles[6].mass, 1.0);
        for (n, particle) in particles.iter().enumerate() {
            assert_eq!(particle.position, center + DVec2::new(0.0, n as f64 * 50.0));
            assert_eq!(particle.acceleration, DVec2::ZERO);
        }

        // Normalization only shifts the velocities by a common drift.
        let drift = particles[0].velocity;
        assert!((particles[1].velocity - drift).abs_diff_eq(DVec2::new(140.0, 0.0), 1E-9));
        assert!((particles[5].velocity - drift).abs_diff_eq(DVec2::new(70.0, 0.0), 1E-9));
        assert!(total_momentum(&particles).length() < 1E-6);
    }

    #[test]
    fn circular_orbit_velocity() {
        let [central, orbiting] = circular_orbit::<DVec2>(99.0, 1.0, 4.0);

        assert_eq!(central.velocity, DVec2::ZERO);
        assert_eq!(orbiting.position, DVec2::new(4.0, 0.0));
        assert_eq!(orbiting.velocity, DVec2::new(0.0, 5.0));
    }
}
