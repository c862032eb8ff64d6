use crate::{config::SimulationConfig, particle::Particle, vector::Vector};

/// Recent positions of every particle, kept for drawing motion traces.
///
/// Each particle owns `capacity` slots of a flat buffer, laid out as
/// `buffer[particle * capacity + slot]`. Only the first [`len`](Trail::len) slots of each particle
/// are active and they are written as a circular buffer: the position recorded on tick `t` goes
/// into slot `(t + 1) % len`.
///
/// The active length starts small and grows by one slot per recorded tick, except on ticks that
/// are a multiple of the grow interval, until it reaches the capacity. It never shrinks.
#[derive(Clone, Debug)]
pub struct Trail<V> {
    capacity: usize,
    grow_interval: u64,
    len: usize,
    buffer: Vec<V>,
}

impl<V: Vector> Trail<V> {
    /// Allocates a zeroed trail for `particle_count` particles.
    ///
    /// # Panics
    ///
    /// If the configuration is invalid, see [`SimulationConfig::validate`].
    pub fn new(particle_count: usize, config: &SimulationConfig) -> Self {
        config.validate();

        Self {
            capacity: config.trail_capacity,
            grow_interval: config.tail_grow_interval,
            len: config.trail_length,
            buffer: vec![V::ZERO; particle_count * config.trail_capacity],
        }
    }

    /// Records the current position of every particle for the given tick.
    ///
    /// The trail first grows if `tick` is not a multiple of the grow interval, then the positions
    /// are written at `(tick + 1) % len` using the grown length.
    pub fn record(&mut self, tick: u64, particles: &[Particle<V>]) {
        debug_assert_eq!(particles.len() * self.capacity, self.buffer.len());

        if tick % self.grow_interval != 0 && self.len < self.capacity {
            self.len += 1;
            log::trace!("trail grew to {} on tick {tick}", self.len);
        }

        let slot = ((tick + 1) % self.len as u64) as usize;
        for (positions, particle) in self.buffer.chunks_exact_mut(self.capacity).zip(particles) {
            positions[slot] = particle.position;
        }
    }
}

impl<V> Trail<V> {
    /// Number of active slots per particle.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false`, a trail has at least one active slot.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of slots per particle.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of ticks in one growth cycle.
    #[inline]
    pub const fn grow_interval(&self) -> u64 {
        self.grow_interval
    }

    /// Flat index of a particle's slot in [`as_slice`](Trail::as_slice).
    #[inline]
    pub fn slot_index(&self, particle: usize, slot: usize) -> usize {
        debug_assert!(slot < self.capacity);
        particle * self.capacity + slot
    }

    /// Returns the position stored in a particle's slot.
    ///
    /// # Panics
    ///
    /// If `particle` is out of bounds or, in debug builds, if `slot` is not below the capacity.
    #[inline]
    pub fn get(&self, particle: usize, slot: usize) -> &V {
        &self.buffer[self.slot_index(particle, slot)]
    }

    /// Returns the active slots of a particle, in slot order.
    ///
    /// Slots are not sorted by age; once the trail is full the oldest position sits right after
    /// the most recently written slot.
    #[inline]
    pub fn particle_trail(&self, particle: usize) -> &[V] {
        let start = particle * self.capacity;
        &self.buffer[start..start + self.len]
    }

    /// Iterates over the active slots of every particle.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &[V]> {
        self.buffer
            .chunks_exact(self.capacity)
            .map(move |positions| &positions[..self.len])
    }

    /// Returns the whole buffer, `capacity` slots per particle.
    #[inline]
    pub fn as_slice(&self) -> &[V] {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::Trail;
    use crate::{config::SimulationConfig, particle::Particle};
    use glam::DVec2;

    fn config(trail_capacity: usize, tail_grow_interval: u64) -> SimulationConfig {
        SimulationConfig {
            trail_capacity,
            tail_grow_interval,
            trail_length: 1,
        }
    }

    // Closed form of the growth rule: one growth per tick except on multiples of the interval.
    fn expected_len(ticks: u64, capacity: usize, interval: u64) -> usize {
        let grown = ticks * (interval - 1) / interval;
        capacity.min(1 + grown as usize)
    }

    #[test]
    fn zeroed_on_creation() {
        let trail = Trail::<DVec2>::new(3, &config(5, 120));

        assert_eq!(trail.as_slice().len(), 15);
        assert!(trail.as_slice().iter().all(|&p| p == DVec2::ZERO));
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn growth_pauses_on_interval_multiples() {
        let (capacity, interval) = (200, 10);
        let mut trail = Trail::new(1, &config(capacity, interval));
        let particles = [Particle::<DVec2>::default()];

        // Tick 0 is a multiple of every interval.
        trail.record(0, &particles);
        assert_eq!(trail.len(), 1);

        for tick in 1..150 {
            let before = trail.len();
            trail.record(tick, &particles);

            if tick % interval == 0 {
                assert_eq!(trail.len(), before, "grew on tick {tick}");
            } else {
                assert_eq!(trail.len(), before + 1, "did not grow on tick {tick}");
            }
            assert_eq!(trail.len(), expected_len(tick + 1, capacity, interval));
        }
    }

    #[test]
    fn growth_stops_at_capacity() {
        let mut trail = Trail::new(2, &config(50, 120));
        let particles = [Particle::<DVec2>::default(); 2];

        for tick in 0..1_000 {
            trail.record(tick, &particles);
            assert_eq!(trail.len(), expected_len(tick + 1, 50, 120));
        }
        assert_eq!(trail.len(), trail.capacity());
    }

    #[test]
    fn circular_overwrite() {
        let mut trail = Trail::new(2, &config(4, 1_000));
        let mut particles = [Particle::<DVec2>::default(); 2];

        for tick in 0..8 {
            particles[0].position = DVec2::new(tick as f64, 0.0);
            particles[1].position = DVec2::new(0.0, -(tick as f64));
            trail.record(tick, &particles);
        }

        // While growing, every tick lands on slot 0. Once full, ticks 4..8 fill slots 1, 2, 3, 0.
        assert_eq!(trail.len(), 4);
        assert_eq!(
            trail.particle_trail(0),
            &[
                DVec2::new(7.0, 0.0),
                DVec2::new(4.0, 0.0),
                DVec2::new(5.0, 0.0),
                DVec2::new(6.0, 0.0),
            ]
        );
        assert_eq!(*trail.get(1, 2), DVec2::new(0.0, -5.0));
        assert_eq!(trail.iter().count(), 2);
    }

    #[test]
    fn inactive_slots_untouched() {
        let mut trail = Trail::new(1, &config(6, 1_000));
        let particles = [Particle::new(1.0, DVec2::ONE, DVec2::ZERO)];

        for tick in 0..3 {
            trail.record(tick, &particles);
        }

        assert_eq!(trail.len(), 3);
        assert_eq!(trail.as_slice()[0], DVec2::ONE);
        assert!(trail.as_slice()[1..].iter().all(|&p| p == DVec2::ZERO));
    }
}
