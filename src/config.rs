/// Default upper bound on the number of positions stored per particle.
pub const TRAIL_CAPACITY: usize = 50;

/// Default number of ticks in one trail growth cycle.
pub const TAIL_GROW_INTERVAL: u64 = 120;

/// Tunable parameters of a [`Simulation`](crate::simulation::Simulation).
///
/// The defaults match [`TRAIL_CAPACITY`] and [`TAIL_GROW_INTERVAL`] with a trail length of 1,
/// which is equivalent to having no visible trail until it grows.
///
/// With the `serde` feature enabled, it implements `Serialize` and `Deserialize`, missing fields
/// taking their default value.
///
/// ```
/// # use nbody::config::SimulationConfig;
/// let config = SimulationConfig {
///     trail_capacity: 10,
///     ..Default::default()
/// };
///
/// assert_eq!(config.tail_grow_interval, 120);
/// assert_eq!(config.trail_length, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    /// Number of positions allocated per particle, the maximum trail length.
    pub trail_capacity: usize,
    /// The trail stops growing for one tick every `tail_grow_interval` ticks.
    pub tail_grow_interval: u64,
    /// Trail length the simulation starts with.
    pub trail_length: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trail_capacity: TRAIL_CAPACITY,
            tail_grow_interval: TAIL_GROW_INTERVAL,
            trail_length: 1,
        }
    }
}

impl SimulationConfig {
    /// Checks that the parameters can describe a trail.
    ///
    /// # Panics
    ///
    /// If the capacity or the growth interval is zero, or if the trail length is not in
    /// `1..=trail_capacity`.
    pub fn validate(&self) {
        assert!(self.trail_capacity > 0, "trail capacity must be non-zero");
        assert!(
            self.tail_grow_interval > 0,
            "tail grow interval must be non-zero"
        );
        assert!(
            (1..=self.trail_capacity).contains(&self.trail_length),
            "trail length {} invalid for a capacity of {}",
            self.trail_length,
            self.trail_capacity
        );
    }
}
