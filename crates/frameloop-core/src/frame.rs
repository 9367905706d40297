/// Outcome of one completed `tick()`.
///
/// `alpha` is the interpolation factor handed to `present`, always in `[0..1)`.
/// It is the accumulator remainder after the fixed steps of this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    /// Monotonic tick index, starting at 1 for the first tick after `configure()`.
    pub tick_index: u64,

    /// Number of `simulate` calls made during this tick.
    pub steps_run: u32,

    /// Whole steps dropped because the accumulator exceeded its cap.
    pub discarded_by_accumulator_cap: u64,

    /// Whole steps dropped because the per-tick step cap was reached.
    pub discarded_by_step_cap: u64,

    pub alpha: f64,
}

impl TickReport {
    #[inline]
    pub fn discarded(&self) -> u64 {
        self.discarded_by_accumulator_cap
            .saturating_add(self.discarded_by_step_cap)
    }
}
