/// Host callbacks driven by `FrameScheduler::tick`.
///
/// Per tick the scheduler calls, in order:
/// - `poll_input` once
/// - `simulate` zero or more times, always with the same fixed step
/// - `present` once, with the interpolation alpha in `[0..1)`
///
/// Errors are returned from `tick` as-is. The scheduler never swallows them.
pub trait FrameHandler {
    type Error;

    /// Refreshes input state. Must not simulate or render.
    fn poll_input(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Advances the simulation by exactly `fixed_step` seconds.
    fn simulate(&mut self, fixed_step: f64) -> Result<(), Self::Error>;

    /// Draws the world `alpha` of the way between the last simulated state and the next.
    fn present(&mut self, alpha: f64) -> Result<(), Self::Error>;
}
