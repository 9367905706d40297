use crate::clock::{Clock, MonotonicClock, NANOS_PER_SEC};
use crate::config::SchedulerConfig;
use crate::error::SchedulerResult;
use crate::frame::TickReport;
use crate::handler::FrameHandler;
use crate::sync::ShutdownToken;
use crate::telemetry::{FrameMetrics, Telemetry};

/// Fixed-timestep frame scheduler.
///
/// Converts irregular wall-clock intervals into zero or more fixed simulation
/// steps plus exactly one present per tick. Simulation work per tick is
/// bounded by two guards against the spiral of death:
///
/// - **accumulator cap**: owed steps beyond `max_accumulated_seconds` are dropped
///   before any simulation runs (stalls, debugger pauses)
/// - **step cap**: at most `max_steps_per_tick` simulate calls per tick; whole
///   steps still owed afterwards are dropped
///
/// The accumulator is kept in units of the fixed step, so the remainder
/// handed to `present` is directly the interpolation alpha.
pub struct FrameScheduler<C: Clock = MonotonicClock> {
    clock: C,
    config: SchedulerConfig,

    fixed_step: f64,
    max_accumulated_steps: f64,
    accumulator: f64,

    previous_timestamp: u64,
    running: bool,

    total_discarded_steps: u64,
    tick_index: u64,
    last_report: Option<TickReport>,
    telemetry: Telemetry,
}

impl FrameScheduler<MonotonicClock> {
    #[inline]
    pub fn with_monotonic_clock() -> Self {
        Self::new(MonotonicClock::new())
    }
}

impl Default for FrameScheduler<MonotonicClock> {
    #[inline]
    fn default() -> Self {
        Self::with_monotonic_clock()
    }
}

impl<C: Clock> FrameScheduler<C> {
    /// Creates a stopped scheduler. Call `configure()` before ticking.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            config: SchedulerConfig::default(),
            fixed_step: 0.0,
            max_accumulated_steps: 0.0,
            accumulator: 0.0,
            previous_timestamp: 0,
            running: false,
            total_discarded_steps: 0,
            tick_index: 0,
            last_report: None,
            telemetry: Telemetry::new(),
        }
    }

    /// Loads the tunables and starts the scheduler.
    ///
    /// On error nothing changes: a stopped scheduler stays stopped and a running
    /// one keeps its previous configuration.
    pub fn configure(&mut self, config: SchedulerConfig) -> SchedulerResult<()> {
        config.validate()?;

        let now = self.clock.now_nanos();

        self.fixed_step = 1.0 / config.updates_per_second;
        self.max_accumulated_steps = config.max_accumulated_seconds * config.updates_per_second;
        self.accumulator = 0.0;
        self.previous_timestamp = now;
        self.tick_index = 0;
        self.last_report = None;
        self.telemetry.reset(now, config.log_metrics);
        self.config = config;
        self.running = true;

        log::debug!(
            "configured: ups={} fixed_step={:.6}s max_acc_steps={:.2} max_steps={}",
            self.config.updates_per_second,
            self.fixed_step,
            self.max_accumulated_steps,
            self.config.max_steps_per_tick
        );
        Ok(())
    }

    /// Stops ticking. Safe to call repeatedly or before `configure()`.
    pub fn stop(&mut self) {
        if self.running {
            log::debug!(
                "stopped after {} ticks, discarded_total={}",
                self.tick_index,
                self.total_discarded_steps
            );
        }
        self.running = false;
    }

    /// Runs one iteration of the frame loop.
    ///
    /// Returns `Ok(false)` without touching the handler when stopped. Handler
    /// errors are returned unchanged; state then reflects the moment right
    /// before the failing call.
    pub fn tick<H: FrameHandler>(&mut self, handler: &mut H) -> Result<bool, H::Error> {
        if !self.running {
            return Ok(false);
        }

        let now = self.clock.now_nanos();
        let elapsed_nanos = now.saturating_sub(self.previous_timestamp);
        self.previous_timestamp = now;
        self.accumulator +=
            elapsed_nanos as f64 * self.config.updates_per_second / NANOS_PER_SEC as f64;

        let mut report = TickReport {
            tick_index: self.tick_index + 1,
            ..TickReport::default()
        };

        if self.accumulator > self.max_accumulated_steps {
            let excess = (self.accumulator - self.max_accumulated_steps).floor() as u64;
            if excess > 0 {
                log::warn!(
                    "accumulated {:.2} steps, clamping to {:.2} (max {}s); discarding {excess}",
                    self.accumulator,
                    self.max_accumulated_steps,
                    self.config.max_accumulated_seconds
                );
            }
            self.total_discarded_steps = self.total_discarded_steps.saturating_add(excess);
            report.discarded_by_accumulator_cap = excess;
            self.accumulator = self.max_accumulated_steps;
        }

        handler.poll_input()?;

        while self.accumulator >= 1.0 && report.steps_run < self.config.max_steps_per_tick {
            handler.simulate(self.fixed_step)?;
            self.accumulator -= 1.0;
            report.steps_run += 1;
            self.telemetry.update_tick();
        }

        if self.accumulator >= 1.0 {
            let skipped = self.accumulator.floor();
            self.accumulator -= skipped;

            let skipped = skipped as u64;
            log::warn!(
                "skipped {skipped} steps (limit: {} per tick)",
                self.config.max_steps_per_tick
            );
            self.total_discarded_steps = self.total_discarded_steps.saturating_add(skipped);
            report.discarded_by_step_cap = skipped;
        }

        let alpha = self.accumulator;
        debug_assert!((0.0..1.0).contains(&alpha), "alpha out of range: {alpha}");

        handler.present(alpha)?;
        self.telemetry.frame_tick(now, self.total_discarded_steps);

        report.alpha = alpha;
        self.tick_index = report.tick_index;
        self.last_report = Some(report);
        Ok(true)
    }

    /// Ticks until `shutdown` is requested or the scheduler stops, then stops it.
    ///
    /// Returns the number of completed ticks. A handler error ends the loop
    /// early and leaves the scheduler running, so the host decides whether to resume.
    pub fn run_until<H: FrameHandler>(
        &mut self,
        handler: &mut H,
        shutdown: &ShutdownToken,
    ) -> Result<u64, H::Error> {
        let mut ticks = 0u64;
        while !shutdown.is_requested() {
            if !self.tick(handler)? {
                break;
            }
            ticks += 1;
        }

        self.stop();
        Ok(ticks)
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Step passed to every `simulate` call. `0.0` until configured.
    #[inline]
    pub fn fixed_step(&self) -> f64 {
        self.fixed_step
    }

    /// Owed simulation time in units of the fixed step.
    #[inline]
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    #[inline]
    pub fn max_accumulated_steps(&self) -> f64 {
        self.max_accumulated_steps
    }

    /// Steps dropped by either guard since construction. Never reset.
    #[inline]
    pub fn total_discarded_steps(&self) -> u64 {
        self.total_discarded_steps
    }

    #[inline]
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    #[inline]
    pub fn last_report(&self) -> Option<&TickReport> {
        self.last_report.as_ref()
    }

    #[inline]
    pub fn metrics(&self) -> FrameMetrics {
        self.telemetry.snapshot(self.total_discarded_steps)
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
