use crate::clock::NANOS_PER_SEC;

/// Snapshot of the scheduler's observability counters.
///
/// Rates come from the last completed one-second window and stay `0` until
/// the first window closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameMetrics {
    pub updates_per_second: u32,
    pub frames_per_second: u32,
    pub total_updates: u64,
    pub total_frames: u64,
    pub total_discarded_steps: u64,
}

/// Event counter paired with the deadline of its current window.
#[derive(Debug, Clone, Copy, Default)]
struct RateWindow {
    count: u32,
    deadline: u64,
    last_rate: u32,
}

impl RateWindow {
    #[inline]
    fn reset(&mut self, now: u64) {
        self.count = 0;
        self.last_rate = 0;
        self.deadline = now.saturating_add(NANOS_PER_SEC);
    }

    #[inline]
    fn bump(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    /// Closes the window once `now` is past its deadline and returns the window total.
    fn roll(&mut self, now: u64) -> Option<u32> {
        if now <= self.deadline {
            return None;
        }

        self.last_rate = self.count;
        self.count = 0;
        self.deadline = now.saturating_add(NANOS_PER_SEC);
        Some(self.last_rate)
    }
}

pub(crate) struct Telemetry {
    ups: RateWindow,
    fps: RateWindow,
    total_updates: u64,
    total_frames: u64,
    log_enabled: bool,
}

impl Telemetry {
    pub(crate) fn new() -> Self {
        Self {
            ups: RateWindow::default(),
            fps: RateWindow::default(),
            total_updates: 0,
            total_frames: 0,
            log_enabled: false,
        }
    }

    pub(crate) fn reset(&mut self, now: u64, log_enabled: bool) {
        self.ups.reset(now);
        self.fps.reset(now);
        self.total_updates = 0;
        self.total_frames = 0;
        self.log_enabled = log_enabled;
    }

    /// Counts one completed simulate call.
    #[inline]
    pub(crate) fn update_tick(&mut self) {
        self.ups.bump();
        self.total_updates += 1;
    }

    /// Counts one completed present call and closes any elapsed window.
    pub(crate) fn frame_tick(&mut self, now: u64, total_discarded: u64) {
        self.fps.bump();
        self.total_frames += 1;

        let ups = self.ups.roll(now);
        let fps = self.fps.roll(now);

        if !self.log_enabled {
            return;
        }
        if let (Some(ups), Some(fps)) = (ups, fps) {
            log::info!("ups={ups} fps={fps} discarded_total={total_discarded}");
        }
    }

    pub(crate) fn snapshot(&self, total_discarded: u64) -> FrameMetrics {
        FrameMetrics {
            updates_per_second: self.ups.last_rate,
            frames_per_second: self.fps.last_rate,
            total_updates: self.total_updates,
            total_frames: self.total_frames,
            total_discarded_steps: total_discarded,
        }
    }
}
