use std::{
    thread,
    time::{Duration, Instant},
};

use frameloop_core::FrameHandler;

use crate::config::DemoConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyState {
    pub height: f64,
    pub velocity: f64,
}

/// A body dropped onto the floor, bouncing with energy loss.
///
/// Simulation only ever sees the fixed step; presentation blends the two
/// most recent states by alpha and optionally caps the frame rate.
pub struct Bouncer {
    previous: BodyState,
    current: BodyState,
    gravity: f64,
    restitution: f64,

    frame_budget: Option<Duration>,
    last_present: Option<Instant>,

    pub bounces: u64,
    pub frames: u64,
    pub drawn_height: f64,
}

impl Bouncer {
    pub fn new(cfg: &DemoConfig) -> Self {
        let start = BodyState {
            height: cfg.drop_height.max(0.0),
            velocity: 0.0,
        };
        let frame_budget =
            (cfg.frame_cap_hz > 0).then(|| Duration::from_secs_f64(1.0 / cfg.frame_cap_hz as f64));

        Self {
            previous: start,
            current: start,
            gravity: cfg.gravity,
            restitution: cfg.restitution.clamp(0.0, 1.0),
            frame_budget,
            last_present: None,
            bounces: 0,
            frames: 0,
            drawn_height: start.height,
        }
    }

    #[inline]
    pub fn state(&self) -> BodyState {
        self.current
    }

    fn pace(&mut self) {
        let Some(budget) = self.frame_budget else { return; };

        if let Some(last) = self.last_present {
            let spent = last.elapsed();
            if spent < budget {
                thread::sleep(budget - spent);
            }
        }
        self.last_present = Some(Instant::now());
    }
}

impl FrameHandler for Bouncer {
    type Error = anyhow::Error;

    fn simulate(&mut self, dt: f64) -> anyhow::Result<()> {
        self.previous = self.current;

        let mut next = self.current;
        next.velocity -= self.gravity * dt;
        next.height += next.velocity * dt;

        if next.height < 0.0 {
            next.height = -next.height * self.restitution;
            next.velocity = -next.velocity * self.restitution;
            self.bounces += 1;
            log::debug!("bounce #{} at v={:.3}", self.bounces, next.velocity);
        }

        if !next.height.is_finite() || !next.velocity.is_finite() {
            anyhow::bail!("simulation diverged: {next:?}");
        }

        self.current = next;
        Ok(())
    }

    fn present(&mut self, alpha: f64) -> anyhow::Result<()> {
        self.drawn_height =
            self.previous.height + (self.current.height - self.previous.height) * alpha;
        self.frames += 1;

        if self.frames % 120 == 0 {
            log::debug!("frame {} height={:.3} alpha={alpha:.3}", self.frames, self.drawn_height);
        }

        self.pace();
        Ok(())
    }
}
