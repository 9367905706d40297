mod config;
mod game;
mod signals;

use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use frameloop_core::{FrameScheduler, ShutdownToken};
use frameloop_logging::{init_console_logger, ConsoleLoggerConfig};

use crate::{config::AppConfig, game::Bouncer};

fn main() -> anyhow::Result<()> {
    let cfg = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => AppConfig::load_toml(&path)?,
        None => AppConfig::default(),
    };

    let mut log_cfg = ConsoleLoggerConfig::from_env();
    if let Some(level) = cfg.logging.level.as_deref() {
        log_cfg = log_cfg.with_level(level)?;
    }
    init_console_logger(&log_cfg)?;

    let shutdown = ShutdownToken::new();
    signals::install_ctrlc_handler(&shutdown)?;
    if let Some(secs) = cfg.demo.run_seconds {
        let after = Duration::try_from_secs_f64(secs).with_context(|| {
            format!("demo.run_seconds must be a non-negative number (got {secs})")
        })?;
        signals::spawn_deadline(&shutdown, after);
    }

    let mut scheduler = FrameScheduler::with_monotonic_clock();
    scheduler
        .configure(cfg.scheduler.clone())
        .context("scheduler configuration rejected")?;

    let mut game = Bouncer::new(&cfg.demo);
    log::info!(
        "running at {} ups (fixed step {:.6}s), frame cap {}",
        cfg.scheduler.updates_per_second,
        scheduler.fixed_step(),
        match cfg.demo.frame_cap_hz {
            0 => "off".to_string(),
            hz => format!("{hz} Hz"),
        }
    );

    let ticks = scheduler.run_until(&mut game, &shutdown)?;

    let m = scheduler.metrics();
    log::info!(
        "stopped after {ticks} ticks: updates={} frames={} discarded={} bounces={} height={:.3}",
        m.total_updates,
        m.total_frames,
        m.total_discarded_steps,
        game.bounces,
        game.state().height
    );
    Ok(())
}
