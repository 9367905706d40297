use std::{thread, time::Duration};

use frameloop_core::ShutdownToken;

pub fn install_ctrlc_handler(shutdown: &ShutdownToken) -> anyhow::Result<()> {
    let s = shutdown.clone();
    ctrlc::set_handler(move || {
        log::info!("ctrl-c received, shutting down");
        s.request();
    })?;
    Ok(())
}

/// Requests shutdown once `after` has passed.
pub fn spawn_deadline(shutdown: &ShutdownToken, after: Duration) -> thread::JoinHandle<()> {
    let s = shutdown.clone();
    thread::spawn(move || {
        thread::sleep(after);
        s.request();
    })
}
