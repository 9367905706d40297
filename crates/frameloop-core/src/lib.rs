//! frameloop core
//!
//! Fixed-timestep frame scheduler. The host owns a `FrameScheduler`, calls
//! `tick()` once per outer-loop iteration and supplies the callbacks through
//! `FrameHandler`. No windowing, rendering or input code lives here.

pub mod clock;
pub mod config;
pub mod error;
pub mod frame;
pub mod handler;
pub mod scheduler;
pub mod sync;
mod telemetry;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::SchedulerConfig;
pub use error::{SchedulerError, SchedulerResult};
pub use frame::TickReport;
pub use handler::FrameHandler;
pub use scheduler::FrameScheduler;
pub use sync::ShutdownToken;
pub use telemetry::FrameMetrics;
