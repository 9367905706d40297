use thiserror::Error;

/// Scheduler-wide error.
///
/// Keep this small and stable. Only configuration problems are reported here:
/// a tick never fails because real time passed unexpectedly, and callback
/// errors travel through `FrameHandler::Error` untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchedulerError {
    /// A tunable was out of range when passed to `configure()`.
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfiguration {
        field: &'static str,
        reason: String,
    },
}

impl SchedulerError {
    #[inline]
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

pub type SchedulerResult<T> = Result<T, SchedulerError>;
