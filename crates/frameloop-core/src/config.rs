use serde::{Deserialize, Serialize};

use crate::error::{SchedulerError, SchedulerResult};

/// Tunables consumed by `FrameScheduler::configure`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Target simulation rate (updates per second).
    #[serde(default = "default_updates_per_second")]
    pub updates_per_second: f64,
    /// Owed simulation time kept after a stall, in seconds. Anything beyond is discarded.
    #[serde(default = "default_max_accumulated_seconds")]
    pub max_accumulated_seconds: f64,
    /// Hard ceiling on simulate calls within one tick.
    #[serde(default = "default_max_steps_per_tick")]
    pub max_steps_per_tick: u32,
    /// Log UPS/FPS once per metrics window.
    #[serde(default = "default_log_metrics")]
    pub log_metrics: bool,
}

fn default_updates_per_second() -> f64 { 60.0 }
fn default_max_accumulated_seconds() -> f64 { 0.5 }
fn default_max_steps_per_tick() -> u32 { 5 }
fn default_log_metrics() -> bool { true }

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            updates_per_second: default_updates_per_second(),
            max_accumulated_seconds: default_max_accumulated_seconds(),
            max_steps_per_tick: default_max_steps_per_tick(),
            log_metrics: default_log_metrics(),
        }
    }
}

impl SchedulerConfig {
    pub fn new(
        updates_per_second: f64,
        max_accumulated_seconds: f64,
        max_steps_per_tick: u32,
    ) -> Self {
        Self {
            updates_per_second,
            max_accumulated_seconds,
            max_steps_per_tick,
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_log_metrics(mut self, enabled: bool) -> Self {
        self.log_metrics = enabled;
        self
    }

    /// Checks every tunable. NaN fails every comparison, so it is rejected too.
    pub fn validate(&self) -> SchedulerResult<()> {
        let ups = self.updates_per_second;
        if !(ups.is_finite() && ups > 0.0) {
            return Err(SchedulerError::invalid(
                "updates_per_second",
                format!("must be a finite number > 0 (got {ups})"),
            ));
        }

        let max_acc = self.max_accumulated_seconds;
        if !(max_acc.is_finite() && max_acc >= 0.0) {
            return Err(SchedulerError::invalid(
                "max_accumulated_seconds",
                format!("must be a finite number >= 0 (got {max_acc})"),
            ));
        }

        // The cap is kept in step units; it must survive the conversion.
        let max_steps = max_acc * ups;
        if !max_steps.is_finite() {
            return Err(SchedulerError::invalid(
                "max_accumulated_seconds",
                format!("times updates_per_second overflows (got {max_acc} * {ups})"),
            ));
        }

        if self.max_steps_per_tick < 1 {
            return Err(SchedulerError::invalid(
                "max_steps_per_tick",
                format!("must be >= 1 (got {})", self.max_steps_per_tick),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = SchedulerConfig::default();
        assert_eq!(cfg.updates_per_second, 60.0);
        assert_eq!(cfg.max_accumulated_seconds, 0.5);
        assert_eq!(cfg.max_steps_per_tick, 5);
        assert!(cfg.log_metrics);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn missing_toml_fields_fall_back_to_defaults() {
        let cfg: SchedulerConfig = toml::from_str("updates_per_second = 120.0").unwrap();
        assert_eq!(cfg.updates_per_second, 120.0);
        assert_eq!(cfg.max_accumulated_seconds, 0.5);
        assert_eq!(cfg.max_steps_per_tick, 5);

        let empty: SchedulerConfig = toml::from_str("").unwrap();
        assert_eq!(empty, SchedulerConfig::default());
    }

    #[test]
    fn rejects_non_positive_rate() {
        for ups in [0.0, -30.0, f64::NAN, f64::INFINITY] {
            let err = SchedulerConfig::new(ups, 0.5, 5).validate().unwrap_err();
            assert!(matches!(
                err,
                SchedulerError::InvalidConfiguration { field: "updates_per_second", .. }
            ));
        }
    }

    #[test]
    fn rejects_negative_accumulation_window() {
        let err = SchedulerConfig::new(60.0, -0.1, 5).validate().unwrap_err();
        assert!(matches!(
            err,
            SchedulerError::InvalidConfiguration { field: "max_accumulated_seconds", .. }
        ));

        // Zero is allowed: nothing may be owed across ticks.
        assert!(SchedulerConfig::new(60.0, 0.0, 5).validate().is_ok());
    }

    #[test]
    fn rejects_cap_that_overflows_in_step_units() {
        let err = SchedulerConfig::new(1e300, 1e10, 5).validate().unwrap_err();
        assert!(matches!(
            err,
            SchedulerError::InvalidConfiguration { field: "max_accumulated_seconds", .. }
        ));

        // Large but representable products are fine.
        assert!(SchedulerConfig::new(1e300, 0.5, 5).validate().is_ok());
    }

    #[test]
    fn rejects_zero_step_cap() {
        let err = SchedulerConfig::new(60.0, 0.5, 0).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: max_steps_per_tick must be >= 1 (got 0)"
        );
    }
}
