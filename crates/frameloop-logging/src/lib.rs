use env_logger::{Builder, WriteStyle};
use log::LevelFilter;
use thiserror::Error;

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log level '{0}' (expected off, error, warn, info, debug or trace)")]
    InvalidLevel(String),

    #[error("logger init failed: {0}")]
    Init(#[from] log::SetLoggerError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleLoggerConfig {
    pub level: LevelFilter,
    pub colors: bool,
    pub include_module: bool,
}

impl ConsoleLoggerConfig {
    pub fn from_env() -> Self {
        let level = std::env::var("FRAMELOOP_LOG")
            .ok()
            .and_then(|v| parse_level(&v).ok())
            .unwrap_or(LevelFilter::Info);
        let colors = std::env::var("FRAMELOOP_LOG_COLORS")
            .ok()
            .map(|v| v != "0")
            .unwrap_or(true);
        let include_module = std::env::var("FRAMELOOP_LOG_MODULE")
            .ok()
            .map(|v| v != "0")
            .unwrap_or(true);

        Self {
            level,
            colors,
            include_module,
        }
    }

    /// Replaces the level with an explicit one, e.g. from the host config file.
    pub fn with_level(mut self, level: &str) -> Result<Self, LoggingError> {
        self.level = parse_level(level)?;
        Ok(self)
    }
}

impl Default for ConsoleLoggerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

pub fn parse_level(s: &str) -> Result<LevelFilter, LoggingError> {
    s.trim()
        .parse::<LevelFilter>()
        .map_err(|_| LoggingError::InvalidLevel(s.to_owned()))
}

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Installs the console logger for the process.
///
/// Repeated calls after a successful install are no-ops.
pub fn init_console_logger(config: &ConsoleLoggerConfig) -> Result<(), LoggingError> {
    if INITIALIZED.load(Ordering::Acquire) {
        return Ok(());
    }

    let mut builder = Builder::new();
    builder.filter_level(config.level);
    builder.write_style(if config.colors {
        WriteStyle::Auto
    } else {
        WriteStyle::Never
    });

    let include_module = config.include_module;
    builder.format(move |buf, record| {
        let style = buf.default_level_style(record.level());
        if include_module {
            writeln!(
                buf,
                "[{style}{:<5}{style:#}] {:<25} {}",
                record.level(),
                record.target(),
                record.args()
            )
        } else {
            writeln!(buf, "[{style}{:<5}{style:#}] {}", record.level(), record.args())
        }
    });

    builder.try_init()?;
    INITIALIZED.store(true, Ordering::Release);

    log::debug!("console logger initialized at level {}", config.level);
    Ok(())
}
