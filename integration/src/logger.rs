/// Unified logger for centralized logging configuration

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logger configuration
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    pub level: String,

    /// Include target module paths
    pub include_targets: bool,

    /// Include thread IDs
    pub include_thread_ids: bool,

    /// Emit one JSON object per event instead of human readable lines
    pub json: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            include_targets: true,
            include_thread_ids: false,
            json: false,
        }
    }
}

/// Unified logger
pub struct UnifiedLogger;

impl UnifiedLogger {
    /// Initialize the global logger.
    ///
    /// `RUST_LOG` overrides the configured level. Fails if a global
    /// subscriber is already installed.
    pub fn init(config: LoggerConfig) -> anyhow::Result<()> {
        let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?;

        let json_layer = config.json.then(|| {
            fmt::layer()
                .json()
                .with_target(config.include_targets)
                .with_thread_ids(config.include_thread_ids)
        });
        let console_layer = (!config.json).then(|| {
            fmt::layer()
                .with_target(config.include_targets)
                .with_thread_ids(config.include_thread_ids)
                .with_ansi(true)
        });

        tracing_subscriber::registry()
            .with(filter)
            .with(json_layer)
            .with(console_layer)
            .try_init()?;

        tracing::info!("Logging initialized with level: {}", config.level);

        Ok(())
    }

    /// Initialize with default configuration
    pub fn init_default() -> anyhow::Result<()> {
        Self::init(LoggerConfig::default())
    }
}
