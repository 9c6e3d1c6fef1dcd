//=========================================================================
// Logging
//=========================================================================
//
// `env_logger` installation for applications built on the engine.
//
// The engine itself only logs through the `log` facade; this module is
// the optional backend. Filters follow `env_logger` syntax, e.g.
// "info" or "aetheric_frames=debug,platform=trace".
//
//=========================================================================

//=== Standard Library ====================================================

use std::sync::Once;

//=== External Dependencies ===============================================

use env_logger::WriteStyle;
use log::LevelFilter;

//=== LoggingConfig =======================================================

/// Logger configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Explicit filter. Takes precedence over `RUST_LOG`.
    pub env_filter: Option<String>,

    /// Level used when neither a filter nor `RUST_LOG` is set.
    pub default_level: LevelFilter,

    pub write_style: WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    pub fn with_default_level(mut self, level: LevelFilter) -> Self {
        self.default_level = level;
        self
    }
}

//=== Initialization ======================================================

static INIT: Once = Once::new();

/// Installs the global logger.
///
/// Only the first call has any effect. If another logger is already
/// installed the call is a no-op.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(config.default_level);
            }
        }

        builder.write_style(config.write_style);

        if builder.try_init().is_ok() {
            log::debug!("Logging initialized");
        }
    });
}

//=========================================================================
// Unit Tests
//=========================================================================
