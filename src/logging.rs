//! Logging configuration using tracing.
//!
//! Nothing is logged unless `TYPETICK_LOG` is set. The terminal belongs to the
//! UI, so when enabled the logs go to a daily rolling file in the per-user
//! data directory, filtered by the variable's directives:
//!
//! ```bash
//! TYPETICK_LOG=debug typetick
//! ```

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

const LOG_ENV: &str = "TYPETICK_LOG";
const LOG_FILE: &str = "typetick.log";
const DEFAULT_DIRECTIVES: &str = "typetick=info";

/// Install the file logger if `TYPETICK_LOG` asks for one
pub fn init(log_dir: &Path) -> Result<()> {
    match std::env::var(LOG_ENV) {
        Ok(directives) => init_file(log_dir, &directives),
        Err(_) => Ok(()),
    }
}

fn init_file(log_dir: &Path, directives: &str) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE);

    let env_filter =
        EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| Error::Logging {
            message: e.to_string(),
        })?;

    tracing::info!(log_dir = %log_dir.display(), "typetick starting");

    Ok(())
}
