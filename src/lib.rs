pub mod app;
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod language;
pub mod logging;
pub mod prompt;
pub mod runtime;
pub mod session;
pub mod stats;
pub mod ui;

pub use error::{Error, Result};
