//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade.
//! Levels in this workspace: `error` for fatal runtime failures, `warn` for
//! surface anomalies, `info` for studio command feedback, `debug` for
//! renderer and degenerate-geometry diagnostics.

mod init;

pub use init::{init_logging, LoggingConfig};
