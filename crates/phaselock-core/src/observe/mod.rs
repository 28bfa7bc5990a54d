//! # Observability
//!
//! Structured logging for the recovery loops via the `tracing` ecosystem.
//! DSP hot paths never log per-sample; only bounded-rate events (loop
//! retuning, resets driven by an application) emit records.
//!
//! ```rust,ignore
//! use phaselock_core::observe::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::development());
//!
//! tracing::info!(loop_bw = 0.05, "carrier recovery configured");
//! ```

pub mod logging;

pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};
