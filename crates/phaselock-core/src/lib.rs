//! # Carrier-Phase and Symbol-Timing Recovery Primitives
//!
//! This crate provides the adaptive feedback core of a QPSK digital
//! receiver: streaming blocks with state that persists across calls,
//! numerically-derived tunings, and tight per-sample arithmetic that stays
//! correct over arbitrarily long sample streams.
//!
//! ## Blocks
//!
//! - **[`pid_controller`]**: discrete PID feedback filter, the
//!   error-to-correction transfer function of the recovery loops
//! - **[`costas_loop`]**: decision-directed QPSK carrier recovery built on
//!   the PID controller, with a diagnostic phase-error history
//! - **[`farrow_interpolator`]**: cubic Lagrange/Farrow fractional-delay
//!   interpolator, the timing-adjustment primitive a symbol-timing loop
//!   would steer
//! - **[`frequency_offset`]**: CFO channel impairment for exercising the
//!   loops
//! - **[`qpsk`]**: dibit ⇄ symbol mapping for end-to-end chains
//!
//! ## Signal Flow
//!
//! ```text
//! bits → [QPSK mod] → [CFO channel] → [Costas loop] → [QPSK demod] → bits
//!                                          │
//!                                     [PID filter]
//! ```
//!
//! All blocks are single-threaded, synchronous, pull-based state machines:
//! each call is a bounded, deterministic transformation of (state, input),
//! with no internal locking. Callers serialize access per instance.
//!
//! ## Example
//!
//! ```rust
//! use phaselock_core::prelude::*;
//! use std::f64::consts::PI;
//!
//! // Transmit dibits, impair with a fixed phase offset, recover
//! let dibits = vec![0b00, 0b01, 0b11, 0b10, 0b01, 0b00, 0b10, 0b11];
//! let mut symbols = qpsk::modulate(&dibits);
//! let rot = Complex::from_polar(1.0, PI / 8.0);
//! for s in symbols.iter_mut() {
//!     *s *= rot;
//! }
//!
//! let mut costas = CostasLoopQpsk::new(0.05, 128);
//! let corrected = costas.process_block(&symbols);
//! assert_eq!(qpsk::demodulate(&corrected), dibits);
//! ```

pub mod costas_loop;
pub mod farrow_interpolator;
pub mod frequency_offset;
pub mod observe;
pub mod pid_controller;
pub mod qpsk;
pub mod types;

/// Commonly used items, re-exported for convenience.
pub mod prelude {
    pub use crate::costas_loop::CostasLoopQpsk;
    pub use crate::farrow_interpolator::CubicFarrowInterpolator;
    pub use crate::frequency_offset::{apply_cfo, apply_cfo_inplace, FrequencyOffset};
    pub use crate::pid_controller::PidController;
    pub use crate::qpsk;
    pub use crate::types::{Complex, IQBuffer, IQSample, Sample};
}
