//! Costas Loop — Decision-Directed QPSK Carrier Recovery
//!
//! Tracks and removes a slowly-varying carrier phase/frequency offset from a
//! QPSK-modulated complex sample stream. Each incoming sample is derotated by
//! the accumulated NCO phase estimate, the nearest ideal constellation point
//! is decided by the signs of I and Q, and the signed angle between the
//! derotated sample and that decision drives a PID loop filter that updates
//! the estimate. Recent phase errors are kept in a fixed-capacity ring buffer
//! for diagnostics.
//!
//! ```text
//! input → [×exp(-jθ)] → corrected output
//!              ↑               ↓
//!            θ += PID ← arg(y·conj(decision))
//! ```
//!
//! ## Example
//!
//! ```rust
//! use phaselock_core::costas_loop::CostasLoopQpsk;
//! use num_complex::Complex64;
//! use std::f64::consts::PI;
//!
//! // QPSK loop: bandwidth 0.05, keep the last 256 phase errors
//! let mut costas = CostasLoopQpsk::new(0.05, 256);
//!
//! // Stream QPSK symbols with a constant π/6 phase offset
//! let offset = PI / 6.0;
//! for i in 0..200 {
//!     let angle = PI / 4.0 + (i % 4) as f64 * PI / 2.0 + offset;
//!     let sample = Complex64::new(angle.cos(), angle.sin());
//!     let corrected = costas.process_sample(sample);
//! }
//!
//! // The NCO phase estimate has converged onto the offset
//! assert!((costas.correction() - offset).abs() < 0.05);
//! ```

use num_complex::Complex64;

use crate::pid_controller::PidController;

/// Fixed damping factor for the loop-gain derivation (critically damped).
const DAMPING_FACTOR: f64 = 0.707;

/// QPSK Costas loop for carrier phase and frequency recovery.
///
/// The loop filter is a PI controller whose gains are a derived function of
/// the single tunable parameter `loop_bw` (normalized to a sample rate of 1).
/// The derivation runs on construction and on every [`set_loop_bw`] call:
///
/// ```text
/// α         = 1 − 2ζ²                      (ζ = 0.707)
/// scaled_bw = Bn / sqrt(α + sqrt(α² + 1))
/// Kp        = 2ζ·scaled_bw                 (Kd_ref = 1)
/// Ki        = scaled_bw²
/// ```
///
/// The owned controller's derivative gain is left at zero; the derivation
/// never touches it.
///
/// Not safe for concurrent invocation; each instance is a single mutable
/// state machine.
///
/// [`set_loop_bw`]: CostasLoopQpsk::set_loop_bw
#[derive(Debug, Clone)]
pub struct CostasLoopQpsk {
    /// Normalized loop bandwidth (the single external tuning knob).
    loop_bw: f64,
    /// Accumulated NCO phase correction (radians).
    correction: f64,
    /// Ring buffer of the most recent phase errors.
    error_history: Vec<f64>,
    /// Next slot to write in `error_history` (also the oldest entry).
    history_idx: usize,
    /// Loop filter; Kp/Ki are derived from `loop_bw`, Kd stays 0.
    pid: PidController,
}

impl CostasLoopQpsk {
    /// Create a new QPSK Costas loop.
    ///
    /// `loop_bw` is the normalized loop bandwidth (typical: 0.01 to 0.1).
    /// `history_len` is the diagnostic error-history capacity; it is a
    /// required parameter with no default.
    ///
    /// # Panics
    ///
    /// Panics if `history_len` is zero.
    pub fn new(loop_bw: f64, history_len: usize) -> Self {
        assert!(history_len > 0, "history_len must be positive");
        let mut costas = Self {
            loop_bw,
            correction: 0.0,
            error_history: vec![0.0; history_len],
            history_idx: 0,
            pid: PidController::new(0.0, 0.0, 0.0),
        };
        costas.set_loop_bw(loop_bw);
        costas
    }

    // -- Tuning -------------------------------------------------------------

    /// The current normalized loop bandwidth.
    pub fn loop_bw(&self) -> f64 {
        self.loop_bw
    }

    /// Set the loop bandwidth and re-derive the loop filter gains.
    ///
    /// Accumulated state (NCO correction, error history, PID accumulators)
    /// is left untouched, so the loop can be retuned while tracking.
    ///
    /// Gain equations from <https://john-gentile.com/kb/dsp/PI_filter.html>,
    /// with damping ζ = 0.707 and a unity detector gain.
    pub fn set_loop_bw(&mut self, value: f64) {
        self.loop_bw = value;

        let alpha = 1.0 - 2.0 * DAMPING_FACTOR * DAMPING_FACTOR;
        let scaled_bw = value / (alpha + (alpha * alpha + 1.0).sqrt()).sqrt();
        let k_detector = 1.0;
        let kp = 2.0 * DAMPING_FACTOR * scaled_bw / k_detector;
        let ki = scaled_bw * scaled_bw / k_detector;

        self.pid.set_kp(kp);
        self.pid.set_ki(ki);

        tracing::debug!(loop_bw = value, kp, ki, "Costas loop gains re-derived");
    }

    // -- Introspection ------------------------------------------------------

    /// The accumulated NCO phase correction in radians.
    pub fn correction(&self) -> f64 {
        self.correction
    }

    /// Snapshot of the phase-error history in chronological order.
    ///
    /// The returned vector has length equal to the configured capacity,
    /// ordered oldest first; the last element is the most recent error.
    /// Slots never written since construction or [`reset`](Self::reset)
    /// read as zero.
    pub fn error_history(&self) -> Vec<f64> {
        let n = self.error_history.len();
        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            out.push(self.error_history[(self.history_idx + i) % n]);
        }
        out
    }

    // -- Processing ---------------------------------------------------------

    /// Process a single sample and return the phase-corrected output.
    pub fn process_sample(&mut self, symbol_in: Complex64) -> Complex64 {
        // Derotate by the current NCO phase estimate
        let symbol_out = symbol_in * Complex64::from_polar(1.0, -self.correction);

        // Decide the nearest QPSK point from the signs of I and Q.
        // Zero (either signed zero) decides as +1.
        let reference = Complex64::new(
            if symbol_out.re >= 0.0 { 1.0 } else { -1.0 },
            if symbol_out.im >= 0.0 { 1.0 } else { -1.0 },
        );

        // Signed angle between the derotated sample and the decision
        let error = (symbol_out * reference.conj()).arg();

        // Record before updating the estimate
        self.error_history[self.history_idx] = error;
        self.history_idx = (self.history_idx + 1) % self.error_history.len();

        self.correction += self.pid.process(error);

        symbol_out
    }

    /// Process a buffer of samples, writing `output[i]` for each `input[i]`.
    ///
    /// Samples are processed in order; each sample's derotation uses the
    /// correction updated by the previous one.
    ///
    /// # Panics
    ///
    /// Panics if the buffers differ in length.
    pub fn process(&mut self, input: &[Complex64], output: &mut [Complex64]) {
        assert_eq!(
            input.len(),
            output.len(),
            "input and output buffers must have equal length"
        );
        for (x, y) in input.iter().zip(output.iter_mut()) {
            *y = self.process_sample(*x);
        }
    }

    /// Process a buffer in place, overwriting each sample with its corrected
    /// value.
    pub fn process_inplace(&mut self, buf: &mut [Complex64]) {
        for sample in buf.iter_mut() {
            *sample = self.process_sample(*sample);
        }
    }

    /// Process a block of samples into a freshly allocated output buffer.
    pub fn process_block(&mut self, input: &[Complex64]) -> Vec<Complex64> {
        input.iter().map(|&s| self.process_sample(s)).collect()
    }

    // -- Reset --------------------------------------------------------------

    /// Reset all accumulated state: NCO correction, error history, write
    /// cursor, and the loop filter accumulators. Tuning survives.
    pub fn reset(&mut self) {
        self.correction = 0.0;
        self.error_history.fill(0.0);
        self.history_idx = 0;
        self.pid.reset();
    }
}

// ===========================================================================
// Tests
// ===========================================================================
