//! PID (Proportional-Integral-Derivative) controller for receiver servo loops.
//!
//! Provides the discrete feedback filter used by the carrier recovery loop in
//! this crate, and suitable for other sample-indexed servo tasks (AGC, AFC,
//! timing adjustment). The controller is sample-indexed: `process` is called
//! once per error sample and the integral is a plain running sum, so the gains
//! absorb the sample period.
//!
//! # Update law
//!
//! ```text
//! integral += e
//! output    = Kp*e + Ki*integral + Kd*(e - prev_e)
//! prev_e    = e
//! ```
//!
//! Gains are independently readable and writable at any time; a new gain takes
//! effect on the next `process` call. Gains are not validated; negative
//! values are legitimate (derived loop tunings use them deliberately).
//! Non-finite errors propagate through the arithmetic rather than being
//! trapped.
//!
//! # Example
//!
//! ```rust
//! use phaselock_core::pid_controller::PidController;
//!
//! let mut pid = PidController::new(1.0, 0.5, 0.1);
//!
//! // First step: integral = 2, prev_e = 0 -> 2 + 1 + 0.2
//! let out = pid.process(2.0);
//! assert!((out - 3.2).abs() < 1e-12);
//!
//! // reset() clears the accumulators but keeps the gains
//! pid.reset();
//! assert_eq!(pid.kp(), 1.0);
//! ```

/// A discrete PID controller with a running-sum integral term.
///
/// Single logical owner at a time; not safe for concurrent invocation.
#[derive(Debug, Clone)]
pub struct PidController {
    // Gains
    kp: f64,
    ki: f64,
    kd: f64,

    // State
    integral: f64,
    prev_error: f64,
}

impl PidController {
    // -- Construction -------------------------------------------------------

    /// Create a new PID controller with the given gains and zeroed state.
    pub fn new(kp: f64, ki: f64, kd: f64) -> Self {
        Self {
            kp,
            ki,
            kd,
            integral: 0.0,
            prev_error: 0.0,
        }
    }

    // -- Core update --------------------------------------------------------

    /// Compute one PID update step for the given error sample.
    ///
    /// Accumulates the error into the integral term first, computes the
    /// output, then stores the error for the next derivative step.
    pub fn process(&mut self, error: f64) -> f64 {
        self.integral += error;
        let output =
            self.kp * error + self.ki * self.integral + self.kd * (error - self.prev_error);
        self.prev_error = error;
        output
    }

    // -- Reset --------------------------------------------------------------

    /// Clear the integral accumulator and previous-error memory.
    ///
    /// Gains are unchanged; the next `process` call behaves like the first
    /// call on a freshly constructed controller.
    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.prev_error = 0.0;
    }

    // -- Gain accessors -----------------------------------------------------

    /// The proportional gain.
    pub fn kp(&self) -> f64 {
        self.kp
    }

    /// The integral gain.
    pub fn ki(&self) -> f64 {
        self.ki
    }

    /// The derivative gain.
    pub fn kd(&self) -> f64 {
        self.kd
    }

    /// Set the proportional gain. Takes effect on the next `process` call.
    pub fn set_kp(&mut self, kp: f64) {
        self.kp = kp;
    }

    /// Set the integral gain. Takes effect on the next `process` call.
    pub fn set_ki(&mut self, ki: f64) {
        self.ki = ki;
    }

    /// Set the derivative gain. Takes effect on the next `process` call.
    pub fn set_kd(&mut self, kd: f64) {
        self.kd = kd;
    }
}

// ===========================================================================
// Tests
// ===========================================================================
