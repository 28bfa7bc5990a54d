//! Frequency Offset — Carrier Frequency Offset (CFO) Impairment
//!
//! Rotates a complex baseband stream by a constant frequency offset, the
//! standard channel impairment used to exercise carrier recovery. Two forms
//! are provided:
//!
//! - [`apply_cfo`] / [`apply_cfo_inplace`]: stateless, the sample index `n`
//!   restarts at 0 on every call (`output[n] = input[n] · e^(j·n·w)`).
//! - [`FrequencyOffset`]: streaming block with a phase accumulator, so
//!   consecutive blocks are phase-continuous.
//!
//! ## Example
//!
//! ```rust
//! use phaselock_core::frequency_offset::FrequencyOffset;
//! use num_complex::Complex64;
//!
//! let mut cfo = FrequencyOffset::new(0.02); // radians/sample
//! let tone = vec![Complex64::new(1.0, 0.0); 100];
//! let shifted = cfo.process_block(&tone);
//!
//! // After 100 samples the accumulator sits at 100 * 0.02 = 2 radians
//! assert!((cfo.phase() - 2.0).abs() < 1e-12);
//! ```

use num_complex::Complex64;

/// Apply a carrier frequency offset: `output[n] = input[n] · e^(j·n·w_offset)`.
///
/// The rotation index starts at zero for each call. Use [`FrequencyOffset`]
/// when blocks must stay phase-continuous across calls.
///
/// # Panics
///
/// Panics if the buffers differ in length.
pub fn apply_cfo(input: &[Complex64], output: &mut [Complex64], w_offset: f64) {
    assert_eq!(
        input.len(),
        output.len(),
        "input and output buffers must have equal length"
    );
    for (n, (x, y)) in input.iter().zip(output.iter_mut()).enumerate() {
        *y = x * Complex64::from_polar(1.0, n as f64 * w_offset);
    }
}

/// In-place variant of [`apply_cfo`].
pub fn apply_cfo_inplace(buf: &mut [Complex64], w_offset: f64) {
    for (n, sample) in buf.iter_mut().enumerate() {
        *sample *= Complex64::from_polar(1.0, n as f64 * w_offset);
    }
}

/// Streaming frequency-offset rotator with a persistent phase accumulator.
#[derive(Debug, Clone)]
pub struct FrequencyOffset {
    /// Phase increment per sample (radians).
    w_offset: f64,
    /// Accumulated rotation phase (radians).
    phase: f64,
}

impl FrequencyOffset {
    /// Create a rotator with the given offset in radians per sample.
    pub fn new(w_offset: f64) -> Self {
        Self {
            w_offset,
            phase: 0.0,
        }
    }

    /// The configured offset in radians per sample.
    pub fn w_offset(&self) -> f64 {
        self.w_offset
    }

    /// Change the offset. The accumulator is untouched, so the rotation
    /// stays phase-continuous through the retune.
    pub fn set_w_offset(&mut self, w_offset: f64) {
        self.w_offset = w_offset;
    }

    /// The current accumulated phase in radians.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Rotate one sample and advance the accumulator.
    pub fn process_sample(&mut self, sample: Complex64) -> Complex64 {
        let rotated = sample * Complex64::from_polar(1.0, self.phase);
        self.phase += self.w_offset;
        rotated
    }

    /// Rotate a block of samples into a new buffer.
    pub fn process_block(&mut self, input: &[Complex64]) -> Vec<Complex64> {
        input.iter().map(|&s| self.process_sample(s)).collect()
    }

    /// Zero the phase accumulator. The configured offset survives.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}

// ===========================================================================
// Tests
// ===========================================================================
