//! Cubic Farrow Interpolator — Fractional-Delay Resampling Primitive
//!
//! Produces an interpolated complex sample at an arbitrary fractional
//! position between stored integer-spaced samples, using a fixed 3rd-order
//! (4-tap) Lagrange structure in Farrow form: a bank of four FIR rows turns
//! the buffered samples into polynomial coefficients c₀..c₃, which are then
//! evaluated at the requested offset `mu`.
//!
//! The block is a streaming primitive: `load` pushes samples into a 4-slot
//! ring buffer (oldest overwritten first), `interpolate` evaluates the
//! polynomial for the current buffer without touching it. A symbol-timing
//! loop would own one of these and steer `mu`; that loop itself is out of
//! scope here.
//!
//! ## Example
//!
//! ```rust
//! use phaselock_core::farrow_interpolator::CubicFarrowInterpolator;
//! use num_complex::Complex64;
//!
//! let mut interp = CubicFarrowInterpolator::new();
//! interp.load_slice(&[
//!     Complex64::new(1.0, 0.0),
//!     Complex64::new(2.0, 0.0),
//!     Complex64::new(3.0, 0.0),
//!     Complex64::new(4.0, 0.0),
//! ]);
//!
//! // The four points are collinear, so the cubic degenerates to a line
//! let mid = interp.interpolate(0.5, 0);
//! assert!((mid.re - 2.5).abs() < 1e-9);
//! ```

use num_complex::Complex64;

/// Interpolation order (3rd-order Lagrange polynomial).
pub const ORDER: usize = 3;

/// Number of buffered taps (`ORDER + 1`).
pub const N_TAPS: usize = ORDER + 1;

/// Lagrange basis coefficients for nodes at {-1, 0, 1, 2}.
///
/// Row `k` is the FIR that maps the buffered samples (oldest first, i.e.
/// positions -1, 0, 1, 2 relative to `mu = 0`) to polynomial coefficient
/// `c_k`, so the interpolant is `p(mu) = Σ c_k · mu^k`.
const COEFFS: [[f64; N_TAPS]; N_TAPS] = [
    [0.0, 1.0, 0.0, 0.0],
    [-1.0 / 3.0, -1.0 / 2.0, 1.0, -1.0 / 6.0],
    [1.0 / 2.0, -1.0, 1.0 / 2.0, 0.0],
    [-1.0 / 6.0, 1.0 / 2.0, -1.0 / 2.0, 1.0 / 6.0],
];

/// Cubic Farrow fractional-delay interpolator over complex samples.
///
/// Holds the four most recently loaded samples in a ring buffer. Only
/// [`load`](Self::load) (and the slice/stream variants built on it) advance
/// the write cursor; [`interpolate`](Self::interpolate) is read-only.
#[derive(Debug, Clone, Default)]
pub struct CubicFarrowInterpolator {
    /// Ring buffer of the last four samples.
    buffer: [Complex64; N_TAPS],
    /// Next slot to write (also the oldest sample).
    cursor: usize,
}

impl CubicFarrowInterpolator {
    /// Create a new interpolator with a zero-filled buffer.
    pub fn new() -> Self {
        Self::default()
    }

    // -- Loading ------------------------------------------------------------

    /// Push one sample into the ring buffer, overwriting the oldest entry.
    pub fn load(&mut self, sample: Complex64) {
        self.buffer[self.cursor] = sample;
        self.cursor = (self.cursor + 1) % N_TAPS;
    }

    /// Push a slice of samples in order, one [`load`](Self::load) each.
    pub fn load_slice(&mut self, samples: &[Complex64]) {
        for &sample in samples {
            self.load(sample);
        }
    }

    // -- Evaluation ---------------------------------------------------------

    /// Evaluate the interpolating polynomial at `mu = int_off + frac_off`.
    ///
    /// `frac_off` is typically in `[0, 1)` with `int_off = 0`; any real
    /// `mu` is accepted (extrapolation is allowed, accuracy degrades away
    /// from the buffered interval). Does not mutate the buffer or cursor.
    ///
    /// `mu` is measured from the second-oldest buffered sample: the buffer
    /// contents sit at positions -1, 0, 1, 2, so `interpolate(0.0, 0)`
    /// reproduces that sample exactly.
    pub fn interpolate(&self, frac_off: f64, int_off: i32) -> Complex64 {
        // Read the ring in cursor order: oldest first
        let mut segment = [Complex64::new(0.0, 0.0); N_TAPS];
        for (j, slot) in segment.iter_mut().enumerate() {
            *slot = self.buffer[(self.cursor + j) % N_TAPS];
        }

        // FIR bank: polynomial coefficients from the buffered samples
        let mut c = [Complex64::new(0.0, 0.0); N_TAPS];
        for (k, row) in COEFFS.iter().enumerate() {
            for (j, &w) in row.iter().enumerate() {
                c[k] += segment[j] * w;
            }
        }

        // Horner evaluation of c0 + c1*mu + c2*mu^2 + c3*mu^3
        let mu = f64::from(int_off) + frac_off;
        ((c[3] * mu + c[2]) * mu + c[1]) * mu + c[0]
    }

    // -- Streaming ----------------------------------------------------------

    /// Process a buffer with a fixed offset: for each input sample, load it
    /// and immediately evaluate the interpolant for the corresponding output
    /// slot.
    ///
    /// The ordering contract is load-then-interpolate per sample: output `i`
    /// observes the buffer state right after `input[i]` was loaded, matching
    /// a loop of single-sample `load` + `interpolate` calls.
    ///
    /// # Panics
    ///
    /// Panics if the buffers differ in length.
    pub fn process(
        &mut self,
        input: &[Complex64],
        output: &mut [Complex64],
        frac_off: f64,
        int_off: i32,
    ) {
        assert_eq!(
            input.len(),
            output.len(),
            "input and output buffers must have equal length"
        );
        for (x, y) in input.iter().zip(output.iter_mut()) {
            self.load(*x);
            *y = self.interpolate(frac_off, int_off);
        }
    }

    /// In-place variant of [`process`](Self::process).
    pub fn process_inplace(&mut self, buf: &mut [Complex64], frac_off: f64, int_off: i32) {
        for sample in buf.iter_mut() {
            self.load(*sample);
            *sample = self.interpolate(frac_off, int_off);
        }
    }

    // -- Reset / introspection ----------------------------------------------

    /// Zero the ring buffer and the write cursor.
    pub fn reset(&mut self) {
        self.buffer = [Complex64::new(0.0, 0.0); N_TAPS];
        self.cursor = 0;
    }

    /// Snapshot of the buffer contents in cursor order, oldest first.
    pub fn buffer(&self) -> [Complex64; N_TAPS] {
        let mut out = [Complex64::new(0.0, 0.0); N_TAPS];
        for (j, slot) in out.iter_mut().enumerate() {
            *slot = self.buffer[(self.cursor + j) % N_TAPS];
        }
        out
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn re(values: [f64; 4]) -> [Complex64; 4] {
        values.map(|v| Complex64::new(v, 0.0))
    }

    // 1. Zero offset reproduces the sample at position 0
    #[test]
    fn test_interpolate_zero_offset() {
        let mut interp = CubicFarrowInterpolator::new();
        interp.load_slice(&re([1.0, 2.0, 3.0, 4.0]));

        let result = interp.interpolate(0.0, 0);
        assert!((result.re - 2.0).abs() < 1e-4, "got {}", result.re);
        assert!(result.im.abs() < 1e-4);
    }

    // 2. Halfway between collinear points is the arithmetic mean
    #[test]
    fn test_interpolate_halfway() {
        let mut interp = CubicFarrowInterpolator::new();
        interp.load_slice(&re([1.0, 2.0, 3.0, 4.0]));

        let result = interp.interpolate(0.5, 0);
        assert!((result.re - 2.5).abs() < 1e-4, "got {}", result.re);
        assert!(result.im.abs() < 1e-4);
    }

    // 3. Negative fractional offset extrapolates the same line backwards
    #[test]
    fn test_interpolate_negative_offset() {
        let mut interp = CubicFarrowInterpolator::new();
        interp.load_slice(&re([1.0, 2.0, 3.0, 4.0]));

        let result = interp.interpolate(-0.5, 0);
        assert!((result.re - 1.5).abs() < 1e-4, "got {}", result.re);
        assert!(result.im.abs() < 1e-4);
    }

    // 4. Complex input on the I=Q diagonal stays on the diagonal
    #[test]
    fn test_interpolate_complex_input() {
        let mut interp = CubicFarrowInterpolator::new();
        interp.load_slice(&[
            Complex64::new(1.0, 1.0),
            Complex64::new(2.0, 2.0),
            Complex64::new(3.0, 3.0),
            Complex64::new(4.0, 4.0),
        ]);

        let result = interp.interpolate(0.25, 0);
        assert!((result.re - result.im).abs() < 1e-4);
    }

    // 5. A cubic is reproduced exactly: f(x) = x^3 at nodes -1, 0, 1, 2
    #[test]
    fn test_cubic_is_exact() {
        let mut interp = CubicFarrowInterpolator::new();
        interp.load_slice(&re([-1.0, 0.0, 1.0, 8.0]));

        for &(frac, int, want) in &[
            (0.5, 0, 0.125),
            (0.0, 1, 1.0),
            (0.5, 1, 3.375),
            (0.25, 0, 0.015625),
        ] {
            let got = interp.interpolate(frac, int).re;
            assert!(
                (got - want).abs() < 1e-9,
                "p({}) should be {}, got {}",
                f64::from(int) + frac,
                want,
                got
            );
        }
    }

    // 6. Slice loading equals sequential single loads
    #[test]
    fn test_load_slice_equals_single_loads() {
        let samples = re([0.5, -1.5, 2.5, 7.0]);

        let mut a = CubicFarrowInterpolator::new();
        a.load_slice(&samples);

        let mut b = CubicFarrowInterpolator::new();
        for &s in &samples {
            b.load(s);
        }

        assert_eq!(a.buffer(), b.buffer());
        let (ra, rb) = (a.interpolate(0.3, 0), b.interpolate(0.3, 0));
        assert!((ra - rb).norm() < 1e-12);
    }

    // 7. interpolate is read-only
    #[test]
    fn test_interpolate_does_not_mutate() {
        let mut interp = CubicFarrowInterpolator::new();
        interp.load_slice(&re([1.0, 2.0, 3.0, 4.0]));

        let before = interp.buffer();
        let first = interp.interpolate(0.7, 0);
        let second = interp.interpolate(0.7, 0);
        assert_eq!(interp.buffer(), before);
        assert!((first - second).norm() < 1e-12);
    }

    // 8. Streaming process: load-then-interpolate per sample, from cold start
    #[test]
    fn test_process_streaming_discipline() {
        let mut interp = CubicFarrowInterpolator::new();
        let input = re([1.0, 2.0, 3.0, 4.0]);
        let mut output = [Complex64::new(0.0, 0.0); 4];
        interp.process(&input, &mut output, 0.5, 0);

        // Hand-derived: buffer fills with zeros ahead of the ramp, so the
        // first two outputs see partial data, then the line takes over.
        let expected = [-0.0625, 0.4375, 1.5, 2.5];
        for (got, want) in output.iter().zip(expected.iter()) {
            assert!(
                (got.re - want).abs() < 1e-9,
                "streaming output mismatch: got {:?}, want {:?}",
                output,
                expected
            );
        }

        // One more sample continues the line
        interp.load(Complex64::new(5.0, 0.0));
        assert!((interp.interpolate(0.5, 0).re - 3.5).abs() < 1e-9);
    }

    // 9. In-place processing matches the two-buffer path
    #[test]
    fn test_process_matches_inplace() {
        let input: Vec<Complex64> = (0..32)
            .map(|i| Complex64::new((i as f64 * 0.37).sin(), (i as f64 * 0.21).cos()))
            .collect();

        let mut a = CubicFarrowInterpolator::new();
        let mut out = vec![Complex64::new(0.0, 0.0); input.len()];
        a.process(&input, &mut out, 0.25, 0);

        let mut b = CubicFarrowInterpolator::new();
        let mut buf = input.clone();
        b.process_inplace(&mut buf, 0.25, 0);

        for (x, y) in out.iter().zip(buf.iter()) {
            assert!((x - y).norm() < 1e-12);
        }
    }

    // 10. Mismatched buffer lengths are a caller contract violation
    #[test]
    #[should_panic(expected = "equal length")]
    fn test_process_length_mismatch_panics() {
        let mut interp = CubicFarrowInterpolator::new();
        let input = re([1.0, 2.0, 3.0, 4.0]);
        let mut output = [Complex64::new(0.0, 0.0); 3];
        interp.process(&input, &mut output, 0.5, 0);
    }

    // 11. Reset zeroes buffer and cursor; twice == once
    #[test]
    fn test_reset_idempotent() {
        let mut interp = CubicFarrowInterpolator::new();
        interp.load_slice(&re([1.0, 2.0, 3.0, 4.0]));

        interp.reset();
        assert!(interp.buffer().iter().all(|c| c.norm() == 0.0));
        assert_eq!(interp.interpolate(0.5, 0), Complex64::new(0.0, 0.0));

        interp.reset();
        assert!(interp.buffer().iter().all(|c| c.norm() == 0.0));

        // Cursor restarted: the next four loads land oldest-first again
        interp.load_slice(&re([1.0, 2.0, 3.0, 4.0]));
        assert!((interp.interpolate(0.0, 0).re - 2.0).abs() < 1e-9);
    }
}
