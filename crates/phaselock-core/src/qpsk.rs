//! QPSK Mapping — Dibit ⇄ Symbol Conversion
//!
//! Maps 2-bit values onto the unit-energy-per-axis QPSK constellation and
//! back. The bit assignment follows the quadrant convention used throughout
//! this crate: bit 1 selects the sign of I, bit 0 the sign of Q.
//!
//! | Dibit | Symbol  |
//! |-------|---------|
//! | `00`  | `+1 +j` |
//! | `01`  | `+1 -j` |
//! | `10`  | `-1 +j` |
//! | `11`  | `-1 -j` |
//!
//! For this constellation the minimum-distance decision is exactly the sign
//! test on each axis, so [`demodulate`] is simultaneously the hard-decision
//! optimum decider. A component that is exactly zero decides as positive,
//! the same convention the Costas loop uses.
//!
//! ## Example
//!
//! ```rust
//! use phaselock_core::qpsk;
//!
//! let dibits = [0b00, 0b01, 0b10, 0b11];
//! let symbols = qpsk::modulate(&dibits);
//! assert_eq!(qpsk::demodulate(&symbols), dibits);
//! ```

use num_complex::Complex64;

/// Map dibits onto QPSK symbols. Only the two low bits of each input byte
/// are significant.
pub fn modulate(dibits: &[u8]) -> Vec<Complex64> {
    dibits
        .iter()
        .map(|&d| {
            let re = if d & 0b10 == 0 { 1.0 } else { -1.0 };
            let im = if d & 0b01 == 0 { 1.0 } else { -1.0 };
            Complex64::new(re, im)
        })
        .collect()
}

/// Map symbols back to dibits by quadrant: `Re < 0` sets bit 1, `Im < 0`
/// sets bit 0.
///
/// This is the minimum-distance decision for the QPSK constellation, so it
/// serves for both clean demapping and hard slicing of noisy symbols.
pub fn demodulate(symbols: &[Complex64]) -> Vec<u8> {
    symbols
        .iter()
        .map(|s| {
            let mut bits = 0u8;
            if s.re < 0.0 {
                bits |= 0b10;
            }
            if s.im < 0.0 {
                bits |= 0b01;
            }
            bits
        })
        .collect()
}

// ===========================================================================
// Tests
// ===========================================================================
