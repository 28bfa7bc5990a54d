//! Core types for I/Q signal processing
//!
//! This module defines the fundamental types used throughout the library
//! for representing complex I/Q (In-phase/Quadrature) baseband samples.
//!
//! ## Understanding I/Q Samples
//!
//! A digital receiver represents its signal as complex numbers where:
//! - **I (In-phase)**: The real component, aligned with the reference carrier
//! - **Q (Quadrature)**: The imaginary component, 90° out of phase with it
//!
//! This captures both amplitude AND phase, which is what the carrier and
//! timing recovery loops in this crate operate on.
//!
//! ```text
//!            Q (Imaginary)
//!            ^
//!            |     * (I=0.7, Q=0.7)
//!            |    /
//!            |   / magnitude = 1.0
//!            |  /  phase = 45°
//!            | /
//!   ---------+---------> I (Real)
//!            |
//! ```

use num_complex::Complex64;

/// Type alias for complex numbers using f64 precision
pub type Complex = Complex64;

/// A single I/Q sample point
pub type IQSample = Complex64;

/// A floating point sample (for real-valued signals)
pub type Sample = f64;

/// A buffer of I/Q samples
pub type IQBuffer = Vec<IQSample>;
