//! Windowed single-frequency transform: the per-pixel math of the renderer.

use num_complex::Complex;
use std::f64::consts::PI;

/// Hann weight of the `i`th of `len` samples in an analysis window.
///
/// A window of one sample has no taper; its sample keeps full weight.
pub fn hann_weight(i: usize, len: usize) -> f64 {
    if len <= 1 {
        return 1.0;
    }
    ((PI * i as f64) / (len - 1) as f64).sin().powi(2)
}

/// Magnitude of `freq` (Hz) within `window`, by direct discrete Fourier
/// transform: correlate the Hann-weighted samples against a complex
/// sinusoid at `freq` and take the norm of the accumulated sum.
///
/// All math runs in double precision regardless of the sample type. An
/// empty window yields 0.
pub fn windowed_magnitude(window: &[f32], freq: f64, sample_rate: u32) -> f64 {
    let len = window.len();
    let mut sum = Complex::new(0.0, 0.0);

    for (i, &sample) in window.iter().enumerate() {
        let time = i as f64 / sample_rate as f64;
        let phase = -2.0 * PI * freq * time;
        sum += Complex::from_polar(sample as f64 * hann_weight(i, len), phase);
    }

    sum.norm()
}
