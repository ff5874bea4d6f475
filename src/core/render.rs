// src/core/render.rs
//
// Spectrogram renderer: one direct DFT per output cell, rows fanned out
// across the rayon pool, then a global normalization pass.

use rayon::prelude::*;
use thiserror::Error;

use crate::core::dsp;

/// Geometry and analysis settings for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParams {
    /// Output width in cells; one analysis window per column.
    pub width: u32,
    /// Output height in cells; one frequency per row.
    pub height: u32,
    /// Lowest frequency of the band in Hz, drawn on the bottom row.
    pub min_freq: f64,
    /// Highest frequency of the band in Hz, drawn on the top row.
    pub max_freq: f64,
    /// Samples examined per column, shortened near the end of the signal.
    pub window_size: usize,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            width: 1100,
            height: 128,
            min_freq: 0.0,
            max_freq: 8000.0,
            window_size: 256,
        }
    }
}

impl RenderParams {
    /// Number of cells a conforming output buffer must hold.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidGeometry {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.min_freq.is_finite() && self.max_freq.is_finite())
            || self.min_freq < 0.0
            || self.min_freq >= self.max_freq
        {
            return Err(RenderError::InvalidFrequencyBand {
                min_freq: self.min_freq,
                max_freq: self.max_freq,
            });
        }
        if self.window_size == 0 {
            return Err(RenderError::ZeroWindowSize);
        }
        Ok(())
    }
}

/// Rejected inputs. [`render`] reports these before touching the buffer.
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("image geometry is {width}x{height}; both sides must be non-zero")]
    InvalidGeometry { width: u32, height: u32 },

    #[error("sample buffer is empty")]
    EmptySamples,

    #[error("sample rate must be positive")]
    ZeroSampleRate,

    #[error("frequency band {min_freq} Hz..{max_freq} Hz must be finite, non-negative and ascending")]
    InvalidFrequencyBand { min_freq: f64, max_freq: f64 },

    #[error("window size must be at least one sample")]
    ZeroWindowSize,

    #[error("output buffer holds {actual} cells, needs exactly {expected}")]
    OutputSizeMismatch { expected: usize, actual: usize },
}

/// Render a spectrogram of `samples` into `out`.
///
/// `out` is a row-major `width * height` buffer and is fully overwritten:
/// row 0 carries `max_freq`, the last row `min_freq`, and columns step
/// left to right through the signal. Cells are scaled to `[0.0, 1.0]`
/// against the loudest cell, so the peak lands at exactly 1.0. A fully
/// silent signal renders as all zeros.
pub fn render(
    samples: &[f32],
    sample_rate: u32,
    out: &mut [f32],
    params: &RenderParams,
) -> Result<(), RenderError> {
    params.validate()?;
    if samples.is_empty() {
        return Err(RenderError::EmptySamples);
    }
    if sample_rate == 0 {
        return Err(RenderError::ZeroSampleRate);
    }
    if out.len() != params.cell_count() {
        return Err(RenderError::OutputSizeMismatch {
            expected: params.cell_count(),
            actual: out.len(),
        });
    }

    let width = params.width as usize;
    let height = params.height as usize;
    let band = params.max_freq - params.min_freq;
    let total = samples.len();

    // Magnitude pass. Every cell depends only on the input, so rows can
    // be rendered in parallel, each worker writing one disjoint row.
    out.par_chunks_exact_mut(width)
        .enumerate()
        .for_each(|(row, cells)| {
            // Flip vertically so low frequencies sit at the bottom.
            let y = height - 1 - row;
            let freq = params.min_freq + (y as f64 / height as f64) * band;

            for (x, cell) in cells.iter_mut().enumerate() {
                let offset = ((x as f64 / width as f64) * total as f64) as usize;
                let offset = offset.min(total);
                let len = params.window_size.min(total - offset);
                let window = &samples[offset..offset + len];
                *cell = dsp::windowed_magnitude(window, freq, sample_rate) as f32;
            }
        });

    // Normalization needs the global maximum, so it only starts once the
    // magnitude pass has finished. The maximum is taken over the stored
    // f32 cells, which pins the peak cell at exactly 1.0.
    let peak = out.iter().copied().fold(0.0f32, f32::max);
    if peak > 0.0 {
        for cell in out.iter_mut() {
            *cell /= peak;
        }
    }

    Ok(())
}
