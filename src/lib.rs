//! Sonograph - Render greyscale spectrograms from audio files
//!
//! Decodes an audio file, sweeps a bank of Hann-windowed single-frequency
//! Fourier probes across it, and writes the normalized magnitudes out as
//! an 8-bit greyscale image: time left to right, frequency bottom to top,
//! brightness proportional to magnitude.
//!
//! Every output pixel gets its own direct DFT evaluation, so the rendered
//! frequency band and image geometry are completely free: rows land on
//! arbitrary frequencies instead of FFT bin centers.
//!
//! ## Module Structure
//!
//! - `core` - Decoding, windowed DFT math, the renderer, image encoding
//! - `cli` - Command-line interface
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sonograph::{decode_audio, extract_channel, render, write_image, RenderParams};
//!
//! let audio = decode_audio(Path::new("take.flac"))?;
//! let samples = extract_channel(&audio, 0)?;
//!
//! let params = RenderParams::default();
//! let mut cells = vec![0.0f32; params.cell_count()];
//! render(&samples, audio.sample_rate, &mut cells, &params)?;
//!
//! write_image(&cells, params.width, params.height, Path::new("take.png"))?;
//! ```

// Decode, render, and encode stages
pub mod core;

// Command-line interface
pub mod cli;

// Re-export commonly used types at crate root for convenience
pub use crate::core::decoder::{decode_audio, extract_channel, extract_mono, AudioData};
pub use crate::core::render::{render, RenderError, RenderParams};
pub use crate::core::visualization::{to_gray_image, write_image};
