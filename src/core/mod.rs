//! Core pipeline stages: decode, transform, render, encode

pub mod decoder;
pub mod dsp;
pub mod render;
pub mod visualization;

pub use decoder::AudioData;
pub use render::{RenderError, RenderParams};
