// Shared fixtures: synthesized WAV files and unique temp paths.
#![allow(dead_code)]

use hound::{SampleFormat, WavSpec, WavWriter};
use std::f64::consts::PI;
use std::path::{Path, PathBuf};
use std::process::Command;
use uuid::Uuid;

/// Unique path under the system temp dir; nothing is created.
pub fn temp_path(tag: &str, ext: &str) -> PathBuf {
    std::env::temp_dir().join(format!("sonograph_{}_{}.{}", tag, Uuid::new_v4(), ext))
}

/// Command for the compiled sonograph binary.
pub fn sonograph_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sonograph"))
}

/// Pure sine at `freq` Hz, unit amplitude.
pub fn sine(freq: f64, sample_rate: u32, count: usize) -> Vec<f32> {
    (0..count)
        .map(|i| (2.0 * PI * freq * i as f64 / sample_rate as f64).sin() as f32)
        .collect()
}

/// Write interleaved frames as a 16-bit PCM WAV.
pub fn write_wav(path: &Path, interleaved: &[f32], channels: u16, sample_rate: u32) {
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec).expect("Failed to create test wav");
    let amplitude = i16::MAX as f32 * 0.8;
    for &s in interleaved {
        writer
            .write_sample((s * amplitude) as i16)
            .expect("Failed to write sample");
    }
    writer.finalize().expect("Failed to finalize test wav");
}

/// Mono WAV holding `secs` seconds of a pure sine.
pub fn write_sine_wav(path: &Path, freq: f64, sample_rate: u32, secs: f64) {
    let count = (sample_rate as f64 * secs) as usize;
    write_wav(path, &sine(freq, sample_rate, count), 1, sample_rate);
}

/// Stereo WAV: a sine on the left channel, silence on the right.
pub fn write_stereo_wav(path: &Path, left_freq: f64, sample_rate: u32, secs: f64) {
    let count = (sample_rate as f64 * secs) as usize;
    let left = sine(left_freq, sample_rate, count);
    let mut interleaved = Vec::with_capacity(count * 2);
    for sample in left {
        interleaved.push(sample);
        interleaved.push(0.0);
    }
    write_wav(path, &interleaved, 2, sample_rate);
}
