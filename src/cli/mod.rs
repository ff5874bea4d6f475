// src/cli/mod.rs
//
// Command-line pipeline: decode the input, render the spectrogram,
// encode the image, report.

mod args;

pub use args::Args;

use anyhow::Result;
use chrono::{DateTime, Utc};
use colorful::Colorful;
use indicatif::ProgressBar;
use serde::Serialize;
use std::time::{Duration, Instant};

use crate::core::decoder::{self, AudioData};
use crate::core::render::{render, RenderParams};
use crate::core::visualization;

/// Machine-readable account of one render, printed under `--json`.
#[derive(Debug, Serialize)]
pub struct RenderSummary {
    pub input: String,
    pub output: String,
    pub sample_rate: u32,
    pub channels: usize,
    pub duration_secs: f64,
    pub width: u32,
    pub height: u32,
    pub min_freq: f64,
    pub max_freq: f64,
    pub window_size: usize,
    pub channel: Option<usize>,
    pub mixdown: bool,
    pub render_ms: u64,
    pub generated_at: DateTime<Utc>,
}

/// Run the full pipeline for one input file.
pub fn run(args: &Args) -> Result<()> {
    let audio = decoder::decode_audio(&args.input)?;

    if !args.json {
        println!("Rendering: {}", args.input.display().to_string().cyan());
        println!("  Sample Rate: {} Hz", audio.sample_rate);
        println!("  Channels: {}", audio.channels);
        println!("  Duration: {:.2}s", audio.duration_secs);
    }

    let samples = select_samples(&audio, args)?;

    let params = RenderParams {
        width: args.width,
        height: args.height,
        min_freq: args.min_freq,
        max_freq: args.max_freq,
        window_size: args.window_size,
    };

    let nyquist = audio.sample_rate as f64 / 2.0;
    if params.max_freq > nyquist {
        log::warn!(
            "max frequency {} Hz is above Nyquist ({} Hz); rows beyond it carry no signal",
            params.max_freq,
            nyquist
        );
    }
    if params.window_size > samples.len() {
        log::warn!(
            "window of {} samples never fits the {}-sample signal; every column is shortened",
            params.window_size,
            samples.len()
        );
    }

    log::debug!(
        "render: {}x{} cells, {} Hz..{} Hz, window {}",
        params.width,
        params.height,
        params.min_freq,
        params.max_freq,
        params.window_size
    );

    let mut buffer = vec![0.0f32; params.cell_count()];

    let spinner = if args.json {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_message("rendering...");
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    };

    let start = Instant::now();
    render(&samples, audio.sample_rate, &mut buffer, &params)?;
    let elapsed = start.elapsed();

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    visualization::write_image(&buffer, params.width, params.height, &args.output)?;

    if args.json {
        let summary = RenderSummary {
            input: args.input.display().to_string(),
            output: args.output.display().to_string(),
            sample_rate: audio.sample_rate,
            channels: audio.channels,
            duration_secs: audio.duration_secs,
            width: params.width,
            height: params.height,
            min_freq: params.min_freq,
            max_freq: params.max_freq,
            window_size: params.window_size,
            channel: if args.mixdown { None } else { Some(args.channel) },
            mixdown: args.mixdown,
            render_ms: elapsed.as_millis() as u64,
            generated_at: Utc::now(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("  Rendering took {} ms.", elapsed.as_millis());
        println!("  Saved to: {}", args.output.display());
    }

    Ok(())
}

/// Pick the sample stream the renderer will see: one channel, or the
/// average of all of them.
fn select_samples(audio: &AudioData, args: &Args) -> Result<Vec<f32>> {
    if args.mixdown {
        Ok(decoder::extract_mono(audio))
    } else {
        decoder::extract_channel(audio, args.channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn stereo_fixture() -> AudioData {
        AudioData {
            samples: vec![1.0, 0.0, 0.5, -0.5],
            sample_rate: 8000,
            channels: 2,
            duration_secs: 0.00025,
        }
    }

    #[test]
    fn test_select_defaults_to_first_channel() {
        let args = Args::try_parse_from(["sonograph", "in.wav", "out.png"]).unwrap();
        let samples = select_samples(&stereo_fixture(), &args).unwrap();
        assert_eq!(samples, vec![1.0, 0.5]);
    }

    #[test]
    fn test_select_other_channel() {
        let args =
            Args::try_parse_from(["sonograph", "in.wav", "out.png", "--channel", "1"]).unwrap();
        let samples = select_samples(&stereo_fixture(), &args).unwrap();
        assert_eq!(samples, vec![0.0, -0.5]);
    }

    #[test]
    fn test_select_mixdown_averages() {
        let args =
            Args::try_parse_from(["sonograph", "in.wav", "out.png", "--mixdown"]).unwrap();
        let samples = select_samples(&stereo_fixture(), &args).unwrap();
        assert_eq!(samples, vec![0.5, 0.0]);
    }

    #[test]
    fn test_select_rejects_missing_channel() {
        let args =
            Args::try_parse_from(["sonograph", "in.wav", "out.png", "--channel", "5"]).unwrap();
        assert!(select_samples(&stereo_fixture(), &args).is_err());
    }
}
