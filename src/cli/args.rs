//! Command-line argument definitions

use clap::Parser;
use std::path::PathBuf;

/// Arguments for one render run.
#[derive(Parser, Debug)]
#[command(name = "sonograph")]
#[command(version)]
#[command(about = "Render a greyscale spectrogram image from an audio file")]
pub struct Args {
    /// Input audio file (any format Symphonia can decode)
    pub input: PathBuf,

    /// Output image file; format follows the extension (.png, .bmp, ...)
    pub output: PathBuf,

    /// Image width in pixels, one analysis window per column
    #[arg(long, default_value_t = 1100)]
    pub width: u32,

    /// Image height in pixels, one frequency per row
    #[arg(long, default_value_t = 128)]
    pub height: u32,

    /// Lowest frequency of the rendered band in Hz (bottom row)
    #[arg(long, default_value_t = 0.0)]
    pub min_freq: f64,

    /// Highest frequency of the rendered band in Hz (top row)
    #[arg(long, default_value_t = 8000.0)]
    pub max_freq: f64,

    /// Samples examined per column
    #[arg(long, default_value_t = 256)]
    pub window_size: usize,

    /// Channel to render, zero-indexed
    #[arg(long, default_value_t = 0, conflicts_with = "mixdown")]
    pub channel: usize,

    /// Average all channels into one before rendering
    #[arg(long)]
    pub mixdown: bool,

    /// Print a machine-readable JSON summary instead of status lines
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_geometry() {
        let args = Args::try_parse_from(["sonograph", "in.wav", "out.png"]).unwrap();
        assert_eq!(args.width, 1100);
        assert_eq!(args.height, 128);
        assert_eq!(args.min_freq, 0.0);
        assert_eq!(args.max_freq, 8000.0);
        assert_eq!(args.window_size, 256);
        assert_eq!(args.channel, 0);
        assert!(!args.mixdown);
        assert!(!args.json);
    }

    #[test]
    fn test_both_positionals_are_required() {
        assert!(Args::try_parse_from(["sonograph"]).is_err());
        assert!(Args::try_parse_from(["sonograph", "in.wav"]).is_err());
    }

    #[test]
    fn test_options_override_defaults() {
        let args = Args::try_parse_from([
            "sonograph",
            "in.flac",
            "out.png",
            "--width",
            "640",
            "--height",
            "480",
            "--min-freq",
            "50",
            "--max-freq",
            "12000",
            "--window-size",
            "1024",
        ])
        .unwrap();
        assert_eq!(args.width, 640);
        assert_eq!(args.height, 480);
        assert_eq!(args.min_freq, 50.0);
        assert_eq!(args.max_freq, 12000.0);
        assert_eq!(args.window_size, 1024);
    }

    #[test]
    fn test_channel_conflicts_with_mixdown() {
        let result = Args::try_parse_from([
            "sonograph",
            "in.wav",
            "out.png",
            "--channel",
            "1",
            "--mixdown",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_mixdown_alone_is_accepted() {
        let args =
            Args::try_parse_from(["sonograph", "in.wav", "out.png", "--mixdown"]).unwrap();
        assert!(args.mixdown);
    }
}
