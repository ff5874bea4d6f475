// src/core/decoder.rs
//
// Audio decoding via Symphonia: any supported container/codec in,
// interleaved f32 samples out.

use anyhow::{Context, Result, bail};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use std::fs::File;
use std::path::Path;

/// Decoded audio: interleaved samples plus the stream facts the
/// renderer needs.
#[derive(Debug, Clone)]
pub struct AudioData {
    /// Interleaved samples normalized to [-1.0, 1.0]
    pub samples: Vec<f32>,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of audio channels
    pub channels: usize,
    /// Duration in seconds
    pub duration_secs: f64,
}

/// Decode an audio file to floating-point samples.
pub fn decode_audio(path: &Path) -> Result<AudioData> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;

    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let meta_opts = MetadataOptions::default();
    let fmt_opts = FormatOptions::default();

    let mut probed = symphonia::default::get_probe()
        .format(&hint, mss, &fmt_opts, &meta_opts)
        .context("Failed to probe file format - may be corrupted or unsupported")?;

    let track = probed.format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .context("No supported audio track found in file")?;

    let track_id = track.id;
    let sample_rate = track.codec_params.sample_rate
        .context("File does not specify sample rate")?;

    // De-interleaving depends on an exact channel count, so a file that
    // does not state one is rejected rather than guessed at.
    let channels = track.codec_params.channels
        .map(|c| c.count())
        .context("File does not specify channel count")?;

    if channels == 0 {
        bail!("File reports 0 audio channels");
    }

    let dec_opts = DecoderOptions::default();
    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &dec_opts)
        .context("Failed to create decoder for audio codec")?;

    let mut samples: Vec<f32> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match probed.format.next_packet() {
            Ok(packet) => packet,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
            Err(symphonia::core::errors::Error::ResetRequired) => {
                decoder.reset();
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(buf) => buf,
            Err(symphonia::core::errors::Error::DecodeError(_)) => continue,
            Err(e) => return Err(e.into()),
        };

        if sample_buf.is_none() {
            let spec = *decoded.spec();
            let duration = decoded.capacity() as u64;
            sample_buf = Some(SampleBuffer::new(duration, spec));
        }

        if let Some(ref mut buf) = sample_buf {
            buf.copy_interleaved_ref(decoded);
            samples.extend_from_slice(buf.samples());
        }
    }

    if samples.is_empty() {
        bail!("No audio samples decoded from file");
    }

    let duration_secs = samples.len() as f64 / (sample_rate as f64 * channels as f64);

    Ok(AudioData {
        samples,
        sample_rate,
        channels,
        duration_secs,
    })
}

/// Pull a single channel out of the interleaved buffer.
///
/// Channels are zero-indexed; a trailing partial frame is dropped.
pub fn extract_channel(audio: &AudioData, channel: usize) -> Result<Vec<f32>> {
    if channel >= audio.channels {
        bail!(
            "Channel {} out of range; file has {} channel(s)",
            channel,
            audio.channels
        );
    }

    Ok(audio.samples
        .chunks_exact(audio.channels)
        .map(|frame| frame[channel])
        .collect())
}

/// Average all channels down to one.
pub fn extract_mono(audio: &AudioData) -> Vec<f32> {
    if audio.channels == 1 {
        return audio.samples.clone();
    }

    audio.samples
        .chunks_exact(audio.channels)
        .map(|frame| frame.iter().sum::<f32>() / audio.channels as f32)
        .collect()
}
