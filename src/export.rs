// src/export.rs
// Encoder hand-off: output naming and container writing

use hound::{SampleFormat, WavSpec, WavWriter};
use std::path::Path;

use crate::assembler::SessionConfig;

/// File name for a finished track.
///
/// The prefix records whether voice cues are included, followed by the pause
/// duration in seconds and the container extension, e.g. `hear_say_0.5.wav`
/// or `hear_say_cued_0.5.wav`.
pub fn output_file_name(config: &SessionConfig) -> String {
    let prefix = if config.include_voice_cue {
        "hear_say_cued"
    } else {
        "hear_say"
    };
    format!("{}_{}.wav", prefix, config.pause_duration)
}

/// Writes the assembled buffer to `path` as mono 16-bit integer PCM at
/// `sample_rate`.
///
/// Encoder failures are surfaced as-is.
pub fn write_track(path: &Path, samples: &[i16], sample_rate: u32) -> hound::Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()
}
