// src/library.rs
// Clip library: per-symbol character sounds and voice cues read from disk

use hound::{SampleFormat, WavReader};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::alphabet::Symbol;

/// Voice cue recordings carry this prefix in front of the symbol's stem.
const CUE_PREFIX: &str = "v_";
/// Primitive recordings are uncompressed PCM WAV.
const CLIP_EXTENSION: &str = "wav";

/// Mono signed 16-bit PCM samples of one recording.
pub type Clip = Vec<i16>;

/// Why a clip library failed to load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A required recording is absent or could not be read.
    #[error("missing or unreadable clip for '{symbol}' at {}", .path.display())]
    MissingClip {
        symbol: Symbol,
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    /// A recording is readable but not mono 16-bit integer PCM.
    #[error(
        "unsupported clip format at {}: expected mono 16-bit integer PCM, \
         found {channels} channel(s), {bits} bits, {format:?}",
        .path.display()
    )]
    UnsupportedFormat {
        path: PathBuf,
        channels: u16,
        bits: u16,
        format: SampleFormat,
    },

    /// A recording disagrees with the sample rate fixed by the first clip.
    #[error(
        "sample rate mismatch at {}: expected {expected} Hz, found {found} Hz",
        .path.display()
    )]
    SampleRateMismatch {
        path: PathBuf,
        expected: u32,
        found: u32,
    },

    /// No clips were requested, so no reference sample rate exists.
    #[error("cannot load a clip library for an empty alphabet")]
    EmptyAlphabet,
}

#[derive(Debug)]
struct ClipPair {
    primary: Clip,
    cue: Clip,
}

/// All recordings for the practice alphabet plus their shared sample rate.
///
/// Built once at startup and read-only afterwards. [`ClipLibrary::load`]
/// guarantees that every symbol of the requested alphabet has both of its
/// recordings present, so the accessors are plain lookups.
#[derive(Debug)]
pub struct ClipLibrary {
    entries: HashMap<Symbol, ClipPair>,
    sample_rate: u32,
}

impl ClipLibrary {
    /// Loads one character clip (`<stem>.wav`) and one voice cue
    /// (`v_<stem>.wav`) per symbol from `dir`.
    ///
    /// All recordings must be mono 16-bit integer PCM. The sample rate of the
    /// first clip read becomes the library rate and every later clip is
    /// checked against it.
    pub fn load(alphabet: &[Symbol], dir: &Path) -> Result<Self, LoadError> {
        let mut entries = HashMap::with_capacity(alphabet.len());
        let mut sample_rate = None;

        for &symbol in alphabet {
            let primary = read_clip(symbol, &clip_path(dir, symbol, false), &mut sample_rate)?;
            let cue = read_clip(symbol, &clip_path(dir, symbol, true), &mut sample_rate)?;
            log::debug!(
                "loaded '{}': {} character samples, {} cue samples",
                symbol,
                primary.len(),
                cue.len()
            );
            entries.insert(symbol, ClipPair { primary, cue });
        }

        match sample_rate {
            Some(sample_rate) => Ok(Self {
                entries,
                sample_rate,
            }),
            None => Err(LoadError::EmptyAlphabet),
        }
    }

    /// Builds a library from already-decoded recordings.
    ///
    /// This bypasses the filesystem entirely; it serves synthetic libraries
    /// in tests and callers that decode their clips through other means.
    pub fn from_clips<I>(sample_rate: u32, clips: I) -> Self
    where
        I: IntoIterator<Item = (Symbol, Clip, Clip)>,
    {
        let entries = clips
            .into_iter()
            .map(|(symbol, primary, cue)| (symbol, ClipPair { primary, cue }))
            .collect();
        Self {
            entries,
            sample_rate,
        }
    }

    /// Character sound for `symbol`.
    ///
    /// # Panics
    ///
    /// Panics if `symbol` was not part of the alphabet the library was built
    /// with. The alphabet is fixed and validated at load time, so a miss is a
    /// programming error rather than a runtime failure.
    pub fn primary(&self, symbol: Symbol) -> &[i16] {
        &self.entries[&symbol].primary
    }

    /// Spoken name for `symbol`. Same panic contract as
    /// [`ClipLibrary::primary`].
    pub fn cue(&self, symbol: Symbol) -> &[i16] {
        &self.entries[&symbol].cue
    }

    /// Sample rate in Hz shared by every clip in the library.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

fn clip_path(dir: &Path, symbol: Symbol, cue: bool) -> PathBuf {
    let stem = symbol.file_stem();
    if cue {
        dir.join(format!("{CUE_PREFIX}{stem}.{CLIP_EXTENSION}"))
    } else {
        dir.join(format!("{stem}.{CLIP_EXTENSION}"))
    }
}

fn read_clip(
    symbol: Symbol,
    path: &Path,
    library_rate: &mut Option<u32>,
) -> Result<Clip, LoadError> {
    let mut reader = WavReader::open(path).map_err(|source| LoadError::MissingClip {
        symbol,
        path: path.to_path_buf(),
        source,
    })?;

    let spec = reader.spec();
    if spec.channels != 1 || spec.bits_per_sample != 16 || spec.sample_format != SampleFormat::Int
    {
        return Err(LoadError::UnsupportedFormat {
            path: path.to_path_buf(),
            channels: spec.channels,
            bits: spec.bits_per_sample,
            format: spec.sample_format,
        });
    }

    match *library_rate {
        None => *library_rate = Some(spec.sample_rate),
        Some(expected) if expected != spec.sample_rate => {
            return Err(LoadError::SampleRateMismatch {
                path: path.to_path_buf(),
                expected,
                found: spec.sample_rate,
            });
        }
        Some(_) => {}
    }

    reader
        .samples::<i16>()
        .collect::<Result<Clip, _>>()
        .map_err(|source| LoadError::MissingClip {
            symbol,
            path: path.to_path_buf(),
            source,
        })
}
