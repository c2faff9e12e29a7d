// src/assembler.rs
// Track assembly: turn a random character draw into one contiguous PCM buffer

use rand::Rng;

use crate::alphabet::Symbol;
use crate::library::ClipLibrary;

/// Immutable settings for one practice track.
///
/// Defaults match the classic hear-say session: a 0.5 s pause, 2000
/// characters, no voice cues, full volume.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Silent gap after each character, in seconds.
    pub pause_duration: f64,
    /// Number of randomly drawn characters.
    pub n_repetitions: usize,
    /// Whether each character's spoken name follows the pause.
    pub include_voice_cue: bool,
    /// Volume multiplier in `[0, 1]` applied to character clips. Voice cues
    /// are written at their recorded level.
    pub output_volume: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pause_duration: 0.5,
            n_repetitions: 2000,
            include_voice_cue: false,
            output_volume: 1.0,
        }
    }
}

/// Assembles practice tracks for one library/configuration pair.
///
/// The buffer layout per drawn character is: the character clip, then
/// `round(pause_duration * sample_rate)` zero samples, then (when enabled)
/// the voice cue. The total length is known in closed form up front, so the
/// output buffer is allocated once at its final size and filled in a single
/// pass; it never grows incrementally.
pub struct TrackAssembler<'a> {
    library: &'a ClipLibrary,
    config: SessionConfig,
    pause_len: usize,
}

impl<'a> TrackAssembler<'a> {
    pub fn new(library: &'a ClipLibrary, config: SessionConfig) -> Self {
        let pause_len = (config.pause_duration * library.sample_rate() as f64).round() as usize;
        Self {
            library,
            config,
            pause_len,
        }
    }

    /// Zero samples inserted after each character clip.
    pub fn pause_len(&self) -> usize {
        self.pause_len
    }

    /// Draws `n_repetitions` symbols independently and uniformly from
    /// `alphabet`.
    ///
    /// `alphabet` must not be empty unless the configured repetition count is
    /// zero.
    pub fn draw_sequence<R: Rng>(&self, alphabet: &[Symbol], rng: &mut R) -> Vec<Symbol> {
        (0..self.config.n_repetitions)
            .map(|_| alphabet[rng.random_range(0..alphabet.len())])
            .collect()
    }

    /// Exact output length in samples for `sequence`, computable before any
    /// sample is written.
    pub fn rendered_len(&self, sequence: &[Symbol]) -> usize {
        sequence
            .iter()
            .map(|&symbol| {
                let cue_len = if self.config.include_voice_cue {
                    self.library.cue(symbol).len()
                } else {
                    0
                };
                self.library.primary(symbol).len() + self.pause_len + cue_len
            })
            .sum()
    }

    /// Renders `sequence` into one contiguous mono 16-bit PCM buffer.
    pub fn render(&self, sequence: &[Symbol]) -> Vec<i16> {
        let total = self.rendered_len(sequence);
        let mut samples = vec![0i16; total];
        let mut cursor = 0;

        for &symbol in sequence {
            let primary = self.library.primary(symbol);
            let scaled = &mut samples[cursor..cursor + primary.len()];
            for (out, &sample) in scaled.iter_mut().zip(primary) {
                *out = (sample as f32 * self.config.output_volume) as i16;
            }
            cursor += primary.len();

            // Pause samples keep their pre-zeroed value.
            cursor += self.pause_len;

            if self.config.include_voice_cue {
                let cue = self.library.cue(symbol);
                samples[cursor..cursor + cue.len()].copy_from_slice(cue);
                cursor += cue.len();
            }
        }

        debug_assert_eq!(cursor, total);
        samples
    }

    /// Draws a fresh random sequence and renders it.
    ///
    /// With the same seeded `rng`, library and configuration this is fully
    /// deterministic down to the last sample.
    pub fn assemble<R: Rng>(&self, alphabet: &[Symbol], rng: &mut R) -> (Vec<i16>, Vec<Symbol>) {
        let sequence = self.draw_sequence(alphabet, rng);
        let samples = self.render(&sequence);
        (samples, sequence)
    }
}
