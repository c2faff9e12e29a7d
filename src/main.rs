use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

use hearsay::{ClipLibrary, SessionConfig, Symbol, TrackAssembler, export};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the per-character recordings (`a.wav`, `v_a.wav`, ...)
    #[arg(long, value_name = "DIR", default_value = "./primitives")]
    input_dir: PathBuf,

    /// Directory the finished track is written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Silent gap after each character, in seconds
    #[arg(long, default_value_t = 0.5)]
    pause: f64,

    /// Number of randomly drawn characters
    #[arg(long, default_value_t = 2000)]
    repetitions: usize,

    /// Play each character's spoken name after the pause
    #[arg(long)]
    voice_cues: bool,

    /// Volume multiplier in [0, 1] for the character clips
    #[arg(long, default_value_t = 1.0)]
    volume: f32,

    /// Seed for the character draw; OS entropy when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Set up logging. Use `RUST_LOG=info` or `RUST_LOG=debug` to see output.
    env_logger::init();
    let cli = Cli::parse();

    if !(0.0..=1.0).contains(&cli.volume) {
        bail!("volume must be within [0, 1], got {}", cli.volume);
    }
    if !cli.pause.is_finite() || cli.pause < 0.0 {
        bail!("pause must be a non-negative number of seconds, got {}", cli.pause);
    }

    log::info!("Loading primitive clips from {:?}", cli.input_dir);
    let library = ClipLibrary::load(&Symbol::ALL, &cli.input_dir)?;
    log::info!(
        "Loaded {} symbols at {} Hz",
        Symbol::ALL.len(),
        library.sample_rate()
    );

    let config = SessionConfig {
        pause_duration: cli.pause,
        n_repetitions: cli.repetitions,
        include_voice_cue: cli.voice_cues,
        output_volume: cli.volume,
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let assembler = TrackAssembler::new(&library, config);
    let (samples, sequence) = assembler.assemble(&Symbol::ALL, &mut rng);

    let seconds = samples.len() as f64 / library.sample_rate() as f64;
    log::info!(
        "Assembled {} characters into {:.1} s of audio ({:.1} min)",
        sequence.len(),
        seconds,
        seconds / 60.0
    );

    let out_path = cli.output_dir.join(export::output_file_name(&config));
    export::write_track(&out_path, &samples, library.sample_rate())
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    println!("{}", out_path.display());
    Ok(())
}
