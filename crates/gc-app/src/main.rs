use std::io::Write;

use anyhow::Result;
use clap::Parser;
use gc_audio::playback::AudioPlayer;
use gc_core::charset::GlyphRamp;
use gc_core::config::{self, PlayerConfig};
use gc_source::directory::DirectoryFrameSource;

pub mod cli;
pub mod player;

fn main() -> Result<()> {
    // 1. Parse CLI
    let cli = cli::Cli::parse();

    // 2. Initialize logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Load config and apply CLI overrides
    let config = resolve_config(&cli)?;
    let period = config.frame_period()?;

    // 4. Fatal initialization: frame schedule and audio device.
    //    Nothing renders unless both are up.
    let mut source = DirectoryFrameSource::new(&config.frames_dir)?;
    let mut audio = AudioPlayer::new(&config.audio_path)?;

    let ramp = GlyphRamp::new(&config.charset);

    // 5. Run the playback loop against stdout
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    player::play(&mut source, &mut audio, &ramp, period, &mut out)?;
    out.flush()?;

    Ok(())
}

/// Resolve config: file first (defaults if absent), then CLI overrides.
fn resolve_config(cli: &cli::Cli) -> Result<PlayerConfig> {
    let mut config = if cli.config.exists() {
        config::load_config(&cli.config)?
    } else {
        log::warn!(
            "Config not found: {}. Using defaults.",
            cli.config.display()
        );
        PlayerConfig::default()
    };

    if let Some(ref frames) = cli.frames {
        config.frames_dir.clone_from(frames);
    }
    if let Some(ref audio) = cli.audio {
        config.audio_path.clone_from(audio);
    }
    if let Some(fps) = cli.fps {
        config.target_fps = fps;
    }
    Ok(config)
}
