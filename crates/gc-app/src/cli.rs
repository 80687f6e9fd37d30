use std::path::PathBuf;

use clap::Parser;

/// glyphcast — terminal ASCII video player with synchronized audio.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory of pre-extracted frame images (lexicographic order).
    #[arg(long)]
    pub frames: Option<PathBuf>,

    /// Audio track played alongside the frames.
    #[arg(long)]
    pub audio: Option<PathBuf>,

    /// Configuration file (TOML). Default: config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Target frame rate override.
    #[arg(long)]
    pub fps: Option<u32>,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
